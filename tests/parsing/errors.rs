#[cfg(test)]
mod syntax {
    use tagcheck::language::InsertError;
    use tagcheck::parsing::{self, ParsingError};

    /// Helper function to check if loading a document declines a tag with
    /// the expected error type
    fn expect_error(content: &str, expected: InsertError) {
        let (_, rejections) = parsing::parse(content);

        let found_expected = rejections
            .iter()
            .any(|rejection| {
                std::mem::discriminant(&rejection.error) == std::mem::discriminant(&expected)
            });

        if !found_expected {
            panic!(
                "Expected error type like {:?} but got: {:?} for input '{}'",
                expected, rejections, content
            );
        }
    }

    fn expect_format_error(content: &str, expected: ParsingError) {
        let (_, rejections) = parsing::parse(content);

        let found_expected = rejections
            .iter()
            .any(|rejection| match &rejection.error {
                InsertError::InvalidFormat(error) => {
                    std::mem::discriminant(error) == std::mem::discriminant(&expected)
                }
                _ => false,
            });

        if !found_expected {
            panic!(
                "Expected format error like {:?} but got: {:?} for input '{}'",
                expected, rejections, content
            );
        }
    }

    #[test]
    fn unterminated_tag_at_end_of_line() {
        expect_format_error(
            r#"
<html>
<body
</html>
            "#
            .trim_ascii(),
            ParsingError::IncompleteTag(String::new()),
        );
    }

    #[test]
    fn space_inside_tag() {
        expect_format_error("<html><p class>", ParsingError::IncompleteTag(String::new()));
    }

    #[test]
    fn nothing_between_brackets() {
        expect_format_error("<html><>", ParsingError::EmptyName(String::new()));
        expect_format_error("<html></>", ParsingError::EmptyName(String::new()));
    }

    #[test]
    fn overlong_tag() {
        let content = format!("<html><{}>", "p".repeat(60));
        expect_format_error(&content, ParsingError::TooLong(0));
    }

    #[test]
    fn tag_not_in_vocabulary() {
        expect_error(
            r#"
<html>
<body>
<div></div>
</body>
</html>
            "#
            .trim_ascii(),
            InsertError::UnknownTag(String::new()),
        );
    }

    #[test]
    fn section_after_content() {
        expect_error(
            r#"
<html>
<body>
</body>
<head>
</head>
</html>
            "#
            .trim_ascii(),
            InsertError::OutOfOrder {
                tag: String::new(),
                after: String::new(),
            },
        );
    }

    #[test]
    fn rejections_carry_location() {
        let (sequence, rejections) = parsing::parse("<html>\n  <body><div>\n</html>");

        assert_eq!(sequence.list(), vec!["html", "body", "/html"]);
        assert_eq!(rejections.len(), 1);

        let rejection = &rejections[0];
        assert_eq!(rejection.line, 1);
        assert_eq!(rejection.raw, "<div>");
        assert_eq!(rejection.error, InsertError::UnknownTag("div".to_string()));
    }

    #[test]
    fn text_between_tags_ignored() {
        let (sequence, rejections) =
            parsing::parse("<html><body><p>Hello, world</p></body></html>");

        assert!(rejections.is_empty());
        assert_eq!(
            sequence.list(),
            vec!["html", "body", "p", "/p", "/body", "/html"]
        );
    }
}
