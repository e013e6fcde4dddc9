#[cfg(test)]
mod verify {
    use tagcheck::language::{InsertError, TagToken};
    use tagcheck::sequence::TagSequence;
    use tagcheck::validation::{self, Diagnostic, Options};

    fn build(raws: &[&str]) -> TagSequence {
        let mut sequence = TagSequence::new();
        for raw in raws {
            sequence
                .insert(raw)
                .unwrap_or_else(|e| panic!("inserting {}: {}", raw, e));
        }
        sequence
    }

    #[test]
    fn well_formed_document() {
        let sequence = build(&[
            "<html>", "<head>", "<title>", "</title>", "</head>", "<body>", "</body>", "</html>",
        ]);

        let report = sequence.validate();
        assert!(report.is_valid());
        assert_eq!(report.findings(), &[Diagnostic::Valid]);
    }

    #[test]
    fn body_without_head() {
        let sequence = build(&["<html>", "<body>", "</body>", "</html>"]);

        let report = sequence.validate();
        assert!(!report
            .iter()
            .any(|finding| matches!(finding, Diagnostic::OutOfOrderTag(..))));
        assert!(report.is_valid());
    }

    #[test]
    fn unclosed_inside_head() {
        let sequence = build(&["<head>", "<p>", "</head>"]);

        let report = sequence.validate();
        let findings = report.findings();

        assert!(!findings
            .iter()
            .any(|finding| matches!(finding, Diagnostic::UnmatchedClosingTag(..))));
        assert!(findings.contains(&Diagnostic::UnmatchedOpeningTag(1, "p".to_string())));
        assert!(findings.contains(&Diagnostic::MissingRootTag));
    }

    #[test]
    fn closer_without_opener() {
        let tokens = vec![
            TagToken::opening("html"),
            TagToken::opening("body"),
            TagToken::closing("div"),
            TagToken::closing("body"),
            TagToken::closing("html"),
        ];

        let report = validation::validate(&tokens, &Options::default());
        let unmatched: Vec<&Diagnostic> = report
            .iter()
            .filter(|finding| matches!(finding, Diagnostic::UnmatchedClosingTag(..)))
            .collect();

        assert_eq!(
            unmatched,
            vec![&Diagnostic::UnmatchedClosingTag(2, "div".to_string())]
        );

        // the stray closer left body and html open for their own closers
        assert!(!report
            .iter()
            .any(|finding| matches!(finding, Diagnostic::UnmatchedOpeningTag(..))));
    }

    #[test]
    fn root_must_come_first() {
        for raws in [
            vec!["<body>"],
            vec!["<head>", "<p>", "</p>", "</head>"],
            vec!["</html>", "<html>"],
        ] {
            let report = build(&raws).validate();
            assert_eq!(
                report
                    .findings()
                    .first(),
                Some(&Diagnostic::MissingRootTag),
                "for {:?}",
                raws
            );
        }

        // insertion refuses <html> once <head> is present, so this order can
        // only arise in a hand-built sequence
        let tokens = vec![
            TagToken::opening("head"),
            TagToken::closing("head"),
            TagToken::opening("html"),
            TagToken::closing("html"),
        ];
        let report = validation::validate(&tokens, &Options::default());
        assert_eq!(
            report
                .findings()
                .first(),
            Some(&Diagnostic::MissingRootTag)
        );
        assert!(!report.is_valid());
    }

    #[test]
    fn validating_twice() {
        let sequence = build(&["<html>", "<head>", "<p>", "</title>", "</head>", "<br>"]);

        let first = sequence.validate();
        let second = sequence.validate();
        assert_eq!(first, second);
        assert!(!first.is_valid());
    }

    #[test]
    fn every_problem_is_reported() {
        // validation carries on past the first error
        let sequence = build(&["<head>", "</p>", "<body>", "<p>"]);

        let report = sequence.validate();
        let found: Vec<&Diagnostic> = report
            .errors()
            .collect();

        assert_eq!(
            found,
            vec![
                &Diagnostic::MissingRootTag,
                &Diagnostic::OutOfOrderTag(0, "head".to_string(), Some("html")),
                &Diagnostic::UnmatchedClosingTag(1, "p".to_string()),
                &Diagnostic::OutOfOrderTag(2, "body".to_string(), Some("head")),
                &Diagnostic::OutOfOrderTag(3, "p".to_string(), Some("title")),
                &Diagnostic::UnmatchedOpeningTag(0, "head".to_string()),
                &Diagnostic::UnmatchedOpeningTag(2, "body".to_string()),
                &Diagnostic::UnmatchedOpeningTag(3, "p".to_string()),
            ]
        );
        assert!(!report
            .iter()
            .any(|finding| finding == &Diagnostic::Valid));
    }

    #[test]
    fn insertion_refusals_leave_sequence_alone() {
        let mut sequence = build(&["<html>", "<body>"]);
        let before = sequence.list();

        for raw in ["<p", "</body", "<>", "<div>", "<span>", "<head>", "<title>"] {
            assert!(sequence
                .insert(raw)
                .is_err());
        }
        assert_eq!(sequence.list(), before);

        assert!(matches!(
            sequence.insert("<head>"),
            Err(InsertError::OutOfOrder { .. })
        ));
    }

    #[test]
    fn delete_then_validate() {
        let mut sequence = build(&["<html>", "<body>", "<p>", "<h1>", "</h1>", "</body>", "</html>"]);
        assert!(!sequence
            .validate()
            .is_valid());

        assert_eq!(sequence.delete_by_name("p"), 1);
        assert_eq!(sequence.list(), vec!["html", "body", "h1", "/h1", "/body", "/html"]);
        assert!(sequence
            .validate()
            .is_valid());
    }
}
