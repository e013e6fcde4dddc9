#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::Path;

    use tagcheck::formatting::*;
    use tagcheck::parsing;

    /// Rendering an accepted document plainly should reproduce its tags
    /// exactly as written, in order and separated by single spaces. The
    /// samples are kept in lower case so that normalization doesn't alter
    /// them.
    #[test]
    fn ensure_identical_output() {
        let dir = Path::new("tests/samples");

        assert!(dir.exists(), "samples directory missing");

        let entries = fs::read_dir(dir).expect("Failed to read samples directory");

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.expect("Failed to read directory entry");
            let path = entry.path();

            if path
                .extension()
                .and_then(|s| s.to_str())
                == Some("html")
            {
                files.push(path);
            }
        }

        assert!(!files.is_empty(), "No .html files found in samples directory");

        let mut failures = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let original: Vec<&str> = content
                .lines()
                .flat_map(parsing::split_tokens)
                .filter_map(Result::ok)
                .collect();
            let original = original.join(" ");

            let (sequence, _) = parsing::parse(&content);
            let rendered = render(&Identity, sequence.tokens());

            if rendered != original {
                println!("\nDifferences found in file: {:?}", file);
                println!("- {}", original);
                println!("+ {}", rendered);
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Rendering should reproduce the tags of every sample, but {} files differed",
                failures.len()
            );
        }
    }

    #[test]
    fn styling_does_not_change_plain_text() {
        let (sequence, _) = parsing::parse("<HTML><Body></BODY></html>");
        assert_eq!(
            render(&Identity, sequence.tokens()),
            "<html> <body> </body> </html>"
        );
    }
}
