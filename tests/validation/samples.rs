#[cfg(test)]
mod samples {
    use std::fs;
    use std::path::{Path, PathBuf};

    use tagcheck::parsing;

    fn html_files(dir: &Path) -> Vec<PathBuf> {
        let entries = fs::read_dir(dir).expect("Failed to read directory");

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
        files.sort();
        files
    }

    #[test]
    fn ensure_samples_validate() {
        let dir = Path::new("tests/samples/");

        assert!(dir.exists(), "samples directory missing");

        let files = html_files(dir);
        assert!(!files.is_empty(), "No .html files found in samples directory");

        let mut failures = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let (sequence, rejections) = parsing::parse(&content);
            let report = sequence.validate();

            if !rejections.is_empty() || !report.is_valid() {
                println!(
                    "File {:?} failed validation: {:?} {:?}",
                    file, rejections, report
                );
                failures.push(file.clone());
            }
        }

        if !failures.is_empty() {
            panic!(
                "Sample files should validate successfully, but {} files failed",
                failures.len()
            );
        }
    }

    #[test]
    fn ensure_broken_fail() {
        let dir = Path::new("tests/broken/");

        assert!(dir.exists(), "broken directory missing");

        let files = html_files(dir);
        assert!(!files.is_empty(), "No .html files found in broken directory");

        let mut unexpected_successes = Vec::new();

        for file in &files {
            let content = parsing::load(&file)
                .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

            let (sequence, rejections) = parsing::parse(&content);
            let report = sequence.validate();

            if rejections.is_empty() && report.is_valid() {
                println!("File {:?} unexpectedly validated successfully", file);
                unexpected_successes.push(file.clone());
            }
        }

        if !unexpected_successes.is_empty() {
            panic!(
                "Broken files should not validate successfully, but {} files passed",
                unexpected_successes.len()
            );
        }
    }
}
