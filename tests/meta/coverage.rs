//! Repository layout checks keeping `tests/unit` in step with `src`

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Crate roots and module organization files carry no logic of their own
    fn is_organizational(relative_path: &str) -> bool {
        relative_path == "lib.rs" || relative_path.ends_with("mod.rs")
    }

    fn mirrored_paths(dir: &str) -> BTreeSet<String> {
        let root = Path::new(dir);
        let mut paths = BTreeSet::new();
        let result = collect_relative_paths(root, root, &mut paths);
        assert!(result.is_ok(), "Failed to scan {dir}: {result:?}");
        paths
            .into_iter()
            .filter(|path| !is_organizational(path))
            .collect()
    }

    #[test]
    fn test_every_source_file_has_unit_tests() {
        let test_paths = mirrored_paths(UNIT_DIR);
        let missing: Vec<String> = mirrored_paths(SRC_DIR)
            .into_iter()
            .filter(|path| !test_paths.contains(path))
            .map(|path| format!("  - {SRC_DIR}/{path} -> {UNIT_DIR}/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let src_paths = mirrored_paths(SRC_DIR);
        let orphaned: Vec<String> = mirrored_paths(UNIT_DIR)
            .into_iter()
            .filter(|path| !src_paths.contains(path))
            .map(|path| format!("  - {UNIT_DIR}/{path} (no {SRC_DIR}/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_every_test_file_contains_tests() {
        let tests_dir = Path::new("tests");
        let mut files_without_tests = Vec::new();

        let result = check_test_files(tests_dir, tests_dir, &mut files_without_tests);
        assert!(result.is_ok(), "Failed to scan tests directory: {result:?}");

        assert!(
            files_without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            files_without_tests.join("\n")
        );
    }

    fn collect_relative_paths(
        dir: &Path,
        base: &Path,
        paths: &mut BTreeSet<String>,
    ) -> Result<(), io::Error> {
        if !dir.is_dir() {
            return Ok(());
        }

        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();
            let relative_path = path
                .strip_prefix(base)
                .map_err(|error| io::Error::other(error.to_string()))?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.insert(relative_path);
                collect_relative_paths(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative_path);
            }
        }

        Ok(())
    }

    fn check_test_files(
        dir: &Path,
        base_dir: &Path,
        files_without_tests: &mut Vec<String>,
    ) -> Result<(), io::Error> {
        for entry_result in fs::read_dir(dir)? {
            let path = entry_result?.path();

            if path.is_dir() {
                check_test_files(&path, base_dir, files_without_tests)?;
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }

            let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };

            // The harness entry point and module files only declare modules
            if (path.parent() == Some(base_dir) && file_name == "main.rs") || file_name == "mod.rs"
            {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                files_without_tests.push(format!("  - {}", path.display()));
            }
        }

        Ok(())
    }
}
