use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Asserts two directory trees contain the same files with the same bytes,
/// printing the differences first when they do not.
pub fn assert_same_trees(actual: &Path, expected: &Path) {
    if let Ok(false) = dir_diff::is_different(actual, expected) {
        return;
    }
    print_dir_diff(actual, expected);
    panic!("Directories differ. See above for details.");
}

fn relative_files(root: &Path) -> HashSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

/// Prints files only present in one tree and content differences for files
/// present in both.
pub fn print_dir_diff(actual: &Path, expected: &Path) {
    let actual_files = relative_files(actual);
    let expected_files = relative_files(expected);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {actual:?}");
    println!("Expected output: {expected:?}");

    for file in actual_files.difference(&expected_files) {
        println!("  + only in actual: {file:?}");
    }
    for file in expected_files.difference(&actual_files) {
        println!("  - only in expected: {file:?}");
    }

    for file in actual_files.intersection(&expected_files) {
        let actual_content = fs::read(actual.join(file)).unwrap();
        let expected_content = fs::read(expected.join(file)).unwrap();
        if actual_content == expected_content {
            continue;
        }
        println!("\n  File: {file:?}");
        match (String::from_utf8(actual_content), String::from_utf8(expected_content)) {
            (Ok(a), Ok(e)) => {
                println!("  --- Actual content:\n{a}");
                println!("  --- Expected content:\n{e}");
            }
            (a, e) => {
                let len = |c: &Result<String, _>| match c {
                    Ok(s) => s.len(),
                    Err(err) => err.as_bytes().len(),
                };
                println!("  (binary content, {} vs {} bytes)", len(&a), len(&e));
            }
        }
    }
    println!("=== End of Comparison ===\n");
}
