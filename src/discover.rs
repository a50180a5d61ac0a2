// src/discover.rs
// =============================================================================
// This module finds the HTML files to process.
//
// How it works:
// 1. If the input path is a single file, that file is the whole list
// 2. Otherwise start with the input directory in a worklist
// 3. Pop a directory, read its entries
// 4. Entries whose name contains "." are files - keep the ones whose
//    lowercased name contains ".htm" (covers .htm, .html, .HTM, ...)
// 5. Entries without a "." are treated as subdirectories and pushed
//    onto the worklist
// 6. Repeat until the worklist is empty
//
// The worklist is an explicit VecDeque instead of recursive function
// calls, so a deep directory tree can't blow the call stack.
//
// Rust concepts:
// - VecDeque: Double-ended queue driving the traversal
// - fs::read_dir: Iterates over directory entries
// - while let: Loop while pattern matching succeeds
// =============================================================================

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::fs;
use std::path::MAIN_SEPARATOR;

// Collects the paths of all HTML files reachable from `path`
//
// Parameters:
//   path: a validated path to a file or a directory
//
// Returns: Vec of file paths, each guaranteed to contain ".htm" in its
// (lowercased) name. Order follows the traversal, but callers must not
// rely on it.
//
// A directory entry without a "." that turns out to be a plain file
// (like "Makefile") fails the read_dir call and aborts discovery. Same
// for a symlink loop: no cycle detection, the traversal runs until the
// filesystem reports an error.
pub fn find_html_files(path: &str) -> Result<Vec<String>> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("failed to inspect path '{}'", path))?;

    // A single file doesn't need a traversal at all
    if metadata.is_file() {
        return Ok(vec![path.to_string()]);
    }

    let mut files = Vec::new();

    // Worklist of directories still to be expanded
    let mut pending = VecDeque::new();
    pending.push_back(path.to_string());

    // Process the worklist until empty
    while let Some(dir) = pending.pop_front() {
        let entries = fs::read_dir(&dir)
            .with_context(|| format!("failed to read directory '{}'", dir))?;

        for entry in entries {
            let entry = entry
                .with_context(|| format!("failed to read an entry of '{}'", dir))?;

            let name = entry.file_name().to_string_lossy().into_owned();
            let full_path = format!("{}{}{}", dir, MAIN_SEPARATOR, name);

            if name.contains('.') {
                // A "." means it's a file - keep it only if it's html
                if name.to_lowercase().contains(".htm") {
                    files.push(full_path);
                }
            } else {
                // No "." means it's another directory
                pending.push_back(full_path);
            }
        }
    }

    Ok(files)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is VecDeque?
//    - A double-ended queue (deck)
//    - push_back() adds to the end, pop_front() removes from the start
//    - Using it as a worklist replaces recursion: instead of calling
//      ourselves on each subdirectory, we queue the subdirectory and
//      keep looping
//
// 2. What is with_context()?
//    - Comes from the anyhow crate
//    - Wraps an error with a human-readable description of what we
//      were doing when it happened
//    - The closure only runs when there actually is an error
//
// 3. What is to_string_lossy()?
//    - File names aren't guaranteed to be valid UTF-8 on every OS
//    - to_string_lossy() converts, replacing invalid bytes if needed
//    - Good enough here: our filter only looks for ASCII ".htm"
//
// 4. Why format! with MAIN_SEPARATOR?
//    - Joins directory and entry name with the host's separator
//      ("/" on Unix, "\" on Windows)
//    - Keeps the reported paths looking like what the user typed in
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    // Builds a small tree of files under a temp directory
    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "<html></html>").unwrap();
    }

    #[test]
    fn test_single_file_input_is_returned_directly() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "page.html");

        let path = dir.path().join("page.html");
        let files = find_html_files(path.to_str().unwrap()).unwrap();
        assert_eq!(files, vec![path.to_str().unwrap().to_string()]);
    }

    #[test]
    fn test_finds_html_files_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "index.html");
        touch(dir.path(), "about.htm");
        touch(dir.path(), "notes.txt");

        let mut files = find_html_files(dir.path().to_str().unwrap()).unwrap();
        files.sort();

        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("about.htm"));
        assert!(files[1].ends_with("index.html"));
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "LOUD.HTML");
        touch(dir.path(), "Mixed.Htm");

        let files = find_html_files(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_walks_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("sub").join("deeper");
        fs::create_dir_all(&nested).unwrap();
        touch(dir.path(), "top.html");
        touch(&nested, "bottom.html");

        let files = find_html_files(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.ends_with("top.html")));
        assert!(files.iter().any(|f| f.ends_with("bottom.html")));
    }

    #[test]
    fn test_each_file_found_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        touch(dir.path(), "a.html");
        touch(&sub, "b.html");

        let files = find_html_files(dir.path().to_str().unwrap()).unwrap();
        let unique: std::collections::HashSet<_> = files.iter().collect();
        assert_eq!(files.len(), unique.len());
    }

    #[test]
    fn test_non_html_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "style.css");
        touch(dir.path(), "data.json");

        let files = find_html_files(dir.path().to_str().unwrap()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_path_is_an_error() {
        let result = find_html_files("definitely/not/a/real/path");
        assert!(result.is_err());
    }
}
