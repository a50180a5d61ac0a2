// src/extract.rs
// =============================================================================
// This module turns one HTML file into link records.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// Every file is independent, so all files are dispatched as concurrent
// futures and joined with try_join_all: the first file that fails to
// read aborts the whole batch, and no output gets written. There is no
// partial success.
//
// Rust concepts:
// - async/await: For concurrent file I/O
// - try_join_all: Like Promise.all() - all succeed, or the batch fails
// - Iterators: For walking the selected elements
// =============================================================================

use anyhow::{Context, Result};
use futures::future::try_join_all;
use scraper::{Html, Selector};
use std::path::MAIN_SEPARATOR;

// One extracted anchor element
//
// text is the anchor's inner markup verbatim - nested tags stay in as
// raw markup, nothing is sanitized. href is the literal attribute
// value, empty when the anchor has no href at all.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRecord {
    pub file_name: String,
    pub text: String,
    pub href: String,
}

// Extracts links from every file, all at once
//
// Parameters:
//   files: paths of the HTML files to process
//
// Returns: one Vec<LinkRecord> per input file (possibly empty when a
// file has no anchors). The outer Vec follows the input order because
// try_join_all preserves it, even though the futures run concurrently.
pub async fn extract_all(files: Vec<String>) -> Result<Vec<Vec<LinkRecord>>> {
    let tasks = files.into_iter().map(|file| async move {
        extract_file(&file).await
    });

    // All-or-nothing join: the first Err cancels the aggregate
    try_join_all(tasks).await
}

// Extracts the links of a single file
//
// Reading is async (tokio::fs); parsing happens synchronously once the
// content is in memory, since scraper's DOM isn't something we'd want
// to hold across an await point anyway.
async fn extract_file(path: &str) -> Result<Vec<LinkRecord>> {
    let html = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read '{}'", path))?;

    let file_name = file_name_of(path);
    Ok(extract_links(&html, &file_name))
}

// Extracts all anchor elements from HTML content, in document order
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   file_name: tag recorded on every link from this document
//
// Example:
//   html = "<a href='/docs'><b>Docs</b></a>"
//   file_name = "page"
//   result = [LinkRecord { file_name: "page", text: "<b>Docs</b>", href: "/docs" }]
pub fn extract_links(html: &str, file_name: &str) -> Vec<LinkRecord> {
    // Parse the HTML into a document
    // html5ever recovers from malformed input, so this never fails
    let document = Html::parse_document(html);

    // Create a CSS selector matching every <a> tag
    // Selector::parse returns Result, so we use .unwrap() which panics on error
    // This is OK here because our selector is a constant and known to be valid
    let selector = Selector::parse("a").unwrap();

    document
        .select(&selector)
        .map(|element| LinkRecord {
            file_name: file_name.to_string(),
            // inner_html() gives the raw markup between the tags,
            // exactly what we want in the csv
            text: element.inner_html(),
            // Absent href becomes an empty field, not an error
            href: element.value().attr("href").unwrap_or("").to_string(),
        })
        .collect()
}

// Derives the FileName column from a file path
//
// Takes the piece strictly between the last path separator and the
// last "." - so "a/b/page.html" becomes "page". With no separator the
// name starts at index 0. Discovery guarantees the name has a ".", but
// we fall back to the end of the string rather than slice out of
// bounds if it ever doesn't.
fn file_name_of(path: &str) -> String {
    let start = match path.rfind(MAIN_SEPARATOR) {
        Some(index) => index + 1,
        None => 0,
    };

    let end = match path[start..].rfind('.') {
        Some(index) => start + index,
        None => path.len(),
    };

    path[start..end].to_string()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is try_join_all?
//    - Takes a collection of futures that each return Result
//    - Runs them concurrently and waits for all of them
//    - Resolves to Ok(Vec<...>) only if every future succeeded
//    - The first Err short-circuits, like Promise.all() rejecting
//
// 2. What does inner_html() return?
//    - The markup between the element's opening and closing tags
//    - For <a href="x">Hello <b>world</b></a> that's "Hello <b>world</b>"
//    - Different from text(), which would strip the <b> tags
//
// 3. What is unwrap_or("")?
//    - attr("href") returns Option<&str>: Some(value) or None
//    - unwrap_or("") turns the None case into an empty string
//    - So an anchor without href still produces a record
//
// 4. What is rfind?
//    - Like find, but searches from the right
//    - rfind('.') locates the LAST dot, which is where the file
//      extension starts
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_text_and_href() {
        let html = r#"<a href="https://www.rust-lang.org">Rust</a>"#;
        let records = extract_links(html, "page");
        assert_eq!(
            records,
            vec![LinkRecord {
                file_name: "page".to_string(),
                text: "Rust".to_string(),
                href: "https://www.rust-lang.org".to_string(),
            }]
        );
    }

    #[test]
    fn test_preserves_document_order() {
        let html = r#"
            <a href="/one">first</a>
            <p>filler</p>
            <a href="/two">second</a>
            <div><a href="/three">third</a></div>
        "#;
        let records = extract_links(html, "page");
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].href, "/one");
        assert_eq!(records[1].href, "/two");
        assert_eq!(records[2].href, "/three");
    }

    #[test]
    fn test_keeps_nested_markup_in_text() {
        let html = r#"<a href="/docs">Read <b>the</b> docs</a>"#;
        let records = extract_links(html, "page");
        assert_eq!(records[0].text, "Read <b>the</b> docs");
    }

    #[test]
    fn test_missing_href_becomes_empty_field() {
        let html = r#"<a name="top">no destination</a>"#;
        let records = extract_links(html, "page");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].href, "");
    }

    #[test]
    fn test_href_is_kept_verbatim() {
        // Relative links are not resolved against anything
        let html = r#"<a href="../up/one.html">up</a>"#;
        let records = extract_links(html, "page");
        assert_eq!(records[0].href, "../up/one.html");
    }

    #[test]
    fn test_document_without_anchors_yields_nothing() {
        let html = "<p>just a paragraph</p>";
        assert!(extract_links(html, "page").is_empty());
    }

    #[test]
    fn test_file_name_strips_directory_and_extension() {
        let path = format!("a{0}b{0}page.html", MAIN_SEPARATOR);
        assert_eq!(file_name_of(&path), "page");
    }

    #[test]
    fn test_file_name_without_separator_starts_at_zero() {
        assert_eq!(file_name_of("page.html"), "page");
    }

    #[test]
    fn test_file_name_keeps_earlier_dots() {
        // Only the LAST dot ends the name
        assert_eq!(file_name_of("v1.2.report.html"), "v1.2.report");
    }

    #[tokio::test]
    async fn test_extract_all_reads_files_concurrently() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.html");
        let second = dir.path().join("second.html");
        std::fs::write(&first, r#"<a href="/a">A</a>"#).unwrap();
        std::fs::write(&second, r#"<a href="/b">B</a><a href="/c">C</a>"#).unwrap();

        let results = extract_all(vec![
            first.to_string_lossy().into_owned(),
            second.to_string_lossy().into_owned(),
        ])
        .await
        .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].len(), 1);
        assert_eq!(results[1].len(), 2);
        assert_eq!(results[0][0].file_name, "first");
        assert_eq!(results[1][0].file_name, "second");
    }

    #[tokio::test]
    async fn test_one_unreadable_file_fails_the_batch() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.html");
        std::fs::write(&good, r#"<a href="/a">A</a>"#).unwrap();
        let missing = dir.path().join("missing.html");

        let result = extract_all(vec![
            good.to_string_lossy().into_owned(),
            missing.to_string_lossy().into_owned(),
        ])
        .await;

        assert!(result.is_err());
    }
}
