// src/validate.rs
// =============================================================================
// This module validates the command-line arguments before any real work.
//
// The rules (checked in this exact order, first failure wins):
// 1. The path argument must be present and not blank
// 2. If the path contains "." it must contain ".htm" (a path with some
//    other extension looks like a non-html file and is rejected early)
// 3. The path must exist on the filesystem
// 4. The output name, when given, must not contain "." (no extension)
//
// Validation returns a Result instead of exiting the process itself.
// That keeps every rule unit-testable; main() is the only place that
// turns a ValidationError into an actual process exit.
//
// Rust concepts:
// - thiserror: Derive macro that writes the Display impl for error enums
// - Result<T, E>: For operations that can fail
// - Pattern matching: To unpack the optional arguments
// =============================================================================

use std::path::Path;
use thiserror::Error;

use crate::cli::Cli;

// The output file name used when the user doesn't provide one
const DEFAULT_OUTPUT_BASE_NAME: &str = "a-tag-output";

// Everything downstream needs from the arguments, fully validated
//
// input_path is known to exist; output_file_name already carries the
// ".csv" extension.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedArgs {
    pub input_path: String,
    pub output_file_name: String,
}

// One variant per rejection, each carrying the exact message the user
// sees on stderr (main prefixes it with "Error: ")
//
// #[derive(Error)] comes from thiserror and generates Display from the
// #[error("...")] attributes.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// No path argument, or a blank one
    #[error("path to folder or file is required.")]
    MissingPath,

    /// Path contains "." but not ".htm" - looks like a non-html file
    ///
    /// Known sharp edge: a directory named "archive.2024" trips this
    /// rule too, because the check only looks at the string.
    #[error("file must be an html file.")]
    InvalidExtension,

    /// Path string was fine but nothing exists at that location
    #[error("specified path does not exist.")]
    PathNotFound,

    /// Output name carries an extension (or at least a ".")
    #[error("specify output file name without file extension.")]
    InvalidOutputName,
}

// Validates the parsed CLI arguments
//
// Runs the path rules first, then the output-name rule, so an invalid
// path is always reported before an invalid output name.
pub fn validate(cli: &Cli) -> Result<ValidatedArgs, ValidationError> {
    let input_path = validate_input_path(cli.path.as_deref())?;
    let output_file_name = validate_output_name(cli.output_name.as_deref())?;

    Ok(ValidatedArgs {
        input_path,
        output_file_name,
    })
}

// Checks the required path argument
fn validate_input_path(path: Option<&str>) -> Result<String, ValidationError> {
    let path = match path {
        Some(p) if !p.trim().is_empty() => p,
        _ => return Err(ValidationError::MissingPath),
    };

    // A "." in the string means the user pointed at a file (or at least
    // something file-looking), so it had better be an html file
    if path.contains('.') && !path.contains(".htm") {
        return Err(ValidationError::InvalidExtension);
    }

    if !Path::new(path).exists() {
        return Err(ValidationError::PathNotFound);
    }

    Ok(path.to_string())
}

// Checks the optional output name and appends the ".csv" extension
//
// Absent or blank means "use the default", not an error.
fn validate_output_name(name: Option<&str>) -> Result<String, ValidationError> {
    let base = match name {
        Some(n) if !n.trim().is_empty() => {
            if n.contains('.') {
                return Err(ValidationError::InvalidOutputName);
            }
            n
        }
        _ => DEFAULT_OUTPUT_BASE_NAME,
    };

    Ok(format!("{}.csv", base))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why return Result instead of calling std::process::exit here?
//    - Exiting deep inside a function makes the rule impossible to test
//    - Returning ValidationError lets tests assert on the exact variant
//    - Only main() decides what an error means for the process
//
// 2. What does thiserror buy us?
//    - The #[error("...")] attribute becomes the Display implementation
//    - So format!("Error: {}", e) prints the user-facing message
//    - Without it we'd hand-write impl Display for ValidationError
//
// 3. What is Some(p) if !p.trim().is_empty()?
//    - A match guard: the pattern only matches when the condition holds
//    - Here it means "an argument was given AND it isn't just whitespace"
//    - Everything else (None, or a blank string) falls through to `_`
// -----------------------------------------------------------------------------
