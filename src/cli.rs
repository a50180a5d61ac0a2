// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// One twist: this tool owns its own help text. The `-h`/`--h` flag
// (case-insensitive, first argument only) must win over everything else,
// including validation, so we check for it ourselves before clap ever
// runs and disable clap's built-in help flag.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Option<T>: A value that may or may not be present
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "a-tag-exporter",
    version = "0.1.0",
    about = "Exports the text and links of <a> tags in HTML files to a CSV",
    disable_help_flag = true
)]
pub struct Cli {
    /// Path to an html file or a folder of html files
    ///
    /// This is a positional argument. It's Option<String> rather than
    /// String because a missing path must surface as our own
    /// MissingPath error, not as a clap usage error.
    pub path: Option<String>,

    /// Desired name of the csv output file, without file extension
    ///
    /// Second positional argument, optional. Defaults to "a-tag-output"
    /// during validation when absent or blank.
    pub output_name: Option<String>,
}

// Returns true if the first argument asks for help
//
// Accepted spellings: -h, --h (any letter case). Only the first
// argument counts; "-h" anywhere else is treated as a path.
pub fn wants_help(first_arg: Option<&String>) -> bool {
    match first_arg {
        Some(arg) => {
            let lowered = arg.to_lowercase();
            lowered == "-h" || lowered == "--h"
        }
        None => false,
    }
}

// Prints the usage text to stdout
//
// Kept as plain println! lines so the output reads exactly like the
// tool's own documentation, blank lines included.
pub fn print_usage() {
    println!("USAGE");
    println!("$ a-tag-exporter <PATH_TO_FILE_OR_FOLDER> <OUTPUT_FILE_NAME>");
    println!("- PATH_TO_FILE_OR_FOLDER is required - provide a path to an html file or a folder of html files");
    println!("- OUTPUT_FILE_NAME - optional - desired name of the csv output file without file extension");

    println!();

    println!("OUTPUT");
    println!("Program will generate a csv containing text and links of the a tags in the html file(s) called \"a-tag-output.csv\" (or name provided).");
    println!("Note: if you already have a file called \"a-tag-output.csv\" (or name provided) in same location, it will be overwritten.");

    println!();

    println!("EXAMPLES");
    println!("- Specify path to folder");
    println!("    $ a-tag-exporter path/to/htmls");
    println!("- Specify path to file");
    println!("    $ a-tag-exporter path/to/example.html");
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why disable clap's help flag?
//    - clap normally claims -h/--help for its generated help screen
//    - Our contract says -h and --h (case-insensitive) print OUR usage
//      text and skip everything else, even argument validation
//    - disable_help_flag = true frees -h so we can handle it first
//
// 2. Why Option<String> for positional arguments?
//    - With String, clap would reject a missing path with its own error
//    - With Option<String>, zero arguments still parse successfully and
//      our validation layer gets to produce the proper error message
//
// 3. What is to_lowercase()?
//    - Creates a lowercased copy of the string
//    - Lets us compare "-H" and "--H" against one canonical spelling
// -----------------------------------------------------------------------------
