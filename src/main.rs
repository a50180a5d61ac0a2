// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Answer -h/--h before anything else (even argument validation)
// 2. Parse command-line arguments using clap
// 3. Validate the path and output-name arguments
// 4. Discover HTML files, extract their anchors, write the csv
// 5. Exit with proper code (0 = success, 1 = any failure)
//
// Rust concepts used:
// - async/await: Because many files can be read/parsed concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to turn results into exit codes
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing and usage text
mod validate;  // src/validate.rs - argument validation rules
mod discover;  // src/discover.rs - finding html files on disk
mod extract;   // src/extract.rs - pulling <a> tags out of documents
mod output;    // src/output.rs - csv serialization

// Import items we need from our modules
use cli::Cli;
use clap::Parser;  // Parser trait enables the parse() method

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // A runtime error (unreadable file, failed write, ...)
            // surfaced - print it and exit non-zero
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = csv written (or help printed)
//   Ok(1) = arguments rejected
//   Err = runtime failure during discovery/extraction/writing
async fn run() -> Result<i32> {
    // The help flag must win over everything, including clap itself:
    // "-h" as the first argument prints usage and does nothing else
    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    if cli::wants_help(raw_args.first()) {
        cli::print_usage();
        return Ok(0);
    }

    // Parse command-line arguments into our Cli struct
    let cli = Cli::parse();

    // Validate before touching the filesystem for real
    // A rejection is a single stderr line, no output file
    let args = match validate::validate(&cli) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(1);
        }
    };

    println!("......working......");

    // Find every html file under the path (or the single file itself)
    let files = discover::find_html_files(&args.input_path)?;

    // Parse all files concurrently; the first failure aborts the run
    // before anything is written
    let results = extract::extract_all(files).await?;

    // Flatten and persist - one comma-joined line per anchor
    output::write_csv(&args.output_file_name, results)?;

    println!("Done. Output file: {}", args.output_file_name);

    Ok(0)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why check for help before Cli::parse()?
//    - clap would otherwise try to interpret "--h" and fail with its
//      own error message
//    - Our contract says help short-circuits every other behavior, so
//      we look at the raw arguments first
//
// 2. Why Ok(1) for validation errors but Err for runtime errors?
//    - Validation rejections have their own exact messages and are an
//      expected, handled outcome - we print and pick the exit code
//    - Runtime failures bubble up via ? and get reported once in main
//    - Either way the process exits 1; only the reporting path differs
//
// 3. What is {:#} in eprintln!?
//    - anyhow's "alternate" formatting
//    - Prints the error and its context chain on one line, so the user
//      sees both what failed and which file it failed on
// -----------------------------------------------------------------------------
