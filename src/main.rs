// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Ask for a project name on stdin if none was given
// 3. Wire up the mirror (HTTP fetcher + progress reporting) and run it
// 4. Print a summary (plain text or JSON) and exit with a proper code
//    (0 = files mirrored, 1 = nothing mirrored, 2 = unexpected error)
//
// Rust concepts used:
// - async/await: The crawl downloads many files concurrently
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Closures: The progress callback handed into the mirror
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - the fetch/discover/persist pipeline
mod extract; // src/extract/ - reference extraction from source text

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;
use crawl::{HttpFetcher, Mirror};

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use std::sync::{Arc, Mutex};

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Everything we report about one mirror run
//
// #[derive(Serialize)] lets us print this as JSON with --json
#[derive(Debug, Serialize)]
struct RunSummary {
    project: String,
    files_saved: Vec<String>,
    files_claimed: usize,
    fetch_failures: usize,
    persist_failures: usize,
}

// This is the main application logic
// Returns:
//   Ok(0) = at least one file mirrored
//   Ok(1) = nothing mirrored
//   Err = unexpected error (reported as exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // The host URL must at least parse before we start hammering it
    url::Url::parse(&cli.host).with_context(|| format!("Invalid host URL '{}'", cli.host))?;

    // Project can come from the command line or from an interactive prompt,
    // just like the course downloader this tool replaces
    let project = match cli.project {
        Some(project) => project,
        None => prompt_for_project()?,
    };

    println!("🔍 Mirroring project: {}", project);
    println!("🌐 Host: {}", cli.host);
    println!("📄 Entry file: {}\n", cli.entry);

    let fetcher = Arc::new(HttpFetcher::new()?);

    // Collect every saved file for the summary while also reporting each
    // one as it lands, via the mirror's completion sink
    let saved = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink_saved = saved.clone();

    let mirror = Mirror::new(&project, &cli.host, fetcher)
        .output_root(&cli.output)
        .on_file_saved(move |path| {
            println!("Saved: {}", path);
            sink_saved.lock().unwrap().push(path.to_string());
        });

    // This returns only when every transitively discovered file has been
    // written to disk or definitively dropped
    mirror.run(&cli.entry).await;

    let summary = RunSummary {
        project,
        files_saved: std::mem::take(&mut *saved.lock().unwrap()),
        files_claimed: mirror.files_claimed(),
        fetch_failures: mirror.fetch_failures(),
        persist_failures: mirror.persist_failures(),
    };

    print_summary(&summary, cli.json)?;

    if summary.files_saved.is_empty() {
        Ok(1) // Exit code 1 = nothing was mirrored
    } else {
        Ok(0) // Exit code 0 = the mirror has content
    }
}

// Asks for a project name on stdin until the user types something
//
// Mirrors the interactive behavior of the original course downloader:
// an empty line just asks again.
fn prompt_for_project() -> Result<String> {
    println!("A downloader for the source files of the C++ programming course");
    println!("Possible projects are eg. \"Raytrace\", \"OpenGL\"");

    loop {
        print!("Please insert project name: ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        let project = input.trim();
        if !project.is_empty() {
            return Ok(project.to_string());
        }
    }
}

// Prints the run summary either as plain text or JSON
fn print_summary(summary: &RunSummary, json: bool) -> Result<()> {
    if json {
        // Serialize the summary to JSON and print
        let json_output = serde_json::to_string_pretty(summary)?;
        println!("{}", json_output);
        return Ok(());
    }

    println!("\n📊 Summary:");
    println!("   ✅ Saved: {}", summary.files_saved.len());
    println!("   📋 Claimed: {}", summary.files_claimed);
    if summary.fetch_failures > 0 {
        println!("   ❌ Fetch failures: {}", summary.fetch_failures);
    }
    if summary.persist_failures > 0 {
        println!("   ❌ Write failures: {}", summary.persist_failures);
    }

    if summary.files_saved.is_empty() {
        println!("\n⚠️  Nothing was mirrored - check the project name and host");
    } else {
        println!("\nFinished downloading {} file(s).", summary.files_saved.len());
    }

    Ok(())
}
