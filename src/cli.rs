// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Option<T>: Arguments the user may leave out
// =============================================================================

use crate::crawl::DEFAULT_ENTRY;
use clap::Parser;
use std::path::PathBuf;

// The remote origin the course sources are served from.
// Can be overridden with --host.
pub const DEFAULT_HOST: &str = "http://hpc.uni-due.de/lnc/cpp/";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "source-mirror",
    version = "0.1.0",
    about = "A CLI tool to recursively mirror course source trees from a remote file host",
    long_about = "source-mirror downloads a project's entry file from a remote host, parses it \
                  for references to other files (makefile SRC lists, #include directives, quoted \
                  resource literals), fetches those recursively and mirrors the whole tree into \
                  a local directory."
)]
pub struct Cli {
    /// Project to mirror, e.g. "Raytrace" or "OpenGL"
    ///
    /// This is a positional argument. When it's left out we ask for it
    /// interactively on stdin.
    pub project: Option<String>,

    /// Host URL the files are served from
    ///
    /// A trailing '/' is appended if missing.
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Entry file the crawl starts from
    ///
    /// When this file can't be fetched, the crawl falls back to main.cpp.
    #[arg(long, default_value = DEFAULT_ENTRY)]
    pub entry: String,

    /// Directory the mirror is written into
    ///
    /// Files land under {output}/{project}/...
    #[arg(long, default_value = ".")]
    pub output: PathBuf,

    /// Output the run summary in JSON format instead of plain text
    #[arg(long)]
    pub json: bool,
}
