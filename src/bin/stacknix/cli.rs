//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Stacknix - Generate Nix package-set override expressions from resolved
/// Haskell stack builds
#[derive(Parser)]
#[command(name = "stacknix")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the override expression from a resolver plan
    Generate(GenerateArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the resolver plan (JSON)
    pub plan: PathBuf,

    /// Write the expression to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// GHC version the generated set targets (e.g. 8.6.5)
    #[arg(long)]
    pub ghc_version: Option<String>,

    /// Run test suites for local packages
    #[arg(long)]
    pub enable_tests: bool,

    /// Run benchmarks for local packages
    #[arg(long)]
    pub enable_benchmarks: bool,

    /// Build haddock documentation for local packages
    #[arg(long)]
    pub enable_haddock: bool,

    /// Mark a package as local (repeatable)
    #[arg(long = "local", value_name = "NAME")]
    pub locals: Vec<String>,

    /// Indent width in spaces
    #[arg(long)]
    pub indent: Option<usize>,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
