//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// vsixgen - Generate build artifacts from VSIX extension descriptors
#[derive(Parser, Debug)]
#[command(name = "vsixgen")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Generate the constant table artifact from descriptors
    ///
    /// Extracts metadata from the manifest and GUID groups from the
    /// command tables, then writes a deterministic Rust source file.
    Codegen {
        /// Path to the source.extension.vsixmanifest
        #[arg(long)]
        manifest: PathBuf,

        /// Command-table documents, merged in the given order
        #[arg(long = "vsct")]
        vsct: Vec<PathBuf>,

        /// Output path for the generated constants
        #[arg(long)]
        out: PathBuf,
    },

    /// Produce a derived manifest with discovered content entries
    ///
    /// The source manifest is never modified; the derived copy gets the
    /// flagged template entries injected exactly once.
    Inject {
        /// Path to the source manifest
        #[arg(long)]
        source: PathBuf,

        /// Path for the derived manifest
        #[arg(long)]
        dest: PathBuf,

        /// Project templates were discovered
        #[arg(long)]
        project_templates: bool,

        /// Item templates were discovered
        #[arg(long)]
        item_templates: bool,

        /// Folder path recorded for project templates
        #[arg(long, default_value = "ProjectTemplates")]
        project_templates_path: String,

        /// Folder path recorded for item templates
        #[arg(long, default_value = "ItemTemplates")]
        item_templates_path: String,

        /// Output diagnostics as JSON for tooling
        #[arg(long)]
        json: bool,
    },
}
