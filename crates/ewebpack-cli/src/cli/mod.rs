//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "ewebpack",
    bin_name = "ewebpack",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Electron + webpack project initializer",
    long_about = "ewebpack bootstraps an Electron application whose main and renderer \
                  processes are each bundled with their own webpack configuration.",
    override_usage = "ewebpack <COMMAND> [ARGS]",
    after_help = "EXAMPLES:\n\
        \x20 ewebpack init\n\
        \x20 ewebpack init my-app --dry-run\n\
        \x20 ewebpack config show my-app\n\
        \x20 ewebpack completions bash > /usr/share/bash-completion/completions/ewebpack",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. Running without one prints a hint.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write `ewebpack.json` and the Electron + webpack project structure.
    #[command(
        visible_aliases = ["initialize", "i"],
        about = "Initialize an ewebpack.json configuration and project structure",
        after_help = "EXAMPLES:\n\
            \x20 ewebpack init              # current directory\n\
            \x20 ewebpack init my-app       # ./my-app must exist\n\
            \x20 ewebpack init my-app -f    # overwrite existing entry scripts\n\
            \x20 ewebpack i . --dry-run     # show what would be written"
    )]
    Init(InitArgs),

    /// Inspect configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 ewebpack config show\n\
            \x20 ewebpack config path\n\
            \x20 ewebpack config list"
    )]
    Config(ConfigCommands),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 ewebpack completions bash > ~/.local/share/bash-completion/completions/ewebpack\n\
            \x20 ewebpack completions zsh  > ~/.zfunc/_ewebpack\n\
            \x20 ewebpack completions fish > ~/.config/fish/completions/ewebpack.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `ewebpack init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Path or folder to initialize the project in.
    #[arg(
        value_name = "PATH",
        default_value = ".",
        help = "Path or folder to initialize project"
    )]
    pub path: PathBuf,

    /// Overwrite existing entry scripts and re-create source directories.
    #[arg(
        short = 'f',
        long = "force",
        help = "Override any existing files (dangerous: overwrites existing data)"
    )]
    pub force: bool,

    /// Preview what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be written without writing")]
    pub dry_run: bool,

    /// Skip the confirmation prompt for `--force`.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation")]
    pub yes: bool,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `ewebpack config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the resolved project configuration without writing anything.
    Show {
        /// Project directory.
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,
    },
    /// Print the path to the tool settings file.
    Path,
    /// Print all active tool settings.
    List,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `ewebpack completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
