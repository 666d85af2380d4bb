//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "dockgen",
    bin_name = "dockgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f433} Dockerfile and docker-compose generation",
    long_about = "Dockgen inspects a project directory, detects its language, \
                  entrypoint and port, and writes a Dockerfile and optionally \
                  a docker-compose.yml for it.",
    after_help = "EXAMPLES:\n\
        \x20 dockgen init\n\
        \x20 dockgen init ./services/api --compose --port 8080\n\
        \x20 dockgen detect --output-format json\n\
        \x20 dockgen completions bash > /usr/share/bash-completion/completions/dockgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate container artifacts for a project.
    #[command(
        visible_alias = "i",
        about = "Generate a Dockerfile (and optionally docker-compose.yml)",
        after_help = "EXAMPLES:\n\
            \x20 dockgen init                     # current directory\n\
            \x20 dockgen init ../api -c -p 8080   # with compose, fixed port\n\
            \x20 dockgen init --single-stage      # one-stage Dockerfile\n\
            \x20 dockgen init --dry-run           # print, write nothing"
    )]
    Init(InitArgs),

    /// Show what would be detected for a project.
    #[command(
        visible_alias = "d",
        about = "Detect project type, entrypoint and port",
        after_help = "EXAMPLES:\n\
            \x20 dockgen detect\n\
            \x20 dockgen detect ./web --output-format json"
    )]
    Detect(DetectArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 dockgen completions bash > ~/.local/share/bash-completion/completions/dockgen\n\
            \x20 dockgen completions zsh  > ~/.zfunc/_dockgen\n\
            \x20 dockgen completions fish > ~/.config/fish/completions/dockgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Dockgen configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 dockgen config init\n\
            \x20 dockgen config get generation.compose\n\
            \x20 dockgen config list"
    )]
    Config(ConfigCommands),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `dockgen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Project directory.
    #[arg(value_name = "PATH", default_value = ".", help = "Project directory")]
    pub path: PathBuf,

    /// Also generate docker-compose.yml.
    #[arg(short = 'c', long = "compose", help = "Generate docker-compose.yml")]
    pub compose: bool,

    /// Overwrite existing artifacts.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,

    /// Port override; skips detection.
    #[arg(
        short = 'p',
        long = "port",
        value_name = "PORT",
        value_parser = clap::value_parser!(u16).range(1..),
        help = "Application port (default: auto-detect)"
    )]
    pub port: Option<u16>,

    /// Force a multi-stage build.
    #[arg(
        short = 'm',
        long = "multi-stage",
        conflicts_with = "single_stage",
        help = "Use a multi-stage build"
    )]
    pub multi_stage: bool,

    /// Force a single-stage build.
    #[arg(long = "single-stage", help = "Use a single-stage build")]
    pub single_stage: bool,

    /// Skip the overwrite confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Do not prompt for confirmation")]
    pub yes: bool,

    /// Print the artifacts instead of writing them.
    #[arg(long = "dry-run", help = "Print artifacts without writing files")]
    pub dry_run: bool,
}

impl InitArgs {
    /// Stage choice from flags, falling back to `default` when neither is set.
    pub fn multi_stage_or(&self, default: bool) -> bool {
        if self.single_stage {
            false
        } else if self.multi_stage {
            true
        } else {
            default
        }
    }
}

// ── detect ────────────────────────────────────────────────────────────────────

/// Arguments for `dockgen detect`.
#[derive(Debug, Args)]
pub struct DetectArgs {
    /// Project directory.
    #[arg(value_name = "PATH", default_value = ".", help = "Project directory")]
    pub path: PathBuf,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `dockgen completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `dockgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force")]
        force: bool,
    },
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `generation.compose`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
