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
    name    = "craftgrid",
    bin_name = "craftgrid",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Recognize crafting recipes from a grid of materials",
    long_about = "craftgrid reports which recipe, if any, a crafting grid makes. \
                  Recipes come from a JSON catalog or the built-in starter set.",
    after_help = "EXAMPLES:\n\
        \x20 craftgrid craft --grid \"coal; stick\"\n\
        \x20 craftgrid craft chest.grid --catalog ./recipes\n\
        \x20 craftgrid list --search planks\n\
        \x20 craftgrid show torch\n\
        \x20 craftgrid completions bash > /usr/share/bash-completion/completions/craftgrid",
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
    /// Resolve a crafting grid to a recipe.
    #[command(
        visible_alias = "c",
        about = "Resolve a crafting grid",
        after_help = "GRID FORMAT:\n\
            \x20 One row per line (or per ';'), cells separated by spaces or commas.\n\
            \x20 '_', '.' or '-' is an empty slot; lines starting with '#' are ignored.\n\n\
            EXAMPLES:\n\
            \x20 craftgrid craft torch.grid\n\
            \x20 craftgrid craft --grid \"planks planks; planks planks\"\n\
            \x20 cat chest.grid | craftgrid craft -\n\
            \x20 craftgrid craft --all --grid \"oak_log\""
    )]
    Craft(CraftArgs),

    /// List recipes in the catalog.
    #[command(
        visible_alias = "ls",
        about = "List available recipes",
        after_help = "EXAMPLES:\n\
            \x20 craftgrid list\n\
            \x20 craftgrid list --search stick\n\
            \x20 craftgrid list --table-size 2 --format json"
    )]
    List(ListArgs),

    /// Show every variant of one recipe.
    #[command(
        about = "Show a recipe's layouts",
        after_help = "EXAMPLES:\n\
            \x20 craftgrid show chest\n\
            \x20 craftgrid show planks --table-size 2"
    )]
    Show(ShowArgs),

    /// Check a catalog for malformed or oversized recipes.
    #[command(
        about = "Validate a recipe catalog",
        after_help = "EXAMPLES:\n\
            \x20 craftgrid validate --catalog ./recipes\n\
            \x20 craftgrid validate --table-size 2"
    )]
    Validate(ValidateArgs),

    /// Initialise a craftgrid configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 craftgrid init                      # global config\n\
            \x20 craftgrid init --local              # .craftgrid.toml in CWD\n\
            \x20 craftgrid init --local --catalog recipes.json"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 craftgrid completions bash > ~/.local/share/bash-completion/completions/craftgrid\n\
            \x20 craftgrid completions zsh  > ~/.zfunc/_craftgrid\n\
            \x20 craftgrid completions fish > ~/.config/fish/completions/craftgrid.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the craftgrid configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 craftgrid config get table.size\n\
            \x20 craftgrid config list\n\
            \x20 craftgrid config path"
    )]
    Config(ConfigCommands),
}

// ── shared ────────────────────────────────────────────────────────────────────

/// Where recipes come from and which table they are used on.
#[derive(Debug, Clone, Default, Args)]
pub struct CatalogArgs {
    /// Catalog file or directory; overrides `catalog.path`.
    #[arg(
        long = "catalog",
        value_name = "PATH",
        help = "JSON catalog file or directory (default: built-in recipes)"
    )]
    pub catalog: Option<PathBuf>,

    /// Crafting table edge length; overrides `table.size`.
    #[arg(
        short = 't',
        long = "table-size",
        value_name = "N",
        value_parser = clap::value_parser!(u8).range(1..=9),
        help = "Crafting table size (3 for the full table, 2 for the small one)"
    )]
    pub table_size: Option<u8>,
}

// ── craft ─────────────────────────────────────────────────────────────────────

/// Arguments for `craftgrid craft`.
#[derive(Debug, Args)]
pub struct CraftArgs {
    /// Grid file; `-` or omitted reads standard input.
    #[arg(value_name = "FILE", conflicts_with = "grid", help = "Grid file ('-' for stdin)")]
    pub file: Option<PathBuf>,

    /// Inline grid, rows separated by `;`.
    #[arg(
        short = 'g',
        long = "grid",
        value_name = "ROWS",
        help = "Inline grid, e.g. \"_ coal; _ stick\""
    )]
    pub grid: Option<String>,

    /// Report every matching recipe instead of the first.
    #[arg(short = 'a', long = "all", help = "Report every matching recipe")]
    pub all: bool,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `craftgrid list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only recipes whose name or materials contain this text.
    #[arg(
        short = 's',
        long = "search",
        value_name = "QUERY",
        help = "Filter by name or material"
    )]
    pub search: Option<String>,

    /// Include recipes that do not fit the table.
    #[arg(long = "all", help = "Include recipes too large for the table")]
    pub all: bool,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One `group#id` per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── show ──────────────────────────────────────────────────────────────────────

/// Arguments for `craftgrid show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Recipe group name.
    #[arg(value_name = "RECIPE", help = "Recipe group to show")]
    pub group: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

// ── validate ──────────────────────────────────────────────────────────────────

/// Arguments for `craftgrid validate`.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `craftgrid init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.craftgrid.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Also write the built-in catalog to this file and point the config at it.
    #[arg(
        long = "catalog",
        value_name = "FILE",
        help = "Write the starter catalog to FILE"
    )]
    pub catalog: Option<PathBuf>,

    /// Overwrite existing files.
    #[arg(short = 'f', long = "force", help = "Overwrite existing files")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `craftgrid completions`.
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

/// Subcommands for `craftgrid config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `table.size`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
