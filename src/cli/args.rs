//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum, ValueHint};

use crate::config::{Config, Encode, Indent};

/// Outline-to-tree converter: render Markdown-style lists as branch diagrams,
/// JSON/YAML/TOML, or directories
#[derive(Parser, Debug)]
#[command(name = "rstree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable debug output (-d, -dd, -ddd)
    #[arg(short = 'd', long = "debug", action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render an outline as a tree (stdin when no file given)
    Output {
        /// Outline file
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,

        /// Indentation unit of the outline
        #[arg(short, long, value_enum, default_value_t)]
        indent: IndentArg,

        /// Output encoding
        #[arg(short, long, value_enum, default_value_t)]
        format: FormatArg,

        /// Pipelined execution for large outlines
        #[arg(long)]
        massive: bool,
    },

    /// Create the directories and files an outline describes
    Mkdir {
        /// Outline file
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,

        /// Indentation unit of the outline
        #[arg(short, long, value_enum, default_value_t)]
        indent: IndentArg,

        /// Preview the hierarchy instead of creating it
        #[arg(long)]
        dry_run: bool,

        /// Extension or exact-name marker: matching nodes become files
        /// (repeatable)
        #[arg(short = 'e', long = "extension")]
        extensions: Vec<String>,

        /// Pipelined execution for large outlines
        #[arg(long)]
        massive: bool,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum IndentArg {
    /// One tab per level
    #[default]
    Tab,
    /// Two spaces per level
    #[value(name = "2")]
    TwoSpaces,
    /// Four spaces per level
    #[value(name = "4")]
    FourSpaces,
}

impl From<IndentArg> for Indent {
    fn from(arg: IndentArg) -> Self {
        match arg {
            IndentArg::Tab => Indent::Tab,
            IndentArg::TwoSpaces => Indent::TwoSpaces,
            IndentArg::FourSpaces => Indent::FourSpaces,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum FormatArg {
    /// Plain branch diagram
    #[default]
    Text,
    Json,
    Yaml,
    Toml,
}

impl From<FormatArg> for Encode {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Encode::Text,
            FormatArg::Json => Encode::Json,
            FormatArg::Yaml => Encode::Yaml,
            FormatArg::Toml => Encode::Toml,
        }
    }
}

impl Commands {
    /// Conversion settings implied by the command's flags.
    pub fn to_config(&self) -> Config {
        match self {
            Commands::Output {
                indent,
                format,
                massive,
                ..
            } => Config::new()
                .with_indent((*indent).into())
                .with_encode((*format).into())
                .with_massive(*massive),
            Commands::Mkdir {
                indent,
                dry_run,
                extensions,
                massive,
                ..
            } => Config::new()
                .with_indent((*indent).into())
                .with_dry_run(*dry_run)
                .with_file_markers(extensions.iter().cloned())
                .with_massive(*massive),
            Commands::Completion { .. } => Config::new(),
        }
    }
}
