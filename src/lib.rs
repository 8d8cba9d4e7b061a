//! rstree turns Markdown-style outline lists into trees.
//!
//! A tree can come from text (`-` bullets nested by indentation) or from the
//! programmatic [`Tree`] API, and goes out as a branch diagram, as JSON, YAML
//! or TOML, or as a real directory/file hierarchy.
//!
//! ```
//! use rstree::{output, Config};
//!
//! let mut out = Vec::new();
//! output(&mut out, "- a\n\t- b".as_bytes(), &Config::default()).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "a\n└── b\n");
//! ```
//!
//! Programmatic construction merges converging paths by label:
//!
//! ```
//! use rstree::{output_tree, Config, Tree};
//!
//! let mut tree = Tree::new("root");
//! let child = tree.add(tree.root(), "child 1");
//! tree.add(child, "child 2");
//! tree.add(tree.root(), "child 1"); // reused, not duplicated
//!
//! let mut out = Vec::new();
//! output_tree(&mut out, &tree, &Config::default()).unwrap();
//! ```

use std::io::{BufRead, Write};
use std::path::Path;

pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod grow;
pub mod mkdir;
pub mod node;
pub mod parse;
pub mod spread;
pub mod util;

mod pipeline;
mod process;

pub use config::{BranchFormat, Config, Encode, Indent};
pub use errors::{TreeError, TreeResult};
pub use node::{Forest, NodeId, Tree, TreeNode};

use process::Processor;

/// Reads an outline list from `reader` and writes the rendered forest to `w`
/// in the encoding selected by `cfg`. Empty input produces empty output.
pub fn output<W: Write, R: BufRead + Send>(w: &mut W, reader: R, cfg: &Config) -> TreeResult<()> {
    Processor::from_config(cfg).output(w, reader, cfg)
}

/// Renders a programmatically built tree to `w`. The caller's tree is left
/// untouched; branch prefixes are derived on an internal copy.
pub fn output_tree<W: Write>(w: &mut W, tree: &Tree, cfg: &Config) -> TreeResult<()> {
    Processor::from_config(cfg).output_tree(w, tree, cfg)
}

/// Reads an outline list from `reader` and materializes it under the current
/// working directory. With `cfg.dry_run` the planned hierarchy is printed to
/// stdout instead and nothing is created.
pub fn mkdir<R: BufRead + Send>(reader: R, cfg: &Config) -> TreeResult<()> {
    let base = std::env::current_dir()?;
    mkdir_in(&base, reader, cfg)
}

/// Like [`mkdir`] but rooted at `base`, which must already exist.
pub fn mkdir_in<R: BufRead + Send>(base: &Path, reader: R, cfg: &Config) -> TreeResult<()> {
    Processor::from_config(cfg).mkdir(reader, base, cfg)
}

/// Materializes a programmatically built tree under the current working
/// directory.
pub fn mkdir_tree(tree: &Tree, cfg: &Config) -> TreeResult<()> {
    let base = std::env::current_dir()?;
    mkdir_tree_in(&base, tree, cfg)
}

/// Like [`mkdir_tree`] but rooted at `base`.
pub fn mkdir_tree_in(base: &Path, tree: &Tree, cfg: &Config) -> TreeResult<()> {
    Processor::from_config(cfg).mkdir_tree(tree, base, cfg)
}
