//! Mkdirer: materializes a forest as directories and files on disk.

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::config::{is_file_label, Config};
use crate::errors::{TreeError, TreeResult};
use crate::node::Tree;

/// Creates one directory per node, or an empty file when the label matches a
/// file marker. Paths are rooted at the current working directory.
///
/// Creation is depth-first and not transactional: on error, paths created so
/// far stay in place.
pub struct Mkdirer {
    file_markers: Vec<String>,
}

impl Mkdirer {
    pub fn new(cfg: &Config) -> Self {
        Self {
            file_markers: cfg.file_markers.clone(),
        }
    }

    /// Materializes under the current working directory.
    #[instrument(level = "debug", skip_all)]
    pub fn mkdir(&self, forest: &[Tree]) -> TreeResult<()> {
        let base = std::env::current_dir()?;
        self.mkdir_in(&base, forest)
    }

    /// Materializes under `base`, which must already exist.
    #[instrument(level = "debug", skip_all, fields(base = %base.display()))]
    pub fn mkdir_in(&self, base: &Path, forest: &[Tree]) -> TreeResult<()> {
        for tree in forest {
            self.materialize(base, tree)?;
        }
        Ok(())
    }

    fn materialize(&self, base: &Path, tree: &Tree) -> TreeResult<()> {
        // A file cannot contain children; reject before touching the disk.
        for (_, node) in tree.iter() {
            if !node.children.is_empty() && is_file_label(&node.label, &self.file_markers) {
                return Err(TreeError::InvalidNodeName {
                    name: node.label.clone(),
                    reason: "marked as a file but has children".to_string(),
                });
            }
        }

        // Parents are created before their children are visited.
        let mut stack = vec![(tree.root(), base.to_path_buf())];
        while let Some((id, parent_path)) = stack.pop() {
            let node = tree.node(id);
            let path = parent_path.join(&node.label);
            if path.exists() {
                return Err(TreeError::PathExists(path));
            }
            if is_file_label(&node.label, &self.file_markers) {
                debug!(path = %path.display(), "creating file");
                fs::File::create(&path)?;
            } else {
                debug!(path = %path.display(), "creating directory");
                fs::create_dir(&path)?;
            }
            for &child in node.children.iter().rev() {
                stack.push((child, path.clone()));
            }
        }
        Ok(())
    }
}
