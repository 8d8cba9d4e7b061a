//! Branch grower: derives the printable prefix for every non-root node.

use tracing::instrument;

use crate::config::{BranchFormat, Config};
use crate::errors::{TreeError, TreeResult};
use crate::node::{NodeId, Tree};

/// Computes branch prefixes and, when validation is enabled, rejects labels
/// that cannot become filesystem path segments before anything is written.
pub struct Grower {
    last_node: BranchFormat,
    intermedial_node: BranchFormat,
    validate: bool,
}

impl Grower {
    pub fn new(cfg: &Config) -> Self {
        Self {
            last_node: cfg.last_node.clone(),
            intermedial_node: cfg.intermedial_node.clone(),
            validate: false,
        }
    }

    /// Turns on path-name validation (used by the mkdir path).
    pub fn enable_validation(&mut self) {
        self.validate = true;
    }

    pub fn validates(&self) -> bool {
        self.validate
    }

    #[instrument(level = "debug", skip_all)]
    pub fn grow(&self, forest: &mut [Tree]) -> TreeResult<()> {
        for tree in forest {
            self.grow_tree(tree)?;
        }
        Ok(())
    }

    /// Validates (when enabled) and assembles branches for one tree.
    #[instrument(level = "trace", skip_all)]
    pub fn grow_tree(&self, tree: &mut Tree) -> TreeResult<()> {
        if self.validate {
            for (_, node) in tree.iter() {
                check_node_name(&node.label)?;
            }
        }

        let ids: Vec<NodeId> = tree.iter().map(|(id, _)| id).collect();
        for id in ids {
            if tree.node(id).parent.is_none() {
                continue;
            }
            let branch = self.assemble_branch(tree, id);
            tree.node_mut(id).branch = branch;
        }
        Ok(())
    }

    /// Builds the prefix for one node: continuation segments contributed by
    /// each ancestor strictly between root and node (accumulated root-first),
    /// then the node's own connector. O(depth) per node.
    fn assemble_branch(&self, tree: &Tree, id: NodeId) -> String {
        let directly = if tree.is_last_child(id) {
            &self.last_node.directly
        } else {
            &self.intermedial_node.directly
        };

        let mut segments = Vec::new();
        let mut current = tree.node(id).parent;
        while let Some(ancestor) = current {
            let node = tree.node(ancestor);
            if node.parent.is_none() {
                break; // the root draws no segment
            }
            segments.push(if tree.is_last_child(ancestor) {
                self.last_node.indirectly.as_str()
            } else {
                self.intermedial_node.indirectly.as_str()
            });
            current = node.parent;
        }

        let mut branch = String::new();
        for segment in segments.iter().rev() {
            branch.push_str(segment);
        }
        branch.push_str(directly);
        branch.push(' ');
        branch
    }
}

/// Path-segment legality: non-empty after trim, no separators, no dot-dirs.
fn check_node_name(label: &str) -> TreeResult<()> {
    let reason = if label.trim().is_empty() {
        Some("empty name")
    } else if label.contains('/') || label.contains('\\') {
        Some("contains a path separator")
    } else if label == "." || label == ".." {
        Some("reserved directory name")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(TreeError::InvalidNodeName {
            name: label.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
