//! Outline parser: turns `-` bulleted, indentation-nested lines into a forest.

use std::io::BufRead;

use tracing::instrument;

use crate::config::Indent;
use crate::errors::{TreeError, TreeResult};
use crate::node::{Forest, NodeId, Tree};

/// Stack-based outline parser.
///
/// The parser keeps an ancestor stack indexed by depth: `stack[d]` is the most
/// recently seen node at depth `d` of the current tree, so the parent of a
/// depth-`d` line is `stack[d - 1]` in O(1). A depth-0 line starts a new tree
/// and resets the stack.
pub struct OutlineParser {
    indent: Indent,
}

impl OutlineParser {
    pub fn new(indent: Indent) -> Self {
        Self { indent }
    }

    /// Parses all lines into a forest. Empty input yields an empty forest.
    #[instrument(level = "debug", skip_all)]
    pub fn parse(&self, reader: impl BufRead) -> TreeResult<Forest> {
        let mut forest = Vec::new();
        self.parse_each(reader, |tree| {
            forest.push(tree);
            true
        })?;
        Ok(forest)
    }

    /// Streaming variant: hands each tree to `sink` as soon as it is complete
    /// (when the next depth-0 line arrives, or at end of input). `sink`
    /// returning false stops parsing early without an error; the pipelined
    /// processor uses this when a downstream stage has gone away.
    #[instrument(level = "debug", skip_all)]
    pub fn parse_each(
        &self,
        reader: impl BufRead,
        mut sink: impl FnMut(Tree) -> bool,
    ) -> TreeResult<()> {
        let mut current: Option<Tree> = None;
        // stack[d] = most recent node at depth d within `current`
        let mut stack: Vec<NodeId> = Vec::new();

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let lineno = idx + 1;
            let (depth, label) = self.split_line(&line, lineno)?;

            if depth == 0 {
                if let Some(done) = current.take() {
                    if !sink(done) {
                        return Ok(());
                    }
                }
                let tree = Tree::new(label);
                stack.clear();
                stack.push(tree.root());
                current = Some(tree);
            } else {
                let tree = current.as_mut().ok_or_else(|| TreeError::MalformedHierarchy {
                    line: lineno,
                    reason: "indented line before any root".to_string(),
                })?;
                if depth > stack.len() {
                    return Err(TreeError::MalformedHierarchy {
                        line: lineno,
                        reason: format!("no parent at depth {}", depth - 1),
                    });
                }
                let parent = stack[depth - 1];
                let id = tree.push_child(parent, label);
                stack.truncate(depth);
                stack.push(id);
            }
        }

        if let Some(done) = current.take() {
            sink(done);
        }
        Ok(())
    }

    /// Classifies one line into (depth, label).
    fn split_line(&self, line: &str, lineno: usize) -> TreeResult<(usize, String)> {
        let unit = self.indent.unit_char();
        let width = self.indent.unit_width();

        let leading = line.chars().take_while(|&c| c == unit).count();
        if leading % width != 0 {
            return Err(TreeError::MalformedHierarchy {
                line: lineno,
                reason: format!("indentation is not a multiple of {width} spaces"),
            });
        }
        let depth = leading / width;

        let rest = &line[leading * unit.len_utf8()..];
        let label = match rest.strip_prefix('-') {
            Some(after) if after.starts_with(char::is_whitespace) => after.trim(),
            _ => {
                return Err(TreeError::MalformedHierarchy {
                    line: lineno,
                    reason: "missing '- ' bullet marker".to_string(),
                })
            }
        };
        if label.is_empty() {
            return Err(TreeError::MalformedHierarchy {
                line: lineno,
                reason: "empty node name".to_string(),
            });
        }

        Ok((depth, label.to_string()))
    }
}
