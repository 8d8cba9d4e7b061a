//! Spreader: renders a grown forest to a writer.

use std::io::Write;

use colored::Colorize;
use serde::Serialize;
use tracing::instrument;

use crate::config::{is_file_label, Config, Encode};
use crate::errors::TreeResult;
use crate::node::Tree;

/// Plain nested record handed to the structured encoders. Leaves keep an
/// explicit empty `children` sequence so consumers see a uniform shape.
#[derive(Debug, Serialize)]
struct EncodedNode {
    value: String,
    children: Vec<EncodedNode>,
}

fn encode_tree(tree: &Tree) -> EncodedNode {
    fn build(tree: &Tree, id: crate::node::NodeId) -> EncodedNode {
        let node = tree.node(id);
        EncodedNode {
            value: node.label.clone(),
            children: node.children.iter().map(|&c| build(tree, c)).collect(),
        }
    }
    build(tree, tree.root())
}

/// Output sink variants, one per encoding mode. A closed set so dispatch is
/// exhaustively checked.
pub enum Spreader {
    /// Plain branch diagram
    Text,
    /// Dry-run diagram: labels colored by directory/file kind. Counts
    /// accumulate across calls and are written by [`Spreader::finish`].
    Colorized {
        file_markers: Vec<String>,
        directories: usize,
        files: usize,
    },
    Json,
    /// Tracks whether a document was already written so later roots get a
    /// `---` separator even when roots arrive one call at a time.
    Yaml { emitted: bool },
    Toml,
}

impl Spreader {
    /// Selects the sink for `cfg`: dry-run always previews as a colorized
    /// diagram, otherwise the configured encoding wins.
    pub fn new(cfg: &Config) -> Self {
        if cfg.dry_run {
            return Spreader::Colorized {
                file_markers: cfg.file_markers.clone(),
                directories: 0,
                files: 0,
            };
        }
        match cfg.encode {
            Encode::Text => Spreader::Text,
            Encode::Json => Spreader::Json,
            Encode::Yaml => Spreader::Yaml { emitted: false },
            Encode::Toml => Spreader::Toml,
        }
    }

    /// Renders the forest, roots in order, one document per root for the
    /// structured encodings. Branch prefixes are ignored by the encoders.
    #[instrument(level = "debug", skip_all)]
    pub fn spread(&mut self, w: &mut dyn Write, forest: &[Tree]) -> TreeResult<()> {
        match self {
            Spreader::Text => {
                let mut out = String::new();
                for tree in forest {
                    for (_, node) in tree.iter() {
                        out.push_str(&node.branch);
                        out.push_str(&node.label);
                        out.push('\n');
                    }
                }
                w.write_all(out.as_bytes())?;
            }
            Spreader::Colorized {
                file_markers,
                directories,
                files,
            } => {
                for tree in forest {
                    for (_, node) in tree.iter() {
                        let label = if is_file_label(&node.label, file_markers) {
                            *files += 1;
                            node.label.green()
                        } else {
                            *directories += 1;
                            node.label.blue()
                        };
                        writeln!(w, "{}{}", node.branch, label)?;
                    }
                }
            }
            Spreader::Json => {
                for tree in forest {
                    serde_json::to_writer(&mut *w, &encode_tree(tree))?;
                    writeln!(w)?;
                }
            }
            Spreader::Yaml { emitted } => {
                for tree in forest {
                    if *emitted {
                        w.write_all(b"---\n")?;
                    }
                    serde_yaml::to_writer(&mut *w, &encode_tree(tree))?;
                    *emitted = true;
                }
            }
            Spreader::Toml => {
                for tree in forest {
                    let doc = toml::to_string(&encode_tree(tree))?;
                    w.write_all(doc.as_bytes())?;
                }
            }
        }
        w.flush()?;
        Ok(())
    }

    /// Writes any trailing output once the whole forest has been spread. For
    /// the colorized sink this is the directory/file count summary.
    pub fn finish(&mut self, w: &mut dyn Write) -> TreeResult<()> {
        if let Spreader::Colorized {
            directories, files, ..
        } = self
        {
            writeln!(w)?;
            writeln!(w, "{directories} directories, {files} files")?;
            w.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grow::Grower;

    fn grown(input: &[(&str, &[&str])]) -> Tree {
        // one root with labeled children lists: ("root", ["a", "b"]) style helper
        let mut tree = Tree::new(input[0].0);
        for &(parent, children) in input {
            let pid = if parent == input[0].0 {
                tree.root()
            } else {
                tree.iter()
                    .find(|(_, n)| n.label == parent)
                    .map(|(id, _)| id)
                    .unwrap()
            };
            for &c in children {
                tree.add(pid, c);
            }
        }
        Grower::new(&Config::default()).grow_tree(&mut tree).unwrap();
        tree
    }

    #[test]
    fn given_small_tree_when_spreading_text_then_diagram_matches() {
        let tree = grown(&[("a", &["b", "c"])]);
        let mut out = Vec::new();
        Spreader::Text.spread(&mut out, &[tree]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "a\n├── b\n└── c\n");
    }

    #[test]
    fn given_leaf_nodes_when_encoding_json_then_children_explicitly_empty() {
        let tree = grown(&[("a", &["b"])]);
        let mut out = Vec::new();
        Spreader::Json.spread(&mut out, &[tree]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text.trim(),
            r#"{"value":"a","children":[{"value":"b","children":[]}]}"#
        );
    }

    #[test]
    fn given_tree_when_encoding_yaml_then_order_preserved() {
        let tree = grown(&[("a", &["b", "c"])]);
        let mut out = Vec::new();
        Spreader::Yaml { emitted: false }
            .spread(&mut out, &[tree])
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        let b = text.find("value: b").unwrap();
        let c = text.find("value: c").unwrap();
        assert!(b < c);
        assert!(text.contains("children: []"));
    }

    #[test]
    fn given_tree_when_encoding_toml_then_children_are_tables() {
        let tree = grown(&[("a", &["b"])]);
        let mut out = Vec::new();
        Spreader::Toml.spread(&mut out, &[tree]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(r#"value = "a""#));
        assert!(text.contains("[[children]]"));
        assert!(text.contains("children = []"));
    }

    #[test]
    fn given_multiple_roots_when_encoding_json_then_one_document_per_root() {
        let first = grown(&[("a", &[] as &[&str])]);
        let second = grown(&[("b", &[] as &[&str])]);
        let mut out = Vec::new();
        Spreader::Json.spread(&mut out, &[first, second]).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn given_markers_when_spreading_colorized_then_counts_dirs_and_files() {
        colored::control::set_override(false);
        let tree = grown(&[("root", &["src", "README.md"])]);
        let mut out = Vec::new();
        let mut spreader = Spreader::Colorized {
            file_markers: vec!["md".to_string()],
            directories: 0,
            files: 0,
        };
        spreader.spread(&mut out, &[tree]).unwrap();
        spreader.finish(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("2 directories, 1 files\n"));
        colored::control::unset_override();
    }
}
