//! Conversion settings shared by the parser, grower, spreader and mkdirer.

/// Indentation unit used to derive a node's depth from its source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Indent {
    /// One leading tab per level (default)
    #[default]
    Tab,
    /// Two leading spaces per level
    TwoSpaces,
    /// Four leading spaces per level
    FourSpaces,
}

impl Indent {
    /// The character that makes up one indentation unit.
    pub(crate) fn unit_char(self) -> char {
        match self {
            Indent::Tab => '\t',
            Indent::TwoSpaces | Indent::FourSpaces => ' ',
        }
    }

    /// How many unit characters form one depth level.
    pub(crate) fn unit_width(self) -> usize {
        match self {
            Indent::Tab => 1,
            Indent::TwoSpaces => 2,
            Indent::FourSpaces => 4,
        }
    }
}

/// Glyph pair for one connector class: the branch drawn directly in front of a
/// node, and the continuation segment the node contributes to its descendants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchFormat {
    pub directly: String,
    pub indirectly: String,
}

impl BranchFormat {
    pub fn new(directly: impl Into<String>, indirectly: impl Into<String>) -> Self {
        Self {
            directly: directly.into(),
            indirectly: indirectly.into(),
        }
    }
}

/// Output encoding selected for one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encode {
    /// Plain branch diagram (default)
    #[default]
    Text,
    Json,
    Yaml,
    Toml,
}

/// All settings for one conversion. Built with `Config::new()` plus the
/// `with_*` methods; defaults match `tree(1)`-style unicode output with tab
/// indentation.
#[derive(Debug, Clone)]
pub struct Config {
    pub indent: Indent,
    pub last_node: BranchFormat,
    pub intermedial_node: BranchFormat,
    pub encode: Encode,
    pub dry_run: bool,
    /// Extension or exact-name markers: matching labels are created as files
    /// (not directories) by mkdir, and colored as files in dry-run output.
    pub file_markers: Vec<String>,
    /// Pipelined execution for large forests.
    pub massive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: Indent::Tab,
            last_node: BranchFormat::new("└──", "    "),
            intermedial_node: BranchFormat::new("├──", "│   "),
            encode: Encode::Text,
            dry_run: false,
            file_markers: Vec::new(),
            massive: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_encode(mut self, encode: Encode) -> Self {
        self.encode = encode;
        self
    }

    pub fn with_last_node_format(
        mut self,
        directly: impl Into<String>,
        indirectly: impl Into<String>,
    ) -> Self {
        self.last_node = BranchFormat::new(directly, indirectly);
        self
    }

    pub fn with_intermedial_node_format(
        mut self,
        directly: impl Into<String>,
        indirectly: impl Into<String>,
    ) -> Self {
        self.intermedial_node = BranchFormat::new(directly, indirectly);
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_file_markers(mut self, markers: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.file_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_massive(mut self, massive: bool) -> Self {
        self.massive = massive;
        self
    }
}

/// True when `label` should be materialized as a file rather than a directory.
///
/// A marker matches on exact name (`Makefile`) or on extension (`md` or `.md`
/// match `README.md`).
pub(crate) fn is_file_label(label: &str, markers: &[String]) -> bool {
    markers.iter().any(|m| {
        if label == m {
            return true;
        }
        let ext = m.trim_start_matches('.');
        !ext.is_empty() && label.len() > ext.len() + 1 && label.ends_with(&format!(".{ext}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_default_config_then_matches_tree_style_glyphs() {
        let cfg = Config::default();
        assert_eq!(cfg.last_node.directly, "└──");
        assert_eq!(cfg.last_node.indirectly, "    ");
        assert_eq!(cfg.intermedial_node.directly, "├──");
        assert_eq!(cfg.intermedial_node.indirectly, "│   ");
        assert_eq!(cfg.indent, Indent::Tab);
        assert_eq!(cfg.encode, Encode::Text);
        assert!(!cfg.dry_run);
        assert!(!cfg.massive);
    }

    #[test]
    fn given_extension_marker_when_matching_then_detects_files() {
        let markers = vec!["md".to_string(), "Makefile".to_string()];
        assert!(is_file_label("README.md", &markers));
        assert!(is_file_label("Makefile", &markers));
        assert!(!is_file_label("src", &markers));
        assert!(!is_file_label(".md", &markers));
    }

    #[test]
    fn given_dotted_marker_when_matching_then_detects_files() {
        let markers = vec![".rs".to_string()];
        assert!(is_file_label("main.rs", &markers));
        assert!(!is_file_label("rs", &markers));
    }
}
