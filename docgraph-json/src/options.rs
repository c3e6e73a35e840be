//! Render configuration.
//!
//! Options can be built in code or loaded from YAML:
//!
//! ```yaml
//! pretty: true
//! includeText: true
//! encoding: UTF-8
//! constituencyTreePrinter: penn
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::error::{Error, Result};
use crate::model::ParseTree;

/// Turns a constituency tree into text.
pub trait TreePrinter: fmt::Debug + Send + Sync {
    fn print(&self, tree: &ParseTree, out: &mut String);
}

/// Single-line bracketed form: `(ROOT (S (NP (DT The) (NN dog)) (VP (VBZ barks))))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OneLinePrinter;

impl TreePrinter for OneLinePrinter {
    fn print(&self, tree: &ParseTree, out: &mut String) {
        if tree.is_leaf() {
            out.push_str(&tree.label);
            return;
        }
        out.push('(');
        out.push_str(&tree.label);
        for child in &tree.children {
            out.push(' ');
            self.print(child, out);
        }
        out.push(')');
    }
}

/// Multi-line Penn Treebank layout, two spaces per level.
///
/// A node whose children are all preterminals or leaves stays on one line;
/// otherwise every child starts a new line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PennPrinter;

impl PennPrinter {
    fn print_at(&self, tree: &ParseTree, level: usize, out: &mut String) {
        if tree.is_leaf() {
            out.push_str(&tree.label);
            return;
        }
        out.push('(');
        out.push_str(&tree.label);

        let flat = tree.children.iter().all(|c| c.is_leaf() || c.is_preterminal());
        for child in &tree.children {
            if flat {
                out.push(' ');
            } else {
                out.push('\n');
                for _ in 0..=level {
                    out.push_str("  ");
                }
            }
            self.print_at(child, level + 1, out);
        }
        out.push(')');
    }
}

impl TreePrinter for PennPrinter {
    fn print(&self, tree: &ParseTree, out: &mut String) {
        self.print_at(tree, 0, out);
    }
}

/// Options for one render pass.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Indented multi-line output instead of a single line.
    pub pretty: bool,
    /// Emit the document's raw text.
    pub include_text: bool,
    /// Output encoding name. Only UTF-8 is supported.
    pub encoding: String,
    #[serde(rename = "constituencyTreePrinter", deserialize_with = "printer_by_name")]
    pub tree_printer: Arc<dyn TreePrinter>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            include_text: false,
            encoding: "UTF-8".to_string(),
            tree_printer: Arc::new(OneLinePrinter),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_include_text(mut self, include_text: bool) -> Self {
        self.include_text = include_text;
        self
    }

    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = encoding.into();
        self
    }

    pub fn with_tree_printer(mut self, printer: impl TreePrinter + 'static) -> Self {
        self.tree_printer = Arc::new(printer);
        self
    }

    /// Load options from a YAML mapping. Missing keys keep their defaults.
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).map_err(|e| Error::InvalidOptions(e.to_string()))
    }

    /// Fail unless the configured encoding is UTF-8.
    pub fn check_encoding(&self) -> Result<()> {
        let normalized: String = self
            .encoding
            .chars()
            .filter(|c| !matches!(c, '-' | '_'))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if normalized == "utf8" {
            Ok(())
        } else {
            Err(Error::UnsupportedEncoding(self.encoding.clone()))
        }
    }

    /// Print `tree` with the configured printer.
    pub fn print_tree(&self, tree: &ParseTree) -> String {
        let mut out = String::new();
        self.tree_printer.print(tree, &mut out);
        out
    }
}

fn printer_by_name<'de, D>(deserializer: D) -> std::result::Result<Arc<dyn TreePrinter>, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    match name.to_ascii_lowercase().as_str() {
        "oneline" => Ok(Arc::new(OneLinePrinter)),
        "penn" => Ok(Arc::new(PennPrinter)),
        other => Err(serde::de::Error::custom(format!(
            "unknown tree printer `{}`, expected `oneline` or `penn`",
            other
        ))),
    }
}
