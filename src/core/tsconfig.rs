//! tsconfig.json document handling.
//!
//! The document is opaque to this tool apart from its `references` list:
//! every other field must survive a rewrite untouched, in its original
//! position. The parsed form is therefore a raw order-preserving JSON
//! object rather than a typed schema.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// A single project reference entry, serialized as `{"path": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Relative path from the owning package to the referenced one
    pub path: String,
}

/// A parsed tsconfig.json, fields in document order.
#[derive(Debug, Clone)]
pub struct TsConfig {
    doc: Map<String, Value>,
}

impl TsConfig {
    /// Load a tsconfig from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read tsconfig: {}", path.display()))?;

        Self::parse(&content, path)
    }

    /// Parse tsconfig content.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let doc: Value = serde_json::from_str(content)
            .with_context(|| format!("failed to parse tsconfig: {}", path.display()))?;

        match doc {
            Value::Object(doc) => Ok(TsConfig { doc }),
            _ => bail!("expected a JSON object in {}", path.display()),
        }
    }

    /// Replace the `references` list wholesale.
    ///
    /// An existing key keeps its position in the document; a missing one
    /// is appended at the end.
    pub fn set_references(&mut self, references: Vec<Reference>) {
        let entries = references
            .into_iter()
            .map(|r| {
                let mut entry = Map::new();
                entry.insert("path".to_string(), Value::String(r.path));
                Value::Object(entry)
            })
            .collect();

        self.doc
            .insert("references".to_string(), Value::Array(entries));
    }

    /// The current `references` value, if any.
    pub fn references(&self) -> Option<&Value> {
        self.doc.get("references")
    }

    /// Render the document with 4-space indentation.
    ///
    /// The output is deterministic, so an unchanged workspace re-renders
    /// byte-identically.
    pub fn render(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.doc
            .serialize(&mut ser)
            .context("failed to serialize tsconfig")?;

        Ok(String::from_utf8(buf).expect("serde_json output is UTF-8"))
    }
}
