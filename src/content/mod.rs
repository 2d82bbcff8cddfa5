// SPDX-License-Identifier: MPL-2.0
//! Paper content shown on the page.
//!
//! The content ships embedded in the binary (`assets/content/paper.toml`).
//! `site.content_path` may point at an external file with the same layout,
//! which replaces the embedded copy entirely.

use crate::error::{Error, Result};
use crate::ui::figure::FigureSpec;
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/content/"]
struct Asset;

const EMBEDDED_FILE: &str = "paper.toml";

/// Figures the page layout places by id.
pub const REQUIRED_FIGURES: [&str; 3] =
    ["architecture", "real_robot_examples", "real_robot_results"];

/// Tables the page layout places by id.
pub const REQUIRED_TABLES: [&str; 6] = ["table1", "table2", "table3", "table4", "table5", "table6"];

/// A titled paragraph (contribution, recipe point, finding, highlight).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Point {
    pub title: String,
    pub content: String,
}

/// A section with an introduction and a list of points.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Section {
    pub title: String,
    pub intro: String,
    #[serde(default)]
    pub points: Vec<Point>,
}

/// A result table, shipped as an image.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Table {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(flatten)]
    pub figure: FigureSpec,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaperContent {
    pub title: String,
    pub authors: String,
    pub tagline: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub code_url: String,
    /// Locator of the paper PDF under the served directory.
    pub document: String,
    pub footer: String,
    pub bibtex: String,
    #[serde(default)]
    pub contributions: Vec<Point>,
    #[serde(default)]
    pub highlights: Vec<Point>,
    pub recipe: Section,
    pub findings: Section,
    #[serde(default)]
    pub figures: BTreeMap<String, FigureSpec>,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl PaperContent {
    /// Parses and validates a content document.
    pub fn parse(source: &str) -> Result<Self> {
        let content: PaperContent =
            toml::from_str(source).map_err(|e| Error::Content(e.to_string()))?;
        content.validate()?;
        Ok(content)
    }

    /// The embedded content.
    pub fn embedded() -> Result<Self> {
        let file = Asset::get(EMBEDDED_FILE)
            .ok_or_else(|| Error::Content(format!("{EMBEDDED_FILE} is not embedded")))?;
        let source = std::str::from_utf8(file.data.as_ref())
            .map_err(|e| Error::Content(format!("{EMBEDDED_FILE}: {e}")))?;
        Self::parse(source)
    }

    /// Loads an external content file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| Error::Content(format!("{}: {}", path.display(), e)))?;
        Self::parse(&source)
    }

    /// Loads `override_path` when given, otherwise the embedded content.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        match override_path {
            Some(path) => Self::from_path(path),
            None => Self::embedded(),
        }
    }

    fn validate(&self) -> Result<()> {
        for id in REQUIRED_FIGURES {
            self.figure(id)?;
        }
        for id in REQUIRED_TABLES {
            self.table(id)?;
        }
        Ok(())
    }

    pub fn figure(&self, id: &str) -> Result<&FigureSpec> {
        self.figures
            .get(id)
            .ok_or_else(|| Error::Content(format!("missing figure `{id}`")))
    }

    pub fn table(&self, id: &str) -> Result<&Table> {
        self.tables
            .iter()
            .find(|table| table.id == id)
            .ok_or_else(|| Error::Content(format!("missing table `{id}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_is_complete() {
        let content = PaperContent::embedded().expect("embedded content");
        assert!(content.title.starts_with("SimVLA"));
        assert_eq!(content.contributions.len(), 3);
        assert_eq!(content.recipe.points.len(), 4);
        assert_eq!(content.findings.points.len(), 3);
        assert!(content.bibtex.starts_with("@article{simvla2026,"));
        assert!(content.summary.contains("\n\n"));
    }

    #[test]
    fn architecture_figure_is_preloaded() {
        let content = PaperContent::embedded().expect("embedded content");
        let architecture = content.figure("architecture").expect("figure");
        assert!(architecture.priority);
        assert_eq!(architecture.source, "/paper/fig1.png");
        assert!(architecture.caption.is_some());
    }

    #[test]
    fn tables_carry_figure_fields() {
        let content = PaperContent::embedded().expect("embedded content");
        let table = content.table("table6").expect("table");
        assert_eq!(table.figure.source, "/paper/Table6.png");
        assert_eq!((table.figure.width, table.figure.height), (1400, 600));
        assert!(!table.figure.priority);
    }

    #[test]
    fn missing_table_is_a_content_error() {
        let stripped = include_str!("../../assets/content/paper.toml")
            .replace("id = \"table4\"", "id = \"table_four\"");
        let err = PaperContent::parse(&stripped).expect_err("missing table4");
        assert!(matches!(err, Error::Content(msg) if msg.contains("table4")));
    }

    #[test]
    fn malformed_document_is_a_content_error() {
        let err = PaperContent::parse("title = ").expect_err("bad toml");
        assert!(matches!(err, Error::Content(_)));
    }

    #[test]
    fn missing_override_file_is_a_content_error() {
        let err = PaperContent::load(Some(Path::new("/nonexistent/paper.toml")))
            .expect_err("missing file");
        assert!(matches!(err, Error::Content(_)));
    }
}
