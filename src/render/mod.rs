//! Renderer module — trait-based format dispatch.

pub mod badge;
pub mod inline;
pub mod markdown;
pub mod table;

use crate::links::TypeLinks;
use crate::model::Documentation;
use anyhow::{anyhow, Error, Result};

/// Page title line, optionally linked to the script source.
#[derive(Debug, Clone, Default)]
pub struct PageHeader {
    pub title: String,
    pub source_link: Option<String>,
}

/// A rendered page plus the blocks that failed and were left out.
#[derive(Debug)]
pub struct RenderedPage {
    pub text: String,
    pub skipped: Vec<Error>,
}

/// Trait for rendering a Documentation into a Markdown page.
pub trait Renderer {
    fn render(&self, doc: &Documentation, header: &PageHeader, links: &TypeLinks) -> RenderedPage;
    fn file_extension(&self) -> &str;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "inline" | "github" => Ok(Box::new(inline::InlineRenderer)),
        _ => Err(anyhow!(
            "unknown format: {}. Use markdown or inline",
            format
        )),
    }
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
