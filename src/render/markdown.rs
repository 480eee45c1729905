//! Markdown renderer with class-styled tables and an embedded stylesheet.

use super::table::{render_page, Styles};
use super::{PageHeader, RenderedPage, Renderer};
use crate::links::TypeLinks;
use crate::model::Documentation;

pub struct MarkdownRenderer;

pub const CLASS_STYLES: Styles = Styles {
    table: " class=\"doc-table\"",
    header_cell: "",
    body_cell: "",
    param_cell: " class=\"param-row\"",
    return_type: " class=\"return-type\"",
    function_name: " class=\"function-name\"",
    param_type: " class=\"param-type\"",
    param_name: " class=\"param-name\"",
    param_desc: " class=\"param-desc\"",
};

const STYLESHEET: &str = r#"<style>
.doc-table { width: 100%; border-collapse: collapse; border: 1px solid #ccc; margin-bottom: 16px; }
.doc-table th { background-color: #f0f0f0; padding: 10px 5px; text-align: left; vertical-align: top; }
.doc-table td { background-color: #fff; padding: 10px 5px; text-align: left; vertical-align: top; }
.doc-table td.param-row { background-color: #fafafa; border-top: 1px solid #eee; padding-left: 15px; }
.return-type { color: #3167ad; }
.function-name { font-weight: bold; }
.param-type { color: #3167ad; }
.param-name { background-color: #e1e4e8; padding: 2px 5px; border-radius: 4px; font-family: monospace; }
.param-desc { color: #57606a; }
</style>"#;

impl Renderer for MarkdownRenderer {
    fn render(&self, doc: &Documentation, header: &PageHeader, links: &TypeLinks) -> RenderedPage {
        render_page(doc, header, links, &CLASS_STYLES, Some(STYLESHEET))
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    #[test]
    fn page_starts_with_stylesheet() {
        let doc = parser::parse("---@description \"d\"\nproperty string A = \"x\"\n");
        let header = PageHeader {
            title: "Lobby".to_string(),
            source_link: None,
        };
        let page = MarkdownRenderer.render(&doc, &header, &TypeLinks::new()).text;
        assert!(page.starts_with("<style>\n"));
        assert!(page.contains("</style>\n\n# Lobby\n\n## Properties\n\n<table class=\"doc-table\">"));
    }
}
