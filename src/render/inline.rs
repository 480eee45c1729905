//! Markdown renderer with inline `style=` attributes, for hosts that strip
//! `<style>` blocks (GitHub).

use super::table::{render_page, Styles};
use super::{PageHeader, RenderedPage, Renderer};
use crate::links::TypeLinks;
use crate::model::Documentation;

pub struct InlineRenderer;

const INLINE_STYLES: Styles = Styles {
    table: " style=\"width: 100%; border-collapse: collapse; border: 1px solid #ccc; margin-bottom: 16px;\"",
    header_cell: " style=\"background-color: #f0f0f0; padding: 10px 5px; text-align: left; vertical-align: top;\"",
    body_cell: " style=\"background-color: #fff; padding: 10px 5px; text-align: left; vertical-align: top;\"",
    param_cell: " style=\"background-color: #fafafa; border-top: 1px solid #eee; padding: 10px 5px 10px 15px; text-align: left; vertical-align: top;\"",
    return_type: " style=\"color: #3167ad;\"",
    function_name: " style=\"font-weight: bold;\"",
    param_type: " style=\"color: #3167ad;\"",
    param_name: " style=\"background-color: #e1e4e8; padding: 2px 5px; border-radius: 4px; font-family: monospace;\"",
    param_desc: " style=\"color: #57606a;\"",
};

impl Renderer for InlineRenderer {
    fn render(&self, doc: &Documentation, header: &PageHeader, links: &TypeLinks) -> RenderedPage {
        render_page(doc, header, links, &INLINE_STYLES, None)
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}
