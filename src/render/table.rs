//! Page assembly shared by the renderers.
//!
//! A page is a title line, a properties table and one table per method and
//! handler. The renderers differ only in the [`Styles`] they pass in.

use super::{badge, html_escape, PageHeader, RenderedPage};
use crate::links::TypeLinks;
use crate::model::*;
use anyhow::{Context, Result};
use std::fmt::Write;

/// Attribute text spliced into each styled tag, leading space included.
pub struct Styles {
    pub table: &'static str,
    pub header_cell: &'static str,
    pub body_cell: &'static str,
    pub param_cell: &'static str,
    pub return_type: &'static str,
    pub function_name: &'static str,
    pub param_type: &'static str,
    pub param_name: &'static str,
    pub param_desc: &'static str,
}

/// Block renderer for one method or handler.
type BlockFn<T> = fn(&T, &TypeLinks, &Styles) -> Result<String>;

/// Render a whole page. `preamble` goes first (e.g. a `<style>` block).
///
/// A method or handler whose block fails to render is left out and its
/// error returned in [`RenderedPage::skipped`]; everything else still renders.
pub fn render_page(
    doc: &Documentation,
    header: &PageHeader,
    links: &TypeLinks,
    styles: &Styles,
    preamble: Option<&str>,
) -> RenderedPage {
    assemble(doc, header, links, styles, preamble, method_block, handler_block)
}

fn assemble(
    doc: &Documentation,
    header: &PageHeader,
    links: &TypeLinks,
    styles: &Styles,
    preamble: Option<&str>,
    method: BlockFn<MethodDoc>,
    handler: BlockFn<HandlerDoc>,
) -> RenderedPage {
    let mut sections: Vec<String> = Vec::new();
    let mut skipped = Vec::new();

    if let Some(preamble) = preamble {
        sections.push(preamble.trim_end().to_string());
    }
    sections.push(title_line(header));

    if !doc.properties.is_empty() {
        sections.push("## Properties".to_string());
        sections.push(property_table(&doc.properties, links, styles));
    }

    if !doc.methods.is_empty() {
        sections.push("## Methods".to_string());
        for m in &doc.methods {
            match method(m, links, styles)
                .with_context(|| format!("failed to render method {}", m.name))
            {
                Ok(block) => sections.push(block),
                Err(e) => skipped.push(e),
            }
        }
    }

    if !doc.handlers.is_empty() {
        sections.push("## Handlers".to_string());
        for h in &doc.handlers {
            match handler(h, links, styles)
                .with_context(|| format!("failed to render handler {}", h.name))
            {
                Ok(block) => sections.push(block),
                Err(e) => skipped.push(e),
            }
        }
    }

    let mut text = sections.join("\n\n");
    text.push('\n');
    RenderedPage { text, skipped }
}

fn title_line(header: &PageHeader) -> String {
    match header.source_link {
        Some(ref link) => format!("# [{}]({})", header.title, link),
        None => format!("# {}", header.title),
    }
}

/// All properties in one table: name + badge, type, description + default.
pub fn property_table(properties: &[PropertyDoc], links: &TypeLinks, styles: &Styles) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<table{t}><thead><tr><th{h}>Property</th><th{h}>Type</th><th{h}>Description</th></tr></thead><tbody>",
        t = styles.table,
        h = styles.header_cell,
    ));

    for p in properties {
        let mut desc = html_escape(&p.description);
        if !p.default_value.is_empty() {
            if !desc.is_empty() {
                desc.push(' ');
            }
            desc.push_str(&format!("(default: <code>{}</code>)", html_escape(&p.default_value)));
        }
        out.push_str(&format!(
            "<tr><td{c}><strong>{}</strong>{}</td><td{c}><code>{}</code></td><td{c}>{}</td></tr>",
            html_escape(&p.name),
            badge::exec_space(&p.exec_space).unwrap_or_default(),
            links.render(&p.ty, styles.param_type),
            desc,
            c = styles.body_cell,
        ));
    }

    out.push_str("</tbody></table>");
    out
}

/// One table for a method: signature header, description and parameter rows.
pub fn method_block(m: &MethodDoc, links: &TypeLinks, styles: &Styles) -> Result<String> {
    let mut out = String::new();
    let badges = badge::exec_space(&m.exec_space).unwrap_or_default();

    write!(
        out,
        "<table{}><thead><tr><th{}>{}{}</th></tr></thead><tbody>",
        styles.table,
        styles.header_cell,
        signature(&m.return_type, &m.name, &m.params, links, styles),
        badges,
    )?;
    write_description_row(&mut out, &m.description, styles)?;
    write_param_rows(&mut out, &m.params, styles)?;
    out.push_str("</tbody></table>");
    Ok(out)
}

/// Like [`method_block`], plus the event-sender badge and instance row.
pub fn handler_block(h: &HandlerDoc, links: &TypeLinks, styles: &Styles) -> Result<String> {
    let mut out = String::new();
    let mut badges = badge::exec_space(&h.exec_space).unwrap_or_default().to_string();
    if let Some(ref sender) = h.event_sender {
        badges.push_str(badge::event_sender(&sender.kind).unwrap_or_default());
    }

    write!(
        out,
        "<table{}><thead><tr><th{}>{}{}</th></tr></thead><tbody>",
        styles.table,
        styles.header_cell,
        signature(&h.return_type, &h.name, &h.params, links, styles),
        badges,
    )?;
    write_description_row(&mut out, &h.description, styles)?;

    if let Some(sender) = h.event_sender.as_ref() {
        if let Some(value) = sender.display_value() {
            write!(
                out,
                "<tr><td{}><strong>{}:</strong> {}</td></tr>",
                styles.param_cell,
                html_escape(sender.kind.as_str()),
                html_escape(value),
            )?;
        }
    }

    write_param_rows(&mut out, &h.params, styles)?;
    out.push_str("</tbody></table>");
    Ok(out)
}

/// `<ret> <name>(<type> <param>, ...)` with linked types.
fn signature(
    return_type: &str,
    name: &str,
    params: &[ParamInfo],
    links: &TypeLinks,
    styles: &Styles,
) -> String {
    let ret = if return_type.is_empty() {
        String::new()
    } else {
        format!("{} ", links.render(return_type, styles.return_type))
    };

    let params = params
        .iter()
        .map(|p| {
            if p.ty.is_empty() {
                html_escape(&p.name)
            } else {
                format!("{} {}", links.render(&p.ty, styles.param_type), html_escape(&p.name))
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "{}<span{}>{}</span>({})",
        ret,
        styles.function_name,
        html_escape(name),
        params
    )
}

fn write_description_row(out: &mut String, description: &str, styles: &Styles) -> std::fmt::Result {
    if description.is_empty() {
        return Ok(());
    }
    write!(
        out,
        "<tr><td{}>{}</td></tr>",
        styles.body_cell,
        html_escape(description)
    )
}

/// One row per parameter that has a description; the rest get none.
fn write_param_rows(out: &mut String, params: &[ParamInfo], styles: &Styles) -> std::fmt::Result {
    for p in params.iter().filter(|p| !p.description.is_empty()) {
        write!(
            out,
            "<tr><td{}><code{}>{}</code><span{}> &nbsp;|&nbsp; {}</span></td></tr>",
            styles.param_cell,
            styles.param_name,
            html_escape(&p.name),
            styles.param_desc,
            html_escape(&p.description),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::markdown::CLASS_STYLES as S;

    fn handler(kind: SenderKind, value: Option<&str>) -> HandlerDoc {
        HandlerDoc {
            name: "OnEvent".to_string(),
            description: "Handles it".to_string(),
            exec_space: ExecSpace::ServerOnly,
            event_sender: Some(EventSender {
                kind,
                value: value.map(str::to_string),
            }),
            ..Default::default()
        }
    }

    fn count_rows(html: &str) -> usize {
        html.matches("<tr>").count() + html.matches("<tr ").count()
    }

    #[test]
    fn logic_sender_adds_one_row() {
        let html = handler_block(&handler(SenderKind::Logic, Some("GameLogic")), &TypeLinks::new(), &S).unwrap();
        assert_eq!(html.matches("GameLogic").count(), 1);
        assert!(html.contains("<strong>Logic:</strong> GameLogic"));
        assert!(html.contains("badge/Logic-"));
        assert!(html.contains("badge/ServerOnly-"));
        // header + description + sender
        assert_eq!(count_rows(&html), 3);
    }

    #[test]
    fn service_sender_row() {
        let html = handler_block(&handler(SenderKind::Service, Some("UserService")), &TypeLinks::new(), &S).unwrap();
        assert!(html.contains("<strong>Service:</strong> UserService"));
    }

    #[test]
    fn entity_sender_value_ignored() {
        let html = handler_block(&handler(SenderKind::Entity, Some("Ignored")), &TypeLinks::new(), &S).unwrap();
        assert!(!html.contains("Ignored"));
        assert!(html.contains("badge/Entity-"));
        assert_eq!(count_rows(&html), 2);
    }

    #[test]
    fn logic_sender_without_value_has_no_row() {
        let html = handler_block(&handler(SenderKind::Logic, None), &TypeLinks::new(), &S).unwrap();
        assert!(!html.contains("Logic:</strong>"));
        assert_eq!(count_rows(&html), 2);
    }

    #[test]
    fn handler_without_sender_has_no_sender_badge() {
        let h = HandlerDoc {
            name: "OnSimpleEvent".to_string(),
            exec_space: ExecSpace::ServerOnly,
            ..Default::default()
        };
        let html = handler_block(&h, &TypeLinks::new(), &S).unwrap();
        for kind in ["Entity", "Model", "Logic", "Service", "LocalPlayer", "Self"] {
            assert!(!html.contains(&format!("badge/{kind}-")), "{kind}");
        }
        assert!(html.contains("badge/ServerOnly-"));
    }

    #[test]
    fn handler_return_type_optional() {
        let h = HandlerDoc {
            name: "OnTick".to_string(),
            ..Default::default()
        };
        let html = handler_block(&h, &TypeLinks::new(), &S).unwrap();
        assert!(!html.contains("return-type"));
        assert!(html.contains("<span class=\"function-name\">OnTick</span>()"));
    }

    #[test]
    fn method_params_rows_only_with_description() {
        let m = MethodDoc {
            name: "FetchServerState".to_string(),
            return_type: "void".to_string(),
            exec_space: ExecSpace::Server,
            params: vec![
                ParamInfo {
                    name: "uid".to_string(),
                    ty: "string".to_string(),
                    description: "The user id".to_string(),
                },
                ParamInfo {
                    name: "force".to_string(),
                    ty: "boolean".to_string(),
                    description: String::new(),
                },
            ],
            ..Default::default()
        };
        let html = method_block(&m, &TypeLinks::new(), &S).unwrap();
        assert!(html.contains(
            "<span class=\"return-type\">void</span> <span class=\"function-name\">FetchServerState</span>(<span class=\"param-type\">string</span> uid, <span class=\"param-type\">boolean</span> force)"
        ));
        assert!(html.contains("badge/Server-ffa500"));
        assert!(html.contains("<code class=\"param-name\">uid</code>"));
        assert!(!html.contains("<code class=\"param-name\">force</code>"));
        // no description: header + one param row
        assert_eq!(count_rows(&html), 2);
    }

    #[test]
    fn method_types_cross_linked() {
        let mut links = TypeLinks::new();
        links.insert("Channel", "../struct/Channel.md");
        let m = MethodDoc {
            name: "Find".to_string(),
            return_type: "Channel".to_string(),
            params: vec![ParamInfo {
                name: "all".to_string(),
                ty: "table<string, Channel>".to_string(),
                description: String::new(),
            }],
            ..Default::default()
        };
        let html = method_block(&m, &links, &S).unwrap();
        assert!(html.contains("<a href=\"../struct/Channel.md\" class=\"return-type\">Channel</a>"));
        assert!(html.contains(
            "<a href=\"../struct/Channel.md\" class=\"param-type\">table&lt;string, Channel&gt;</a> all"
        ));
    }

    #[test]
    fn property_rows() {
        let props = vec![
            PropertyDoc {
                name: "State_Initializing".to_string(),
                ty: "string".to_string(),
                description: "Loading".to_string(),
                default_value: "Initializing".to_string(),
                exec_space: ExecSpace::All,
            },
            PropertyDoc {
                name: "Count".to_string(),
                ty: "number".to_string(),
                exec_space: ExecSpace::ClientOnly,
                ..Default::default()
            },
        ];
        let html = property_table(&props, &TypeLinks::new(), &S);
        assert!(html.contains(
            "<td><strong>State_Initializing</strong></td><td><code><span class=\"param-type\">string</span></code></td><td>Loading (default: <code>Initializing</code>)</td>"
        ));
        assert!(html.contains("<strong>Count</strong> <img"));
        assert!(html.contains("<td></td></tr>"));
        assert_eq!(html.matches("<tr>").count(), 3);
    }

    #[test]
    fn page_sections_only_when_present() {
        let doc = Documentation {
            methods: vec![MethodDoc {
                name: "Run".to_string(),
                return_type: "void".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let header = PageHeader {
            title: "Runner".to_string(),
            source_link: Some("https://example.com/Runner.mlua".to_string()),
        };
        let page = render_page(&doc, &header, &TypeLinks::new(), &S, None);
        assert!(page.skipped.is_empty());
        let page = page.text;
        assert!(page.starts_with("# [Runner](https://example.com/Runner.mlua)\n\n## Methods\n\n<table"));
        assert!(!page.contains("## Properties"));
        assert!(!page.contains("## Handlers"));
        assert!(page.ends_with("</table>\n"));
    }

    fn method_or_fail(m: &MethodDoc, links: &TypeLinks, styles: &Styles) -> Result<String> {
        if m.name == "Broken" {
            anyhow::bail!("template error");
        }
        method_block(m, links, styles)
    }

    fn handler_always_fails(_: &HandlerDoc, _: &TypeLinks, _: &Styles) -> Result<String> {
        anyhow::bail!("template error")
    }

    #[test]
    fn failed_blocks_skipped_and_returned() {
        let method = |name: &str| MethodDoc {
            name: name.to_string(),
            return_type: "void".to_string(),
            ..Default::default()
        };
        let doc = Documentation {
            methods: vec![method("Before"), method("Broken"), method("After")],
            handlers: vec![HandlerDoc {
                name: "OnTouch".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let header = PageHeader {
            title: "Mixed".to_string(),
            source_link: None,
        };

        let page = assemble(
            &doc,
            &header,
            &TypeLinks::new(),
            &S,
            None,
            method_or_fail,
            handler_always_fails,
        );

        assert!(page.text.contains(">Before</span>"));
        assert!(page.text.contains(">After</span>"));
        assert!(!page.text.contains("Broken"));
        assert!(!page.text.contains("OnTouch"));
        assert!(page.text.contains("## Handlers"));

        let messages: Vec<String> = page.skipped.iter().map(|e| format!("{:#}", e)).collect();
        assert_eq!(
            messages,
            vec![
                "failed to render method Broken: template error".to_string(),
                "failed to render handler OnTouch: template error".to_string(),
            ]
        );
    }
}
