//! Parser module — annotated mLua source to [`Documentation`].

pub mod annotation;
pub mod declaration;
pub mod merge;
pub mod scanner;

use crate::model::{Documentation, ExecSpace, HandlerDoc, MethodDoc, PropertyDoc};
use anyhow::{Context, Result};
use declaration::Declaration;
use std::fs;
use std::path::Path;

/// Parse annotated source text. Never fails; unmatched lines are ignored.
pub fn parse(content: &str) -> Documentation {
    let scan = scanner::scan(content);
    let mut doc = Documentation {
        doc_type: scan.doc_type,
        ..Default::default()
    };

    for decl in &scan.decls {
        let Some(parsed) = declaration::parse_declaration(decl.kind, &decl.line) else {
            continue;
        };
        let ann = annotation::extract(&decl.comments);

        // Block annotation first, then one written inline on the declaration
        let exec_space = ann
            .exec_space
            .clone()
            .or_else(|| annotation::find_exec_space(&decl.line))
            .map(|tag| ExecSpace::from_tag(&tag))
            .unwrap_or_default();

        match parsed {
            Declaration::Property(sig) => doc.properties.push(PropertyDoc {
                name: sig.name,
                ty: sig.ty,
                description: ann.description,
                default_value: sig.default_value,
                exec_space,
            }),
            Declaration::Method(sig) => doc.methods.push(MethodDoc {
                params: merge::merge_params(&sig.params, &ann),
                name: sig.name,
                return_type: sig.return_type,
                description: ann.description,
                exec_space,
            }),
            Declaration::Handler(sig) => {
                let event_sender = ann
                    .event_sender
                    .clone()
                    .or_else(|| annotation::find_event_sender(&decl.line));
                doc.handlers.push(HandlerDoc {
                    params: merge::merge_params(&sig.params, &ann),
                    name: sig.name,
                    return_type: sig.return_type,
                    description: ann.description,
                    exec_space,
                    event_sender,
                });
            }
        }
    }

    doc
}

/// Read and parse one source file.
pub fn parse_file(path: &Path) -> Result<Documentation> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Ok(parse(&content))
}
