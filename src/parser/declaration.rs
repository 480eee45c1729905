//! Per-kind declaration grammar.

use super::scanner::{declaration_body, DeclKind};
use regex::Regex;
use std::sync::LazyLock;

// Type names may carry one level of generic arguments: `table<string, Channel>`
static RE_PROPERTY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:readonly\s+)?property\s+([\w.]+(?:<.*>)?)\s+(\w+)\s*=\s*(\S.*?)\s*$").unwrap()
});

static RE_METHOD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^method\s+([\w.]+(?:<.*>)?)\s+(\w+)\s*\(([^)]*)\)").unwrap()
});

static RE_HANDLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^handler\s+(?:([\w.]+(?:<.*>)?)\s+)?(\w+)\s*\(([^)]*)\)").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySig {
    pub ty: String,
    pub name: String,
    pub default_value: String,
}

/// Signature shared by methods and handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSig {
    /// Empty for handlers declared without one.
    pub return_type: String,
    pub name: String,
    /// `(type, name)` pairs in declaration order.
    pub params: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declaration {
    Property(PropertySig),
    Method(FunctionSig),
    Handler(FunctionSig),
}

/// Match a declaration line against its kind's grammar.
///
/// Returns `None` for lines that start with a declaration keyword but do not
/// fit the grammar; callers drop those silently.
pub fn parse_declaration(kind: DeclKind, line: &str) -> Option<Declaration> {
    let body = declaration_body(line.trim());
    match kind {
        DeclKind::Property => {
            let caps = RE_PROPERTY.captures(body)?;
            Some(Declaration::Property(PropertySig {
                ty: caps[1].to_string(),
                name: caps[2].to_string(),
                default_value: default_literal(&caps[3]),
            }))
        }
        DeclKind::Method => {
            let caps = RE_METHOD.captures(body)?;
            Some(Declaration::Method(FunctionSig {
                return_type: caps[1].to_string(),
                name: caps[2].to_string(),
                params: split_params(&caps[3]),
            }))
        }
        DeclKind::Handler => {
            let caps = RE_HANDLER.captures(body)?;
            Some(Declaration::Handler(FunctionSig {
                return_type: caps.get(1).map(|m| m.as_str().to_string()).unwrap_or_default(),
                name: caps[2].to_string(),
                params: split_params(&caps[3]),
            }))
        }
    }
}

/// Strip quotes from a quoted default, or a trailing `--` comment from a bare one.
fn default_literal(raw: &str) -> String {
    for quote in ['"', '\''] {
        if let Some(inner) = raw.strip_prefix(quote) {
            if let Some(end) = inner.find(quote) {
                return inner[..end].to_string();
            }
        }
    }
    match raw.find("--") {
        Some(pos) => raw[..pos].trim_end().to_string(),
        None => raw.to_string(),
    }
}

/// Split a raw parameter list into `(type, name)` pairs.
///
/// Commas inside `<...>` belong to the type. A lone token is taken as the
/// name with an empty type.
pub fn split_params(raw: &str) -> Vec<(String, String)> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in raw.char_indices() {
        match c {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                pieces.push(&raw[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    pieces.push(&raw[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| match p.rsplit_once(char::is_whitespace) {
            Some((ty, name)) => (ty.trim().to_string(), name.to_string()),
            None => (String::new(), p.to_string()),
        })
        .collect()
}
