//! Type cross-links: documented type names to relative page paths.
//!
//! The table is filled by the caller before rendering and only read after.

use crate::model::DocType;
use crate::render::html_escape;
use std::collections::HashMap;

/// Mapping from documented type name to the relative path of its page.
#[derive(Debug, Default, Clone)]
pub struct TypeLinks {
    links: HashMap<String, String>,
}

impl TypeLinks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, link: impl Into<String>) {
        self.links.insert(name.into(), link.into());
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Link target for a type as written in source, after unwrapping generics.
    pub fn lookup(&self, ty: &str) -> Option<&str> {
        self.links.get(lookup_key(ty)).map(String::as_str)
    }

    /// Render a type as an `<a>` when documented, else a `<span>`.
    ///
    /// `attrs` is spliced into the opening tag (e.g. ` class="param-type"`).
    /// The visible label is always the original type text.
    pub fn render(&self, ty: &str, attrs: &str) -> String {
        let label = html_escape(ty);
        match self.lookup(ty) {
            Some(link) => format!("<a href=\"{}\"{}>{}</a>", html_escape(link), attrs, label),
            None => format!("<span{}>{}</span>", attrs, label),
        }
    }
}

/// Reduce a type to the name used as table key.
///
/// A two-argument container keys on its value argument:
/// `table<string, Channel>` → `Channel`. Anything else keys on the whole
/// text minus one trailing `>`, so `array<Item>` → `array<Item`.
pub fn lookup_key(ty: &str) -> &str {
    let inner = match ty.split_once(',') {
        Some((_, value)) => value.trim(),
        None => ty.trim(),
    };
    inner.strip_suffix('>').unwrap_or(inner).trim_end()
}

/// Relative link to a page, valid from any page one level below the output root.
pub fn relative_link(doc_type: DocType, stem: &str, ext: &str) -> String {
    format!("../{}/{}.{}", doc_type.dir_name(), stem, ext)
}
