//! Line classifier — pairs each declaration line with the comment block above it.
//!
//! The scanner has two states: collecting comment lines (pending buffer empty
//! or growing) and, once a declaration line arrives, emitting the pair and
//! returning to an empty buffer. Noise lines never touch the buffer.

use crate::model::DocType;
use regex::Regex;
use std::sync::LazyLock;

/// Doc-comment prefix.
pub const DOC_PREFIX: &str = "---@";

// -- Regex patterns -----------------------------------------------------------

static RE_TYPE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@(Logic|Component|Event|Struct|State|BTNode)\s*$").unwrap()
});

// Annotation calls that may sit in front of a declaration on the same line
static RE_LEADING_ANNOTATIONS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:@\w+(?:\([^)]*\))?\s*)+").unwrap());

static RE_SCOPE_OR_SENDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^@(?:ExecSpace|EventSender)\(").unwrap());

static RE_PROPERTY_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:readonly\s+)?property\b").unwrap());

static RE_METHOD_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^method\b").unwrap());

static RE_HANDLER_START: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^handler\b").unwrap());

// -- Classification -----------------------------------------------------------

/// Declaration kinds, in detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    Property,
    Method,
    Handler,
}

impl DeclKind {
    /// Detect the kind from the leading keyword; first match wins.
    fn detect(body: &str) -> Option<Self> {
        if RE_PROPERTY_START.is_match(body) {
            Some(Self::Property)
        } else if RE_METHOD_START.is_match(body) {
            Some(Self::Method)
        } else if RE_HANDLER_START.is_match(body) {
            Some(Self::Handler)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    TypeMarker(DocType),
    Declaration(DeclKind),
    Noise,
}

/// Classify one trimmed source line.
///
/// Order matters: doc comments first, then the file type marker, then
/// declarations (possibly prefixed by inline annotations), then bare
/// scope/sender annotations, which count as comment lines.
pub fn classify(line: &str) -> LineKind {
    if line.starts_with(DOC_PREFIX) {
        return LineKind::Comment;
    }
    if let Some(caps) = RE_TYPE_MARKER.captures(line) {
        if let Some(doc_type) = DocType::from_keyword(&caps[1]) {
            return LineKind::TypeMarker(doc_type);
        }
    }
    if let Some(kind) = DeclKind::detect(declaration_body(line)) {
        return LineKind::Declaration(kind);
    }
    if RE_SCOPE_OR_SENDER.is_match(line) {
        return LineKind::Comment;
    }
    LineKind::Noise
}

/// The declaration text with any leading `@Annotation(...)` calls removed.
pub fn declaration_body(line: &str) -> &str {
    match RE_LEADING_ANNOTATIONS.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

// -- Scanner state ------------------------------------------------------------

/// A declaration line and the comment block collected above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedDecl {
    pub kind: DeclKind,
    /// Pending comment lines, trimmed and joined with `\n`.
    pub comments: String,
    /// The trimmed declaration line, inline annotations included.
    pub line: String,
}

#[derive(Debug, Default)]
pub struct Scan {
    pub doc_type: DocType,
    pub decls: Vec<ScannedDecl>,
}

#[derive(Default)]
struct ScannerState {
    doc_type: Option<DocType>,
    pending: Vec<String>,
    decls: Vec<ScannedDecl>,
}

impl ScannerState {
    fn process_line(&mut self, raw: &str) {
        let line = raw.trim();
        match classify(line) {
            LineKind::Comment => self.pending.push(line.to_string()),
            LineKind::TypeMarker(doc_type) => {
                // Only the first marker before any declaration counts
                if self.doc_type.is_none() && self.decls.is_empty() {
                    self.doc_type = Some(doc_type);
                }
            }
            LineKind::Declaration(kind) => {
                let comments = std::mem::take(&mut self.pending).join("\n");
                self.decls.push(ScannedDecl {
                    kind,
                    comments,
                    line: line.to_string(),
                });
            }
            LineKind::Noise => {}
        }
    }
}

/// Normalize line endings to `\n`.
pub fn normalize_newlines(input: &str) -> String {
    input.replace("\r\n", "\n").replace('\r', "\n")
}

/// Scan a whole source text into declaration pairs plus the file's doc type.
pub fn scan(input: &str) -> Scan {
    let mut state = ScannerState::default();
    for line in normalize_newlines(input).split('\n') {
        state.process_line(line);
    }
    Scan {
        doc_type: state.doc_type.unwrap_or_default(),
        decls: state.decls,
    }
}
