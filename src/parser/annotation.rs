//! Comment-block annotation extraction.

use crate::model::{EventSender, ParamInfo, SenderKind};
use regex::Regex;
use std::sync::LazyLock;

static RE_DESCRIPTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"---@description\s*"([^"]*)""#).unwrap());

static RE_EXEC_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"@ExecSpace\(\s*"([^"]*)"\s*\)"#).unwrap());

static RE_EVENT_SENDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"@EventSender\(\s*"([^"]*)"\s*(?:,\s*"([^"]*)"\s*)?\)"#).unwrap()
});

static RE_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^---@param[ \t]+([\w.|]+(?:<[^>\n]*>)?)[ \t]+(\w+)[ \t]*(.*)$").unwrap()
});

/// Everything the comment block says about one declaration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Annotations {
    pub description: String,
    /// Raw `@ExecSpace` argument, if any.
    pub exec_space: Option<String>,
    pub event_sender: Option<EventSender>,
    /// `---@param` entries in comment order.
    pub params: Vec<ParamInfo>,
}

impl Annotations {
    /// Look up a parameter description by name; the last annotation wins.
    pub fn param_description(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .rev()
            .find(|p| p.name == name)
            .map(|p| p.description.as_str())
    }
}

/// Extract annotations from a joined comment block.
pub fn extract(block: &str) -> Annotations {
    let description = RE_DESCRIPTION
        .captures(block)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();

    let params = RE_PARAM
        .captures_iter(block)
        .map(|caps| ParamInfo {
            ty: caps[1].to_string(),
            name: caps[2].to_string(),
            description: caps[3].trim().to_string(),
        })
        .collect();

    Annotations {
        description,
        exec_space: find_exec_space(block),
        event_sender: find_event_sender(block),
        params,
    }
}

/// First `@ExecSpace("...")` argument in `text`.
pub fn find_exec_space(text: &str) -> Option<String> {
    RE_EXEC_SPACE
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// First `@EventSender("kind"[, "value"])` in `text`.
pub fn find_event_sender(text: &str) -> Option<EventSender> {
    RE_EVENT_SENDER.captures(text).map(|caps| EventSender {
        kind: SenderKind::from_tag(&caps[1]),
        value: caps.get(2).map(|m| m.as_str().to_string()),
    })
}
