//! Data model for parsed documentation — format-agnostic.

/// Complete parsed document from a single source file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Documentation {
    /// Set once from the top-of-file `@<Kind>` marker.
    pub doc_type: DocType,
    pub properties: Vec<PropertyDoc>,
    pub methods: Vec<MethodDoc>,
    pub handlers: Vec<HandlerDoc>,
}

/// Script kind declared by the top-of-file marker.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocType {
    Logic,
    Component,
    Event,
    Struct,
    State,
    BTNode,
    /// No marker found.
    #[default]
    Other,
}

impl DocType {
    /// Parse the keyword following `@` in a type marker.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "Logic" => Some(Self::Logic),
            "Component" => Some(Self::Component),
            "Event" => Some(Self::Event),
            "Struct" => Some(Self::Struct),
            "State" => Some(Self::State),
            "BTNode" => Some(Self::BTNode),
            _ => None,
        }
    }

    /// Output sub-directory for pages of this kind.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Logic => "logic",
            Self::Component => "component",
            Self::Event => "event",
            Self::Struct => "struct",
            Self::State => "state",
            Self::BTNode => "btnode",
            Self::Other => "etc",
        }
    }

    /// Whether pages of this kind are targets for type cross-links.
    pub fn is_linkable(self) -> bool {
        matches!(self, Self::Event | Self::Struct)
    }
}

/// Where a declaration is permitted to run (`@ExecSpace`).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ExecSpace {
    /// Unrestricted; the default when no annotation is present.
    #[default]
    All,
    Server,
    Client,
    ServerOnly,
    ClientOnly,
    /// Unrecognized scope text, kept verbatim.
    Other(String),
}

impl ExecSpace {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "All" => Self::All,
            "Server" => Self::Server,
            "Client" => Self::Client,
            "ServerOnly" => Self::ServerOnly,
            "ClientOnly" => Self::ClientOnly,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Category of entity that can emit a handled event (`@EventSender`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SenderKind {
    Entity,
    LocalPlayer,
    SelfEntity,
    Logic,
    Service,
    Model,
    /// Unrecognized sender text, kept verbatim.
    Other(String),
}

impl SenderKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "Entity" => Self::Entity,
            "LocalPlayer" => Self::LocalPlayer,
            "Self" => Self::SelfEntity,
            "Logic" => Self::Logic,
            "Service" => Self::Service,
            "Model" => Self::Model,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Entity => "Entity",
            Self::LocalPlayer => "LocalPlayer",
            Self::SelfEntity => "Self",
            Self::Logic => "Logic",
            Self::Service => "Service",
            Self::Model => "Model",
            Self::Other(s) => s,
        }
    }

    /// Only logic and service senders name a specific instance.
    pub fn takes_value(&self) -> bool {
        matches!(self, Self::Logic | Self::Service)
    }
}

/// Parsed `@EventSender("<kind>"[, "<value>"])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventSender {
    pub kind: SenderKind,
    /// Meaningful only when `kind.takes_value()`; kept otherwise.
    pub value: Option<String>,
}

impl EventSender {
    /// The instance name to display, if this sender kind shows one.
    pub fn display_value(&self) -> Option<&str> {
        if !self.kind.takes_value() {
            return None;
        }
        self.value.as_deref().filter(|v| !v.is_empty())
    }
}

/// One parameter of a method or handler.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParamInfo {
    pub name: String,
    pub ty: String,
    /// From a matching `---@param` annotation; empty when none matched.
    pub description: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PropertyDoc {
    pub name: String,
    pub ty: String,
    pub description: String,
    /// Assigned literal with surrounding quotes stripped.
    pub default_value: String,
    pub exec_space: ExecSpace,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MethodDoc {
    pub name: String,
    pub return_type: String,
    pub description: String,
    pub exec_space: ExecSpace,
    pub params: Vec<ParamInfo>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HandlerDoc {
    pub name: String,
    /// Empty when the declaration omits a return type.
    pub return_type: String,
    pub description: String,
    pub exec_space: ExecSpace,
    pub event_sender: Option<EventSender>,
    pub params: Vec<ParamInfo>,
}
