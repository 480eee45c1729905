//! Badge images for exec-space and event-sender tags.
//!
//! Closed lookup tables: a tag without an entry gets no badge.

use crate::model::{ExecSpace, SenderKind};

macro_rules! badge {
    ($label:literal, $color:literal) => {
        concat!(
            " <img src=\"https://img.shields.io/badge/",
            $label,
            "-",
            $color,
            "\" alt=\"",
            $label,
            "\" style=\"vertical-align: middle; margin-left: 8px;\">"
        )
    };
}

/// Badge for where a declaration runs. Unrestricted code carries none.
pub fn exec_space(space: &ExecSpace) -> Option<&'static str> {
    match space {
        ExecSpace::ServerOnly => Some(badge!("ServerOnly", "da70d6")),
        ExecSpace::ClientOnly => Some(badge!("ClientOnly", "87ceeb")),
        ExecSpace::Server => Some(badge!("Server", "ffa500")),
        ExecSpace::Client => Some(badge!("Client", "90ee90")),
        ExecSpace::All | ExecSpace::Other(_) => None,
    }
}

/// Badge for who sends the event a handler receives.
pub fn event_sender(kind: &SenderKind) -> Option<&'static str> {
    match kind {
        SenderKind::Entity => Some(badge!("Entity", "f9ed69")),
        SenderKind::LocalPlayer => Some(badge!("LocalPlayer", "a8d8ea")),
        SenderKind::SelfEntity => Some(badge!("Self", "cca8e9")),
        SenderKind::Logic => Some(badge!("Logic", "95e1d3")),
        SenderKind::Service => Some(badge!("Service", "f38181")),
        SenderKind::Model => Some(badge!("Model", "fce38a")),
        SenderKind::Other(_) => None,
    }
}
