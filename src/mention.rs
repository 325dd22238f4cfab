//! `[[card]]` mentions inside chat messages.
//!
//! A leading `!` asks for the card image, `$` for prices and `?` for every
//! matching printing; a bare name gets the card text.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::response::ResponseKind;
use crate::types::Attachment;

static MENTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[([^\[\]]+)\]\]").unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mention {
    pub kind: ResponseKind,
    pub name: String,
}

pub fn parse_mentions(message: &str) -> Vec<Mention> {
    MENTION
        .captures_iter(message)
        .filter_map(|cap| cap.get(1).and_then(|m| parse_mention(m.as_str())))
        .collect()
}

fn parse_mention(inner: &str) -> Option<Mention> {
    let inner = inner.trim();
    let (kind, name) = match inner.chars().next()? {
        '!' => (ResponseKind::Image, &inner[1..]),
        '$' => (ResponseKind::Price, &inner[1..]),
        '?' => (ResponseKind::Multi, &inner[1..]),
        _ => (ResponseKind::Text, inner),
    };

    let name = name.trim();
    if name.is_empty() {
        return None;
    }

    Some(Mention {
        kind,
        name: name.to_string(),
    })
}

/// Reply posted back to the channel.
#[derive(Serialize, Debug)]
pub struct MessagePayload {
    pub response_type: &'static str,
    pub attachments: Vec<Attachment>,
}

impl MessagePayload {
    pub fn in_channel(attachments: Vec<Attachment>) -> Self {
        Self {
            response_type: "in_channel",
            attachments,
        }
    }
}
