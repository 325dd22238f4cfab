use std::sync::LazyLock;

use regex::Regex;

use crate::types::Attachment;

static REMINDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(([^()\n]+)\)").unwrap());

/// Italicize parenthesized reminder text.
pub fn reminder_text(mut attachment: Attachment) -> Attachment {
    attachment.text = attachment
        .text
        .as_deref()
        .map(|text| REMINDER.replace_all(text, "_(${1})_").into_owned());
    attachment
}
