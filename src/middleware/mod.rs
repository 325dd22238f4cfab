//! Post-processors applied to an [`Attachment`] after it is built.
//!
//! Each one is a pure `fn(Attachment) -> Attachment`; a response variant lists
//! the ones it wants in order.

mod ability_words;
mod footer;
mod manamoji;
mod markdown_escape;
mod reminder_text;

pub use ability_words::ability_words;
pub use footer::footer;
pub use manamoji::manamoji;
pub use markdown_escape::markdown_escape;
pub use reminder_text::reminder_text;

use crate::types::Attachment;

pub type PostProcessor = fn(Attachment) -> Attachment;

/// Run `attachment` through `steps` left to right.
pub fn apply(steps: &[PostProcessor], attachment: Attachment) -> Attachment {
    steps.iter().fold(attachment, |acc, step| step(acc))
}
