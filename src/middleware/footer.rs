use crate::types::Attachment;

pub const FOOTER_TEXT: &str = "Scryfall";
pub const FOOTER_ICON: &str = "https://scryfall.com/favicon.ico";

/// Credit the provider in the attachment footer.
pub fn footer(mut attachment: Attachment) -> Attachment {
    attachment.footer = Some(FOOTER_TEXT.to_string());
    attachment.footer_icon = Some(FOOTER_ICON.to_string());
    attachment
}
