use crate::types::Attachment;

/// Escape the characters the chat platform treats as control sequences.
///
/// Runs last so that anything earlier steps produced is covered too. Only
/// `&`, `<` and `>` are touched, leaving `_`/`*` formatting intact.
pub fn markdown_escape(mut attachment: Attachment) -> Attachment {
    attachment.title = escape(&attachment.title);
    attachment.text = attachment.text.as_deref().map(escape);
    attachment
}

fn escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_control_characters() {
        assert_eq!(escape("<b> & </b>"), "&lt;b&gt; &amp; &lt;/b&gt;");
    }

    #[test]
    fn test_leaves_formatting_alone() {
        let mut attachment = Attachment::new("a & b", "Fire & Ice");
        attachment.text = Some("_Landfall_ — *bold*".to_string());

        let out = markdown_escape(attachment);
        assert_eq!(out.title, "Fire &amp; Ice");
        assert_eq!(out.text.as_deref(), Some("_Landfall_ — *bold*"));
        assert_eq!(out.fallback, "a & b");
    }
}
