use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::Attachment;

static SYMBOL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([^{}]+)\}").unwrap());

/// Replace mana symbols like `{2/W}` with `:mana-2w:` emoji in title and text.
pub fn manamoji(mut attachment: Attachment) -> Attachment {
    attachment.title = replace_symbols(&attachment.title);
    attachment.text = attachment.text.as_deref().map(replace_symbols);
    attachment
}

fn replace_symbols(input: &str) -> String {
    SYMBOL
        .replace_all(input, |caps: &Captures| emoji_name(&caps[1]))
        .into_owned()
}

fn emoji_name(symbol: &str) -> String {
    let name: String = symbol
        .chars()
        .filter(|c| *c != '/')
        .flat_map(char::to_lowercase)
        .collect();
    format!(":mana-{name}:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replaces_title_and_text() {
        let mut attachment = Attachment::new("Lightning Bolt {R}", "Lightning Bolt {R}");
        attachment.text = Some("{T}: Add {G}{G}.".to_string());

        let out = manamoji(attachment);
        assert_eq!(out.title, "Lightning Bolt :mana-r:");
        assert_eq!(out.text.as_deref(), Some(":mana-t:: Add :mana-g::mana-g:."));
        assert_eq!(out.fallback, "Lightning Bolt {R}");
    }

    #[test]
    fn test_hybrid_and_numeric_symbols() {
        assert_eq!(replace_symbols("{2/W}{10}{U/P}"), ":mana-2w::mana-10::mana-up:");
    }

    #[test]
    fn test_leaves_unbalanced_braces() {
        assert_eq!(replace_symbols("odd { brace"), "odd { brace");
    }
}
