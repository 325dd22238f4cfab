use crate::client::LookupResult;
use crate::error::Result;
use crate::middleware::{ability_words, footer, manamoji, markdown_escape, reminder_text};
use crate::responses::CARD_HEADER;
use crate::types::Attachment;

use super::{named_query, success, verbatim, Variant, NAMED_ENDPOINT};

pub static VARIANT: Variant = Variant {
    endpoint: NAMED_ENDPOINT,
    build_query: named_query,
    build_attachment,
    post_processors: &[footer, manamoji, reminder_text, ability_words, markdown_escape],
    display_name: verbatim,
};

/// First body line is the title, the rest is the card text.
fn build_attachment(card_name: &str, lookup: &LookupResult) -> Result<Attachment> {
    let response = match success(card_name, lookup) {
        Ok(response) => response,
        Err(no_results) => return Ok(no_results),
    };

    let mut lines = response.body.split('\n');
    let title = lines.next().unwrap_or_default();
    let rest: Vec<&str> = lines.collect();

    let mut attachment = Attachment::new(format!("{title} - {}", rest.join(" ")), title);
    attachment.text = Some(rest.join("\n"));
    attachment.title_link = response.header(CARD_HEADER).map(String::from);
    attachment.mrkdwn_in = Some(vec!["text".to_string()]);
    Ok(attachment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware;
    use crate::response::lookup;
    use crate::types::COLOR;

    const BOLT: &str = "Lightning Bolt {R}\nInstant\nLightning Bolt deals 3 damage to any target.";

    #[test]
    fn test_splits_title_and_text() {
        let result = lookup(200, BOLT, &[(CARD_HEADER, "https://scryfall.com/card/lea/161")]);
        let attachment = build_attachment("bolt", &result).unwrap();

        assert_eq!(attachment.title, "Lightning Bolt {R}");
        assert_eq!(
            attachment.text.as_deref(),
            Some("Instant\nLightning Bolt deals 3 damage to any target.")
        );
        assert_eq!(
            attachment.fallback,
            "Lightning Bolt {R} - Instant Lightning Bolt deals 3 damage to any target."
        );
        assert_eq!(
            attachment.title_link.as_deref(),
            Some("https://scryfall.com/card/lea/161")
        );
        assert_eq!(attachment.color, COLOR);
    }

    #[test]
    fn test_single_line_body() {
        let attachment = build_attachment("x", &lookup(200, "Island", &[])).unwrap();
        assert_eq!(attachment.title, "Island");
        assert_eq!(attachment.text.as_deref(), Some(""));
        assert_eq!(attachment.fallback, "Island - ");
        assert!(attachment.title_link.is_none());
    }

    #[test]
    fn test_non_200_is_no_results() {
        let result = lookup(404, r#"{"details":"No card found"}"#, &[]);
        let attachment = build_attachment("Blot", &result).unwrap();
        assert_eq!(attachment.title, "No results for Blot, (No card found)");
        assert!(attachment.text.is_none());
    }

    #[test]
    fn test_post_processors_in_order() {
        let body = "Steppe Lynx {W}\nCreature — Cat 0/1\n\
                    Landfall — Whenever a land you control enters, \
                    Steppe Lynx gets +2/+2 until end of turn. (It's <fast>.)";
        let attachment = build_attachment("lynx", &lookup(200, body, &[])).unwrap();
        let out = middleware::apply(VARIANT.post_processors, attachment);

        assert_eq!(out.title, "Steppe Lynx :mana-w:");
        assert_eq!(
            out.text.as_deref(),
            Some(
                "Creature — Cat 0/1\n_Landfall_ — Whenever a land you control enters, \
                 Steppe Lynx gets +2/+2 until end of turn. _(It's &lt;fast&gt;.)_"
            )
        );
        assert_eq!(out.footer.as_deref(), Some("Scryfall"));
    }
}
