use std::sync::LazyLock;

use regex::Regex;

use crate::client::LookupResult;
use crate::error::{Result, ScryError};
use crate::middleware::{footer, manamoji};
use crate::responses::{CARD_HEADER, CARD_IMAGE_HEADER};
use crate::types::Attachment;

use super::{named_query, success, Variant, NAMED_ENDPOINT};

static MANA_COST: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{[^{}]*\}").unwrap());

pub static VARIANT: Variant = Variant {
    endpoint: NAMED_ENDPOINT,
    build_query: named_query,
    build_attachment,
    post_processors: &[footer, manamoji],
    display_name: without_braces,
};

/// Image titles never show `{`, not even when echoing the query.
fn without_braces(card_name: &str) -> String {
    card_name.replace('{', "")
}

fn build_attachment(card_name: &str, lookup: &LookupResult) -> Result<Attachment> {
    let response = match success(&without_braces(card_name), lookup) {
        Ok(response) => response,
        Err(no_results) => return Ok(no_results),
    };

    let first_line = response.body.split('\n').next().unwrap_or_default();
    let title = card_title(first_line)?;
    let image_url = response.header(CARD_IMAGE_HEADER).unwrap_or_default();

    let mut attachment = Attachment::new(format!("Image: {image_url}"), title);
    attachment.image_url = Some(image_url.to_string());
    attachment.title_link = response.header(CARD_HEADER).map(String::from);
    Ok(attachment)
}

/// Card name without its mana cost. The cost normally trails the name, but a
/// line that opens with it is stripped of every `{..}` group first.
fn card_title(line: &str) -> Result<String> {
    let leading = before_brace(line);
    if !leading.is_empty() {
        return Ok(leading.to_string());
    }

    let stripped = MANA_COST.replace_all(line, "");
    match before_brace(&stripped) {
        "" => Err(ScryError::MalformedCard(line.to_string())),
        title => Ok(title.to_string()),
    }
}

fn before_brace(line: &str) -> &str {
    line.split('{').next().unwrap_or_default().trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ScryfallClient;
    use crate::middleware;
    use crate::response::{ResponseBuilder, ResponseKind};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_title_drops_trailing_cost() {
        let result = lookup_image("Lightning Bolt {R}\nInstant");
        let attachment = build_attachment("bolt", &result).unwrap();
        assert_eq!(attachment.title, "Lightning Bolt");
        assert_eq!(attachment.fallback, "Image: http://img");
        assert_eq!(attachment.image_url.as_deref(), Some("http://img"));
        assert_eq!(attachment.title_link.as_deref(), Some("http://card"));
        assert!(attachment.text.is_none());
    }

    #[test]
    fn test_title_drops_leading_cost() {
        let attachment = build_attachment("bolt", &lookup_image("{2}{R} Lightning Bolt\ntext...")).unwrap();
        assert_eq!(attachment.title, "Lightning Bolt");
        assert_eq!(attachment.image_url.as_deref(), Some("http://img"));
    }

    #[test]
    fn test_title_never_contains_brace() {
        for line in [
            "Island",
            "Fire // Ice {1}{R} // {1}{U}",
            "{W}{U} Azorius Charm",
            "Odd {name",
            "  {X}{X}{G} Hydra {unclosed",
        ] {
            let title = card_title(line).unwrap();
            assert!(!title.contains('{'), "{line:?} -> {title:?}");
            assert!(!title.is_empty());
        }
    }

    #[test]
    fn test_cost_only_line_is_malformed() {
        assert!(matches!(card_title("{R}"), Err(ScryError::MalformedCard(_))));
        assert!(card_title("").is_err());
    }

    #[test]
    fn test_post_processors_skip_text_steps() {
        let attachment = build_attachment("bolt", &lookup_image("Fire & Ice {1}{R}")).unwrap();
        let out = middleware::apply(VARIANT.post_processors, attachment);
        assert_eq!(out.title, "Fire & Ice");
        assert_eq!(out.footer.as_deref(), Some("Scryfall"));
    }

    #[test]
    fn test_no_results_title_drops_braces() {
        let result = crate::response::lookup(404, r#"{"details":"not found"}"#, &[]);
        let attachment = build_attachment("Bolt {", &result).unwrap();
        assert_eq!(attachment.title, "No results for Bolt , (not found)");
        assert!(!attachment.title.contains('{'));
    }

    #[tokio::test]
    async fn test_degraded_title_drops_braces() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{R}\n"))
            .mount(&server)
            .await;
        let client = ScryfallClient::new(&server.uri(), "scry-test").unwrap();

        for name in ["Bolt {", "{{R}"] {
            let attachment = ResponseBuilder::new(&client, ResponseKind::Image, name)
                .attachment()
                .await;
            assert!(attachment.title.starts_with("No results for"), "{name:?}");
            assert!(!attachment.title.contains('{'), "{:?}", attachment.title);
        }
    }

    #[tokio::test]
    async fn test_not_found_title_drops_braces() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(404).set_body_string(r#"{"details":"not found"}"#),
            )
            .mount(&server)
            .await;
        let client = ScryfallClient::new(&server.uri(), "scry-test").unwrap();

        let attachment = ResponseBuilder::new(&client, ResponseKind::Image, "Bolt {")
            .attachment()
            .await;
        assert_eq!(attachment.title, "No results for Bolt , (not found)");
    }

    fn lookup_image(body: &str) -> LookupResult {
        crate::response::lookup(
            200,
            body,
            &[(CARD_IMAGE_HEADER, "http://img"), (CARD_HEADER, "http://card")],
        )
    }
}
