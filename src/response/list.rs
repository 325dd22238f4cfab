use crate::client::LookupResult;
use crate::error::Result;
use crate::middleware::footer;
use crate::responses::{CardEntry, CardList};
use crate::types::{Attachment, Field};

use super::{success, verbatim, Variant, SEARCH_ENDPOINT};

/// Most search results shown in one attachment.
pub const MAX_COUNT: usize = 25;

pub static PRICE_VARIANT: Variant = Variant {
    endpoint: SEARCH_ENDPOINT,
    build_query: search_query,
    build_attachment: price_attachment,
    post_processors: &[footer],
    display_name: verbatim,
};

pub static MULTI_VARIANT: Variant = Variant {
    endpoint: SEARCH_ENDPOINT,
    build_query: search_query,
    build_attachment: multi_attachment,
    post_processors: &[footer],
    display_name: verbatim,
};

fn search_query(card_name: &str) -> Vec<(&'static str, String)> {
    vec![("q", format!("++{card_name}"))]
}

fn price_attachment(card_name: &str, lookup: &LookupResult) -> Result<Attachment> {
    list_attachment(card_name, lookup, price_line)
}

fn multi_attachment(card_name: &str, lookup: &LookupResult) -> Result<Attachment> {
    list_attachment(card_name, lookup, card_link)
}

fn list_attachment(
    card_name: &str,
    lookup: &LookupResult,
    to_line: fn(&CardEntry) -> String,
) -> Result<Attachment> {
    let response = match success(card_name, lookup) {
        Ok(response) => response,
        Err(no_results) => return Ok(no_results),
    };

    let card_list: CardList = serde_json::from_str(&response.body)?;
    let Some(data) = card_list.data else {
        return Ok(Attachment::no_results(card_name, None));
    };

    let fields: Vec<Field> = data
        .iter()
        .take(MAX_COUNT)
        .map(|card| Field {
            value: to_line(card),
        })
        .collect();

    let summary = format!(
        "{card_name} showing {} of {}",
        fields.len(),
        card_list.total_cards
    );
    let mut attachment = Attachment::new(summary.clone(), summary);
    attachment.fields = Some(fields);
    attachment.mrkdwn_in = Some(vec!["fields".to_string()]);
    Ok(attachment)
}

fn card_link(card: &CardEntry) -> String {
    format!("<{}|{}> _{}_", card.scryfall_uri, card.name, card.set_name)
}

fn price_line(card: &CardEntry) -> String {
    let usd = card.usd().map(|usd| format!("${usd}")).unwrap_or_default();
    let tix = card.tix().map(|tix| format!("{tix} tix")).unwrap_or_default();
    let delimiter = if !usd.is_empty() && !tix.is_empty() {
        ", "
    } else {
        ""
    };
    format!("{} - {usd}{delimiter}{tix}", card_link(card))
}
