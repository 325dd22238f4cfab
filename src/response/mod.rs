//! Response builders: one request, one attachment.
//!
//! Each [`ResponseKind`] maps to a static [`Variant`] describing its endpoint,
//! query shape, attachment construction and post-processors. The pipeline in
//! [`ResponseBuilder::attachment`] is shared by all of them.

mod image;
mod list;
mod text;

use std::fmt;

use tracing::{debug, warn};
use url::Url;

use crate::client::{LookupResponse, LookupResult, ScryfallClient};
use crate::error::Result;
use crate::middleware::{self, PostProcessor};
use crate::responses::ErrorPayload;
use crate::types::Attachment;

pub const UNKNOWN_REASON: &str = "unknown reason";

pub const NAMED_ENDPOINT: &str = "cards/named";
pub const SEARCH_ENDPOINT: &str = "cards/search";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Text,
    Image,
    Price,
    Multi,
}

impl ResponseKind {
    pub fn variant(self) -> &'static Variant {
        match self {
            ResponseKind::Text => &text::VARIANT,
            ResponseKind::Image => &image::VARIANT,
            ResponseKind::Price => &list::PRICE_VARIANT,
            ResponseKind::Multi => &list::MULTI_VARIANT,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ResponseKind::Text => "text",
            ResponseKind::Image => "image",
            ResponseKind::Price => "price",
            ResponseKind::Multi => "multi",
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-kind configuration. All instances are `'static`.
pub struct Variant {
    pub endpoint: &'static str,
    pub build_query: fn(&str) -> Vec<(&'static str, String)>,
    pub build_attachment: fn(&str, &LookupResult) -> Result<Attachment>,
    pub post_processors: &'static [PostProcessor],
    /// How the queried name is echoed in "No results" titles.
    pub display_name: fn(&str) -> String,
}

pub struct ResponseBuilder<'a> {
    client: &'a ScryfallClient,
    kind: ResponseKind,
    card_name: String,
}

impl<'a> ResponseBuilder<'a> {
    pub fn new(client: &'a ScryfallClient, kind: ResponseKind, card_name: impl Into<String>) -> Self {
        Self {
            client,
            kind,
            card_name: card_name.into(),
        }
    }

    fn variant(&self) -> &'static Variant {
        self.kind.variant()
    }

    pub fn build_query(&self) -> Vec<(&'static str, String)> {
        (self.variant().build_query)(&self.card_name)
    }

    pub fn build_url(&self) -> Url {
        let mut url = self.client.endpoint(self.variant().endpoint);
        url.query_pairs_mut().extend_pairs(self.build_query());
        url
    }

    pub async fn fetch(&self) -> LookupResult {
        self.client.get(self.build_url()).await
    }

    pub fn build_attachment(&self, lookup: &LookupResult) -> Result<Attachment> {
        (self.variant().build_attachment)(&self.card_name, lookup)
    }

    /// Fetch, build and post-process. Never fails: a build error degrades to
    /// a "No results" attachment.
    pub async fn attachment(&self) -> Attachment {
        let lookup = self.fetch().await;

        let attachment = self.build_attachment(&lookup).unwrap_or_else(|e| {
            warn!(
                kind = %self.kind,
                card = %self.card_name,
                error = %e,
                "could not build attachment"
            );
            let name = (self.variant().display_name)(&self.card_name);
            Attachment::no_results(&name, Some(UNKNOWN_REASON))
        });

        middleware::apply(self.variant().post_processors, attachment)
    }
}

/// Unwrap a 200 response, or produce the "No results" attachment that stands
/// in for anything else.
fn success<'r>(
    card_name: &str,
    lookup: &'r LookupResult,
) -> std::result::Result<&'r LookupResponse, Attachment> {
    match lookup {
        LookupResult::Response(response) if response.status == 200 => Ok(response),
        LookupResult::Response(response) => {
            let details = serde_json::from_str::<ErrorPayload>(&response.body)
                .ok()
                .and_then(|err| err.details)
                .filter(|details| !details.is_empty());
            Err(Attachment::no_results(
                card_name,
                Some(details.as_deref().unwrap_or(UNKNOWN_REASON)),
            ))
        }
        LookupResult::Failed { reason } => {
            debug!(card = card_name, %reason, "no response to build from");
            Err(Attachment::no_results(card_name, Some(UNKNOWN_REASON)))
        }
    }
}

fn verbatim(card_name: &str) -> String {
    card_name.to_string()
}

fn named_query(card_name: &str) -> Vec<(&'static str, String)> {
    vec![("fuzzy", card_name.to_string()), ("format", "text".to_string())]
}

#[cfg(test)]
pub(crate) fn lookup(status: u16, body: &str, headers: &[(&str, &str)]) -> LookupResult {
    LookupResult::Response(LookupResponse {
        status,
        body: body.to_string(),
        headers: headers
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    })
}
