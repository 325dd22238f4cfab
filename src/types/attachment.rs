use serde::{Deserialize, Serialize};

/// Sidebar colour shared by every attachment.
pub const COLOR: &str = "#431E3F";

/// A chat attachment as returned to the messaging platform.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Attachment {
    pub fallback: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<Field>>,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrkdwn_in: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_icon: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Field {
    pub value: String,
}

impl Attachment {
    /// Bare attachment with only the required fields set.
    pub fn new(fallback: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            fallback: fallback.into(),
            title: title.into(),
            title_link: None,
            text: None,
            image_url: None,
            fields: None,
            color: COLOR.to_string(),
            mrkdwn_in: None,
            footer: None,
            footer_icon: None,
        }
    }

    /// "No results" attachment, optionally carrying the reason in the title.
    pub fn no_results(card_name: &str, reason: Option<&str>) -> Self {
        let fallback = format!("No results for {card_name}");
        let title = match reason {
            Some(reason) => format!("{fallback}, ({reason})"),
            None => fallback.clone(),
        };
        Self::new(fallback, title)
    }
}
