use crate::client::ScryfallClient;
use crate::error::{Result, ScryError};
use crate::mention::{parse_mentions, MessagePayload};
use crate::output;
use crate::response::ResponseBuilder;

/// Resolve every `[[card]]` mention in `text`, one lookup at a time.
pub async fn run(client: &ScryfallClient, text: &str) -> Result<()> {
    let payload = resolve(client, text).await?;

    output::print_item(&payload, |payload| {
        for (i, attachment) in payload.attachments.iter().enumerate() {
            if i > 0 {
                println!();
            }
            output::print_attachment(attachment);
        }
    });

    Ok(())
}

pub async fn resolve(client: &ScryfallClient, text: &str) -> Result<MessagePayload> {
    let mentions = parse_mentions(text);
    if mentions.is_empty() {
        return Err(ScryError::NoMentions);
    }

    let mut attachments = Vec::with_capacity(mentions.len());
    for mention in &mentions {
        let builder = ResponseBuilder::new(client, mention.kind, mention.name.as_str());
        attachments.push(builder.attachment().await);
    }

    Ok(MessagePayload::in_channel(attachments))
}
