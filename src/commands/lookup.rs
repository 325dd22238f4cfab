use crate::client::ScryfallClient;
use crate::output;
use crate::response::{ResponseBuilder, ResponseKind};

/// Run a single builder and print its attachment.
pub async fn run(client: &ScryfallClient, kind: ResponseKind, card_name: &str) {
    let builder = ResponseBuilder::new(client, kind, card_name);
    tracing::debug!(%kind, url = %builder.build_url(), "looking up card");

    let attachment = builder.attachment().await;
    output::print_item(&attachment, output::print_attachment);
}
