use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use serde::Serialize;

use crate::types::Attachment;

/// Global output format setting
static OUTPUT_JSON: AtomicBool = AtomicBool::new(false);

pub fn set_json_output(json: bool) {
    OUTPUT_JSON.store(json, Ordering::Relaxed);
}

pub fn is_json_output() -> bool {
    OUTPUT_JSON.load(Ordering::Relaxed)
}

/// Print a single item or JSON depending on output mode
pub fn print_item<T: Serialize>(item: &T, display: impl FnOnce(&T)) {
    if is_json_output() {
        println!("{}", serde_json::to_string_pretty(item).unwrap_or_default());
    } else {
        display(item);
    }
}

/// Render an attachment roughly the way a chat client would
pub fn print_attachment(attachment: &Attachment) {
    let bar = match parse_hex_color(&attachment.color) {
        Ok((r, g, b)) => "┃".truecolor(r, g, b).to_string(),
        Err(()) => "┃".to_string(),
    };

    println!("{bar} {}", attachment.title.bold());
    if let Some(link) = &attachment.title_link {
        println!("{bar} {}", link.underline().bright_black());
    }
    if let Some(text) = attachment.text.as_deref().filter(|t| !t.is_empty()) {
        for line in text.lines() {
            println!("{bar} {line}");
        }
    }
    for field in attachment.fields.iter().flatten() {
        println!("{bar}   • {}", field.value);
    }
    if let Some(image) = &attachment.image_url {
        println!("{bar} {} {}", "image:".bright_black(), image);
    }
    if let Some(footer) = &attachment.footer {
        println!("{bar} {}", footer.italic().bright_black());
    }
}

fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8), ()> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(());
    }
    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| ())?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| ())?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| ())?;
    Ok((r, g, b))
}
