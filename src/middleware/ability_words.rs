use std::sync::LazyLock;

use regex::Regex;

use crate::types::Attachment;

/// Ability words from the comprehensive rules (207.2c).
const ABILITY_WORDS: &[&str] = &[
    "Adamant",
    "Addendum",
    "Alliance",
    "Battalion",
    "Bloodrush",
    "Celebration",
    "Channel",
    "Chroma",
    "Cohort",
    "Constellation",
    "Converge",
    "Council's dilemma",
    "Coven",
    "Delirium",
    "Descend 4",
    "Descend 8",
    "Domain",
    "Eerie",
    "Eminence",
    "Enrage",
    "Fateful hour",
    "Fathomless descent",
    "Ferocious",
    "Flurry",
    "Formidable",
    "Grandeur",
    "Hellbent",
    "Heroic",
    "Imprint",
    "Inspired",
    "Join forces",
    "Kinship",
    "Landfall",
    "Lieutenant",
    "Magecraft",
    "Metalcraft",
    "Morbid",
    "Pack tactics",
    "Paradox",
    "Parley",
    "Radiance",
    "Raid",
    "Rally",
    "Revolt",
    "Secret council",
    "Spell mastery",
    "Strive",
    "Survival",
    "Sweep",
    "Tempting offer",
    "Threshold",
    "Undergrowth",
    "Valiant",
    "Will of the council",
];

static LEADING_WORD: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = ABILITY_WORDS
        .iter()
        .map(|word| regex::escape(word))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?m)^({alternatives}) \x{{2014}} ")).unwrap()
});

/// Italicize an ability word that opens a line, e.g. `Landfall — ...`.
pub fn ability_words(mut attachment: Attachment) -> Attachment {
    attachment.text = attachment
        .text
        .as_deref()
        .map(|text| LEADING_WORD.replace_all(text, "_${1}_ \u{2014} ").into_owned());
    attachment
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_text(text: &str) -> Attachment {
        let mut attachment = Attachment::new("fb", "card");
        attachment.text = Some(text.to_string());
        attachment
    }

    #[test]
    fn test_italicizes_leading_ability_word() {
        let out = ability_words(with_text(
            "Creature — Elemental\nLandfall — Whenever a land enters, draw a card.",
        ));
        assert_eq!(
            out.text.as_deref(),
            Some("Creature — Elemental\n_Landfall_ — Whenever a land enters, draw a card.")
        );
    }

    #[test]
    fn test_multi_word_ability_word() {
        let out = ability_words(with_text("Will of the council — Starting with you, vote."));
        assert_eq!(
            out.text.as_deref(),
            Some("_Will of the council_ — Starting with you, vote.")
        );
    }

    #[test]
    fn test_ignores_type_line_and_mid_line_words() {
        let text = "Instant — Arcane\nYou gain threshold — nothing.";
        assert_eq!(ability_words(with_text(text)).text.as_deref(), Some(text));
    }
}
