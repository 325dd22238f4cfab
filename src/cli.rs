use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "scry")]
#[command(about = "Look up Magic cards on Scryfall and render them as chat attachments", version)]
#[command(after_help = "EXAMPLES:
    scry text lightning bolt          Card text
    scry image goyf                   Card image
    scry price bolt                   Prices for every printing
    scry message \"try [[!Bolt]]\"      Resolve [[card]] mentions")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output raw attachment JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging and show error causes
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a card's name, type line and rules text
    #[command(after_help = "EXAMPLES:
    scry text lightning bolt
    scry text \"Fire // Ice\" --json")]
    Text(CardArgs),
    /// Show a card's image
    #[command(after_help = "EXAMPLES:
    scry image tarmogoyf")]
    Image(CardArgs),
    /// List printings of matching cards with USD and MTGO ticket prices
    #[command(after_help = "EXAMPLES:
    scry price bolt")]
    Price(CardArgs),
    /// List printings of matching cards
    #[command(after_help = "EXAMPLES:
    scry multi island")]
    Multi(CardArgs),
    /// Resolve every [[card]] mention in a chat message
    #[command(after_help = "EXAMPLES:
    scry message \"[[Bolt]] beats [[!Shock]], see [[$Goyf]] or [[?Island]]\"")]
    Message {
        /// Message text containing [[card]] mentions
        text: String,
    },
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    scry completions bash > ~/.bash_completion.d/scry
    scry completions zsh > ~/.zfunc/_scry")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Args)]
pub struct CardArgs {
    /// Card name (fuzzy matched, words are joined with spaces)
    #[arg(required = true, num_args = 1..)]
    pub name: Vec<String>,
}

impl CardArgs {
    pub fn card_name(&self) -> String {
        self.name.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_card_name_joins_words() {
        let cli = Cli::try_parse_from(["scry", "price", "lightning", "bolt", "--json"]).unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Price(args) => assert_eq!(args.card_name(), "lightning bolt"),
            _ => panic!("expected price command"),
        }
    }

    #[test]
    fn test_card_name_required() {
        assert!(Cli::try_parse_from(["scry", "image"]).is_err());
    }
}
