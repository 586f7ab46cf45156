use clap::{Parser, Subcommand};
use nihongo_pocket::models::WritingSystem;

#[derive(Parser)]
#[command(name = "nihongo-pocket")]
#[command(about = "Terminal gadget pocket for learning Japanese kana, phrases, and vocabulary")]
#[command(version)]
pub struct Cli {
    /// Start the interactive TUI when no command is given
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Fixed seed for phrase and quiz draws (overrides NIHONGO_POCKET_SEED)
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a kana chart
    Chart {
        /// Writing system (hiragana, katakana)
        system: WritingSystem,

        /// Print as JSON instead of a text grid
        #[arg(long)]
        json: bool,
    },

    /// Open the anywhere door: print a random phrase
    Phrase {
        /// Print the whole phrase catalog instead of one random phrase
        #[arg(long)]
        all: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_starts_tui() {
        let cli = Cli::try_parse_from(["nihongo-pocket"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_chart_command() {
        let cli = Cli::try_parse_from(["nihongo-pocket", "chart", "Katakana", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Chart { system, json }) => {
                assert_eq!(system, WritingSystem::Katakana);
                assert!(json);
            }
            _ => panic!("expected chart command"),
        }

        assert!(Cli::try_parse_from(["nihongo-pocket", "chart", "kanji"]).is_err());
    }

    #[test]
    fn test_global_seed() {
        let cli = Cli::try_parse_from(["nihongo-pocket", "phrase", "--all", "--seed", "7"]).unwrap();
        assert_eq!(cli.seed, Some(7));
        assert!(matches!(cli.command, Some(Commands::Phrase { all: true, json: false })));
    }
}
