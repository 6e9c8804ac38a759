use clap::{Parser, Subcommand};

use crate::domain::SourceKey;

#[derive(Parser)]
#[command(name = "headlines")]
#[command(about = "Offline-first RSS headline reader for Indian news publishers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a feed and show every state the news list goes through
    Show {
        /// Publisher to load (dd, air, toi, et)
        source: Option<SourceKey>,

        /// Load this feed URL instead of a publisher's default feed
        #[arg(long, conflicts_with = "source")]
        url: Option<String>,

        /// Open the Nth headline (1-based) in the browser once loaded
        #[arg(long)]
        open: Option<usize>,

        /// Print a share link for the Nth headline (1-based) once loaded
        #[arg(long)]
        share: Option<usize>,
    },

    /// List known publishers and their feeds
    Sources,

    /// Show the cached headlines for a publisher
    Cache {
        /// Publisher (dd, air, toi, et)
        source: SourceKey,
    },

    /// Delete the cached headlines for a publisher
    Clear {
        /// Publisher (dd, air, toi, et)
        source: SourceKey,
    },
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
    fn test_show_parses_source_alias() {
        let cli = Cli::try_parse_from(["headlines", "show", "air", "--open", "2"]).unwrap();
        match cli.command {
            Commands::Show { source, url, open, share } => {
                assert_eq!(source, Some(SourceKey::Air));
                assert_eq!(url, None);
                assert_eq!(open, Some(2));
                assert_eq!(share, None);
            }
            _ => panic!("Expected show command"),
        }
    }

    #[test]
    fn test_url_conflicts_with_source() {
        let result = Cli::try_parse_from([
            "headlines",
            "show",
            "dd",
            "--url",
            "https://ddnews.gov.in/rss-feeds",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_source_rejected() {
        assert!(Cli::try_parse_from(["headlines", "cache", "bbc"]).is_err());
    }
}
