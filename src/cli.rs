use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "patrol-designer")]
#[command(about = "Design patrol positions and points, export them as JSON", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Debug-level logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Export dialect flags; with neither, the config default applies
#[derive(Args, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaArgs {
    /// Use the schema with userId/pictureDesc/picture
    #[arg(long, conflicts_with = "no_media")]
    pub media: bool,

    /// Use the basic schema even when the config defaults to media
    #[arg(long)]
    pub no_media: bool,
}

impl SchemaArgs {
    /// `Some` when the command line picked a dialect
    pub fn choice(&self) -> Option<bool> {
        if self.media {
            Some(true)
        } else if self.no_media {
            Some(false)
        } else {
            None
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a new plan with one empty position
    New {
        /// Output file (default: ./patrol-positions.json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        schema: SchemaArgs,
    },

    /// Edit a plan interactively
    Edit {
        /// Plan JSON file (created if missing)
        #[arg(required = true)]
        input: PathBuf,

        /// Save to another file instead of overwriting
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        schema: SchemaArgs,
    },

    /// Re-project a plan and write the export JSON
    Export {
        /// Plan JSON file
        #[arg(required = true)]
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        schema: SchemaArgs,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Print the plan summary
    Preview {
        /// Plan JSON file
        #[arg(required = true)]
        input: PathBuf,
    },

    /// Show or edit settings
    Config {
        /// Store the Mapbox access token
        #[arg(long)]
        set_token: Option<String>,

        /// Remove the stored token
        #[arg(long)]
        clear_token: bool,

        /// Default to the media schema
        #[arg(long)]
        set_media: Option<bool>,

        /// Show settings
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_export() {
        let cli = Cli::parse_from(["patrol-designer", "export", "plan.json", "--media", "--compact"]);
        match cli.command {
            Commands::Export { input, output, schema, compact } => {
                assert_eq!(input, PathBuf::from("plan.json"));
                assert!(output.is_none());
                assert_eq!(schema.choice(), Some(true));
                assert!(compact);
            }
            _ => panic!("expected export"),
        }
    }

    #[test]
    fn test_parse_global_verbose() {
        let cli = Cli::parse_from(["patrol-designer", "preview", "plan.json", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_parse_config() {
        let cli = Cli::parse_from(["patrol-designer", "config", "--set-token", "pk.x", "--show"]);
        match cli.command {
            Commands::Config { set_token, clear_token, set_media, show } => {
                assert_eq!(set_token.as_deref(), Some("pk.x"));
                assert!(!clear_token);
                assert!(set_media.is_none());
                assert!(show);
            }
            _ => panic!("expected config"),
        }
    }

    #[test]
    fn test_parse_no_media_overrides() {
        let cli = Cli::parse_from(["patrol-designer", "export", "plan.json", "--no-media"]);
        match cli.command {
            Commands::Export { schema, .. } => assert_eq!(schema.choice(), Some(false)),
            _ => panic!("expected export"),
        }

        let cli = Cli::parse_from(["patrol-designer", "new"]);
        match cli.command {
            Commands::New { schema, .. } => assert_eq!(schema.choice(), None),
            _ => panic!("expected new"),
        }
    }

    #[test]
    fn test_media_flags_conflict() {
        let result =
            Cli::try_parse_from(["patrol-designer", "edit", "plan.json", "--media", "--no-media"]);
        assert!(result.is_err());
    }
}
