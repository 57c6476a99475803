use clap::Parser;
use patrol_designer::{cli, config, delivery, io, session};
use patrol_designer::error::{PatrolError, Result};
use patrol_designer_common::preview::{render_text, summarize};
use patrol_designer_common::{deliver_export, AccessToken, ExportOptions, PlanStore, EXPORT_FILE_NAME};
use cli::{Cli, Commands};
use config::{Config, ConfigStorage};
use std::path::{Path, PathBuf};

fn require_plan(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(PatrolError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    patrol_designer::init_logging(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::New { output, schema } => {
            let output = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME));
            let store = PlanStore::new();
            io::save_plan(&output, &store, &config.export_options(schema.choice()))?;
            println!("✔ New plan: {}", output.display());
        }

        Commands::Edit { input, output, schema } => {
            let options = config.export_options(schema.choice());
            session::run_interactive_edit(&input, output.as_deref(), options)?;
        }

        Commands::Export { input, output, schema, compact } => {
            require_plan(&input)?;
            let store = io::load_plan(&input)?;
            let options = ExportOptions {
                compact,
                ..config.export_options(schema.choice())
            };

            let mut sink = match &output {
                Some(path) => delivery::TerminalSink::to_file(path.clone()),
                None => delivery::TerminalSink::stdout(),
            };
            let mode = sink.mode();
            let notice = deliver_export(&store, &options, &mut sink, mode);
            if !notice.ok {
                eprintln!("✗ {}", notice.message);
                return Err(PatrolError::Delivery(notice.message));
            }
            if let Some(path) = output {
                println!("✔ Exported {} position(s): {}", store.len(), path.display());
            }
        }

        Commands::Preview { input } => {
            require_plan(&input)?;
            let store = io::load_plan(&input)?;
            print!("{}", render_text(&summarize(store.positions())));
        }

        Commands::Config { set_token, clear_token, set_media, show } => {
            let mut token = AccessToken::load(ConfigStorage::open_default()?);

            if let Some(value) = set_token {
                token.set(value)?;
                println!("✔ Token saved");
            }

            if clear_token {
                token.clear()?;
                println!("✔ Token cleared");
            }

            if let Some(media) = set_media {
                let mut config = Config::load()?;
                config.include_media_fields = media;
                config.save()?;
                println!("✔ Media fields {}", if media { "on" } else { "off" });
            }

            if show {
                let config = Config::load()?;
                println!("Settings:");
                println!("  Path: {}", Config::config_path()?.display());
                println!("  Mapbox token: {}", if token.is_set() { "set" } else { "not set" });
                println!("  Media fields: {}", if config.include_media_fields { "on" } else { "off" });
            }
        }
    }

    Ok(())
}
