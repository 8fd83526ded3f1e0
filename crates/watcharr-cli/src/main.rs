use clap::{ArgAction, Parser, Subcommand};
use commands::{auth, config, export, watched};
use watcharr_config::{Config, PathManager};

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "watcharr")]
#[command(about = "Watcharr client - track what you've watched from the terminal")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in to the Watcharr server
    Login {
        /// Username (if not provided, will prompt)
        #[arg(long)]
        username: Option<String>,

        /// Account kind, controls features like the Jellyfin lookup
        #[arg(long, value_enum, default_value = "watcharr")]
        user_type: auth::AccountKind,
    },
    /// Create an account on the Watcharr server
    Register {
        /// Username (if not provided, will prompt)
        #[arg(long)]
        username: Option<String>,
    },
    /// Forget the stored session
    Logout,
    /// Show the watched list
    List,
    /// Add content to the watched list, or change an existing entry
    #[command(long_about = "Add content to the watched list, or change an existing entry. When the content is already tracked only the given fields are updated. Pass --thoughts \"\" to remove existing thoughts.")]
    Set {
        /// TMDB id of the content
        tmdb_id: u64,

        /// movie or tv
        #[arg(value_parser = parse_media_type)]
        media_type: watcharr_models::MediaType,

        /// planned, watching, finished, hold or dropped
        #[arg(long, value_parser = parse_status)]
        status: Option<watcharr_models::WatchedStatus>,

        /// Rating from 1 to 10 (0 leaves the rating unchanged)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
        rating: Option<u8>,

        /// Free-text thoughts (empty string removes them)
        #[arg(long)]
        thoughts: Option<String>,
    },
    /// Remove an entry from the watched list
    Remove {
        /// Watched entry id (see `watcharr list`)
        id: u64,
    },
    /// Check whether your Jellyfin library has some content
    Jellyfin {
        #[arg(value_parser = parse_media_type)]
        media_type: watcharr_models::MediaType,

        /// Content name as shown in TMDB
        name: String,

        /// TMDB id of the content
        tmdb_id: u64,
    },
    /// Export the watched list as JSON, CSV or XML
    #[command(long_about = "Export the watched list. Without --file a data URL is printed, which browsers can open directly.")]
    Export {
        /// json, csv or xml
        #[arg(long, default_value = "json")]
        format: String,

        /// Write the document to this file instead of printing a data URL
        #[arg(long)]
        file: Option<std::path::PathBuf>,
    },
    /// View or change client configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration and session (token is masked)
    Show,
    /// Set the server API base URL (e.g. https://watcharr.example.com/api)
    SetUrl { url: String },
}

fn parse_media_type(s: &str) -> Result<watcharr_models::MediaType, String> {
    s.parse()
}

fn parse_status(s: &str) -> Result<watcharr_models::WatchedStatus, String> {
    s.parse()
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let paths = PathManager::default();
    let config = Config::load_or_default(&paths.config_file())
        .map_err(|e| color_eyre::eyre::eyre!("Failed to load config: {}", e))?;

    logging::init_logging(cli.verbose, cli.quiet, &config.logging)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Login { username, user_type } => auth::run_login(&paths, &config, username, user_type, &output).await,
        Commands::Register { username } => auth::run_register(&paths, &config, username, &output).await,
        Commands::Logout => auth::run_logout(&paths, &output),
        Commands::List => watched::run_list(&paths, &config, &output).await,
        Commands::Set {
            tmdb_id,
            media_type,
            status,
            rating,
            thoughts,
        } => watched::run_set(&paths, &config, tmdb_id, media_type, status, rating, thoughts, &output).await,
        Commands::Remove { id } => watched::run_remove(&paths, &config, id, &output).await,
        Commands::Jellyfin { media_type, name, tmdb_id } => {
            watched::run_jellyfin(&paths, &config, media_type, &name, tmdb_id, &output).await
        }
        Commands::Export { format, file } => export::run_export(&paths, &config, &format, file, &output).await,
        Commands::Config { cmd } => config::run_config(cmd, &paths, config, &output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use watcharr_models::{MediaType, WatchedStatus};

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_set_with_fields() {
        let cli = Cli::try_parse_from([
            "watcharr", "set", "603", "movie", "--status", "finished", "--rating", "9",
        ])
        .unwrap();
        match cli.command {
            Commands::Set {
                tmdb_id,
                media_type,
                status,
                rating,
                thoughts,
            } => {
                assert_eq!(tmdb_id, 603);
                assert_eq!(media_type, MediaType::Movie);
                assert_eq!(status, Some(WatchedStatus::Finished));
                assert_eq!(rating, Some(9));
                assert_eq!(thoughts, None);
            }
            _ => panic!("expected set command"),
        }
    }

    #[test]
    fn test_parse_set_rejects_bad_values() {
        assert!(Cli::try_parse_from(["watcharr", "set", "603", "movie", "--rating", "11"]).is_err());
        assert!(Cli::try_parse_from(["watcharr", "set", "603", "anime"]).is_err());
        assert!(Cli::try_parse_from(["watcharr", "set", "603", "tv", "--status", "paused"]).is_err());
    }

    #[test]
    fn test_rating_zero_is_accepted() {
        let cli = Cli::try_parse_from(["watcharr", "set", "603", "movie", "--rating", "0"]).unwrap();
        assert!(matches!(cli.command, Commands::Set { rating: Some(0), .. }));
    }

    #[test]
    fn test_empty_thoughts_are_accepted() {
        let cli = Cli::try_parse_from(["watcharr", "set", "1399", "tv", "--thoughts", ""]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Set { thoughts: Some(ref t), .. } if t.is_empty()
        ));
    }

    #[test]
    fn test_login_user_type() {
        let cli = Cli::try_parse_from(["watcharr", "login", "--username", "bob", "--user-type", "jellyfin"]).unwrap();
        match cli.command {
            Commands::Login { username, user_type } => {
                assert_eq!(username.as_deref(), Some("bob"));
                assert_eq!(watcharr_models::UserType::from(user_type), watcharr_models::UserType::Jellyfin);
            }
            _ => panic!("expected login command"),
        }
    }
}
