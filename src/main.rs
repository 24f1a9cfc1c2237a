use argh::FromArgs;
use photo_match::config::{LoggingSettings, Settings};
use photo_match::{filter_photos, MatchClient, MatchOutcome, MatchRequest};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(FromArgs)]
/// Find the event photos you appear in
struct Args {
    /// path to a config file (defaults to config/default.toml + env)
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    FindMe(FindMeCommand),
    Photos(PhotosCommand),
}

#[derive(FromArgs)]
/// Upload a selfie and list the gallery photos it matches
#[argh(subcommand, name = "find-me")]
struct FindMeCommand {
    /// path or file:// URI of the selfie
    #[argh(option, short = 'i')]
    image: String,
}

#[derive(FromArgs)]
/// List the photos in the gallery
#[argh(subcommand, name = "photos")]
struct PhotosCommand {}

fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    if logging.format == "json" {
        subscriber.json().init();
    } else {
        subscriber.pretty().init();
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let args: Args = argh::from_env();

    let settings = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    init_logging(&settings.logging);
    info!("Configuration loaded, backend at {}", settings.backend.base_url);

    let client = MatchClient::from_settings(&settings.backend)?;

    match args.command {
        Command::FindMe(cmd) => {
            let outcome = MatchOutcome::from_result(
                client.find_me(MatchRequest::from_uri(&cmd.image)).await,
            );

            println!("{}: {}", outcome.title(), outcome.message());

            if let Some(ids) = outcome.filter() {
                // The gallery is only needed to show what matched
                match client.list_photos().await {
                    Ok(photos) => {
                        let matched = filter_photos(&photos, ids);
                        println!("{}", serde_json::to_string_pretty(&matched)?);
                    }
                    Err(e) => {
                        error!("Failed to fetch gallery: {}", e);
                        println!("{}", serde_json::to_string_pretty(ids)?);
                    }
                }
            }

            if let MatchOutcome::Failed(e) = outcome {
                error!("Lookup failed: {}", e);
                std::process::exit(1);
            }
        }
        Command::Photos(_) => {
            let photos = client.list_photos().await?;
            println!("{}", serde_json::to_string_pretty(&photos)?);
        }
    }

    Ok(())
}
