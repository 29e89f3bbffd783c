use std::io::{self, Write};
use tracing::{error, info};

use yt_comments_fetcher::core::config::AppConfig;
use yt_comments_fetcher::ui::{run_once, run_session};
use yt_comments_fetcher::utils::logging::init_tracing;
use yt_comments_fetcher::{AppState, NAME, VERSION};

const USAGE: &str = "Usage: yt-comments [<url> [--save]]";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // .env 中的 YOUTUBE_API_KEY
    dotenv::dotenv().ok();

    let mut save = false;
    let mut url = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--save" | "-s" => save = true,
            "--help" | "-h" => {
                println!("{}", USAGE);
                return Ok(());
            }
            _ if url.is_none() => url = Some(arg),
            _ => {
                eprintln!("{}", USAGE);
                std::process::exit(2);
            }
        }
    }

    let config = AppConfig::load()?;
    init_tracing(&config.log_level);
    info!("🚀 {} v{} starting", NAME, VERSION);

    if let Err(e) = config.validate() {
        error!("❌ Invalid configuration: {:#}", e);
        eprintln!("Configuration error: {:#}", e);
        std::process::exit(1);
    }

    let mut state = AppState::new(config)?;
    let stdout = io::stdout();

    match url {
        Some(url) => {
            let ok = run_once(&mut state, &url, save, stdout.lock()).await?;
            stdout.lock().flush()?;
            if !ok {
                std::process::exit(1);
            }
        }
        None => {
            let stdin = io::stdin();
            run_session(&mut state, stdin.lock(), stdout.lock()).await?;
        }
    }

    Ok(())
}
