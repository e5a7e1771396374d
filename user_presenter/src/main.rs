use clap::Parser;
use dotenv::dotenv;
use std::{path::PathBuf, sync::Arc, time::Duration};
use tracing_subscriber::EnvFilter;
use user_presenter::{utils, ConsoleView, PresenterConfig, UserPresenter, USERS_ENDPOINT};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Endpoint returning the JSON user list
    #[arg(short, long, env = "USERS_ENDPOINT", default_value = USERS_ENDPOINT)]
    endpoint: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Tap the user at this position after loading
    #[arg(short, long)]
    tap: Option<usize>,

    /// Save the loaded users as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let presenter = UserPresenter::new(PresenterConfig {
        endpoint: args.endpoint,
        timeout: Duration::from_secs(args.timeout_secs),
    })?;
    let view = Arc::new(ConsoleView::new());
    presenter.set_view_delegate(&view);

    presenter.get_users().completed().await;

    let users = view.users();
    if users.is_empty() {
        eprintln!("No users loaded.");
        return Ok(());
    }

    if let Some(path) = args.output {
        utils::save_json(&users, &path)?;
    }

    if let Some(index) = args.tap {
        let user = view
            .user_at(index)
            .ok_or_else(|| format!("no user at index {} ({} loaded)", index, users.len()))?;
        presenter.did_tap(&user);
    }

    Ok(())
}
