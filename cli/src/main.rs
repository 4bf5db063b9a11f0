mod render;
mod settings;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use filter_builder_client::{FormSession, StaticToken, SynopsisClient, TokenProvider, UserClient};
use filter_builder_core::{FilterAction, FilterState, FormConfig, FormPhase, IconSet};

use render::Renderer;
use settings::Overrides;

#[derive(Parser, Debug)]
#[command(author, version, about = "Build filters against a dataset synopsis")]
struct Cli {
    /// Config file path
    #[arg(short, long, env = "FILTER_BUILDER_CONFIG")]
    config: Option<String>,

    /// Synopsis endpoint URL
    #[arg(long)]
    endpoint: Option<String>,

    /// Account API base URL
    #[arg(long)]
    api_base: Option<String>,

    /// Bearer token for the synopsis service
    #[arg(long, env = "FILTER_BUILDER_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Attempts per synopsis fetch
    #[arg(long)]
    attempts: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and print the dataset synopsis
    Synopsis,

    /// Show the signed-in user
    Whoami,

    /// Fetch the synopsis, apply filter actions and print the form
    Build {
        /// JSON file with an array of actions
        #[arg(long)]
        actions: Option<PathBuf>,

        /// Add a filter for a column (repeatable)
        #[arg(long = "add")]
        add: Vec<String>,

        /// Print the filters as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_actions(path: &Path) -> Result<Vec<FilterAction>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let actions = serde_json::from_str(&text)
        .with_context(|| format!("Invalid action list in {}", path.display()))?;
    Ok(actions)
}

async fn load_form(config: &FormConfig, tokens: &StaticToken) -> Result<FormSession> {
    let client = SynopsisClient::from_config(&config.client);
    let session = FormSession::new();
    session.load_synopsis(&client, tokens).await;

    let state = session.state();
    if let FormPhase::Failed(err) = state.phase() {
        print!("{}", Renderer::new(IconSet::standard()).render(&state));
        bail!("Synopsis request failed: {}", err);
    }
    Ok(session)
}

fn unknown_columns<'a>(state: &FilterState, actions: &'a [FilterAction]) -> Vec<&'a str> {
    actions
        .iter()
        .filter_map(|action| match action {
            FilterAction::FilterAdded(header) => Some(header.as_str()),
            _ => None,
        })
        .filter(|header| {
            state
                .synopsis
                .as_ref()
                .and_then(|synopsis| synopsis.column(header))
                .is_none()
        })
        .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let overrides = Overrides {
        endpoint: cli.endpoint.clone(),
        api_base: cli.api_base.clone(),
        attempts: cli.attempts,
    };
    let config = settings::load(cli.config.as_deref(), &overrides)?;
    init_logging(&config.log_level);

    tracing::debug!("Using synopsis endpoint {}", config.client.synopsis_url);

    let tokens = StaticToken::new(cli.token.clone().unwrap_or_default());
    let renderer = Renderer::new(IconSet::standard());

    match cli.command {
        Command::Synopsis => {
            let session = load_form(&config, &tokens).await?;
            let state = session.state();
            if let FormPhase::Ready(synopsis) = state.phase() {
                print!("{}", renderer.render_synopsis(synopsis));
            }
        }
        Command::Whoami => {
            let token = tokens.access_token().await?;
            let user = UserClient::from_config(&config.client).current_user(&token).await?;
            println!("{} <{}>", user.id, user.email);
        }
        Command::Build { actions, add, json } => {
            let session = load_form(&config, &tokens).await?;

            let mut script = match &actions {
                Some(path) => read_actions(path)?,
                None => Vec::new(),
            };
            script.extend(add.into_iter().map(FilterAction::FilterAdded));
            for header in unknown_columns(&session.state(), &script) {
                warn!("Column '{}' is not in the synopsis", header);
            }

            for action in script {
                session.dispatch(action);
            }

            let state = session.state();
            if json {
                println!("{}", serde_json::to_string_pretty(&state.filters)?);
            } else {
                print!("{}", renderer.render(&state));
            }
        }
    }

    Ok(())
}
