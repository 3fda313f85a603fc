use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use printdock::cli::{render_text, Cli, Command, TerminalPrompt};
use printdock::client::{read_upload_files, HttpBackend};
use printdock::config::{self, LoggingConfig};
use printdock::dispatch::{Action, ActionDispatcher};
use printdock::prompt::{AssumeYes, Prompt};
use printdock::state::AppState;
use printdock::tasks::TokioPause;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration (embedded defaults -> printdock.toml -> env/.env)
    let mut app_cfg = config::load()?;
    if let Some(url) = &cli.url {
        app_cfg.backend.base_url = url.clone();
        config::validate(&app_cfg)?;
    }

    let _log_guards = init_logging(&app_cfg.logging);
    for warning in config::warnings(&app_cfg) {
        warn!("{}", warning);
    }
    info!("using print service at {}", app_cfg.backend.base_url);

    let backend = HttpBackend::new(app_cfg.backend.clone())?;
    let prompt: Box<dyn Prompt> = if cli.yes { Box::new(AssumeYes) } else { Box::new(TerminalPrompt) };
    let dispatcher = ActionDispatcher::new(&backend, prompt.as_ref(), &TokioPause, &app_cfg.ui);

    let mut state = AppState::new(app_cfg.ui.clone());
    if !state.store.reload(&backend).await {
        anyhow::bail!("could not load history from {}", app_cfg.backend.base_url);
    }
    state.select_filter(cli.command.filter());

    match &cli.command {
        Command::History { expand, .. } => {
            print!("{}", render_text(state.view(), *expand));
        }
        Command::Upload { folder, paths } => {
            let files = read_upload_files(paths)?;
            if let Err(e) = state.upload.accept(files) {
                prompt.alert(&e.user_message());
                anyhow::bail!("no PDF files given");
            }
            state.upload.folder_input = folder.clone().unwrap_or_default();
            dispatcher.dispatch(&mut state, Action::Upload).await;
            print!("{}", render_text(state.view(), false));
        }
        other => {
            if let Some(action) = other.action() {
                dispatcher.dispatch(&mut state, action).await;
            }
        }
    }

    Ok(())
}

/// stderr plus, if configured, a daily rotated file. The returned guards must
/// stay alive so the non-blocking writers flush.
fn init_logging(cfg: &LoggingConfig) -> Vec<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cfg.filter.as_str().into());
    let (stderr_nb, stderr_guard) = tracing_appender::non_blocking(std::io::stderr());
    let mut guards = vec![stderr_guard];

    let file_layer = cfg.dir.as_ref().and_then(|dir| {
        std::fs::create_dir_all(dir).ok()?;
        let file_appender = tracing_appender::rolling::daily(dir, "printdock.log");
        let (file_nb, file_guard) = tracing_appender::non_blocking(file_appender);
        guards.push(file_guard);
        Some(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(file_nb))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(stderr_nb))
        .with(file_layer)
        .init();
    guards
}
