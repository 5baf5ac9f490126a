use folio::app::{App, Platform};
use folio::cli::{parse_args, run_cli_command, CliCommand, RunOptions, USAGE};
use folio::startup::{init_logging, FolioConfig};
use folio::terminal::{setup_panic_hook, TerminalManager};
use folio::ui;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::Terminal;
use std::time::{Duration, Instant};

/// Tick interval for expiring notifications.
const TICK: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    color_eyre::install()?;

    let command = match parse_args(std::env::args()) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };
    if run_cli_command(&command) {
        return Ok(());
    }
    let CliCommand::Run(options) = command else {
        return Ok(());
    };

    if let Some(path) = init_logging() {
        eprintln!("Logging to {}", path.display());
    }

    let app = build_app(&options)?;

    setup_panic_hook();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        let mut manager = TerminalManager::new()?;
        let mut app = app;
        let result = run_app(manager.terminal(), &mut app).await;
        manager.restore()?;
        result
    })
}

/// Load the config and create the app, applying the initial fragment.
fn build_app(options: &RunOptions) -> Result<App> {
    let explicit = options.config_path.clone().or_else(FolioConfig::path_from_env);
    let config = FolioConfig::load_or_default(explicit.as_deref())
        .map_err(|e| eyre!(e.user_message()))?;

    let mut app = App::from_config(config, Platform::system())
        .map_err(|e| eyre!(e.user_message()))?;
    if let Some(section) = &options.section {
        app.apply_fragment(section);
    }
    Ok(app)
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut tick = tokio::time::interval(TICK);

    loop {
        // Draw only when something changed
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &mut *app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tick.tick() => {
                app.tick(Instant::now());
            }
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => app.handle_event(event),
                    Some(Err(e)) => {
                        tracing::error!("Terminal event error: {}", e);
                        return Err(e.into());
                    }
                    None => break,
                }
            }
        }

        if app.should_quit {
            tracing::info!("Quit requested");
            break;
        }
    }

    Ok(())
}
