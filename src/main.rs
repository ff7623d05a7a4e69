use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::time::Instant;

mod app;
mod config;
mod controller;
mod error;
mod help;
mod input;
mod notification;
mod results;
mod reveal;
mod scroll;
mod service;
mod status;
#[cfg(test)]
mod test_utils;
mod theme;
mod widgets;

use app::App;
use config::Config;
use error::TapqError;

/// Query-and-answer terminal front end
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal search box that streams answers from a query service"
)]
struct Args {
    /// Query to submit on start
    query: Option<String>,

    /// Base URL of the answer service (overrides the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Answer with the built-in mock service instead of the network
    #[arg(long)]
    offline: bool,
}

fn main() -> Result<()> {
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/tapq-debug.log")?;

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== TAPQ DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    let mut config_result = config::load_config();
    apply_args(&mut config_result.config, &args)?;

    let app = App::new(&config_result.config)?;

    let terminal = init_terminal()?;
    let result = run(terminal, app, config_result, args.query);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== TAPQ DEBUG SESSION ENDED ===");

    Ok(())
}

/// Apply command line overrides on top of the loaded config
fn apply_args(config: &mut Config, args: &Args) -> Result<(), TapqError> {
    if let Some(endpoint) = &args.endpoint {
        validate_endpoint(endpoint)?;
        config.service.url = endpoint.trim_end_matches('/').to_string();
    }
    if args.offline {
        config.service.offline = true;
    }
    Ok(())
}

/// Endpoint must be an absolute http(s) URL
fn validate_endpoint(endpoint: &str) -> Result<(), TapqError> {
    let invalid = |message: String| TapqError::InvalidEndpoint {
        url: endpoint.to_string(),
        message,
    };

    let url = reqwest::Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(invalid(format!("unsupported scheme '{}'", scheme))),
    }
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_result: config::ConfigResult,
    initial_query: Option<String>,
) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    setup_answer_worker(&mut app, &config_result.config);

    if let Some(query) = initial_query {
        app.input.set_text(&query);
        app.submit_query(Instant::now());
    }

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Set up the answer worker thread and channels
fn setup_answer_worker(app: &mut App, config: &Config) {
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.controller.set_channels(request_tx, response_rx);

    service::worker::spawn_worker(&config.service, request_rx, response_tx);
}
