use std::io::stdout;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::eyre;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};

use singo_dashboard::app::App;
use singo_dashboard::config::DashboardConfig;
use singo_dashboard::event::EventHandler;
use singo_dashboard::model::{Category, Institution};
use singo_dashboard::store::open_store;
use singo_dashboard::theme::Theme;

/// 신GO! dashboard: review and triage school reports from the terminal.
#[derive(Parser, Debug)]
#[command(name = "singo-dashboard", version, about)]
struct Cli {
    /// Seed file with reports (JSON or YAML). Built-in data when omitted.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Tab shown after login: facility, school-life or inquiry
    #[arg(long, default_value = "facility")]
    tab: String,

    /// Email domain accepted at login
    #[arg(long, default_value = "dgsw.hs.kr")]
    domain: String,

    /// Institution name shown in login errors
    #[arg(long, default_value = "DGSW")]
    institution: String,

    /// Simulated login latency in milliseconds
    #[arg(long, default_value_t = 1000)]
    login_delay_ms: u64,

    /// Colour theme: school or terminal
    #[arg(long, default_value = "school")]
    theme: String,
}

impl Cli {
    fn into_config(self) -> color_eyre::Result<DashboardConfig> {
        let start_tab = Category::from_str_loose(&self.tab)
            .ok_or_else(|| eyre!("unknown tab '{}'", self.tab))?;
        let theme =
            Theme::from_name(&self.theme).ok_or_else(|| eyre!("unknown theme '{}'", self.theme))?;
        Ok(DashboardConfig {
            data: self.data,
            start_tab,
            institution: Institution::new(self.institution, self.domain),
            login_delay: Duration::from_millis(self.login_delay_ms),
            theme,
        })
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config = Cli::parse().into_config()?;

    // Set up logging to file (we own the terminal)
    let log_dir = DashboardConfig::log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "dashboard.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("singo_dashboard=info".parse()?),
        )
        .init();

    // Fail before touching the terminal if the seed is unusable
    let store = open_store(config.data.as_deref())?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    // Set up terminal with mouse capture enabled
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = ratatui::init();

    // Run the app
    let events = EventHandler::new();
    let mut app = App::new(Arc::new(store), &config, events.sender());
    let result = app.run(&mut terminal, events).await;

    // Restore terminal; disable mouse capture before restoring
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    ratatui::restore();

    result
}
