mod app;
mod config;
mod model;
mod store;
mod ui;

use tracing_subscriber::EnvFilter;

pub fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    iced::application("Script Runner", app::update, app::view)
        .subscription(app::subscription)
        .theme(app::theme)
        .window_size((720.0, 820.0))
        .centered()
        .run_with(app::ScriptRunner::boot)
}
