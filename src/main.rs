mod common;
mod config;
mod network;
mod ui;

use std::error::Error;

use clap::Parser;
use dotenvy::dotenv;
use network::{ChatClient, HttpTransport};
use tokio::sync::mpsc;
use ui::ChatApp;

use config::AppConfig;

#[derive(Parser)]
#[command(
    name = "http_chat",
    version,
    about = "Desktop client for a polling HTTP chat server"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Chat server URL, overriding the config file
    #[arg(long, value_name = "URL")]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    let mut app_config = config::load_config(&cli.config);
    if let Some(server) = cli.server {
        app_config.server_url = server;
    }

    let transport = HttpTransport::new(&app_config.server_url)
        .map_err(|err| format!("invalid server URL `{}`: {err}", app_config.server_url))?;

    run_client(transport, app_config).await
}

async fn run_client(transport: HttpTransport, app_config: AppConfig) -> Result<(), Box<dyn Error>> {
    // UI -> Network
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Network -> UI, unbounded so polling never waits on the UI
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    log::info!("Polling {}", transport.messages_url());
    let poll_interval = app_config.poll_interval();
    tokio::spawn(async move {
        ChatClient::new(transport, event_tx, cmd_rx, poll_interval)
            .run()
            .await;
    });

    // The UI owns the main thread.
    let options = eframe::NativeOptions::default();
    let mut event_rx = Some(event_rx);
    let scroll_animation = app_config.scroll_animation();

    eframe::run_native(
        "HTTP Chat",
        options,
        Box::new(move |cc| {
            let event_receiver = event_rx
                .take()
                .ok_or("ChatApp should only be initialized once")?;

            Ok(Box::new(ChatApp::new(
                cc,
                cmd_tx.clone(),
                event_receiver,
                scroll_animation,
            )))
        }),
    )?;

    Ok(())
}
