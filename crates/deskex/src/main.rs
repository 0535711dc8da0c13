use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;
use deskex_api::{CustomerApi, ReqwestClient};
use tracing::{Level, error, info};
use tracing_subscriber::fmt;

use deskex::cli::App;
use deskex::export::Exporter;
use deskex::prompt;

/// Initialize logging.
///
/// Logs go to stderr so stdout stays clean for the interactive prompt.
fn init_logging(level: Level) {
    fmt::Subscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    let app = App::parse();
    init_logging(app.log_level.into());

    if let Err(e) = run(app).await {
        error!("fatal: {e:#}");
        std::process::exit(1);
    }
}

async fn run(app: App) -> Result<()> {
    println!(
        "Exports customer records (name, phone, email, ticket ids) from the helpdesk API into {}.",
        app.output.display()
    );
    println!(
        "Rate-limited requests back off for 120 seconds, the delay observed to clear the API's Too Many Requests window."
    );
    println!();

    let token = prompt::read_token()?;

    let http = ReqwestClient::new().context("failed to build the HTTP client")?;
    let api = CustomerApi::new(http);

    let file = File::create(&app.output)
        .with_context(|| format!("failed to create {}", app.output.display()))?;
    let mut sink = BufWriter::new(file);

    info!("starting export");
    let stats = Exporter::new(&api, &mut sink).run(&token).await?;
    sink.flush().context("failed to flush the output file")?;

    info!(
        "done: {} customers exported to {}",
        stats.exported,
        app.output.display()
    );
    Ok(())
}
