mod fetch;
mod output;
mod parser;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::warn;

#[derive(Parser)]
#[command(name = "doc_outline", about = "Extract a module outline from a documentation page")]
struct Cli {
    /// Documentation URL to extract modules from
    url: String,
    /// Path for the JSON output
    #[arg(short, long, default_value = "output.json")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    println!("Fetching content from: {}", cli.url);
    let html = fetch::fetch_page(&cli.url).await?;

    let modules = parser::extract_modules(&html);
    if modules.is_empty() {
        warn!("No modules extracted from {}", cli.url);
        println!("No modules extracted.");
        return Ok(());
    }

    let count = modules.len();
    let report = output::Report::new(&cli.url, modules);
    output::write_report(&report, &cli.output)?;

    println!("Output saved to {}", cli.output.display());
    println!("Extraction complete: {} modules found.", count);

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}
