use clap::Parser;
use report::{fetch_or_cached, HttpReportSource, ReportConfig};
use std::io;
use std::path::PathBuf;
use tracing::info;
use triage::{reconcile, render, scan};

/// Lists the remaining failing compatibility tests by size, so the
/// largest (highest-effort) ones surface first. Expects the test corpus
/// to be checked out next to the working directory, under
/// `../gnu/tests/<suite>/<script>`.
#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "List remaining failing compatibility tests by size")]
struct Cli {
    /// Root of the on-disk test corpus
    #[arg(long, default_value = "../gnu/tests")]
    tests_dir: PathBuf,

    /// URL of the aggregated result report
    #[arg(
        long,
        default_value = "https://raw.githubusercontent.com/uutils/coreutils-tracking/main/aggregated-result.json"
    )]
    report_url: String,

    /// Local fallback copy of the report, overwritten on successful fetch
    #[arg(long, default_value = "result.json")]
    cache: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = ReportConfig::new()
        .with_url(cli.report_url)
        .with_cache_path(cli.cache);
    let source = HttpReportSource::new(&config)?;

    let report = fetch_or_cached(&source, &config.cache_path).await?;
    info!(
        "Report covers {} suites, {} entries",
        report.suite_count(),
        report.entry_count()
    );

    let corpus = scan(&cli.tests_dir)?;
    info!(
        "Found {} test scripts under {}",
        corpus.len(),
        cli.tests_dir.display()
    );

    let reconciliation = reconcile(&cli.tests_dir, &corpus, &report)?;
    render(&mut io::stdout().lock(), &reconciliation)?;

    Ok(())
}
