use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use gdp_chart::api::DEFAULT_DATASET_URL;
use gdp_chart::{ChartConfig, Client, Document};
use gdp_chart::{page, render, snapshot, stats};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gdp-chart",
    version,
    about = "Fetch the US quarterly GDP series and render it as an interactive bar chart"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch the dataset and write the chart page (and optionally a snapshot and stats).
    Render(RenderArgs),
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// URL of the `{ "data": [[date, gdp], ...] }` document.
    #[arg(long, default_value = DEFAULT_DATASET_URL)]
    url: String,
    /// Viewport width the chart is laid out for; the chart takes 90% of it.
    #[arg(long, default_value_t = 1000.0)]
    viewport_width: f64,
    /// Where to write the HTML page.
    #[arg(long, default_value = "gdp-chart.html")]
    out: PathBuf,
    /// Also draw a static image at the given path (.svg or .png).
    #[arg(long)]
    snapshot: Option<PathBuf>,
    /// Print summary statistics of the series to stdout.
    #[arg(long, default_value_t = false)]
    stats: bool,
}

fn fmt_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            // Format up to 4 decimals, then trim trailing zeros and trailing dot.
            let s = format!("{:.4}", x);
            s.trim_end_matches('0').trim_end_matches('.').to_string()
        }
        _ => "NA".to_string(),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let client = Client::with_url(args.url.as_str());
    let config = ChartConfig::default();
    let mut doc = Document::host();

    // Nothing is rendered unless the fetch succeeds.
    let data = client.fetch_dataset()?;
    let chart = render::render_with(&mut doc, &data, args.viewport_width, &config)?;
    let bar_count = chart.bars().len();

    if let Some(path) = args.snapshot.as_ref() {
        snapshot::save_snapshot(&chart, path)?;
        eprintln!("Wrote snapshot to {}", path.display());
    }

    page::write_html(&doc, std::slice::from_ref(&chart), &config.title, &args.out)?;
    eprintln!("Wrote {} bars to {}", bar_count, args.out.display());

    if args.stats {
        let s = stats::summary(&data);
        println!(
            "{} to {}  count={}  min={} max={} mean={} median={}",
            s.first_date.as_deref().unwrap_or("NA"),
            s.last_date.as_deref().unwrap_or("NA"),
            s.count,
            fmt_opt(s.min),
            fmt_opt(s.max),
            fmt_opt(s.mean),
            fmt_opt(s.median)
        );
    }

    Ok(())
}
