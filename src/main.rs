use clap::{Args, Parser, Subcommand};
use goodfood_scrape::table::{write_detail_table, write_url_table};
use goodfood_scrape::{PageRange, Scraper, ScraperConfig, Strategy};
use log::info;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "goodfood-scrape", version, about = "Scrape recipe listings and recipe details into CSV tables")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write recipe URLs found on the listing pages to a CSV file
    Urls(SweepArgs),
    /// Write the details of every recipe found on the listing pages to a CSV file
    Details {
        #[command(flatten)]
        sweep: SweepArgs,
        /// Infer raw ingredient names with the ingredient parser instead of fragment scoring
        #[arg(long)]
        precise: bool,
    },
}

#[derive(Args)]
struct SweepArgs {
    /// First listing page (1-based)
    #[arg(long)]
    start: u32,
    /// Last listing page, inclusive
    #[arg(long)]
    end: u32,
    /// CSV file to write
    #[arg(short, long)]
    output: PathBuf,
    /// Overwrite the output file if it already exists
    #[arg(long)]
    force: bool,
    /// Maximum number of pages fetched at once
    #[arg(long)]
    concurrency: Option<usize>,
}

impl SweepArgs {
    fn open_output(&self) -> Result<BufWriter<File>, Box<dyn std::error::Error>> {
        if self.output.exists() && !self.force {
            return Err(format!(
                "{} already exists; pass --force to overwrite it",
                self.output.display()
            )
            .into());
        }
        Ok(BufWriter::new(File::create(&self.output)?))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = ScraperConfig::load()?;

    match cli.command {
        Command::Urls(sweep) => {
            let range = PageRange::new(sweep.start, sweep.end)?;
            let scraper = build_scraper(config, &sweep, None)?;
            let output = sweep.open_output()?;

            let urls = sorted(scraper.collect_recipe_urls(range).await);
            info!("Writing URLs to file {}", sweep.output.display());
            write_url_table(output, &urls)?;
            println!("Recipe URLs successfully written to {}", sweep.output.display());
        }
        Command::Details { sweep, precise } => {
            let range = PageRange::new(sweep.start, sweep.end)?;
            let strategy = precise.then_some(Strategy::Parser);
            let scraper = build_scraper(config, &sweep, strategy)?;
            let output = sweep.open_output()?;

            let urls = sorted(scraper.collect_recipe_urls(range).await);
            let records = scraper.collect_recipe_details(urls).await;
            write_detail_table(output, &records)?;
            println!("Recipe details successfully written to {}", sweep.output.display());
        }
    }

    Ok(())
}

fn sorted(urls: HashSet<String>) -> Vec<String> {
    let mut urls: Vec<String> = urls.into_iter().collect();
    urls.sort();
    urls
}

fn build_scraper(
    config: ScraperConfig,
    sweep: &SweepArgs,
    strategy: Option<Strategy>,
) -> Result<Scraper, goodfood_scrape::ScrapeError> {
    let mut builder = Scraper::builder().config(config);
    if let Some(concurrency) = sweep.concurrency {
        builder = builder.max_concurrency(concurrency);
    }
    if let Some(strategy) = strategy {
        builder = builder.strategy(strategy);
    }
    builder.build()
}
