use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use yield_scout::api::{HttpApiClient, InvestmentApi};
use yield_scout::config::Config;
use yield_scout::form::SearchForm;
use yield_scout::history::{self, HistoryPanel, HistoryState};
use yield_scout::models::EvaluationResponse;

#[derive(Parser)]
#[command(
    name = "yield-scout",
    about = "Estimate average rent and gross yields for a property search"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate average rent, then evaluate matching properties
    Search(SearchArgs),
    /// Show recent searches recorded by the backend
    History {
        /// How many entries to fetch
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// City, neighborhood, or ZIP (e.g. "Brooklyn, NY")
    #[arg(long)]
    area: Option<String>,

    #[arg(long)]
    min_price: Option<f64>,

    #[arg(long)]
    max_price: Option<f64>,

    #[arg(long)]
    bedrooms: Option<u32>,

    #[arg(long)]
    min_sqft: Option<f64>,

    #[arg(long)]
    max_sqft: Option<f64>,

    /// Start from the Nth most recent search's criteria (1-based)
    #[arg(long)]
    from_history: Option<usize>,

    /// Evaluate in a single call instead of the rent-first pipeline
    #[arg(long)]
    one_shot: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();
    info!("Using backend at {}", config.api_base_url);
    let client = HttpApiClient::new(&config.api_base_url)?;

    match cli.command {
        Command::Search(args) => run_search(&client, &config, args).await,
        Command::History { limit } => run_history(&client, limit).await,
    }
}

async fn run_search(client: &HttpApiClient, config: &Config, args: SearchArgs) -> Result<()> {
    let mut form = SearchForm::new();

    if let Some(n) = args.from_history {
        let mut panel = HistoryPanel::new();
        panel.load(client, config.history_limit).await;
        match panel.state() {
            HistoryState::Loaded(entries) => {
                let entry = entries
                    .get(n.saturating_sub(1))
                    .ok_or_else(|| anyhow::anyhow!("No history entry #{n} (got {})", entries.len()))?;
                form.apply_history(entry);
                info!("Reusing criteria from {}", entry.params.area);
            }
            HistoryState::Failed(message) => anyhow::bail!("{message}"),
            HistoryState::Loading => unreachable!("load completed above"),
        }
    }

    // Flags override whatever the form starts from.
    if let Some(area) = args.area {
        form.params.area = area;
    }
    if let Some(min_price) = args.min_price {
        form.params.min_price = min_price;
    }
    if let Some(max_price) = args.max_price {
        form.params.max_price = max_price;
    }
    if let Some(bedrooms) = args.bedrooms {
        form.params.bedrooms = bedrooms;
    }
    if let Some(min_sqft) = args.min_sqft {
        form.params.min_sqft = min_sqft;
    }
    if let Some(max_sqft) = args.max_sqft {
        form.params.max_sqft = max_sqft;
    }

    if args.one_shot {
        if let Some(message) = form.validate() {
            anyhow::bail!(message);
        }
        info!("Evaluating in a single call...");
        let evaluation = client.evaluate(&form.params).await?;
        print_evaluation(&evaluation);
        return Ok(());
    }

    info!("Contacting rent agent...");
    let Some(handoff) = form.submit(client).await else {
        // submit stores exactly one message, validation or transport
        anyhow::bail!(form.error.unwrap_or_else(|| "Submission failed".to_string()));
    };

    info!(
        "Average rent {}, evaluating properties with it...",
        history::group_digits(handoff.initial_average_rent)
    );
    let evaluation = client
        .evaluate_with_rent(&handoff.search_params, handoff.initial_average_rent)
        .await?;
    print_evaluation(&evaluation);

    Ok(())
}

fn print_evaluation(evaluation: &EvaluationResponse) {
    println!(
        "Average rent: {} {}/mo",
        history::group_digits(evaluation.average_rent),
        evaluation.currency
    );
    println!("Evaluated {} properties", evaluation.properties.len());
    println!();

    for (i, property) in evaluation.properties.iter().enumerate() {
        println!(
            "{}. {} ({} {})",
            i + 1,
            property.address,
            history::group_digits(property.price),
            evaluation.currency
        );
        println!(
            "   {} br, {} sqft, est. rent ${}/mo, gross yield {}",
            property.bedrooms,
            property.sqft,
            history::group_digits(property.estimated_rent),
            history::format_yield(property.gross_yield)
        );
        if let Some(url) = &property.url {
            println!("   {url}");
        }
        println!();
    }
}

async fn run_history(client: &HttpApiClient, limit: usize) -> Result<()> {
    let mut panel = HistoryPanel::new();
    println!("Loading recent evaluations…");
    panel.load(client, limit).await;

    match panel.state() {
        HistoryState::Loaded(entries) if entries.is_empty() => {
            println!("No previous searches yet.");
        }
        HistoryState::Loaded(entries) => {
            for (i, entry) in entries.iter().enumerate() {
                let lines = history::entry_lines(entry);
                println!("{}. {}", i + 1, lines.criteria);
                println!("   {}", lines.results);
                println!("   {}", lines.when);
            }
        }
        HistoryState::Failed(message) => anyhow::bail!("{message}"),
        HistoryState::Loading => unreachable!("load completed above"),
    }

    Ok(())
}
