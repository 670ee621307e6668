use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use inventory_allocator::fulfillment::{is_fulfilled, shortfall};
use inventory_allocator::reporting::{
    allocations_to_json, display_allocations, display_scenario, display_unfulfilled,
};
use inventory_allocator::scenario::{load_scenario, ScenarioGenerator};
use inventory_allocator::{Error, InventoryAllocator};
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

/// Allocate an order across warehouses listed in priority order
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("source").required(true).args(["input", "random"])))]
struct Args {
    /// Scenario JSON file: {"warehouses": [{"name", "inventory"}], "order": {item: qty}}
    #[arg(long, env = "ALLOCATOR_INPUT")]
    input: Option<PathBuf>,

    /// Generate a random scenario instead of reading one
    #[arg(long)]
    random: bool,

    /// Number of warehouses in a random scenario
    #[arg(long, default_value_t = 5)]
    warehouses: usize,

    /// Number of ordered items in a random scenario
    #[arg(long, default_value_t = 4)]
    items: usize,

    /// Mean stock per warehouse listing in a random scenario
    #[arg(long, default_value_t = 50.0)]
    mean_stock: f64,

    /// Mean requested quantity per item in a random scenario
    #[arg(long, default_value_t = 80.0)]
    mean_demand: f64,

    /// Seed for reproducible random scenarios
    #[arg(long)]
    seed: Option<u64>,

    /// Print the allocation as JSON instead of a report
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) -> Result<(), Error> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .finish(),
    )?;
    Ok(())
}

/// How an allocation run ended, mapped onto the process exit status
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Outcome {
    Fulfilled,
    Unsatisfiable,
}

impl Outcome {
    fn status(self) -> u8 {
        match self {
            Outcome::Fulfilled => 0,
            Outcome::Unsatisfiable => 2,
        }
    }
}

fn run(args: &Args) -> anyhow::Result<Outcome> {
    let scenario = match &args.input {
        Some(path) => load_scenario(path)
            .with_context(|| format!("failed to load scenario from {}", path.display()))?,
        None => {
            let defaults = ScenarioGenerator::default();
            let generator = ScenarioGenerator {
                warehouses: args.warehouses,
                items: args.items,
                stock_std_dev: args.mean_stock * 0.5,
                mean_stock: args.mean_stock,
                demand_std_dev: args.mean_demand * 0.25,
                mean_demand: args.mean_demand,
                ..defaults
            };
            generator
                .generate_seeded(args.seed)
                .context("failed to generate random scenario")?
        }
    };

    let allocator = InventoryAllocator::new(scenario.warehouses.clone());
    let allocations = allocator.allocate_order(&scenario.order);
    let fulfilled = is_fulfilled(&scenario.order, &allocations);
    info!(fulfilled, shipments = allocations.len(), "allocation finished");

    if args.json {
        println!("{}", allocations_to_json(&allocations, true)?);
    } else {
        display_scenario(&scenario);
        if fulfilled {
            display_allocations(&allocations);
        } else {
            display_unfulfilled(&shortfall(allocator.warehouses(), &scenario.order));
        }
    }

    if fulfilled {
        Ok(Outcome::Fulfilled)
    } else {
        warn!("order could not be fully allocated");
        Ok(Outcome::Unsatisfiable)
    }
}

// Load and parse errors surface as `Err`, which exits with status 1
fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose)?;
    Ok(ExitCode::from(run(&args)?.status()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fixture(name: &str) -> String {
        format!("{}/tests/data/{}", env!("CARGO_MANIFEST_DIR"), name)
    }

    fn args(extra: &[&str]) -> Args {
        let argv = std::iter::once("inventory-allocator").chain(extra.iter().copied());
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_fulfilled_scenario() {
        let outcome = run(&args(&["--input", &fixture("complex_split.json")])).unwrap();
        assert_eq!(outcome, Outcome::Fulfilled);
        assert_eq!(outcome.status(), 0);
    }

    #[test]
    fn test_fulfilled_scenario_as_json() {
        let outcome =
            run(&args(&["--input", &fixture("complex_split.json"), "--json"])).unwrap();
        assert_eq!(outcome, Outcome::Fulfilled);
    }

    #[test]
    fn test_insufficient_stock_is_unsatisfiable() {
        let outcome = run(&args(&["--input", &fixture("insufficient.json")])).unwrap();
        assert_eq!(outcome, Outcome::Unsatisfiable);
        assert_eq!(outcome.status(), 2);

        let outcome =
            run(&args(&["--input", &fixture("insufficient.json"), "--json"])).unwrap();
        assert_eq!(outcome, Outcome::Unsatisfiable);
    }

    #[test]
    fn test_unlisted_zero_item_is_unsatisfiable() {
        let outcome = run(&args(&["--input", &fixture("unlisted_zero.json")])).unwrap();
        assert_eq!(outcome, Outcome::Unsatisfiable);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = run(&args(&["--input", &fixture("missing.json")])).unwrap_err();
        assert!(err.to_string().contains("failed to load scenario"));
    }

    #[test]
    fn test_random_scenario_runs() {
        assert!(run(&args(&["--random", "--seed", "7", "--json"])).is_ok());
        assert!(run(&args(&["--random", "--mean-demand=-1"])).is_err());
    }

    #[test]
    fn test_requires_a_source() {
        assert!(Args::try_parse_from(["inventory-allocator", "--json"]).is_err());
        assert!(
            Args::try_parse_from(["inventory-allocator", "--random", "--input", "x.json"])
                .is_err()
        );
    }
}
