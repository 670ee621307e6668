/// Scenario module
/// Loads warehouse/order scenarios from JSON and generates random ones for demos

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use tracing::{debug, info};
use crate::error::{Error, Result};
use crate::models::{Order, Scenario, Warehouse};

const ITEM_NAMES: &[&str] = &[
    "apple", "ball", "cake", "coke", "fanta", "pie", "sprite", "trolldolls",
];

/// Parse a scenario from its JSON text
pub fn parse_scenario(json: &str) -> Result<Scenario> {
    let scenario: Scenario = serde_json::from_str(json)?;
    Ok(scenario)
}

/// Read and parse a scenario file
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let json = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario = parse_scenario(&json)?;
    info!(
        path = %path.display(),
        warehouses = scenario.warehouses.len(),
        items = scenario.order.len(),
        "loaded scenario"
    );
    Ok(scenario)
}

/// Random scenario parameters.
/// Stock and demand are drawn from normal distributions around the given means.
#[derive(Clone, Debug)]
pub struct ScenarioGenerator {
    pub warehouses: usize,
    pub items: usize,
    pub mean_stock: f64,
    pub stock_std_dev: f64,
    pub mean_demand: f64,
    pub demand_std_dev: f64,
    /// Probability that a warehouse lists a given item at all
    pub stocking_rate: f64,
}

impl Default for ScenarioGenerator {
    fn default() -> Self {
        ScenarioGenerator {
            warehouses: 5,
            items: 4,
            mean_stock: 50.0,
            stock_std_dev: 25.0,
            mean_demand: 80.0,
            demand_std_dev: 20.0,
            stocking_rate: 0.7,
        }
    }
}

impl ScenarioGenerator {
    /// Generate a scenario, reproducible when a seed is given
    pub fn generate_seeded(&self, seed: Option<u64>) -> Result<Scenario> {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate(&mut rng)
    }

    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<Scenario> {
        if !(0.0..=1.0).contains(&self.stocking_rate) {
            return Err(Error::InvalidScenario(format!(
                "stocking rate {} is outside [0, 1]",
                self.stocking_rate
            )));
        }
        let stock = BoundedNormal::new("stock", self.mean_stock, self.stock_std_dev)?;
        let demand = BoundedNormal::new("demand", self.mean_demand, self.demand_std_dev)?;

        let items: Vec<String> = (0..self.items).map(item_name).collect();

        let mut warehouses: Vec<Warehouse> = Vec::with_capacity(self.warehouses);
        for n in 1..=self.warehouses {
            let mut warehouse = Warehouse {
                name: format!("w{n}"),
                inventory: Default::default(),
            };
            for item in &items {
                if rng.gen_bool(self.stocking_rate) {
                    warehouse.inventory.insert(item.clone(), stock.sample(rng));
                }
            }
            warehouses.push(warehouse);
        }

        let mut order = Order::new();
        for item in &items {
            order.insert(item.clone(), demand.sample(rng));
        }

        debug!(
            warehouses = warehouses.len(),
            items = order.len(),
            "generated random scenario"
        );
        Ok(Scenario { warehouses, order })
    }
}

fn item_name(index: usize) -> String {
    match ITEM_NAMES.get(index) {
        Some(name) => name.to_string(),
        None => format!("item{}", index + 1),
    }
}

/// Normal distribution clamped to [0, mean + 3 std dev]
struct BoundedNormal {
    normal: Normal<f64>,
    max: f64,
}

impl BoundedNormal {
    fn new(what: &str, mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() || mean < 0.0 {
            return Err(Error::InvalidScenario(format!(
                "mean {what} must be non-negative, got {mean}"
            )));
        }
        let normal = Normal::new(mean, std_dev)
            .map_err(|e| Error::InvalidScenario(format!("{what} distribution: {e}")))?;
        Ok(BoundedNormal {
            normal,
            max: mean + 3.0 * std_dev,
        })
    }

    fn sample<R: Rng>(&self, rng: &mut R) -> i64 {
        let value = self.normal.sample(rng);
        // Cap at 3 standard deviations above mean to prevent extreme outliers
        value.max(0.0).min(self.max).round() as i64
    }
}
