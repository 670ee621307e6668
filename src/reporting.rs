/// Reporting and output formatting module
/// Handles all console output and result presentation

use indexmap::IndexMap;
use crate::error::Result;
use crate::models::{Allocation, Scenario};

/// Render allocations as `[{"<warehouse>": {"<item>": qty}}]`
pub fn allocations_to_json(allocations: &[Allocation], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(allocations)?
    } else {
        serde_json::to_string(allocations)?
    };
    Ok(json)
}

/// One line per warehouse: `w2: sprite x2, coke x1 (3 units)`
pub fn format_allocation(allocation: &Allocation) -> String {
    let items: Vec<String> = allocation
        .items
        .iter()
        .map(|(item, qty)| format!("{} x{}", item, qty))
        .collect();
    format!(
        "{}: {} ({} units)",
        allocation.warehouse,
        items.join(", "),
        allocation.total_quantity()
    )
}

/// Display the warehouses (in priority order) and the order being allocated
pub fn display_scenario(scenario: &Scenario) {
    println!("╔══════════════════════════════════════════════════════════════════════════════╗");
    println!("║                        MULTI-WAREHOUSE ORDER ALLOCATION                      ║");
    println!("╚══════════════════════════════════════════════════════════════════════════════╝\n");

    println!("Warehouses (priority order):");
    for (rank, warehouse) in scenario.warehouses.iter().enumerate() {
        let stock: Vec<String> = warehouse
            .inventory
            .iter()
            .map(|(item, qty)| format!("{}={}", item, qty))
            .collect();
        println!("  {}. {}: {}", rank + 1, warehouse.name, stock.join(", "));
    }

    println!("\nOrder:");
    for (item, qty) in &scenario.order {
        println!("  {}: {}", item, qty);
    }
    println!();
}

/// Display the shipment breakdown for a fulfilled order
pub fn display_allocations(allocations: &[Allocation]) {
    println!("Shipments:");
    for (rank, allocation) in allocations.iter().enumerate() {
        println!("  {}. {}", rank + 1, format_allocation(allocation));
    }

    let total = allocations
        .iter()
        .map(Allocation::total_quantity)
        .fold(0u64, u64::saturating_add);
    println!(
        "\nOrder fully allocated from {} warehouse(s), {} units total.",
        allocations.len(),
        total
    );
}

/// Explain why an order could not be allocated, one line per short item
pub fn format_unfulfilled(shortfall: &IndexMap<String, u64>) -> Vec<String> {
    if shortfall.is_empty() {
        // Only zero-quantity items are left, and no warehouse lists them
        return vec!["Some zero-quantity items are not listed by any warehouse.".to_string()];
    }
    shortfall
        .iter()
        .map(|(item, missing)| format!("{}: short by {} units", item, missing))
        .collect()
}

/// Display why an order could not be allocated
pub fn display_unfulfilled(shortfall: &IndexMap<String, u64>) {
    println!("Order cannot be fully allocated; nothing will ship.");
    for line in format_unfulfilled(shortfall) {
        println!("  {}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Allocation> {
        vec![
            Allocation {
                warehouse: "w1".to_string(),
                items: IndexMap::from([("apple".to_string(), 3)]),
            },
            Allocation {
                warehouse: "w2".to_string(),
                items: IndexMap::from([("sprite".to_string(), 2), ("coke".to_string(), 1)]),
            },
        ]
    }

    #[test]
    fn test_allocations_to_json() {
        let json = allocations_to_json(&sample(), false).unwrap();
        assert_eq!(json, r#"[{"w1":{"apple":3}},{"w2":{"sprite":2,"coke":1}}]"#);
        assert_eq!(allocations_to_json(&[], false).unwrap(), "[]");
    }

    #[test]
    fn test_format_unfulfilled() {
        let shortfall = IndexMap::from([("apple".to_string(), 1), ("pie".to_string(), 15)]);
        assert_eq!(
            format_unfulfilled(&shortfall),
            vec!["apple: short by 1 units", "pie: short by 15 units"]
        );
        assert_eq!(
            format_unfulfilled(&IndexMap::new()),
            vec!["Some zero-quantity items are not listed by any warehouse."]
        );
    }

    #[test]
    fn test_display_extreme_totals() {
        let max = i64::MAX.unsigned_abs();
        let allocations: Vec<Allocation> = (1..=3)
            .map(|n| Allocation {
                warehouse: format!("w{n}"),
                items: IndexMap::from([("apple".to_string(), max)]),
            })
            .collect();
        display_allocations(&allocations);
    }

    #[test]
    fn test_format_allocation() {
        assert_eq!(format_allocation(&sample()[1]), "w2: sprite x2, coke x1 (3 units)");
    }
}
