use std::path::PathBuf;

use inventory_allocator::fulfillment::{is_fulfilled, shortfall};
use inventory_allocator::reporting::allocations_to_json;
use inventory_allocator::scenario::load_scenario;
use inventory_allocator::InventoryAllocator;
use indexmap::IndexMap;
use pretty_assertions::assert_eq;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(name)
}

#[test]
fn test_complex_split_from_file() {
    let scenario = load_scenario(&fixture("complex_split.json")).unwrap();
    let allocator = InventoryAllocator::new(scenario.warehouses.clone());
    let allocations = allocator.allocate_order(&scenario.order);

    assert!(is_fulfilled(&scenario.order, &allocations));
    assert_eq!(
        allocations_to_json(&allocations, false).unwrap(),
        concat!(
            r#"[{"w1":{"apple":2,"ball":3}},{"w2":{"ball":4}},{"w3":{"apple":4}},"#,
            r#"{"w4":{"apple":4,"ball":5}},{"w5":{"ball":8}}]"#,
        )
    );
}

#[test]
fn test_insufficient_stock_from_file() {
    let scenario = load_scenario(&fixture("insufficient.json")).unwrap();
    let allocator = InventoryAllocator::new(scenario.warehouses.clone());
    let allocations = allocator.allocate_order(&scenario.order);

    assert!(allocations.is_empty());
    assert!(!is_fulfilled(&scenario.order, &allocations));
    assert_eq!(allocations_to_json(&allocations, false).unwrap(), "[]");
    assert_eq!(
        shortfall(allocator.warehouses(), &scenario.order),
        IndexMap::from([("apple".to_string(), 1)])
    );
}
