/// Fulfillment checks over an allocation result
/// The allocator returns no status flag, these helpers sum the shipped quantities

use indexmap::IndexMap;
use crate::models::{Allocation, Order, Warehouse};

/// Total units shipped per item across all warehouses, in first-seen order.
/// Totals saturate at `u64::MAX`.
pub fn allocated_totals(allocations: &[Allocation]) -> IndexMap<String, u64> {
    let mut totals: IndexMap<String, u64> = IndexMap::new();
    for allocation in allocations {
        for (item, quantity) in &allocation.items {
            let total = totals.entry(item.clone()).or_insert(0);
            *total = total.saturating_add(*quantity);
        }
    }
    totals
}

/// True when `allocations` covers every positively requested item exactly and ships
/// nothing else. An order without positive demand is only fulfilled by an empty result.
pub fn is_fulfilled(order: &Order, allocations: &[Allocation]) -> bool {
    let totals = allocated_totals(allocations);

    let mut requested = 0;
    for (item, &quantity) in order {
        if quantity <= 0 {
            continue;
        }
        requested += 1;
        if totals.get(item).copied() != Some(quantity.unsigned_abs()) {
            return false;
        }
    }

    totals.len() == requested
}

/// Units per item that all warehouses together cannot supply.
/// Only positively requested items with a shortfall are listed.
pub fn shortfall(warehouses: &[Warehouse], order: &Order) -> IndexMap<String, u64> {
    order
        .iter()
        .filter(|&(_, &demand)| demand > 0)
        .filter_map(|(item, &demand)| {
            let available: i64 = warehouses
                .iter()
                .filter_map(|w| w.supply_of(item))
                .filter(|&supply| supply > 0)
                .fold(0i64, i64::saturating_add);
            let missing = demand.saturating_sub(available);
            (missing > 0).then(|| (item.clone(), missing.unsigned_abs()))
        })
        .collect()
}
