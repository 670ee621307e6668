/// Order allocation module
/// Splits a multi-item order across warehouses, draining them in priority order

use indexmap::IndexMap;
use tracing::{debug, trace};
use crate::models::{Allocation, Order, Warehouse};

/// Allocator bound to a priority-ordered warehouse list.
/// The list order is the priority (e.g. cheapest first); nothing is re-sorted here.
#[derive(Clone, Debug, Default)]
pub struct InventoryAllocator {
    warehouses: Vec<Warehouse>,
}

impl InventoryAllocator {
    pub fn new(warehouses: Vec<Warehouse>) -> Self {
        InventoryAllocator { warehouses }
    }

    pub fn warehouses(&self) -> &[Warehouse] {
        &self.warehouses
    }

    /// Allocate an order against this allocator's warehouses. See [`allocate`].
    pub fn allocate_order(&self, order: &Order) -> Vec<Allocation> {
        allocate(&self.warehouses, order)
    }
}

/// Allocate `order` across `warehouses`, visiting each warehouse once in list order.
///
/// Returns one [`Allocation`] per warehouse that ships something, in warehouse order,
/// and stops visiting warehouses as soon as every item is covered. When the warehouses
/// run out before the order is covered the result is empty: partial fulfillment is
/// never returned.
///
/// Items with a requested quantity of zero or less are dropped from the order at the
/// first warehouse that lists them and never show up in the result. Listings with zero
/// or negative stock are ignored. The caller's `order` is left untouched.
pub fn allocate(warehouses: &[Warehouse], order: &Order) -> Vec<Allocation> {
    // Remaining demand per item; entries are removed once covered or ignored
    let mut remaining: Order = order.clone();
    let mut total_allocation: Vec<Allocation> = Vec::new();

    for warehouse in warehouses {
        let mut shipped: IndexMap<String, u64> = IndexMap::new();

        // Iterate a snapshot of the keys, the backing map shrinks as items are covered
        let pending: Vec<String> = remaining.keys().cloned().collect();
        for item in pending {
            let Some(supply) = warehouse.supply_of(&item) else {
                continue;
            };
            let demand = remaining[&item];

            if demand <= 0 {
                trace!(warehouse = %warehouse.name, %item, demand, "dropping unwanted item");
                remaining.shift_remove(&item);
            } else if supply >= demand {
                trace!(warehouse = %warehouse.name, %item, supply, demand, "item covered");
                shipped.insert(item.clone(), demand.unsigned_abs());
                remaining.shift_remove(&item);
            } else if supply > 0 {
                trace!(
                    warehouse = %warehouse.name,
                    %item,
                    supply,
                    demand,
                    "item partially covered"
                );
                shipped.insert(item.clone(), supply.unsigned_abs());
                remaining.insert(item, demand - supply);
            }
        }

        if !shipped.is_empty() {
            debug!(
                warehouse = %warehouse.name,
                items = shipped.len(),
                units = shipped.values().fold(0u64, |acc, &qty| acc.saturating_add(qty)),
                "warehouse allocated"
            );
            total_allocation.push(Allocation {
                warehouse: warehouse.name.clone(),
                items: shipped,
            });
        }

        if remaining.is_empty() {
            break;
        }
    }

    // Full-or-nothing: the loop only ends with demand left when the warehouses ran out
    if remaining.is_empty() {
        debug!(warehouses = total_allocation.len(), "order fully allocated");
        total_allocation
    } else {
        debug!(
            unfilled = ?remaining.keys().collect::<Vec<_>>(),
            "order cannot be fully allocated"
        );
        Vec::new()
    }
}
