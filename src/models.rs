use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Requested quantities keyed by item name, in the order the caller listed them.
/// Zero or negative quantities mean "nothing to fulfill".
pub type Order = IndexMap<String, i64>;

/// Warehouse data structure: a named source of stock for zero or more items
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub name: String,
    #[serde(default)]
    pub inventory: IndexMap<String, i64>,
}

impl Warehouse {
    /// Create a warehouse from `(item, quantity)` pairs
    pub fn new<I, K>(name: impl Into<String>, inventory: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        Warehouse {
            name: name.into(),
            inventory: inventory.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Quantity listed for an item, `None` when the warehouse does not stock it at all
    pub fn supply_of(&self, item: &str) -> Option<i64> {
        self.inventory.get(item).copied()
    }
}

/// Quantities shipped from a single warehouse. Every listed quantity is positive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub warehouse: String,
    pub items: IndexMap<String, u64>,
}

impl Allocation {
    /// Units of `item` shipped from this warehouse, zero when not shipped
    pub fn quantity_for(&self, item: &str) -> u64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Units shipped from this warehouse across all items, saturating at `u64::MAX`
    pub fn total_quantity(&self) -> u64 {
        self.items.values().fold(0u64, |acc, &qty| acc.saturating_add(qty))
    }
}

// Rendered as `{"<warehouse>": {"<item>": qty, ...}}`
impl Serialize for Allocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.warehouse, &self.items)?;
        map.end()
    }
}

/// A complete allocation problem: warehouses in priority order plus the order to cover
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub warehouses: Vec<Warehouse>,
    pub order: Order,
}

/// Build an order from `(item, quantity)` pairs
pub fn order_from<I, K>(items: I) -> Order
where
    I: IntoIterator<Item = (K, i64)>,
    K: Into<String>,
{
    items.into_iter().map(|(k, v)| (k.into(), v)).collect()
}
