//! InventoryLedger - the only shared mutable state in the core
//!
//! Stock lives in per-(product, warehouse) bins behind a single `RwLock`.
//! Holding the write lock for the whole validate-then-apply pass makes the
//! multi-line check-and-decrement of a sale indivisible with respect to
//! every other mutator, which is what keeps stock from ever going negative
//! under concurrent sales and restocks.

use chrono::NaiveDate;
use parking_lot::RwLock;
use shared::models::{InventoryRecord, RestockEvent};
use shared::types::{InventoryId, ProductId, WarehouseId};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// A sale could not be satisfied from current stock
///
/// `available` is the summed stock across all warehouses for the product.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("out of stock for product {product_id}: requested {requested}, available {available}")]
pub struct OutOfStock {
    pub product_id: ProductId,
    pub requested: i64,
    pub available: i64,
}

/// Restock deltas must be non-negative
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("restock delta must be non-negative, got {0}")]
pub struct NegativeDelta(pub i64);

#[derive(Debug, Clone)]
struct StockBin {
    id: InventoryId,
    stock: i64,
    last_restock: Option<NaiveDate>,
}

#[derive(Debug, Default)]
struct LedgerInner {
    /// product -> warehouse -> bin; BTreeMap keeps warehouse allocation
    /// order deterministic (ascending warehouse id)
    bins: HashMap<ProductId, BTreeMap<WarehouseId, StockBin>>,
    next_id: InventoryId,
}

/// Owned stock ledger exposing only atomic conditional updates
#[derive(Debug, Default)]
pub struct InventoryLedger {
    inner: RwLock<LedgerInner>,
}

impl InventoryLedger {
    pub fn new(records: Vec<InventoryRecord>) -> Self {
        let mut bins: HashMap<ProductId, BTreeMap<WarehouseId, StockBin>> = HashMap::new();
        let mut next_id = 1;
        for r in records {
            next_id = next_id.max(r.id + 1);
            bins.entry(r.product).or_default().insert(
                r.warehouse,
                StockBin {
                    id: r.id,
                    stock: r.stock,
                    last_restock: r.last_restock,
                },
            );
        }
        Self {
            inner: RwLock::new(LedgerInner { bins, next_id }),
        }
    }

    /// Summed stock for a product across all warehouses
    pub fn available(&self, product: ProductId) -> i64 {
        let inner = self.inner.read();
        inner
            .bins
            .get(&product)
            .map(|bins| bins.values().map(|b| b.stock).sum())
            .unwrap_or(0)
    }

    /// Atomically decrement stock for every line of a sale
    ///
    /// Lines are (product, total quantity). Two phases under one write
    /// lock: first check that every product has enough summed stock, then
    /// drain bins in ascending warehouse id. Either every decrement
    /// applies or none does.
    pub fn try_decrement(&self, lines: &[(ProductId, i64)]) -> Result<(), OutOfStock> {
        // Aggregate duplicate products so the check covers the combined demand
        let mut demand: BTreeMap<ProductId, i64> = BTreeMap::new();
        for &(product, quantity) in lines {
            *demand.entry(product).or_insert(0) += quantity;
        }

        let mut inner = self.inner.write();

        // Phase 1: validate without mutating
        for (&product, &requested) in &demand {
            let available: i64 = inner
                .bins
                .get(&product)
                .map(|bins| bins.values().map(|b| b.stock).sum())
                .unwrap_or(0);
            if available < requested {
                return Err(OutOfStock {
                    product_id: product,
                    requested,
                    available,
                });
            }
        }

        // Phase 2: apply all decrements
        for (&product, &requested) in &demand {
            let mut remaining = requested;
            if let Some(bins) = inner.bins.get_mut(&product) {
                for bin in bins.values_mut() {
                    if remaining == 0 {
                        break;
                    }
                    let take = remaining.min(bin.stock);
                    bin.stock -= take;
                    remaining -= take;
                }
            }
            tracing::debug!(product_id = product, quantity = requested, "stock decremented");
        }

        Ok(())
    }

    /// Apply a restock increment under the same atomic discipline
    ///
    /// A (product, warehouse) key with no existing record gets a fresh bin,
    /// the way a restock delivery opens a new storage location.
    pub fn restock(&self, event: &RestockEvent) -> Result<(), NegativeDelta> {
        if event.delta < 0 {
            return Err(NegativeDelta(event.delta));
        }

        let mut guard = self.inner.write();
        let inner = &mut *guard;
        let bin = match inner
            .bins
            .entry(event.product)
            .or_default()
            .entry(event.warehouse)
        {
            std::collections::btree_map::Entry::Occupied(e) => e.into_mut(),
            std::collections::btree_map::Entry::Vacant(v) => {
                let id = inner.next_id;
                inner.next_id += 1;
                v.insert(StockBin {
                    id,
                    stock: 0,
                    last_restock: None,
                })
            }
        };
        bin.stock += event.delta;
        bin.last_restock = Some(event.date);

        tracing::info!(
            product_id = event.product,
            warehouse_id = event.warehouse,
            delta = event.delta,
            "stock restocked"
        );
        Ok(())
    }

    /// Snapshot of all records, ordered by (product, warehouse)
    pub fn records(&self) -> Vec<InventoryRecord> {
        let inner = self.inner.read();
        let mut rows: Vec<InventoryRecord> = inner
            .bins
            .iter()
            .flat_map(|(&product, bins)| {
                bins.iter().map(move |(&warehouse, bin)| InventoryRecord {
                    id: bin.id,
                    product,
                    warehouse,
                    stock: bin.stock,
                    last_restock: bin.last_restock,
                })
            })
            .collect();
        rows.sort_by_key(|r| (r.product, r.warehouse));
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: InventoryId, product: ProductId, warehouse: WarehouseId, stock: i64) -> InventoryRecord {
        InventoryRecord {
            id,
            product,
            warehouse,
            stock,
            last_restock: None,
        }
    }

    #[test]
    fn test_decrement_spans_warehouses_ascending() {
        let ledger = InventoryLedger::new(vec![record(1, 7, 2, 4), record(2, 7, 1, 3)]);

        ledger.try_decrement(&[(7, 5)]).unwrap();

        let rows = ledger.records();
        // warehouse 1 drained first, remainder taken from warehouse 2
        assert_eq!(rows[0].warehouse, 1);
        assert_eq!(rows[0].stock, 0);
        assert_eq!(rows[1].warehouse, 2);
        assert_eq!(rows[1].stock, 2);
    }

    #[test]
    fn test_out_of_stock_leaves_everything_untouched() {
        let ledger = InventoryLedger::new(vec![record(1, 7, 1, 3), record(2, 9, 1, 10)]);

        let err = ledger.try_decrement(&[(9, 4), (7, 5)]).unwrap_err();
        assert_eq!(
            err,
            OutOfStock {
                product_id: 7,
                requested: 5,
                available: 3
            }
        );
        // the satisfiable line must not have been applied either
        assert_eq!(ledger.available(9), 10);
        assert_eq!(ledger.available(7), 3);
    }

    #[test]
    fn test_duplicate_lines_checked_as_combined_demand() {
        let ledger = InventoryLedger::new(vec![record(1, 7, 1, 3)]);

        let err = ledger.try_decrement(&[(7, 2), (7, 2)]).unwrap_err();
        assert_eq!(err.requested, 4);
        assert_eq!(ledger.available(7), 3);

        ledger.try_decrement(&[(7, 1), (7, 2)]).unwrap();
        assert_eq!(ledger.available(7), 0);
    }

    #[test]
    fn test_unknown_product_reports_zero_available() {
        let ledger = InventoryLedger::new(vec![]);
        let err = ledger.try_decrement(&[(42, 1)]).unwrap_err();
        assert_eq!(err.available, 0);
    }

    #[test]
    fn test_restock_existing_and_new_bins() {
        let ledger = InventoryLedger::new(vec![record(1, 7, 1, 2)]);
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();

        ledger
            .restock(&RestockEvent {
                product: 7,
                warehouse: 1,
                delta: 5,
                date,
            })
            .unwrap();
        ledger
            .restock(&RestockEvent {
                product: 8,
                warehouse: 3,
                delta: 4,
                date,
            })
            .unwrap();

        assert_eq!(ledger.available(7), 7);
        assert_eq!(ledger.available(8), 4);
        let rows = ledger.records();
        assert!(rows.iter().any(|r| r.product == 8 && r.last_restock == Some(date)));
    }

    #[test]
    fn test_restock_rejects_negative_delta() {
        let ledger = InventoryLedger::new(vec![record(1, 7, 1, 2)]);
        let err = ledger
            .restock(&RestockEvent {
                product: 7,
                warehouse: 1,
                delta: -1,
                date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            })
            .unwrap_err();
        assert_eq!(err, NegativeDelta(-1));
        assert_eq!(ledger.available(7), 2);
    }
}
