//! Storage port — repository trait for supply item persistence.

use std::future::Future;

use panstock_domain::error::StockError;
use panstock_domain::id::ItemId;
use panstock_domain::supply_item::SupplyItem;

/// CRUD persistence for [`SupplyItem`].
///
/// Implementations own the mapping between domain objects and their stored
/// representation. `get_all` must return items in stable insertion order;
/// the stock view renders rows in exactly the order this produces.
pub trait StockRepository {
    /// Persist a new item.
    fn create(&self, item: SupplyItem)
    -> impl Future<Output = Result<SupplyItem, StockError>> + Send;

    /// Fetch a single item, `None` when the id is unknown.
    fn get_by_id(
        &self,
        id: ItemId,
    ) -> impl Future<Output = Result<Option<SupplyItem>, StockError>> + Send;

    /// Fetch every item in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<SupplyItem>, StockError>> + Send;

    /// Replace a stored item by id.
    fn update(&self, item: SupplyItem)
    -> impl Future<Output = Result<SupplyItem, StockError>> + Send;

    /// Remove an item. Deleting an unknown id is a no-op.
    fn delete(&self, id: ItemId) -> impl Future<Output = Result<(), StockError>> + Send;
}
