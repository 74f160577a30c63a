//! Order entity.
//!
//! Orders are exposed under the `/staffs` path. The path name and the
//! order fields (price, total, note) do not match; both are kept as they are.

use crate::domain::resource::Resource;

/// An order record. Every column except the key is optional.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<i32>,
    pub total: Option<i32>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewOrder {
    pub name: Option<String>,
    pub price: Option<i32>,
    pub total: Option<i32>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderPatch {
    pub name: Option<Option<String>>,
    pub price: Option<Option<i32>>,
    pub total: Option<Option<i32>>,
    pub note: Option<Option<String>>,
}

impl Resource for Order {
    type Id = i64;
    type New = NewOrder;
    type Patch = OrderPatch;

    const LABEL: &'static str = "Order";

    fn id(&self) -> &i64 {
        &self.id
    }
}
