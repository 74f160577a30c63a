//! DTOs for the `staffs` resource, backed by the order entity.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewOrder, Order, OrderPatch};

/// Request body for `POST /staffs` and `PUT /staffs/{id}`. No field is required.
#[derive(Debug, Default, Deserialize)]
pub struct CreateOrderRequest {
    pub name: Option<String>,
    pub price: Option<i32>,
    pub total: Option<i32>,
    pub note: Option<String>,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(req: CreateOrderRequest) -> Self {
        NewOrder {
            name: req.name,
            price: req.price,
            total: req.total,
            note: req.note,
        }
    }
}

/// Request body for `PATCH /staffs/{id}`. `null` clears a field.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateOrderRequest {
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub name: Option<Option<String>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub price: Option<Option<i32>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub total: Option<Option<i32>>,

    #[serde(default, with = "::serde_with::rust::double_option")]
    pub note: Option<Option<String>>,
}

impl From<UpdateOrderRequest> for OrderPatch {
    fn from(req: UpdateOrderRequest) -> Self {
        OrderPatch {
            name: req.name,
            price: req.price,
            total: req.total,
            note: req.note,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OrderItem {
    pub id: i64,
    pub name: Option<String>,
    pub price: Option<i32>,
    pub total: Option<i32>,
    pub note: Option<String>,
}

impl From<Order> for OrderItem {
    fn from(o: Order) -> Self {
        Self {
            id: o.id,
            name: o.name,
            price: o.price,
            total: o.total,
            note: o.note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_distinguishes_absent_and_null() {
        let req: UpdateOrderRequest = serde_json::from_value(json!({
            "note": null,
            "total": 250
        }))
        .unwrap();

        let patch = OrderPatch::from(req);

        assert_eq!(patch.note, Some(None));
        assert_eq!(patch.total, Some(Some(250)));
        assert_eq!(patch.name, None);
        assert_eq!(patch.price, None);
    }
}
