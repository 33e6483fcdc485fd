use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fmt, str::FromStr};

use crate::utils::{
    id::next_id,
    store::{Record, Store},
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "preparing")]
    Preparing,
    #[serde(rename = "out-for-delivery")]
    OutForDelivery,
    #[serde(rename = "delivered")]
    Delivered,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        })
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "preparing" => Ok(OrderStatus::Preparing),
            "out-for-delivery" => Ok(OrderStatus::OutForDelivery),
            "delivered" => Ok(OrderStatus::Delivered),
            _ => Err(format!("'{}' is not a valid OrderStatus", s)),
        }
    }
}

/// One dish in an order. Whatever else the client attached to the line
/// (dish id, name, price...) is kept verbatim next to the quantity.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderLine {
    pub quantity: u64,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<OrderLine>,
}

impl Order {
    pub fn is_delivered(&self) -> bool {
        self.status == OrderStatus::Delivered
    }

    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct CreateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub dishes: Vec<OrderLine>,
}

/// New orders always start out pending.
pub fn create(store: &mut Store<Order>, payload: CreateOrderPayload) -> Order {
    store
        .insert(Order {
            id: next_id(),
            deliver_to: payload.deliver_to,
            mobile_number: payload.mobile_number,
            status: OrderStatus::Pending,
            dishes: payload.dishes,
        })
        .clone()
}

pub fn find_many(store: &Store<Order>) -> Vec<Order> {
    store.find_many().to_vec()
}

pub fn find_by_id(store: &Store<Order>, id: &str) -> Option<Order> {
    store.find_by_id(id).cloned()
}

pub struct UpdateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderLine>,
}

pub fn update_by_id(
    store: &mut Store<Order>,
    id: &str,
    payload: UpdateOrderPayload,
) -> Option<Order> {
    let order = store.find_by_id_mut(id)?;

    order.deliver_to = payload.deliver_to;
    order.mobile_number = payload.mobile_number;
    order.status = payload.status;
    order.dishes = payload.dishes;

    Some(order.clone())
}

pub fn delete_by_id(store: &mut Store<Order>, id: &str) -> Option<Order> {
    store.remove_by_id(id)
}
