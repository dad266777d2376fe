//! Domain layer: the entities and value objects of the checkout flow.

pub mod authorizer;
pub mod customer;
pub mod money;
pub mod order;
