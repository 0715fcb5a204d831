//! Domain layer: the configuration entity, its validation error type, and
//! the port traits satisfied by the infrastructure layer.

pub mod errors;
pub mod models;
pub mod ports;
