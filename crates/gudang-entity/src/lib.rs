//! # gudang-entity
//!
//! Domain entity models for Gudang Mitra. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod category;
pub mod item;
pub mod loan;
pub mod notification;
pub mod request;
pub mod user;
