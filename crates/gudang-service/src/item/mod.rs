//! Item catalog services.

pub mod service;

pub use service::ItemService;
