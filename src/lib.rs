//! LiftLog: a fitness blog and exercise catalog behind a small REST JSON API.
//!
//! The store is seeded once at startup from [`seed`] and read-only after
//! that; [`render`] turns article bodies into typed display blocks for
//! whatever presentation layer consumes the API.

pub mod article;
pub mod config;
pub mod equipment;
pub mod exercise;
pub mod query;
pub mod render;
pub mod seed;
pub mod server;
pub mod slug;
pub mod store;

pub use article::BlogPost;
pub use equipment::Equipment;
pub use exercise::Exercise;
pub use query::Catalog;
pub use server::{AppState, create_router, serve};
pub use store::ContentStore;
