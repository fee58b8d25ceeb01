pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, RejectReason, StoreError};
pub use service::ReceiptProcessor;
pub use store::{MemoryStore, ReceiptStore};
