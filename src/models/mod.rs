pub mod price;
pub mod receipt;
pub mod record;

pub use price::Price;
pub use receipt::{Item, Receipt, ValidItem, ValidReceipt};
pub use record::StoredRecord;
