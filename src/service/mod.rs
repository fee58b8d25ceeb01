pub mod processor;
pub mod scorer;
pub mod validator;

pub use processor::{Clock, ReceiptProcessor};
pub use scorer::{breakdown, score, PointsBreakdown};
pub use validator::validate;
