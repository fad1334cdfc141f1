pub mod command;
pub mod error;
pub mod query;
mod tests;

pub use command::ReceiptCommandService;
pub use error::ReceiptError;
pub use query::ReceiptQueryService;
