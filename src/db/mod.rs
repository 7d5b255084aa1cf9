mod error;
pub mod product;

pub use error::{sqlstate, DbError};
