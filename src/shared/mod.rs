pub mod error;
pub mod fsio;
pub mod result;

pub use result::Result;
