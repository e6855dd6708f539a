pub mod client;
pub mod format;
pub mod model;
pub mod query;

pub use client::*;
pub use format::*;
pub use model::*;
pub use query::*;
