//! Pipeline module - cleaning, classification and aggregation steps

pub mod aggregate;
pub mod cleaning;
pub mod columns;
pub mod loader;
pub mod operations;
pub mod quality;
pub mod schema;
pub mod stats;

pub use aggregate::*;
pub use cleaning::*;
pub use columns::*;
pub use loader::*;
pub use operations::*;
pub use quality::*;
pub use schema::*;
pub use stats::*;
