pub mod api;
pub mod coordinator;
pub mod core;
pub mod prelude;
pub mod quantity;
pub mod report;
