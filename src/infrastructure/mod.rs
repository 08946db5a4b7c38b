pub mod cache;
pub mod logging;
pub mod registry;
pub mod sheets;
