pub mod application;
pub mod domain;
pub mod infrastructure;

pub use crate::application::page_data::{PageData, PageLoader, PageSource};
pub use crate::application::services::ContentService;
pub use crate::domain::error::{AppError, Result};
pub use crate::infrastructure::cache::SessionCache;
pub use crate::infrastructure::logging::init_tracing;
pub use crate::infrastructure::registry::{SheetDomain, SheetRegistry};
