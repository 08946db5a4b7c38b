pub mod extract;
pub mod map_embed;
pub mod page_data;
pub mod services;
pub mod submit;
