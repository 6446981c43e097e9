pub mod image_origin;
pub mod image_processing;
pub mod search_backend;
