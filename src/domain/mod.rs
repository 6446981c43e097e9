pub mod errors;
pub mod identifiers;
pub mod placeholder;
pub mod repositories;
pub mod search;

// Re-exports
pub use errors::{BackendError, OriginError};
pub use identifiers::{Identifier, IdentifierKind};
