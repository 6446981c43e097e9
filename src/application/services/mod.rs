mod resolver;

pub use resolver::{ImageResolver, MissReason, Resolution};
