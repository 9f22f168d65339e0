pub mod core;
pub mod project;

pub use self::core::*;
pub use self::project::*;
