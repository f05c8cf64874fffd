pub mod error;
pub mod tolerance;
pub mod traits;

pub use error::{GraphError, Result};
pub use tolerance::Tolerance;
pub use traits::Validate;
