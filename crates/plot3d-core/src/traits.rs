use crate::error::Result;

/// Validate a configuration value before it is applied.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
