pub use crate::types::PhantomEyeError;
use std::path::Path;

pub type Result<T> = std::result::Result<T, PhantomEyeError>;

/// Attaches the report path to I/O failures while writing output.
pub trait OutputContext<T> {
    fn output_context(self, path: &Path) -> Result<T>;
}

impl<T> OutputContext<T> for std::io::Result<T> {
    fn output_context(self, path: &Path) -> Result<T> {
        self.map_err(|e| {
            PhantomEyeError::OutputError(format!("Failed to write report {}: {}", path.display(), e))
        })
    }
}
