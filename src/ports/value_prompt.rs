use crate::domain::{AppError, SchemaEntry};

/// Port for reading one operator answer per configuration key.
pub trait ValuePrompt {
    /// Read one raw line for `entry`.
    ///
    /// Returns the line as typed; trimming and default fallback are applied by the caller.
    fn read_value(&mut self, entry: &SchemaEntry) -> Result<String, AppError>;
}
