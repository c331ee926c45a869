//! Interactive collection: schema -> prompt each key -> resolved config.

use crate::domain::{AppError, EnvSchema, ResolvedConfig};
use crate::ports::ValuePrompt;

/// Prompt once per schema key, in schema order.
///
/// Blank answers keep the key's default; anything else is stored trimmed.
/// No answer is validated or re-prompted.
pub fn collect<P: ValuePrompt + ?Sized>(
    schema: &EnvSchema,
    prompt: &mut P,
) -> Result<ResolvedConfig, AppError> {
    let mut values = Vec::with_capacity(schema.entries().len());
    for entry in schema.entries() {
        let answer = prompt.read_value(entry)?;
        values.push((entry.key, entry.resolve(&answer)));
    }
    Ok(ResolvedConfig::from_pairs(values))
}
