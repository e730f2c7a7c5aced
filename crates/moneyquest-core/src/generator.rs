//! Content generator backend abstraction.
//!
//! The adapter in `moneyquest-generator` builds prompts and parses
//! structured output; this trait is only the raw completion call. Any
//! backend that can return schema-conformant JSON text satisfies it, so
//! swapping providers never touches the orchestration.

use async_trait::async_trait;

use crate::error::GeneratorError;

/// A text-completion backend capable of structured (JSON) output.
#[async_trait]
pub trait GeneratorBackend: Send + Sync {
    /// Sends one instruction with a system preamble and returns the raw
    /// response text.
    ///
    /// # Errors
    ///
    /// Returns `GeneratorError::Backend` on transport failure, timeout, or
    /// a non-success response from the provider.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, GeneratorError>;
}
