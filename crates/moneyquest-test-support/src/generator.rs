//! Test generator backends — canned and failing `GeneratorBackend`
//! implementations for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use moneyquest_core::error::GeneratorError;
use moneyquest_core::generator::GeneratorBackend;

/// A backend that replays a scripted sequence of raw responses and records
/// every prompt it receives. Once the script is exhausted it fails like an
/// unreachable backend, which routes the caller to fallback content.
#[derive(Debug)]
pub struct CannedBackend {
    responses: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<(String, String)>>,
}

impl CannedBackend {
    /// Create a backend that will return the given responses in order.
    #[must_use]
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of every `(system, prompt)` pair received.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn prompts(&self) -> Vec<(String, String)> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeneratorBackend for CannedBackend {
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, GeneratorError> {
        self.prompts
            .lock()
            .unwrap()
            .push((system.to_owned(), prompt.to_owned()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| GeneratorError::Backend("canned responses exhausted".into()))
    }
}

/// A backend that always fails with a transport-style error. Used to force
/// the fallback path.
#[derive(Debug, Clone, Copy)]
pub struct FailingBackend;

#[async_trait]
impl GeneratorBackend for FailingBackend {
    async fn complete(&self, _system: &str, _prompt: &str) -> Result<String, GeneratorError> {
        Err(GeneratorError::Backend("connection refused".into()))
    }
}
