//! Router and dialog collaborators for running without a UI.

use async_trait::async_trait;

use crate::app::state::Route;
use crate::core::service::{ConfirmDialog, Navigator};

/// Navigator that records route changes in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn push(&self, route: Route) {
        tracing::info!(route = route.path(), "Navigate");
    }

    fn redirect(&self, route: Route) {
        tracing::info!(route = route.path(), "Full-page redirect");
    }
}

/// Dialog that answers every prompt with a fixed choice.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswerDialog {
    answer: bool,
}

impl FixedAnswerDialog {
    /// Dialog that never confirms; no one is there to click "yes".
    pub fn decline() -> Self {
        Self { answer: false }
    }

    pub fn accept() -> Self {
        Self { answer: true }
    }
}

#[async_trait]
impl ConfirmDialog for FixedAnswerDialog {
    async fn confirm(&self, prompt: &str) -> bool {
        tracing::debug!(prompt, answer = self.answer, "Confirmation requested");
        self.answer
    }
}
