use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::{AprioriError, Result};

/// Shared flag polled by the level loop before each new level.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub(crate) fn check(&self, level: usize) -> Result<()> {
        if self.is_cancelled() {
            return Err(AprioriError::Cancelled { level });
        }
        Ok(())
    }
}
