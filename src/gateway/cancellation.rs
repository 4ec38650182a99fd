// ABOUTME: Cooperative cancellation token shared between a caller and in-flight AI requests
// ABOUTME: Built on a tokio watch channel so any number of waiters observe a single cancel
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

use std::sync::Arc;

use tokio::sync::watch;

/// Signals that the caller no longer wants the result of a request
///
/// Clones share state: cancelling any clone cancels all of them. Cancelling
/// is permanent.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    sender: Arc<watch::Sender<bool>>,
}

impl CancellationToken {
    /// Create a token that is not cancelled
    #[must_use]
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Cancel every request observing this token
    pub fn cancel(&self) {
        self.sender.send_replace(true);
    }

    /// Whether `cancel` has been called
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Resolve once the token is cancelled (immediately if it already is)
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        // The sender lives as long as `self`, so this only returns once cancelled
        drop(receiver.wait_for(|cancelled| *cancelled).await);
    }
}

impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}
