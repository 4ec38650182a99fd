// ABOUTME: Caller-side request phase: Idle, Requesting, then one terminal outcome
// ABOUTME: Lets a view disable re-triggering while a request is in flight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Eco-Bite Contributors

use super::GatewayOutcome;

/// Where a caller's request currently stands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestPhase<T> {
    /// Nothing requested yet
    Idle,
    /// A request is in flight
    Requesting,
    /// Last request produced a value
    Succeeded(T),
    /// Last request failed
    Failed,
    /// Last request timed out
    TimedOut,
    /// Last request was cancelled
    Cancelled,
}

impl<T> Default for RequestPhase<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> RequestPhase<T> {
    /// Whether a request is in flight
    #[must_use]
    pub const fn is_requesting(&self) -> bool {
        matches!(self, Self::Requesting)
    }

    /// Enter `Requesting`; refused while a request is already in flight
    ///
    /// Returns `false` when refused. A previous result is discarded.
    pub fn begin(&mut self) -> bool {
        if self.is_requesting() {
            return false;
        }
        *self = Self::Requesting;
        true
    }

    /// Record the outcome of the in-flight request
    ///
    /// Returns `false` and leaves the phase untouched when no request is in
    /// flight, so a stale outcome cannot overwrite a reset.
    pub fn finish(&mut self, outcome: GatewayOutcome<T>) -> bool {
        if !self.is_requesting() {
            return false;
        }
        *self = match outcome {
            GatewayOutcome::Succeeded(value) => Self::Succeeded(value),
            GatewayOutcome::Failed => Self::Failed,
            GatewayOutcome::TimedOut => Self::TimedOut,
            GatewayOutcome::Cancelled => Self::Cancelled,
        };
        true
    }

    /// Back to `Idle`
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    /// Value of the last successful request
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Succeeded(value) => Some(value),
            _ => None,
        }
    }
}
