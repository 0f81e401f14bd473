//! Shared store state machinery
//!
//! The loading/error/always-clear-loading action shape is identical
//! across every store, so it is written once here and parameterized by
//! the service future and the collection mutation.

use std::future::Future;

use shared::Keyed;

use crate::{ClientError, ClientResult};

/// Uniform result returned by every store action
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResult<T> {
    pub success: bool,
    /// Payload of a successful action, when the operation produces one
    pub data: Option<T>,
    /// Server message carried by envelope-checked mutations
    pub message: Option<String>,
    /// Error string, mirrored into the store's `error` field
    pub error: Option<String>,
}

impl<T> ActionResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
        }
    }

    /// Success without a payload
    pub fn done() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
            error: None,
        }
    }

    pub fn done_with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Write-reconciliation strategy applied after create/update
///
/// `Local` splices the returned row into the owned collection.
/// `Refetch` re-runs the full list fetch instead, used where the
/// backend's write responses are unreliable carriers of the written
/// row; the collection shows stale data until the refetch resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconcile {
    Local,
    Refetch,
}

/// Per-entity store state: owned collection, current selection,
/// loading/error flags and a free-text filter
#[derive(Debug)]
pub struct StoreState<T> {
    pub items: Vec<T>,
    pub current: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: String,
}

impl<T> Default for StoreState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            current: None,
            loading: false,
            error: None,
            filter: String::new(),
        }
    }
}

impl<T> StoreState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter an action: raise `loading`, clear the previous error
    pub(crate) fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Record a failed call; the collection stays untouched
    pub(crate) fn fail<U>(&mut self, err: &ClientError) -> ActionResult<U> {
        let message = err.to_string();
        tracing::error!(error = %message, "Store action failed");
        self.error = Some(message.clone());
        ActionResult::failed(message)
    }

    /// Run one action to completion: begin, await the service call,
    /// apply the mutation on success, and always drop `loading`.
    pub(crate) async fn run<R, F>(
        &mut self,
        call: F,
        apply: impl FnOnce(&mut Self, &R),
    ) -> ActionResult<R>
    where
        R: Clone,
        F: Future<Output = ClientResult<R>>,
    {
        self.begin();
        let result = match call.await {
            Ok(value) => {
                apply(self, &value);
                ActionResult::ok(value)
            }
            Err(err) => self.fail(&err),
        };
        self.loading = false;
        result
    }

    /// Like `run`, but the action result carries no payload (fetches,
    /// deletes)
    pub(crate) async fn run_unit<R, F>(
        &mut self,
        call: F,
        apply: impl FnOnce(&mut Self, R),
    ) -> ActionResult<()>
    where
        F: Future<Output = ClientResult<R>>,
    {
        self.begin();
        let result = match call.await {
            Ok(value) => {
                apply(self, value);
                ActionResult::done()
            }
            Err(err) => self.fail(&err),
        };
        self.loading = false;
        result
    }
}

impl<T: Keyed> StoreState<T> {
    /// Replace the stored item carrying `idx`, when present
    pub(crate) fn replace(&mut self, idx: i64, item: T) {
        if let Some(slot) = self.items.iter_mut().find(|existing| existing.idx() == idx) {
            *slot = item;
        }
    }

    /// Remove the item carrying `idx`; an absent key is a no-op
    pub(crate) fn remove(&mut self, idx: i64) {
        self.items.retain(|existing| existing.idx() != idx);
    }
}
