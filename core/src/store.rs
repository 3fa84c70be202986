//! The todo synchronization layer.
//!
//! # Overview
//! `TodoStore` owns the in-memory todo collection and keeps it consistent
//! with the remote resource store. Every mutation is confirm-then-apply:
//! local state only ever changes to data the server has acknowledged, never
//! to a locally-guessed value. A failed mutation therefore leaves the
//! collection exactly as it was, and there is no partial-failure state to
//! reconcile.
//!
//! # Design
//! - One round trip per operation, no retries.
//! - Newly created todos are prepended (most-recent-first); edits and
//!   toggles replace items in place, preserving order.
//! - Only `refresh` changes `status`; failed mutations are logged and
//!   returned to the caller, who owns user-visible reporting.
//! - `&mut self` receivers serialize operations per store, so two in-flight
//!   mutations on the same row cannot race within one instance.

use tracing::warn;

use crate::client::StoreClient;
use crate::error::TransportError;
use crate::transport::Transport;
use crate::types::{Todo, TodoDraft, TodoPatch};

/// Where the collection stands relative to the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// A `refresh` is pending (or none has run yet).
    Loading,
    /// The collection reflects the last successful `refresh` plus every
    /// confirmed mutation since.
    Ready,
    /// The last `refresh` failed; the collection holds stale data.
    Error(String),
}

/// In-memory todo collection synchronized against a remote store.
pub struct TodoStore<T> {
    client: StoreClient,
    transport: T,
    todos: Vec<Todo>,
    status: Status,
}

impl<T: Transport> TodoStore<T> {
    /// A store starts empty in `Loading` until the first `refresh` lands.
    pub fn new(client: StoreClient, transport: T) -> Self {
        Self {
            client,
            transport,
            todos: Vec::new(),
            status: Status::Loading,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn find(&self, id: i64) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Completed todos in collection order.
    pub fn completed(&self) -> impl Iterator<Item = &Todo> {
        self.todos.iter().filter(|t| t.completed)
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Replace the whole collection with what the server currently holds.
    ///
    /// On failure the previous collection is kept (stale but present) and
    /// `status` records the error message.
    pub fn refresh(&mut self) -> Result<(), TransportError> {
        self.status = Status::Loading;
        let request = self.client.build_list();
        match self
            .transport
            .execute(request)
            .and_then(|r| self.client.parse_list(r))
        {
            Ok(todos) => {
                self.todos = todos;
                self.status = Status::Ready;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to load todos");
                self.status = Status::Error(err.to_string());
                Err(err)
            }
        }
    }

    /// Create a todo remotely and prepend the server's record locally.
    ///
    /// There is no optimistic insert: the collection never contains a todo
    /// the server has not confirmed.
    pub fn add(&mut self, draft: &TodoDraft) -> Result<&Todo, TransportError> {
        let request = self.client.build_create(draft)?;
        let todo = self
            .transport
            .execute(request)
            .and_then(|r| self.client.parse_create(r))
            .map_err(|err| {
                warn!(error = %err, "failed to create todo");
                err
            })?;
        self.todos.insert(0, todo);
        Ok(&self.todos[0])
    }

    /// Flip `completed` on the addressed todo.
    ///
    /// An id absent from the local collection is a silent no-op: no request
    /// is sent. On success the local item is replaced with the server's
    /// full record, picking up the new `updated_at`.
    pub fn toggle(&mut self, id: i64) -> Result<(), TransportError> {
        let Some(current) = self.find(id) else {
            return Ok(());
        };
        let patch = TodoPatch {
            completed: Some(!current.completed),
            ..Default::default()
        };
        self.push_update(id, &patch)?;
        Ok(())
    }

    /// Apply a sparse update remotely and mirror the confirmed record.
    pub fn edit(&mut self, id: i64, patch: &TodoPatch) -> Result<Todo, TransportError> {
        self.push_update(id, patch)
    }

    /// Delete the addressed todo remotely, then drop the local copy.
    pub fn remove(&mut self, id: i64) -> Result<(), TransportError> {
        let request = self.client.build_delete(id);
        self.transport
            .execute(request)
            .and_then(|r| self.client.parse_delete(r))
            .map_err(|err| {
                warn!(error = %err, todo_id = id, "failed to delete todo");
                err
            })?;
        self.todos.retain(|t| t.id != id);
        Ok(())
    }

    fn push_update(&mut self, id: i64, patch: &TodoPatch) -> Result<Todo, TransportError> {
        let request = self.client.build_update(id, patch)?;
        let updated = self
            .transport
            .execute(request)
            .and_then(|r| self.client.parse_update(r))
            .map_err(|err| {
                warn!(error = %err, todo_id = id, "failed to update todo");
                err
            })?;
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }
}
