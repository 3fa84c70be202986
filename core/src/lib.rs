//! Client-side todo synchronization against a generic REST resource store.
//!
//! # Overview
//! Two layers. [`StoreClient`] translates the four CRUD operations into
//! [`HttpRequest`] values and interprets [`HttpResponse`] values, without
//! touching the network. [`TodoStore`] sits on top: it owns the in-memory
//! todo collection, runs each operation through a [`Transport`], and admits
//! only server-confirmed data into local state.
//!
//! # Design
//! - The collection (table) name is injected into `StoreClient` at
//!   construction, so instances and tests can target different collections.
//! - Confirm-then-apply everywhere: no optimistic local mutations, hence no
//!   divergence to reconcile after a partial failure.
//! - Every operation returns an explicit `Result`; failures are logged via
//!   `tracing` and handed to the caller, which owns user-visible reporting.

pub mod client;
pub mod error;
pub mod http;
pub mod store;
pub mod transport;
pub mod types;

pub use client::StoreClient;
pub use error::TransportError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use store::{Status, TodoStore};
pub use transport::Transport;
pub use types::{Priority, Todo, TodoDraft, TodoPatch};
