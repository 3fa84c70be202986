//! Execution seam between the client and the network.

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP round trip per call.
///
/// Implementations must not retry, coalesce, or cache: every call is a
/// fresh request, and a failure is reported as-is. Network-level failures
/// map to [`TransportError::Connection`]; non-success statuses are returned
/// in the `HttpResponse` for the client to interpret.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
