//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, transaction capture)
//! 2. `TraceLayer` (request span with method, path and request ID)
//! 3. Request ID (reuse or generate `x-request-id`)

pub mod request_id;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
