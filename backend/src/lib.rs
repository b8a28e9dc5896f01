//! Activity log service library modules.
//!
//! The crate is organised hexagonally: `domain` holds validated types,
//! transport-agnostic errors, ports, and the services implementing them;
//! `inbound` adapts HTTP requests onto the driving ports; `outbound`
//! implements the driven ports against PostgreSQL; `server` wires the two
//! sides together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
#[cfg(feature = "test-support")]
pub mod test_support;

pub use doc::ApiDoc;
pub use middleware::request_id::RequestTrace;
