//! # Guidepath App
//!
//! HTTP application shell: route table, session-gate wiring, request
//! handlers, and the dependency-injection context tying the core services to
//! their adapters.

pub mod context;
pub mod routes;
pub mod session;
pub mod utils;

pub use context::AppContext;
pub use routes::build_router;
