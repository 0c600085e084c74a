//! Profile domain logic - completeness rule, repository port, edit flow

pub mod completeness;
pub mod ports;
pub mod service;

pub use completeness::is_complete;
pub use ports::ProfileRepository;
pub use service::ProfileService;
