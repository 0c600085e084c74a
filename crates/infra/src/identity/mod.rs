//! Identity gateway adapters

pub mod memory;
pub mod rest;

pub use memory::MemoryIdentityGateway;
pub use rest::RestIdentityGateway;
