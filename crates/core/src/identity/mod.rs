//! Identity gateway capability interface

pub mod ports;

pub use ports::IdentityGateway;
