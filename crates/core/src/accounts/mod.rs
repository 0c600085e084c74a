//! Account flows - signup, sign-in, password reset, sign-out

pub mod service;

pub use service::{AccountService, SignInOutcome};
