//! Shared value types used across domain entities

pub mod secret_string;

pub use secret_string::SecretString;
