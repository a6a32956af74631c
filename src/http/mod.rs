//! HTTP concerns: shared client construction and single-request issuing.
pub mod client;
pub mod issuer;

pub use client::build_client;
pub use issuer::issue;
