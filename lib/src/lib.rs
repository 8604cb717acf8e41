#![no_std]
pub mod errors;
pub mod interfaces;
pub mod types;
pub mod validation;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;

pub use errors::ContractError;
pub use types::*;

/// Constants shared across contracts
// Policy
pub const DEFAULT_BASE_DURATION: u64 = 600;
// Batch bounds
pub const MAX_BATCH_SIZE: u32 = 100; // Prevent DoS via oversized lock batches
// Metadata bounds
pub const MAX_CONTENT_LENGTH: u32 = 1024;
