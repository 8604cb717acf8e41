use soroban_sdk::contracterror;

/// Shared error taxonomy for the escrow and the derivative registry.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    AlreadyLocked = 3,
    NotOwner = 4,
    Unauthorized = 5,
    DurationNotMet = 6,
    NoActiveLock = 7,
    InvalidBatchSize = 8,
    InvalidInput = 9,
    ArithmeticOverflow = 10,
    TokenNotFound = 11,
}
