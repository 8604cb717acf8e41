use soroban_sdk::{contractclient, Address, Env, Vec};

use crate::types::LockRecord;

/// Ownership interface every source collection must expose.
///
/// The escrow only ever needs these three entrypoints; anything beyond them
/// (approvals, metadata, enumeration) is the collection's own business.
#[contractclient(name = "CollectionClient")]
pub trait Collection {
    fn owner_of(env: Env, token_id: u64) -> Address;
    fn transfer(env: Env, from: Address, to: Address, token_id: u64);
    fn mint(env: Env, to: Address, token_id: u64);
}

/// The derivative registry's view of the lock escrow.
#[contractclient(name = "EscrowClient")]
pub trait Escrow {
    fn get_lock(env: Env, source_collection: Address, token_id: u64) -> Option<LockRecord>;
    fn release(
        env: Env,
        caller: Address,
        source_collection: Address,
        token_ids: Vec<u64>,
        required_duration: u64,
    );
}
