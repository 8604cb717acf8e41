#![no_std]

mod storage;


use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Symbol, Vec};
use vaultmint_lib::{
    interfaces::{CollectionClient, Escrow},
    validation::validate_token_batch,
    ContractError, LockRecord,
};

use storage::{clear_lock, lock_exists, read_lock, write_lock};

#[contract]
pub struct LockEscrow;

#[contractimpl]
impl LockEscrow {
    /// Deposit a batch of tokens into escrow custody.
    ///
    /// The locker must own every token in the batch; custody moves to this
    /// contract and one record covers the whole batch. Any failure rolls the
    /// entire call back, so the batch locks all-or-nothing.
    pub fn lock(
        env: Env,
        locker: Address,
        target_collection: Address,
        source_collection: Address,
        token_ids: Vec<u64>,
    ) {
        locker.require_auth();

        if let Err(err) = validate_token_batch(&token_ids) {
            panic_with_error!(&env, err);
        }

        let collection = CollectionClient::new(&env, &source_collection);
        for id in token_ids.iter() {
            if lock_exists(&env, &source_collection, id) {
                panic_with_error!(&env, ContractError::AlreadyLocked);
            }
            if collection.owner_of(&id) != locker {
                panic_with_error!(&env, ContractError::NotOwner);
            }
        }

        let escrow = env.current_contract_address();
        for id in token_ids.iter() {
            collection.transfer(&locker, &escrow, &id);
        }

        let record = LockRecord {
            locker: locker.clone(),
            source_collection: source_collection.clone(),
            target_collection: target_collection.clone(),
            token_ids: token_ids.clone(),
            locked_at: env.ledger().timestamp(),
        };
        write_lock(&env, &record);

        env.events().publish(
            (Symbol::new(&env, "nft_locked"),),
            (
                locker,
                source_collection,
                target_collection,
                token_ids,
                record.locked_at,
            ),
        );
    }

    /// Return a locked batch to its locker and clear the record.
    ///
    /// Only the original locker may unlock, and only the exact batch that
    /// was locked together.
    pub fn unlock(env: Env, caller: Address, source_collection: Address, token_ids: Vec<u64>) {
        caller.require_auth();

        let record = resolve_record(&env, &source_collection, &token_ids);
        if record.locker != caller {
            panic_with_error!(&env, ContractError::Unauthorized);
        }

        let collection = CollectionClient::new(&env, &source_collection);
        let escrow = env.current_contract_address();
        for id in record.token_ids.iter() {
            collection.transfer(&escrow, &record.locker, &id);
        }
        clear_lock(&env, &record);

        env.events().publish(
            (Symbol::new(&env, "nft_unlocked"),),
            (record.locker, source_collection, token_ids),
        );
    }

    pub fn is_locked(env: Env, source_collection: Address, token_id: u64) -> bool {
        lock_exists(&env, &source_collection, token_id)
    }
}

#[contractimpl]
impl Escrow for LockEscrow {
    fn get_lock(env: Env, source_collection: Address, token_id: u64) -> Option<LockRecord> {
        read_lock(&env, &source_collection, token_id)
    }

    /// Consume a matured lock on behalf of the registered target collection.
    ///
    /// This is the only path that clears a record without the locker; the
    /// underlying tokens stay in escrow custody. Consumption is observable
    /// through the target collection's own mint event.
    fn release(
        env: Env,
        caller: Address,
        source_collection: Address,
        token_ids: Vec<u64>,
        required_duration: u64,
    ) {
        caller.require_auth();

        let record = resolve_record(&env, &source_collection, &token_ids);
        if record.target_collection != caller {
            panic_with_error!(&env, ContractError::Unauthorized);
        }

        let elapsed = env.ledger().timestamp() - record.locked_at;
        if elapsed < required_duration {
            panic_with_error!(&env, ContractError::DurationNotMet);
        }

        clear_lock(&env, &record);
    }
}

/// Look up the record covering `token_ids`.
///
/// The supplied set must be exactly one recorded batch; subsets, supersets
/// and mixtures of batches all fail as if no lock existed.
fn resolve_record(env: &Env, source_collection: &Address, token_ids: &Vec<u64>) -> LockRecord {
    if let Err(err) = validate_token_batch(token_ids) {
        panic_with_error!(env, err);
    }

    let first = token_ids.get(0).unwrap(); // non-empty after validation
    let record = read_lock(env, source_collection, first)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::NoActiveLock));

    if !record.matches_batch(token_ids) {
        panic_with_error!(env, ContractError::NoActiveLock);
    }

    record
}
