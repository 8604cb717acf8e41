#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod metadata;
mod policy;
mod storage;


use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String, Symbol, Vec};
use vaultmint_lib::{
    interfaces::EscrowClient, validation::validate_token_batch, ContractError,
    DEFAULT_BASE_DURATION, MAX_CONTENT_LENGTH,
};

use storage::{
    get_base_duration, get_lock_escrow, get_source_collection, get_token_content,
    get_token_counter, get_token_owner, is_initialized, next_token_id, set_base_duration,
    set_token, set_token_counter, set_token_owner, set_wiring,
};

#[contract]
pub struct DerivativeNft;

#[contractimpl]
impl DerivativeNft {
    /// One-time wiring of the escrow and the source collection.
    pub fn initialize(env: Env, lock_escrow: Address, source_collection: Address) {
        if is_initialized(&env) {
            panic_with_error!(&env, ContractError::AlreadyInitialized);
        }

        set_wiring(&env, &lock_escrow, &source_collection);
        set_base_duration(&env, DEFAULT_BASE_DURATION);
        set_token_counter(&env, 0);
    }

    /// Consume a matured lock and mint a content-tagged token to its locker.
    ///
    /// The escrow re-checks authorization and the clock; its errors propagate
    /// unchanged, and any failure aborts the whole mint. On success the
    /// policy base doubles before the new token is written.
    pub fn mint(env: Env, token_ids: Vec<u64>, content: String) -> u64 {
        let batch_size = match validate_token_batch(&token_ids) {
            Ok(n) => n,
            Err(err) => panic_with_error!(&env, err),
        };
        if content.len() > MAX_CONTENT_LENGTH {
            panic_with_error!(&env, ContractError::InvalidInput);
        }

        let escrow = EscrowClient::new(&env, &get_lock_escrow(&env));
        let source_collection = get_source_collection(&env);

        let first = token_ids.get(0).unwrap(); // non-empty after validation
        let record = escrow
            .get_lock(&source_collection, &first)
            .unwrap_or_else(|| panic_with_error!(&env, ContractError::NoActiveLock));
        if !record.matches_batch(&token_ids) {
            panic_with_error!(&env, ContractError::NoActiveLock);
        }

        let base = get_base_duration(&env);
        let required = policy::required_duration(base, batch_size)
            .unwrap_or_else(|err| panic_with_error!(&env, err));

        escrow.release(
            &env.current_contract_address(),
            &source_collection,
            &token_ids,
            &required,
        );

        let escalated =
            policy::escalate(base).unwrap_or_else(|err| panic_with_error!(&env, err));
        set_base_duration(&env, escalated);

        let token_id = next_token_id(&env);
        set_token(&env, token_id, &record.locker, &content);

        env.events().publish(
            (Symbol::new(&env, "minted"),),
            (token_id, record.locker, token_ids),
        );

        token_id
    }

    /// Duration a batch of `batch_size` tokens must wait under the current policy.
    pub fn get_next_required_lock_duration(env: Env, batch_size: u32) -> u64 {
        let base = get_base_duration(&env);
        policy::required_duration(base, batch_size)
            .unwrap_or_else(|err| panic_with_error!(&env, err))
    }

    pub fn owner_of(env: Env, token_id: u64) -> Address {
        get_token_owner(&env, token_id)
            .unwrap_or_else(|| panic_with_error!(&env, ContractError::TokenNotFound))
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) {
        from.require_auth();

        let owner = Self::owner_of(env.clone(), token_id);
        if owner != from {
            panic_with_error!(&env, ContractError::NotOwner);
        }

        set_token_owner(&env, token_id, &to);

        env.events()
            .publish((Symbol::new(&env, "transfer"),), (from, to, token_id));
    }

    /// Verbatim content supplied at mint time.
    pub fn token_content(env: Env, token_id: u64) -> String {
        get_token_content(&env, token_id)
            .unwrap_or_else(|| panic_with_error!(&env, ContractError::TokenNotFound))
    }

    /// Content rendered as a `data:text/plain;base64,` URI.
    pub fn token_uri(env: Env, token_id: u64) -> String {
        let content = Self::token_content(env.clone(), token_id);
        metadata::text_data_uri(&env, &content)
    }

    /// Total derivative tokens minted.
    pub fn total_minted(env: Env) -> u64 {
        get_token_counter(&env)
    }
}
