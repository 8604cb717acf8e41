use soroban_sdk::{contracttype, panic_with_error, Address, Env, String};
use vaultmint_lib::ContractError;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Escrow contract this registry consumes locks from
    LockEscrow,
    /// Collection the locked tokens originate from
    SourceCollection,
    /// Current policy base duration
    BaseDuration,
    /// Number of derivative tokens minted so far
    TokenCounter,
    /// Owner of a minted token
    TokenOwner(u64),
    /// Verbatim content of a minted token
    TokenContent(u64),
}

/* ---------------- WIRING ---------------- */

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::LockEscrow)
}

pub fn set_wiring(env: &Env, lock_escrow: &Address, source_collection: &Address) {
    env.storage().instance().set(&DataKey::LockEscrow, lock_escrow);
    env.storage()
        .instance()
        .set(&DataKey::SourceCollection, source_collection);
}

pub fn get_lock_escrow(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::LockEscrow)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::NotInitialized))
}

pub fn get_source_collection(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&DataKey::SourceCollection)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::NotInitialized))
}

/* ---------------- POLICY STATE ---------------- */

pub fn set_base_duration(env: &Env, base: u64) {
    env.storage().instance().set(&DataKey::BaseDuration, &base);
}

pub fn get_base_duration(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::BaseDuration)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::NotInitialized))
}

/* ---------------- TOKENS ---------------- */

pub fn get_token_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TokenCounter)
        .unwrap_or(0)
}

pub fn set_token_counter(env: &Env, counter: u64) {
    env.storage().instance().set(&DataKey::TokenCounter, &counter);
}

/// Allocate the next token id.
pub fn next_token_id(env: &Env) -> u64 {
    let token_id = get_token_counter(env)
        .checked_add(1)
        .unwrap_or_else(|| panic_with_error!(env, ContractError::ArithmeticOverflow));
    set_token_counter(env, token_id);
    token_id
}

pub fn set_token(env: &Env, token_id: u64, owner: &Address, content: &String) {
    env.storage()
        .persistent()
        .set(&DataKey::TokenOwner(token_id), owner);
    env.storage()
        .persistent()
        .set(&DataKey::TokenContent(token_id), content);
}

pub fn get_token_owner(env: &Env, token_id: u64) -> Option<Address> {
    env.storage().persistent().get(&DataKey::TokenOwner(token_id))
}

pub fn set_token_owner(env: &Env, token_id: u64, owner: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::TokenOwner(token_id), owner);
}

pub fn get_token_content(env: &Env, token_id: u64) -> Option<String> {
    env.storage()
        .persistent()
        .get(&DataKey::TokenContent(token_id))
}
