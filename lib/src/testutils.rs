#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, Symbol};

use crate::errors::ContractError;
use crate::interfaces::Collection;

/// Minimal in-memory source collection for tests.
///
/// Stands in for whatever registry tokens are locked from; production
/// deployments talk to a real collection through `CollectionClient`.
#[contract]
pub struct TestCollection;

fn owner_key(env: &Env, token_id: u64) -> (Symbol, u64) {
    (Symbol::new(env, "owner"), token_id)
}

#[contractimpl]
impl Collection for TestCollection {
    fn owner_of(env: Env, token_id: u64) -> Address {
        env.storage()
            .persistent()
            .get(&owner_key(&env, token_id))
            .unwrap_or_else(|| panic_with_error!(&env, ContractError::TokenNotFound))
    }

    fn transfer(env: Env, from: Address, to: Address, token_id: u64) {
        from.require_auth();

        let owner = Self::owner_of(env.clone(), token_id);
        if owner != from {
            panic_with_error!(&env, ContractError::NotOwner);
        }

        env.storage().persistent().set(&owner_key(&env, token_id), &to);
    }

    fn mint(env: Env, to: Address, token_id: u64) {
        if env.storage().persistent().has(&owner_key(&env, token_id)) {
            panic_with_error!(&env, ContractError::InvalidInput);
        }

        env.storage().persistent().set(&owner_key(&env, token_id), &to);
    }
}
