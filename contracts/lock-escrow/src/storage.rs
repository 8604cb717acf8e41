use soroban_sdk::{contracttype, Address, Env};
use vaultmint_lib::LockRecord;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Active lock record: (source collection, token id)
    Lock(Address, u64),
}

/* ---------------- LOCK RECORDS ---------------- */

/// Write the record under every token id of its batch.
pub fn write_lock(env: &Env, record: &LockRecord) {
    for id in record.token_ids.iter() {
        env.storage()
            .persistent()
            .set(&DataKey::Lock(record.source_collection.clone(), id), record);
    }
}

pub fn read_lock(env: &Env, source_collection: &Address, token_id: u64) -> Option<LockRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Lock(source_collection.clone(), token_id))
}

pub fn lock_exists(env: &Env, source_collection: &Address, token_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Lock(source_collection.clone(), token_id))
}

/// Remove every key of the record's batch.
pub fn clear_lock(env: &Env, record: &LockRecord) {
    for id in record.token_ids.iter() {
        env.storage()
            .persistent()
            .remove(&DataKey::Lock(record.source_collection.clone(), id));
    }
}
