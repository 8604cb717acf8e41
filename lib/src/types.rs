use soroban_sdk::{contracttype, Address, Vec};

/// Active escrow record for one locked batch.
///
/// Stored under every token id in the batch, so looking any member up finds
/// the whole batch and a token can never appear in two records at once.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct LockRecord {
    pub locker: Address,
    pub source_collection: Address,
    pub target_collection: Address,
    pub token_ids: Vec<u64>,
    pub locked_at: u64,
}

impl LockRecord {
    /// Batch size of the record.
    pub fn batch_size(&self) -> u32 {
        self.token_ids.len()
    }

    /// True when `token_ids` is exactly the recorded batch (as a set).
    ///
    /// Both sides are duplicate-free, so equal length plus membership of
    /// every supplied id is set equality.
    pub fn matches_batch(&self, token_ids: &Vec<u64>) -> bool {
        if self.token_ids.len() != token_ids.len() {
            return false;
        }
        for id in token_ids.iter() {
            if !self.token_ids.contains(&id) {
                return false;
            }
        }
        true
    }
}
