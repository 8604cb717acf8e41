use soroban_sdk::Vec;

use crate::{errors::ContractError, MAX_BATCH_SIZE};

/// Validate a lock batch and return its size.
///
/// A batch is a set: empty batches, oversized batches and duplicate ids are
/// all rejected rather than silently repaired, because the batch size feeds
/// straight into the duration quote.
pub fn validate_token_batch(token_ids: &Vec<u64>) -> Result<u32, ContractError> {
    let n = token_ids.len();
    if n == 0 || n > MAX_BATCH_SIZE {
        return Err(ContractError::InvalidBatchSize);
    }

    for i in 0..n {
        let id = token_ids.get(i).ok_or(ContractError::InvalidBatchSize)?;
        for j in (i + 1)..n {
            if token_ids.get(j) == Some(id) {
                return Err(ContractError::InvalidBatchSize);
            }
        }
    }

    Ok(n)
}
