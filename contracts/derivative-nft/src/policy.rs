//! Escalating lock-duration policy.
//!
//! The wait for a batch of `n` tokens is `base / n` (floor), so batching
//! amortizes the holding period. Every successful consumption doubles the
//! base, which makes rapid single-token use increasingly expensive.

use vaultmint_lib::ContractError;

/// Duration a batch of `batch_size` tokens must stay locked under `base`.
pub fn required_duration(base: u64, batch_size: u32) -> Result<u64, ContractError> {
    if batch_size == 0 {
        return Err(ContractError::InvalidBatchSize);
    }
    Ok(base / batch_size as u64)
}

/// Base duration after one successful consumption.
pub fn escalate(base: u64) -> Result<u64, ContractError> {
    base.checked_mul(2).ok_or(ContractError::ArithmeticOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_quotes() {
        assert_eq!(required_duration(600, 1), Ok(600));
        assert_eq!(required_duration(600, 10), Ok(60));
    }

    #[test]
    fn division_floors() {
        assert_eq!(required_duration(600, 7), Ok(85));
        assert_eq!(required_duration(5, 10), Ok(0));
    }

    #[test]
    fn zero_batch_rejected() {
        assert_eq!(
            required_duration(600, 0),
            Err(ContractError::InvalidBatchSize)
        );
    }

    #[test]
    fn escalation_doubles() {
        assert_eq!(escalate(600), Ok(1200));
        assert_eq!(escalate(1200), Ok(2400));
    }

    #[test]
    fn escalation_overflow_is_an_error() {
        assert_eq!(
            escalate(u64::MAX / 2 + 1),
            Err(ContractError::ArithmeticOverflow)
        );
    }
}
