use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_GRACE_PERIOD, MIN_GRACE_PERIOD_EXCLUSIVE, TREASURY_MIN_BALANCE};
use crate::error::RewardsError;
use crate::utils::access::only_owner;

/// Owner-governed treasury PDA with a rate-limited withdrawal.
#[account]
pub struct Treasury {
    /// Owner authority.
    pub authority: Pubkey,
    /// Token mint.
    pub mint: Pubkey,
    pub initialized: bool,
    /// Unix seconds of the last successful withdrawal; 0 before the first.
    pub last_withdrawal: i64,
    /// Minimum spacing between withdrawals, in seconds.
    pub grace_period: i64,
}

impl Treasury {
    pub const SIZE: usize =
        32 + // authority
        32 + // mint
        1 +  // initialized
        8 +  // last_withdrawal
        8;   // grace_period

    pub fn new(authority: Pubkey, mint: Pubkey) -> Self {
        Self {
            authority,
            mint,
            initialized: false,
            last_withdrawal: 0,
            grace_period: DEFAULT_GRACE_PERIOD,
        }
    }

    pub fn initiate(&mut self, vault_balance: u64) -> std::result::Result<(), RewardsError> {
        if self.initialized {
            return Err(RewardsError::AlreadyInitialized);
        }
        if vault_balance < TREASURY_MIN_BALANCE {
            return Err(RewardsError::InsufficientFunds);
        }
        self.initialized = true;
        Ok(())
    }

    /// Validates a withdrawal and records it. The token transfer follows in
    /// the same instruction.
    pub fn authorize_withdrawal(
        &mut self,
        caller: &Pubkey,
        amount: u64,
        vault_balance: u64,
        now_ts: i64,
    ) -> std::result::Result<(), RewardsError> {
        only_owner(&self.authority, caller)?;
        if !self.initialized {
            return Err(RewardsError::NotInitialized);
        }
        if self.last_withdrawal != 0 {
            if now_ts <= self.last_withdrawal {
                return Err(RewardsError::TooSoon);
            }
            let since = now_ts - self.last_withdrawal;
            if since < self.grace_period {
                return Err(RewardsError::GraceNotElapsed);
            }
        }
        if amount == 0 {
            return Err(RewardsError::InvalidAmount);
        }
        if amount > vault_balance {
            return Err(RewardsError::InsufficientFunds);
        }
        self.last_withdrawal = now_ts;
        Ok(())
    }

    pub fn update_grace_period(
        &mut self,
        caller: &Pubkey,
        new_period: i64,
    ) -> std::result::Result<(), RewardsError> {
        only_owner(&self.authority, caller)?;
        if !self.initialized {
            return Err(RewardsError::NotInitialized);
        }
        if new_period <= MIN_GRACE_PERIOD_EXCLUSIVE {
            return Err(RewardsError::PeriodTooShort);
        }
        self.grace_period = new_period;
        Ok(())
    }
}
