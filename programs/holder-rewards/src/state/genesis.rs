use anchor_lang::prelude::*;

use crate::constants::{
    AIRDROP_ALLOCATION, OPERATIONS_ALLOCATION, TOTAL_SUPPLY, TREASURY_ALLOCATION,
    VESTING_ALLOCATION,
};
use crate::error::RewardsError;
use crate::utils::access::only_owner;

/// Mint authority PDA; mints the fixed supply exactly once.
#[account]
pub struct Genesis {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub distributed: bool,
}

impl Genesis {
    pub const SIZE: usize =
        32 + // authority
        32 + // mint
        1;   // distributed

    pub fn authorize_distribution(&mut self, caller: &Pubkey) -> std::result::Result<GenesisSplit, RewardsError> {
        only_owner(&self.authority, caller)?;
        if self.distributed {
            return Err(RewardsError::GenesisAlreadyDistributed);
        }
        self.distributed = true;
        GenesisSplit::fixed()
    }
}

/// Amount minted to each recipient class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenesisSplit {
    pub operations: u64,
    pub treasury: u64,
    pub airdrop: u64,
    pub vesting: u64,
}

impl GenesisSplit {
    pub fn fixed() -> std::result::Result<Self, RewardsError> {
        let split = Self {
            operations: OPERATIONS_ALLOCATION,
            treasury: TREASURY_ALLOCATION,
            airdrop: AIRDROP_ALLOCATION,
            vesting: VESTING_ALLOCATION,
        };
        if split.total()? != TOTAL_SUPPLY {
            return Err(RewardsError::MathOverflow);
        }
        Ok(split)
    }

    pub fn total(&self) -> std::result::Result<u64, RewardsError> {
        [self.treasury, self.airdrop, self.vesting]
            .iter()
            .try_fold(self.operations, |acc, v| acc.checked_add(*v))
            .ok_or(RewardsError::MathOverflow)
    }
}
