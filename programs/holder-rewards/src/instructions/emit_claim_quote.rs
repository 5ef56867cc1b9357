use anchor_lang::prelude::*;

use crate::constants::DISTRIBUTOR_SEED;
use crate::error::RewardsError;
use crate::state::{AssetRegistry, Distributor, VestingLedger};

/// Read-only: emits what a claim for `asset_id` would pay right now.
pub fn emit_claim_quote(ctx: Context<EmitClaimQuote>, asset_id: u32) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let distributor = &ctx.accounts.distributor;
    let registry = ctx.accounts.registry.load()?;
    let ledger = ctx.accounts.vesting_ledger.load()?;

    let holder = registry.owner_of(asset_id)?;
    let accrual = distributor.accrued(&ledger, asset_id, now)?;
    let active = distributor.initialized && distributor.is_active(now)?;

    emit!(ClaimQuote {
        asset_id,
        holder,
        anchor_ts: accrual.anchor_ts,
        months: accrual.months,
        payable: if active { accrual.amount } else { 0 },
        active,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitClaimQuote<'info> {
    #[account(seeds = [DISTRIBUTOR_SEED], bump)]
    pub distributor: Account<'info, Distributor>,

    #[account(address = distributor.vesting_ledger @ RewardsError::LedgerMismatch)]
    pub vesting_ledger: AccountLoader<'info, VestingLedger>,

    #[account(address = distributor.registry @ RewardsError::RegistryMismatch)]
    pub registry: AccountLoader<'info, AssetRegistry>,
}

#[event]
pub struct ClaimQuote {
    pub asset_id: u32,
    pub holder: Pubkey,
    pub anchor_ts: i64,
    pub months: u64,
    pub payable: u64,
    pub active: bool,
}
