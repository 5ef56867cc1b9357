use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{DISTRIBUTOR_SEED, DISTRIBUTOR_VAULT_SEED, VESTING_ACTIVE_DURATION};
use crate::state::Distributor;

/// Starts every asset's vesting clock.
pub fn initiate_distributor(ctx: Context<InitiateDistributor>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let distributor = &mut ctx.accounts.distributor;
    distributor.initiate(ctx.accounts.vault.amount, now)?;

    emit!(DistributorInitiated {
        start_ts: distributor.start_ts,
        active_until: distributor.start_ts.saturating_add(VESTING_ACTIVE_DURATION),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitiateDistributor<'info> {
    #[account(mut, seeds = [DISTRIBUTOR_SEED], bump)]
    pub distributor: Account<'info, Distributor>,

    #[account(
        seeds = [DISTRIBUTOR_VAULT_SEED, distributor.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,
}

#[event]
pub struct DistributorInitiated {
    pub start_ts: i64,
    pub active_until: i64,
}
