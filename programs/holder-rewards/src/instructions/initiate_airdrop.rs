use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{AIRDROP_SEED, AIRDROP_VAULT_SEED};
use crate::state::Airdrop;

/// Opens the 30-day claim window.
pub fn initiate_airdrop(ctx: Context<InitiateAirdrop>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let airdrop = &mut ctx.accounts.airdrop;
    airdrop.initiate(ctx.accounts.vault.amount, now)?;

    emit!(AirdropInitiated {
        start_ts: airdrop.start_ts,
        per_claim_amount: airdrop.per_claim_amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitiateAirdrop<'info> {
    #[account(mut, seeds = [AIRDROP_SEED], bump)]
    pub airdrop: Box<Account<'info, Airdrop>>,

    #[account(
        seeds = [AIRDROP_VAULT_SEED, airdrop.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,
}

#[event]
pub struct AirdropInitiated {
    pub start_ts: i64,
    pub per_claim_amount: u64,
}
