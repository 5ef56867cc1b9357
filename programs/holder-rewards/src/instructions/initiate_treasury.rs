use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::constants::{TREASURY_SEED, TREASURY_VAULT_SEED};
use crate::state::Treasury;

/// Activates the treasury once its genesis share has landed in the vault.
pub fn initiate_treasury(ctx: Context<InitiateTreasury>) -> Result<()> {
    let treasury = &mut ctx.accounts.treasury;
    treasury.initiate(ctx.accounts.vault.amount)?;

    emit!(TreasuryInitiated {
        vault_balance: ctx.accounts.vault.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitiateTreasury<'info> {
    #[account(mut, seeds = [TREASURY_SEED], bump)]
    pub treasury: Account<'info, Treasury>,

    #[account(
        seeds = [TREASURY_VAULT_SEED, treasury.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,
}

#[event]
pub struct TreasuryInitiated {
    pub vault_balance: u64,
}
