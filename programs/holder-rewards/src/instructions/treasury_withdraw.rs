use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{TREASURY_SEED, TREASURY_VAULT_SEED};
use crate::error::RewardsError;
use crate::state::Treasury;

pub fn treasury_withdraw(ctx: Context<TreasuryWithdraw>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let treasury = &mut ctx.accounts.treasury;
    treasury.authorize_withdrawal(
        &ctx.accounts.authority.key(),
        amount,
        ctx.accounts.vault.amount,
        now,
    )?;

    require_keys_eq!(
        ctx.accounts.destination.mint,
        treasury.mint,
        RewardsError::InvalidTokenMint
    );

    let signer_seeds: &[&[&[u8]]] = &[&[TREASURY_SEED, &[ctx.bumps.treasury]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: ctx.accounts.treasury.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    emit!(TreasuryWithdrawn {
        to: ctx.accounts.destination.key(),
        amount,
        withdrawn_at: now,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct TreasuryWithdraw<'info> {
    #[account(mut, seeds = [TREASURY_SEED], bump)]
    pub treasury: Account<'info, Treasury>,

    #[account(
        mut,
        seeds = [TREASURY_VAULT_SEED, treasury.key().as_ref()],
        bump,
        constraint = vault.mint == treasury.mint @ RewardsError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub destination: Account<'info, TokenAccount>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TreasuryWithdrawn {
    pub to: Pubkey,
    pub amount: u64,
    pub withdrawn_at: i64,
}
