use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{DISTRIBUTOR_SEED, DISTRIBUTOR_VAULT_SEED};
use crate::error::RewardsError;
use crate::state::{AssetRegistry, Distributor, VestingLedger};

pub fn claim_vesting(ctx: Context<ClaimVesting>, asset_id: u32) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let claimant = ctx.accounts.claimant.key();

    let accrual = {
        let registry = ctx.accounts.registry.load()?;
        let mut ledger = ctx.accounts.vesting_ledger.load_mut()?;
        ctx.accounts
            .distributor
            .claim(&mut ledger, &registry, &claimant, asset_id, now)?
    };

    check_claimant_account(&ctx.accounts.claimant_token_account, &ctx.accounts.distributor, &claimant)?;
    require!(
        ctx.accounts.vault.amount >= accrual.amount,
        RewardsError::InsufficientFunds
    );

    let signer_seeds: &[&[&[u8]]] = &[&[DISTRIBUTOR_SEED, &[ctx.bumps.distributor]]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.claimant_token_account.to_account_info(),
                authority: ctx.accounts.distributor.to_account_info(),
            },
            signer_seeds,
        ),
        accrual.amount,
    )?;

    emit!(VestingClaimed {
        asset_id,
        claimant,
        months: accrual.months,
        amount: accrual.amount,
    });

    Ok(())
}

pub(crate) fn check_claimant_account(
    account: &TokenAccount,
    distributor: &Distributor,
    claimant: &Pubkey,
) -> Result<()> {
    require_keys_eq!(account.mint, distributor.mint, RewardsError::InvalidTokenMint);
    require_keys_eq!(account.owner, *claimant, RewardsError::InvalidTokenAccount);
    Ok(())
}

#[derive(Accounts)]
pub struct ClaimVesting<'info> {
    #[account(mut, seeds = [DISTRIBUTOR_SEED], bump)]
    pub distributor: Account<'info, Distributor>,

    #[account(
        mut,
        address = distributor.vesting_ledger @ RewardsError::LedgerMismatch,
    )]
    pub vesting_ledger: AccountLoader<'info, VestingLedger>,

    #[account(address = distributor.registry @ RewardsError::RegistryMismatch)]
    pub registry: AccountLoader<'info, AssetRegistry>,

    #[account(
        mut,
        seeds = [DISTRIBUTOR_VAULT_SEED, distributor.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub claimant_token_account: Account<'info, TokenAccount>,

    pub claimant: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct VestingClaimed {
    pub asset_id: u32,
    pub claimant: Pubkey,
    pub months: u64,
    pub amount: u64,
}
