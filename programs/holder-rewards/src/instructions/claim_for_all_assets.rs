use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{DISTRIBUTOR_SEED, DISTRIBUTOR_VAULT_SEED};
use crate::error::RewardsError;
use crate::instructions::claim_vesting::check_claimant_account;
use crate::state::{AssetRegistry, Distributor, VestingLedger};

/// Claims for every asset the signer holds and pays the total in one transfer.
pub fn claim_for_all_assets(ctx: Context<ClaimForAllAssets>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let claimant = ctx.accounts.claimant.key();

    let batch = {
        let registry = ctx.accounts.registry.load()?;
        let mut ledger = ctx.accounts.vesting_ledger.load_mut()?;
        ctx.accounts
            .distributor
            .claim_all(&mut ledger, &registry, &claimant, now)?
    };

    check_claimant_account(&ctx.accounts.claimant_token_account, &ctx.accounts.distributor, &claimant)?;
    require!(
        ctx.accounts.vault.amount >= batch.amount,
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
        batch.amount,
    )?;

    emit!(VestingBatchClaimed {
        claimant,
        assets_claimed: batch.assets_claimed,
        amount: batch.amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClaimForAllAssets<'info> {
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
pub struct VestingBatchClaimed {
    pub claimant: Pubkey,
    pub assets_claimed: u32,
    pub amount: u64,
}
