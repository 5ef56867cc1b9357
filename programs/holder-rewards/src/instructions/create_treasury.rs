use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{MINT_SEED, TREASURY_SEED, TREASURY_VAULT_SEED};
use crate::state::Treasury;

pub fn create_treasury(ctx: Context<CreateTreasury>) -> Result<()> {
    let treasury = &mut ctx.accounts.treasury;
    treasury.set_inner(Treasury::new(
        ctx.accounts.authority.key(),
        ctx.accounts.mint.key(),
    ));

    emit!(TreasuryCreated {
        authority: treasury.authority,
        vault: ctx.accounts.vault.key(),
        grace_period: treasury.grace_period,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateTreasury<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Treasury::SIZE,
        seeds = [TREASURY_SEED],
        bump
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(
        init,
        payer = authority,
        token::mint = mint,
        token::authority = treasury,
        seeds = [TREASURY_VAULT_SEED, treasury.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(seeds = [MINT_SEED], bump)]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct TreasuryCreated {
    pub authority: Pubkey,
    pub vault: Pubkey,
    pub grace_period: i64,
}
