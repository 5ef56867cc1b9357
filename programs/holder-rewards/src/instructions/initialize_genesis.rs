use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};

use crate::constants::{GENESIS_SEED, MINT_SEED, TOKEN_DECIMALS};
use crate::state::Genesis;

pub fn initialize_genesis(ctx: Context<InitializeGenesis>) -> Result<()> {
    let genesis = &mut ctx.accounts.genesis;
    genesis.authority = ctx.accounts.authority.key();
    genesis.mint = ctx.accounts.mint.key();
    genesis.distributed = false;

    emit!(GenesisInitialized {
        authority: genesis.authority,
        mint: genesis.mint,
        decimals: TOKEN_DECIMALS,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeGenesis<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Genesis::SIZE,
        seeds = [GENESIS_SEED],
        bump
    )]
    pub genesis: Account<'info, Genesis>,

    #[account(
        init,
        payer = authority,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = genesis,
        seeds = [MINT_SEED],
        bump
    )]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct GenesisInitialized {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub decimals: u8,
}
