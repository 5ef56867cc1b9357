use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::instruction::AuthorityType;
use anchor_spl::token::{self, Mint, MintTo, SetAuthority, Token, TokenAccount};

use crate::constants::{
    AIRDROP_SEED, AIRDROP_VAULT_SEED, DISTRIBUTOR_SEED, DISTRIBUTOR_VAULT_SEED, GENESIS_SEED,
    MINT_SEED, TREASURY_SEED, TREASURY_VAULT_SEED,
};
use crate::error::RewardsError;
use crate::state::{Airdrop, Distributor, Genesis, Treasury};

/// Mints the fixed supply into the operations wallet and the three component
/// vaults, then drops the mint authority for good.
pub fn distribute_genesis(ctx: Context<DistributeGenesis>) -> Result<()> {
    let split = ctx
        .accounts
        .genesis
        .authorize_distribution(&ctx.accounts.authority.key())?;

    require_keys_eq!(
        ctx.accounts.operations_account.mint,
        ctx.accounts.mint.key(),
        RewardsError::InvalidTokenMint
    );

    let signer_seeds: &[&[&[u8]]] = &[&[GENESIS_SEED, &[ctx.bumps.genesis]]];
    let targets = [
        (ctx.accounts.operations_account.to_account_info(), split.operations),
        (ctx.accounts.treasury_vault.to_account_info(), split.treasury),
        (ctx.accounts.airdrop_vault.to_account_info(), split.airdrop),
        (ctx.accounts.distributor_vault.to_account_info(), split.vesting),
    ];
    for (to, amount) in targets {
        token::mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.mint.to_account_info(),
                    to,
                    authority: ctx.accounts.genesis.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;
    }

    token::set_authority(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            SetAuthority {
                current_authority: ctx.accounts.genesis.to_account_info(),
                account_or_mint: ctx.accounts.mint.to_account_info(),
            },
            signer_seeds,
        ),
        AuthorityType::MintTokens,
        None,
    )?;

    msg!("Genesis supply distributed: {}", split.total()?);
    emit!(GenesisDistributed {
        operations: split.operations,
        treasury: split.treasury,
        airdrop: split.airdrop,
        vesting: split.vesting,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DistributeGenesis<'info> {
    #[account(mut, seeds = [GENESIS_SEED], bump)]
    pub genesis: Account<'info, Genesis>,

    #[account(
        mut,
        seeds = [MINT_SEED],
        bump,
        address = genesis.mint @ RewardsError::InvalidTokenMint,
    )]
    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub operations_account: Account<'info, TokenAccount>,

    #[account(seeds = [TREASURY_SEED], bump)]
    pub treasury: Box<Account<'info, Treasury>>,

    #[account(
        mut,
        seeds = [TREASURY_VAULT_SEED, treasury.key().as_ref()],
        bump
    )]
    pub treasury_vault: Box<Account<'info, TokenAccount>>,

    #[account(seeds = [AIRDROP_SEED], bump)]
    pub airdrop: Box<Account<'info, Airdrop>>,

    #[account(
        mut,
        seeds = [AIRDROP_VAULT_SEED, airdrop.key().as_ref()],
        bump
    )]
    pub airdrop_vault: Box<Account<'info, TokenAccount>>,

    #[account(seeds = [DISTRIBUTOR_SEED], bump)]
    pub distributor: Box<Account<'info, Distributor>>,

    #[account(
        mut,
        seeds = [DISTRIBUTOR_VAULT_SEED, distributor.key().as_ref()],
        bump
    )]
    pub distributor_vault: Box<Account<'info, TokenAccount>>,

    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct GenesisDistributed {
    pub operations: u64,
    pub treasury: u64,
    pub airdrop: u64,
    pub vesting: u64,
}
