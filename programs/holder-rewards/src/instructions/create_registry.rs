use anchor_lang::prelude::*;

use crate::constants::DISTRIBUTOR_SEED;
use crate::error::RewardsError;
use crate::state::{AssetRegistry, Distributor, VestingLedger};

/// Initialises the pre-allocated registry and registers the vesting ledger
/// as its transfer observer. Only the distributor owner may do this, which
/// also makes them the registry's minting authority.
pub fn create_registry(ctx: Context<CreateRegistry>) -> Result<()> {
    ctx.accounts.distributor.authorize_registry(
        &ctx.accounts.authority.key(),
        &ctx.accounts.registry.key(),
        &ctx.accounts.vesting_ledger.key(),
    )?;

    let ledger = ctx.accounts.vesting_ledger.load()?;
    require_keys_eq!(
        ledger.registry,
        ctx.accounts.registry.key(),
        RewardsError::RegistryMismatch
    );

    let mut registry = ctx.accounts.registry.load_init()?;
    registry.init(
        ctx.accounts.authority.key(),
        ctx.accounts.vesting_ledger.key(),
    );

    emit!(RegistryCreated {
        authority: registry.authority,
        transfer_observer: registry.transfer_observer,
        max_supply: registry.max_supply,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreateRegistry<'info> {
    #[account(zero)]
    pub registry: AccountLoader<'info, AssetRegistry>,

    pub vesting_ledger: AccountLoader<'info, VestingLedger>,

    #[account(seeds = [DISTRIBUTOR_SEED], bump)]
    pub distributor: Account<'info, Distributor>,

    pub authority: Signer<'info>,
}

#[event]
pub struct RegistryCreated {
    pub authority: Pubkey,
    pub transfer_observer: Pubkey,
    pub max_supply: u32,
}
