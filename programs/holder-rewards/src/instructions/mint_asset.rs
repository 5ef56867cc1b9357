use anchor_lang::prelude::*;

use crate::state::AssetRegistry;

pub fn mint_asset(ctx: Context<MintAsset>, to: Pubkey) -> Result<()> {
    let mut registry = ctx.accounts.registry.load_mut()?;
    let asset_id = registry.mint_to(&ctx.accounts.authority.key(), to)?;

    emit!(AssetMinted { asset_id, to });
    Ok(())
}

#[derive(Accounts)]
pub struct MintAsset<'info> {
    #[account(mut)]
    pub registry: AccountLoader<'info, AssetRegistry>,

    pub authority: Signer<'info>,
}

#[event]
pub struct AssetMinted {
    pub asset_id: u32,
    pub to: Pubkey,
}
