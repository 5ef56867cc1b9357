pub mod initialize_genesis;
pub mod distribute_genesis;
pub mod create_treasury;
pub mod initiate_treasury;
pub mod treasury_withdraw;
pub mod update_grace_period;
pub mod create_airdrop;
pub mod initiate_airdrop;
pub mod claim_airdrop;
pub mod burn_remaining;
pub mod create_distributor;
pub mod initiate_distributor;
pub mod claim_vesting;
pub mod claim_for_all_assets;
pub mod emit_claim_quote;
pub mod create_registry;
pub mod mint_asset;
pub mod transfer_asset;

pub use initialize_genesis::*;
pub use distribute_genesis::*;
pub use create_treasury::*;
pub use initiate_treasury::*;
pub use treasury_withdraw::*;
pub use update_grace_period::*;
pub use create_airdrop::*;
pub use initiate_airdrop::*;
pub use claim_airdrop::*;
pub use burn_remaining::*;
pub use create_distributor::*;
pub use initiate_distributor::*;
pub use claim_vesting::*;
pub use claim_for_all_assets::*;
pub use emit_claim_quote::*;
pub use create_registry::*;
pub use mint_asset::*;
pub use transfer_asset::*;
