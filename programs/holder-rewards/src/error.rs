use anchor_lang::prelude::*;

/// Error codes shared by every component of the program.
#[error_code]
pub enum RewardsError {
    #[msg("Contract already initiated")]
    AlreadyInitialized,

    #[msg("Contract is not initialized")]
    NotInitialized,

    #[msg("Insufficient funds")]
    InsufficientFunds,

    #[msg("Permission denied: caller is not the owner")]
    PermissionDenied,

    #[msg("Airdrop finished")]
    WindowClosed,

    #[msg("Airdrop window is still open")]
    WindowStillOpen,

    #[msg("Asset already claimed")]
    AlreadyClaimed,

    #[msg("Caller is not the owner of the asset")]
    NotOwner,

    #[msg("No claimable rewards")]
    NoClaimableRewards,

    #[msg("Withdrawal occurring too soon")]
    TooSoon,

    #[msg("Grace period between withdrawals has not elapsed")]
    GraceNotElapsed,

    #[msg("Grace period must be longer than 24 hours")]
    PeriodTooShort,

    #[msg("Distributor inactive")]
    Inactive,

    #[msg("Remaining airdrop balance already burned")]
    AlreadySwept,

    #[msg("Asset id out of range")]
    InvalidAssetId,

    #[msg("Asset has not been minted")]
    AssetNotMinted,

    #[msg("All assets have been minted")]
    MaxSupplyReached,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Vesting ledger is bound to a different registry")]
    RegistryMismatch,

    #[msg("Supplied account is not the registered transfer observer")]
    ObserverMismatch,

    #[msg("Supplied vesting ledger does not belong to this distributor")]
    LedgerMismatch,

    #[msg("Genesis supply already distributed")]
    GenesisAlreadyDistributed,

    #[msg("Math overflow")]
    MathOverflow,
}
