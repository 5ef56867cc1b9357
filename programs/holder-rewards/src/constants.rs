//! Program-wide constants.

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// One vesting "month": a fixed 30-day period, not a calendar month.
pub const SECONDS_PER_MONTH: i64 = 30 * SECONDS_PER_DAY;

/// Months per vesting year.
pub const MONTHS_PER_YEAR: u64 = 12;

/// Maximum number of collectible assets; ids run from 1 to MAX_ASSETS.
pub const MAX_ASSETS: usize = 9_999;

/// Bytes needed for one claimed bit per asset id.
pub const CLAIM_BITMAP_LEN: usize = (MAX_ASSETS + 7) / 8;

/// Fungible token decimals.
pub const TOKEN_DECIMALS: u8 = 9;

/// One whole token in base units.
pub const ONE_TOKEN: u64 = 10u64.pow(TOKEN_DECIMALS as u32);

/// Fixed total supply minted once at genesis.
pub const TOTAL_SUPPLY: u64 = 100_000_000 * ONE_TOKEN;

/// Genesis split. Must sum to TOTAL_SUPPLY.
pub const OPERATIONS_ALLOCATION: u64 = 30_000_000 * ONE_TOKEN;
pub const TREASURY_ALLOCATION: u64 = 30_000_000 * ONE_TOKEN;
pub const AIRDROP_ALLOCATION: u64 = 20_000_000 * ONE_TOKEN;
pub const VESTING_ALLOCATION: u64 = 20_000_000 * ONE_TOKEN;

/// Vault balance a treasury must hold before it can be initiated.
pub const TREASURY_MIN_BALANCE: u64 = TREASURY_ALLOCATION;

/// Grace period every treasury starts with. Exactly 24 hours, so it sits on
/// the boundary that `update_grace_period` rejects; any update must be longer.
pub const DEFAULT_GRACE_PERIOD: i64 = SECONDS_PER_DAY;

/// Updated grace periods must be strictly longer than this.
pub const MIN_GRACE_PERIOD_EXCLUSIVE: i64 = SECONDS_PER_DAY;

/// Airdrop claim window, measured from initiation.
pub const AIRDROP_WINDOW: i64 = 30 * SECONDS_PER_DAY;

/// Vesting claims are accepted for this long after initiation.
pub const VESTING_ACTIVE_DURATION: i64 = 365 * SECONDS_PER_DAY;

/// Amount one asset accrues over a full vesting year.
pub const ANNUAL_ALLOCATION_PER_ASSET: u64 = 1_000 * ONE_TOKEN;

pub const GENESIS_SEED: &[u8] = b"genesis";
pub const MINT_SEED: &[u8] = b"mint";
pub const TREASURY_SEED: &[u8] = b"treasury";
pub const TREASURY_VAULT_SEED: &[u8] = b"treasury_vault";
pub const AIRDROP_SEED: &[u8] = b"airdrop";
pub const AIRDROP_VAULT_SEED: &[u8] = b"airdrop_vault";
pub const DISTRIBUTOR_SEED: &[u8] = b"distributor";
pub const DISTRIBUTOR_VAULT_SEED: &[u8] = b"distributor_vault";
