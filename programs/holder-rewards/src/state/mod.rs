pub mod airdrop;
pub mod distributor;
pub mod genesis;
pub mod registry;
pub mod treasury;

pub use airdrop::*;
pub use distributor::*;
pub use genesis::*;
pub use registry::*;
pub use treasury::*;
