pub mod initialize;
pub mod set_merkle_root;
pub mod claim;
pub mod get_claim_stats;
pub mod set_upgrade_amount;
pub mod pause;
pub mod emergency_withdraw;
pub mod roles;
pub mod upgrade_to;

pub use initialize::*;
pub use set_merkle_root::*;
pub use claim::*;
pub use get_claim_stats::*;
pub use set_upgrade_amount::*;
pub use pause::*;
pub use emergency_withdraw::*;
pub use roles::*;
pub use upgrade_to::*;
