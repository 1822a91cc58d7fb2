pub mod claim_state;
pub mod ledger_state;
pub mod role_state;

pub use claim_state::*;
pub use ledger_state::*;
pub use role_state::*;
