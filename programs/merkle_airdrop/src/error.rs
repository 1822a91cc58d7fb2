use anchor_lang::prelude::*;

#[error_code]
pub enum AirdropError {
    // Access control errors
    #[msg("Caller is missing the role required for this action")]
    AccessControlUnauthorized,
    #[msg("Roles can only be renounced by the account holding them")]
    BadRenounceConfirmation,
    #[msg("Role already has the maximum number of members")]
    RoleCapacityExceeded,

    // Configuration errors
    #[msg("Invalid token address")]
    InvalidTokenAddress,
    #[msg("Caller is not the mint authority of the token")]
    MintAuthorityMismatch,
    #[msg("Invalid implementation address")]
    InvalidImplementation,
    #[msg("Upgrade amount exceeds the allowed maximum")]
    UpgradeAmountTooHigh,

    // Pause state errors
    #[msg("Contract is paused")]
    ContractPaused,
    #[msg("Contract is already paused")]
    AlreadyPaused,
    #[msg("Contract is not paused")]
    NotPaused,

    // Merkle proof errors
    #[msg("Merkle root not set")]
    MerkleRootNotSet,
    #[msg("Invalid proof")]
    InvalidProof,
    #[msg("Whitelist is empty")]
    EmptyWhitelist,
    #[msg("Entry not found in merkle tree")]
    EntryNotFound,

    // Claim errors
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Already claimed")]
    AlreadyClaimed,
    #[msg("Insufficient token balance held by the ledger")]
    InsufficientBalance,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Token mint does not match ledger's token mint")]
    TokenMintMismatch,
    #[msg("Mint destination is not owned by the claimant")]
    MintRecipientMismatch,
}
