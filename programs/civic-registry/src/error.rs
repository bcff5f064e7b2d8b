use anchor_lang::prelude::*;

#[error_code]
pub enum RegistryError {
    #[msg("Caller is already registered as a citizen")]
    AlreadyRegistered,

    #[msg("Invalid input - empty text or null identity")]
    InvalidInput,

    #[msg("Caller is not a registered citizen")]
    NotRegistered,

    #[msg("Caller is not authorized for this operation")]
    NotAuthorized,

    #[msg("Service request not found")]
    NotFound,

    #[msg("Service request has already been completed")]
    AlreadyCompleted,

    #[msg("Input text exceeds its maximum stored length")]
    InputTooLong,

    #[msg("Roster entry accounts do not match the requested page")]
    RosterEntryMismatch,

    #[msg("Request timestamp is in the future or too old")]
    StaleTimestamp,

    #[msg("Request ID does not match the derived ID for this requester and timestamp")]
    RequestIdMismatch,

    #[msg("Arithmetic overflow in registry counter")]
    ArithmeticOverflow,
}
