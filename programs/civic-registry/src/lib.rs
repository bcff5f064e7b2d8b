pub mod constants;
pub mod contexts;
pub mod error;
pub mod instructions;
pub mod state;

#[cfg(test)]
mod test_support;

use anchor_lang::prelude::*;

pub use contexts::*;
pub use error::*;
pub use state::*;

declare_id!("3d158QNUgv4VWBXLPNKTaxY9A8knB7r32eQa8zi42YSL");

/// Civic Registry: citizen identities, service requests and budget bookkeeping
///
/// - Citizens register once and receive sequential IDs starting at 1
/// - Registered citizens submit service requests
/// - The administrator and authorized officials mark requests complete
/// - The administrator (the account that initialized the registry) manages
///   officials and the budget
///
/// Every mutation emits an event for off-chain indexers. Read accessors return
/// zero-valued records for unknown keys instead of failing.
#[program]
pub mod civic_registry {
    use super::*;

    /// Create the registry; the signer becomes the administrator
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Register the signer as a citizen
    pub fn register_citizen(ctx: Context<RegisterCitizen>, name: String) -> Result<()> {
        instructions::register_citizen::handler(ctx, name)
    }

    /// Submit a service request (registered citizens only)
    ///
    /// `request_id` must equal `derive_request_id(requested_at, signer)`, and
    /// `requested_at` must trail the cluster clock by less than five minutes.
    pub fn request_service(
        ctx: Context<RequestService>,
        requested_at: i64,
        request_id: u64,
        service_type: String,
        description: String,
    ) -> Result<()> {
        instructions::request_service::handler(ctx, requested_at, request_id, service_type, description)
    }

    /// Mark a request complete (administrator or authorized official)
    pub fn complete_service(ctx: Context<CompleteService>, request_id: u64) -> Result<()> {
        instructions::complete_service::handler(ctx, request_id)
    }

    /// Authorize an official (admin-only, idempotent)
    pub fn add_authorized_official(ctx: Context<AddAuthorizedOfficial>, official: Pubkey) -> Result<()> {
        instructions::add_authorized_official::handler(ctx, official)
    }

    /// Overwrite the budget (admin-only)
    pub fn update_budget(ctx: Context<UpdateBudget>, new_budget: u64) -> Result<()> {
        instructions::update_budget::handler(ctx, new_budget)
    }

    /// Citizen record for `owner` (zero-valued when never registered)
    pub fn get_citizen_info(ctx: Context<GetCitizenInfo>, _owner: Pubkey) -> Result<Citizen> {
        instructions::queries::citizen_info(ctx)
    }

    /// Service request stored at `request_id` (zero-valued when absent)
    pub fn get_service_request(ctx: Context<GetServiceRequest>, _request_id: u64) -> Result<ServiceRequest> {
        instructions::queries::service_request(ctx)
    }

    /// Number of submitted requests, collisions included
    pub fn get_total_requests(ctx: Context<ReadRegistry>) -> Result<u64> {
        instructions::queries::total_requests(ctx)
    }

    /// One page of citizen identities in registration order
    ///
    /// Pass the roster entry PDAs for positions `offset..` as remaining accounts.
    pub fn get_all_citizens(ctx: Context<ReadRegistry>, offset: u32) -> Result<Vec<Pubkey>> {
        instructions::queries::all_citizens(ctx, offset)
    }

    /// Request ID logged at submission position `index` (0 when absent)
    pub fn get_request_id(ctx: Context<GetRequestLogEntry>, _index: u64) -> Result<u64> {
        instructions::queries::request_id_at(ctx)
    }

    /// Current budget value
    pub fn get_budget(ctx: Context<ReadRegistry>) -> Result<u64> {
        instructions::queries::budget(ctx)
    }

    /// Number of registered citizens
    pub fn get_total_citizens(ctx: Context<ReadRegistry>) -> Result<u64> {
        instructions::queries::total_citizens(ctx)
    }

    /// Administrator identity
    pub fn get_admin(ctx: Context<ReadRegistry>) -> Result<Pubkey> {
        instructions::queries::admin(ctx)
    }

    /// Whether `identity` has been authorized as an official
    pub fn is_authorized_official(ctx: Context<IsAuthorizedOfficial>, identity: Pubkey) -> Result<bool> {
        instructions::queries::is_authorized_official(ctx, identity)
    }
}
