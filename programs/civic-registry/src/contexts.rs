use anchor_lang::prelude::*;
use crate::{constants::*, state::*};

/// Create the registry; the signer becomes the administrator
#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + RegistryState::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, RegistryState>,

    pub system_program: Program<'info, System>,
}

/// Register the signer as a citizen
#[derive(Accounts)]
pub struct RegisterCitizen<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, RegistryState>,

    /// Next roster slot, indexed by the registration count before this call
    #[account(
        init,
        payer = owner,
        space = 8 + RosterEntry::INIT_SPACE,
        seeds = [ROSTER_SEED, registry.total_citizens.to_le_bytes().as_ref()],
        bump
    )]
    pub roster_entry: Account<'info, RosterEntry>,

    /// Created on first registration; an existing record is rejected in the handler
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Citizen::INIT_SPACE,
        seeds = [CITIZEN_SEED, owner.key().as_ref()],
        bump
    )]
    pub citizen: Account<'info, Citizen>,

    pub system_program: Program<'info, System>,
}

/// Submit a service request (registered citizens only)
#[derive(Accounts)]
#[instruction(requested_at: i64, request_id: u64)]
pub struct RequestService<'info> {
    #[account(mut)]
    pub requester: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, RegistryState>,

    /// Next log slot, indexed by the submission count before this call
    #[account(
        init,
        payer = requester,
        space = 8 + RequestLogEntry::INIT_SPACE,
        seeds = [REQUEST_LOG_SEED, registry.total_requests.to_le_bytes().as_ref()],
        bump
    )]
    pub request_log_entry: Account<'info, RequestLogEntry>,

    /// CHECK: citizen PDA of the requester, possibly uninitialized (-> NotRegistered)
    #[account(
        seeds = [CITIZEN_SEED, requester.key().as_ref()],
        bump
    )]
    pub citizen: UncheckedAccount<'info>,

    /// Overwritten when the derived ID collides with an earlier request
    #[account(
        init_if_needed,
        payer = requester,
        space = 8 + ServiceRequest::INIT_SPACE,
        seeds = [SERVICE_REQUEST_SEED, request_id.to_le_bytes().as_ref()],
        bump
    )]
    pub service_request: Account<'info, ServiceRequest>,

    pub system_program: Program<'info, System>,
}

/// Mark a service request complete (administrator or authorized official)
#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct CompleteService<'info> {
    pub official: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, RegistryState>,

    /// CHECK: official PDA of the signer, possibly uninitialized (-> not a member)
    #[account(
        seeds = [OFFICIAL_SEED, official.key().as_ref()],
        bump
    )]
    pub official_record: UncheckedAccount<'info>,

    /// CHECK: service request PDA, possibly uninitialized (-> NotFound)
    #[account(
        mut,
        seeds = [SERVICE_REQUEST_SEED, request_id.to_le_bytes().as_ref()],
        bump
    )]
    pub service_request: UncheckedAccount<'info>,
}

/// Grant an identity the right to complete requests (administrator-only)
#[derive(Accounts)]
#[instruction(official: Pubkey)]
pub struct AddAuthorizedOfficial<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, RegistryState>,

    /// Re-adding an official reuses the existing record
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + Official::INIT_SPACE,
        seeds = [OFFICIAL_SEED, official.as_ref()],
        bump
    )]
    pub official_record: Account<'info, Official>,

    pub system_program: Program<'info, System>,
}

/// Overwrite the budget (administrator-only)
#[derive(Accounts)]
pub struct UpdateBudget<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, RegistryState>,
}

// ============================================================================
// READ ACCESSORS
// ============================================================================

/// Registry-wide reads: totals, budget, administrator, roster pages
/// (roster entry PDAs ride along as remaining accounts)
#[derive(Accounts)]
pub struct ReadRegistry<'info> {
    #[account(
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Account<'info, RegistryState>,
}

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct GetRequestLogEntry<'info> {
    /// CHECK: request log PDA, zero request ID when uninitialized
    #[account(
        seeds = [REQUEST_LOG_SEED, index.to_le_bytes().as_ref()],
        bump
    )]
    pub request_log_entry: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct GetCitizenInfo<'info> {
    /// CHECK: citizen PDA, zero-valued record when uninitialized
    #[account(
        seeds = [CITIZEN_SEED, owner.as_ref()],
        bump
    )]
    pub citizen: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(request_id: u64)]
pub struct GetServiceRequest<'info> {
    /// CHECK: service request PDA, zero-valued record when uninitialized
    #[account(
        seeds = [SERVICE_REQUEST_SEED, request_id.to_le_bytes().as_ref()],
        bump
    )]
    pub service_request: UncheckedAccount<'info>,
}

#[derive(Accounts)]
#[instruction(identity: Pubkey)]
pub struct IsAuthorizedOfficial<'info> {
    /// CHECK: official PDA, not a member when uninitialized
    #[account(
        seeds = [OFFICIAL_SEED, identity.as_ref()],
        bump
    )]
    pub official_record: UncheckedAccount<'info>,
}
