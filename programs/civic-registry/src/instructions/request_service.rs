use anchor_lang::prelude::*;
use crate::{
    constants::{MAX_DESCRIPTION_LEN, MAX_REQUEST_CLOCK_SKEW, MAX_SERVICE_TYPE_LEN},
    contexts::RequestService,
    error::RegistryError,
    state::{
        derive_request_id, load_or_default, Citizen, RegistryState, RequestLogEntry, ServiceRequest,
        ServiceRequested,
    },
};

/// Submission as sent by the client
pub(crate) struct NewRequest {
    pub requester: Pubkey,
    pub requested_at: i64,
    pub request_id: u64,
    pub service_type: String,
    pub description: String,
}

pub fn handler(
    ctx: Context<RequestService>,
    requested_at: i64,
    request_id: u64,
    service_type: String,
    description: String,
) -> Result<()> {
    let clock = Clock::get()?;
    let citizen: Citizen = load_or_default(&ctx.accounts.citizen.to_account_info())?;

    let new_request = NewRequest {
        requester: ctx.accounts.requester.key(),
        requested_at,
        request_id,
        service_type,
        description,
    };

    let event = submit(
        &mut ctx.accounts.registry,
        &mut ctx.accounts.request_log_entry,
        &citizen,
        &mut ctx.accounts.service_request,
        new_request,
        clock.unix_timestamp,
    )?;
    ctx.accounts.request_log_entry.bump = ctx.bumps.request_log_entry;

    msg!("✅ Service request submitted!");
    msg!("   Request ID: {}", event.request_id);
    msg!("   Service type: {}", event.service_type);
    msg!("   Requester: {}", event.requester);

    emit!(event);

    Ok(())
}

/// Store `new_request` at its derived ID.
///
/// No collision check: whatever record already lives at that ID, completed or
/// not, is replaced, and the ID is logged again at the next log slot.
pub(crate) fn submit(
    registry: &mut RegistryState,
    log_entry: &mut RequestLogEntry,
    citizen: &Citizen,
    request: &mut ServiceRequest,
    new_request: NewRequest,
    now: i64,
) -> Result<ServiceRequested> {
    require!(citizen.registered, RegistryError::NotRegistered);
    require!(
        !new_request.service_type.is_empty() && !new_request.description.is_empty(),
        RegistryError::InvalidInput
    );
    require!(
        new_request.service_type.len() <= MAX_SERVICE_TYPE_LEN
            && new_request.description.len() <= MAX_DESCRIPTION_LEN,
        RegistryError::InputTooLong
    );

    let lag = now
        .checked_sub(new_request.requested_at)
        .ok_or(RegistryError::StaleTimestamp)?;
    require!(
        (0..MAX_REQUEST_CLOCK_SKEW).contains(&lag),
        RegistryError::StaleTimestamp
    );
    require!(
        new_request.request_id == derive_request_id(new_request.requested_at, &new_request.requester),
        RegistryError::RequestIdMismatch
    );

    let index = registry.total_requests;
    let total_requests = index
        .checked_add(1)
        .ok_or(RegistryError::ArithmeticOverflow)?;

    let event = ServiceRequested {
        request_id: new_request.request_id,
        requester: new_request.requester,
        service_type: new_request.service_type.clone(),
    };

    *request = ServiceRequest {
        id: new_request.request_id,
        requester: new_request.requester,
        service_type: new_request.service_type,
        description: new_request.description,
        completed: false,
        requested_at: new_request.requested_at,
    };
    log_entry.index = index;
    log_entry.request_id = new_request.request_id;
    registry.total_requests = total_requests;

    Ok(event)
}
