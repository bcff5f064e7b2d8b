use anchor_lang::prelude::*;
use crate::{
    contexts::CompleteService,
    error::RegistryError,
    state::{load_or_default, store, Official, RegistryState, ServiceCompleted, ServiceRequest},
};

pub fn handler(ctx: Context<CompleteService>, request_id: u64) -> Result<()> {
    let caller = ctx.accounts.official.key();
    let official: Official = load_or_default(&ctx.accounts.official_record.to_account_info())?;

    let event = complete_stored(
        &ctx.accounts.registry,
        &official,
        &ctx.accounts.service_request.to_account_info(),
        caller,
        request_id,
    )?;

    msg!("✅ Service request completed!");
    msg!("   Request ID: {}", event.request_id);
    msg!("   Completed by: {}", event.official);

    emit!(event);

    Ok(())
}

/// Load the request account, complete it, and write it back.
/// An uninitialized account loads as the empty record and fails with NotFound.
pub(crate) fn complete_stored(
    registry: &RegistryState,
    official: &Official,
    request_info: &AccountInfo,
    caller: Pubkey,
    request_id: u64,
) -> Result<ServiceCompleted> {
    let mut request: ServiceRequest = load_or_default(request_info)?;
    let event = complete(registry, official, &mut request, caller, request_id)?;
    store(request_info, &request)?;

    Ok(event)
}

/// Flip `completed` on an open request. Terminal: a second completion fails.
pub(crate) fn complete(
    registry: &RegistryState,
    official: &Official,
    request: &mut ServiceRequest,
    caller: Pubkey,
    request_id: u64,
) -> Result<ServiceCompleted> {
    require!(
        registry.can_complete_requests(&caller, official),
        RegistryError::NotAuthorized
    );
    require!(request.exists() && request.id == request_id, RegistryError::NotFound);
    require!(!request.completed, RegistryError::AlreadyCompleted);

    request.completed = true;

    Ok(ServiceCompleted { request_id, official: caller })
}
