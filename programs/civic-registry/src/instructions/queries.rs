use anchor_lang::prelude::*;
use crate::{
    constants::{CITIZENS_PAGE_SIZE, ROSTER_SEED},
    contexts::{GetCitizenInfo, GetRequestLogEntry, GetServiceRequest, IsAuthorizedOfficial, ReadRegistry},
    error::RegistryError,
    state::{load_or_default, Citizen, Official, RequestLogEntry, RosterEntry, ServiceRequest},
};

// Read accessors. Unknown keys yield zero-valued records; callers check
// `registered` / `id` to tell present from absent.

pub fn citizen_info(ctx: Context<GetCitizenInfo>) -> Result<Citizen> {
    load_or_default(&ctx.accounts.citizen.to_account_info())
}

pub fn service_request(ctx: Context<GetServiceRequest>) -> Result<ServiceRequest> {
    load_or_default(&ctx.accounts.service_request.to_account_info())
}

pub fn total_requests(ctx: Context<ReadRegistry>) -> Result<u64> {
    Ok(ctx.accounts.registry.total_requests)
}

/// Roster entries for the page are passed as remaining accounts, in index order.
pub fn all_citizens(ctx: Context<ReadRegistry>, offset: u32) -> Result<Vec<Pubkey>> {
    roster_page(
        ctx.accounts.registry.total_citizens,
        u64::from(offset),
        ctx.remaining_accounts,
    )
}

pub fn request_id_at(ctx: Context<GetRequestLogEntry>) -> Result<u64> {
    let entry: RequestLogEntry = load_or_default(&ctx.accounts.request_log_entry.to_account_info())?;
    Ok(entry.request_id)
}

pub fn budget(ctx: Context<ReadRegistry>) -> Result<u64> {
    Ok(ctx.accounts.registry.budget)
}

pub fn total_citizens(ctx: Context<ReadRegistry>) -> Result<u64> {
    Ok(ctx.accounts.registry.total_citizens)
}

pub fn admin(ctx: Context<ReadRegistry>) -> Result<Pubkey> {
    Ok(ctx.accounts.registry.admin)
}

pub fn is_authorized_official(ctx: Context<IsAuthorizedOfficial>, identity: Pubkey) -> Result<bool> {
    let official: Official = load_or_default(&ctx.accounts.official_record.to_account_info())?;
    Ok(is_member(&official, &identity))
}

pub(crate) fn is_member(official: &Official, identity: &Pubkey) -> bool {
    official.authorized && official.identity == *identity
}

/// Citizens at roster positions `offset..`, at most one page.
///
/// `entries` must hold the roster entry PDAs for those positions, in order.
/// Past the end of the roster the page is empty.
pub(crate) fn roster_page(total_citizens: u64, offset: u64, entries: &[AccountInfo]) -> Result<Vec<Pubkey>> {
    let len = total_citizens
        .saturating_sub(offset)
        .min(CITIZENS_PAGE_SIZE as u64) as usize;
    require!(entries.len() >= len, RegistryError::RosterEntryMismatch);

    entries[..len]
        .iter()
        .zip(offset..)
        .map(|(info, index)| {
            let entry: RosterEntry = load_or_default(info)?;
            require!(
                entry.index == index && entry.citizen != Pubkey::default(),
                RegistryError::RosterEntryMismatch
            );

            let expected = Pubkey::create_program_address(
                &[ROSTER_SEED, &index.to_le_bytes(), &[entry.bump]],
                &crate::ID,
            )
            .map_err(|_| error!(RegistryError::RosterEntryMismatch))?;
            require_keys_eq!(*info.key, expected, RegistryError::RosterEntryMismatch);

            Ok(entry.citizen)
        })
        .collect()
}
