use anchor_lang::prelude::*;
use crate::{
    constants::MAX_NAME_LEN,
    contexts::RegisterCitizen,
    error::RegistryError,
    state::{Citizen, CitizenRegistered, RegistryState, RosterEntry},
};

pub fn handler(ctx: Context<RegisterCitizen>, name: String) -> Result<()> {
    let clock = Clock::get()?;
    let owner = ctx.accounts.owner.key();

    let event = register(
        &mut ctx.accounts.registry,
        &mut ctx.accounts.roster_entry,
        &mut ctx.accounts.citizen,
        owner,
        name,
        clock.unix_timestamp,
    )?;
    ctx.accounts.roster_entry.bump = ctx.bumps.roster_entry;

    msg!("✅ Citizen registered!");
    msg!("   Name: {}", event.name);
    msg!("   Citizen ID: {}", event.id);
    msg!("   Total citizens: {}", ctx.accounts.registry.total_citizens);

    emit!(event);

    Ok(())
}

/// Issue the next citizen ID to `owner` and record them at the next roster slot.
/// Every check runs before the first write.
pub(crate) fn register(
    registry: &mut RegistryState,
    roster_entry: &mut RosterEntry,
    citizen: &mut Citizen,
    owner: Pubkey,
    name: String,
    now: i64,
) -> Result<CitizenRegistered> {
    require!(!citizen.registered, RegistryError::AlreadyRegistered);
    require!(!name.is_empty(), RegistryError::InvalidInput);
    require!(name.len() <= MAX_NAME_LEN, RegistryError::InputTooLong);

    let index = registry.total_citizens;
    let id = index
        .checked_add(1)
        .ok_or(RegistryError::ArithmeticOverflow)?;

    citizen.id = id;
    citizen.owner = owner;
    citizen.name = name.clone();
    citizen.registered = true;
    citizen.registered_at = now;

    roster_entry.index = index;
    roster_entry.citizen = owner;
    registry.total_citizens = id;

    Ok(CitizenRegistered { citizen: owner, id, name })
}
