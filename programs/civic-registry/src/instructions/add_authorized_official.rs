use anchor_lang::prelude::*;
use crate::{
    contexts::AddAuthorizedOfficial,
    error::RegistryError,
    state::{Official, RegistryState},
};

pub fn handler(ctx: Context<AddAuthorizedOfficial>, official: Pubkey) -> Result<()> {
    let clock = Clock::get()?;
    let caller = ctx.accounts.admin.key();

    authorize(
        &ctx.accounts.registry,
        &mut ctx.accounts.official_record,
        caller,
        official,
        clock.unix_timestamp,
    )?;

    msg!("✅ Official authorized!");
    msg!("   Official: {}", official);
    msg!("   Authorized by: {}", caller);

    Ok(())
}

/// Grant `official` membership. Granting twice leaves the first grant untouched.
pub(crate) fn authorize(
    registry: &RegistryState,
    record: &mut Official,
    caller: Pubkey,
    official: Pubkey,
    now: i64,
) -> Result<()> {
    require!(registry.is_admin(&caller), RegistryError::NotAuthorized);
    require!(official != Pubkey::default(), RegistryError::InvalidInput);

    if record.authorized {
        return Ok(());
    }

    record.identity = official;
    record.authorized = true;
    record.authorized_at = now;

    Ok(())
}
