use anchor_lang::prelude::*;
use crate::{contexts::Initialize, state::RegistryState};

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let admin = ctx.accounts.admin.key();

    initialize_registry(&mut ctx.accounts.registry, admin);
    ctx.accounts.registry.bump = ctx.bumps.registry;

    msg!("✅ Civic registry initialized!");
    msg!("   Admin: {}", admin);

    Ok(())
}

/// Fresh registry: the creator is the administrator, budget and counters start at zero
pub(crate) fn initialize_registry(registry: &mut RegistryState, admin: Pubkey) {
    registry.admin = admin;
    registry.budget = 0;
    registry.total_citizens = 0;
    registry.total_requests = 0;
}
