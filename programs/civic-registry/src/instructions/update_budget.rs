use anchor_lang::prelude::*;
use crate::{
    contexts::UpdateBudget,
    error::RegistryError,
    state::{BudgetUpdated, RegistryState},
};

pub fn handler(ctx: Context<UpdateBudget>, new_budget: u64) -> Result<()> {
    let caller = ctx.accounts.admin.key();

    let event = set_budget(&mut ctx.accounts.registry, caller, new_budget)?;

    msg!("✅ Budget updated!");
    msg!("   New budget: {}", event.new_budget);
    msg!("   Updated by: {}", event.updated_by);

    emit!(event);

    Ok(())
}

/// Unconditional overwrite; no history is kept.
pub(crate) fn set_budget(
    registry: &mut RegistryState,
    caller: Pubkey,
    new_budget: u64,
) -> Result<BudgetUpdated> {
    require!(registry.is_admin(&caller), RegistryError::NotAuthorized);

    registry.budget = new_budget;

    Ok(BudgetUpdated { new_budget, updated_by: caller })
}
