use anchor_lang::prelude::*;
use solana_sha256_hasher::hashv;

use crate::constants::*;

// ============================================================================
// REGISTRY STATE - Administrator, budget and counters
// ============================================================================

#[account]
#[derive(InitSpace, Default)]
pub struct RegistryState {
    /// Administrator: manages officials and the budget. Fixed at initialization.
    pub admin: Pubkey,

    /// Latest budget value set by the administrator
    pub budget: u64,

    /// Number of registered citizens (also the last issued citizen ID)
    pub total_citizens: u64,

    /// Number of submitted service requests, collisions included
    pub total_requests: u64,

    /// Bump seed for PDA derivation
    pub bump: u8,
}

impl RegistryState {
    pub fn is_admin(&self, who: &Pubkey) -> bool {
        self.admin == *who
    }

    /// Administrator or a member of the authorized-officials set.
    /// `official` is the record stored at the caller's official PDA.
    pub fn can_complete_requests(&self, who: &Pubkey, official: &Official) -> bool {
        self.is_admin(who) || (official.authorized && official.identity == *who)
    }
}

// ============================================================================
// ROSTER ENTRY - One PDA per registration, at [ROSTER_SEED, index]
// ============================================================================

#[account]
#[derive(InitSpace, Default, Debug, PartialEq)]
pub struct RosterEntry {
    /// 0-based registration position (citizen ID - 1)
    pub index: u64,

    pub citizen: Pubkey,

    pub bump: u8,
}

// ============================================================================
// REQUEST LOG ENTRY - One PDA per submission, at [REQUEST_LOG_SEED, index]
// ============================================================================

#[account]
#[derive(InitSpace, Default, Debug, PartialEq)]
pub struct RequestLogEntry {
    /// 0-based submission position
    pub index: u64,

    /// May repeat an earlier entry when derived IDs collide
    pub request_id: u64,

    pub bump: u8,
}

// ============================================================================
// CITIZEN - One per identity, never deleted
// ============================================================================

#[account]
#[derive(InitSpace, Default, Debug, PartialEq)]
pub struct Citizen {
    /// 1-based sequential ID, 0 while unregistered
    pub id: u64,

    pub owner: Pubkey,

    #[max_len(MAX_NAME_LEN)]
    pub name: String,

    /// Once true, stays true
    pub registered: bool,

    pub registered_at: i64,
}

// ============================================================================
// SERVICE REQUEST - Keyed by derived ID, overwritten on collision
// ============================================================================

#[account]
#[derive(InitSpace, Default, Debug, PartialEq)]
pub struct ServiceRequest {
    /// Derived request ID; 0 means "no such request"
    pub id: u64,

    pub requester: Pubkey,

    #[max_len(MAX_SERVICE_TYPE_LEN)]
    pub service_type: String,

    #[max_len(MAX_DESCRIPTION_LEN)]
    pub description: String,

    pub completed: bool,

    pub requested_at: i64,
}

impl ServiceRequest {
    pub fn exists(&self) -> bool {
        self.id != 0
    }
}

// ============================================================================
// OFFICIAL - Membership in the authorized-officials set
// ============================================================================

#[account]
#[derive(InitSpace, Default, Debug, PartialEq)]
pub struct Official {
    pub identity: Pubkey,

    /// Never revoked once granted
    pub authorized: bool,

    pub authorized_at: i64,
}

/// Derive a service request ID from the submission time and the requester.
///
/// sha256(requested_at LE || requester), first 8 bytes read as a LE u64,
/// reduced modulo `REQUEST_ID_MODULUS`. A zero remainder maps to the modulus
/// itself so a stored request never carries the "not found" ID.
///
/// Known limitation: the space holds only 10000 IDs, so distinct requests can
/// collide, and a later request silently overwrites the earlier record.
pub fn derive_request_id(requested_at: i64, requester: &Pubkey) -> u64 {
    let digest = hashv(&[&requested_at.to_le_bytes(), requester.as_ref()]).to_bytes();
    let mut word = [0u8; 8];
    word.copy_from_slice(&digest[..8]);

    match u64::from_le_bytes(word) % REQUEST_ID_MODULUS {
        0 => REQUEST_ID_MODULUS,
        id => id,
    }
}

/// Deserialize a program account, or hand back the zero-valued record when
/// the PDA has never been initialized.
pub fn load_or_default<T>(info: &AccountInfo) -> Result<T>
where
    T: AccountDeserialize + Default,
{
    if info.data_is_empty() {
        return Ok(T::default());
    }
    require_keys_eq!(*info.owner, crate::ID, anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram);

    let data = info.try_borrow_data()?;
    let mut src: &[u8] = &data;
    T::try_deserialize(&mut src)
}

/// Write a record back into an already-allocated program account.
pub fn store<T: AccountSerialize>(info: &AccountInfo, value: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut dst: &mut [u8] = &mut data;
    value.try_serialize(&mut dst)
}

// ============================================================================
// EVENTS - Emitted on every successful state change
// ============================================================================

#[event]
#[derive(Debug, PartialEq)]
pub struct CitizenRegistered {
    pub citizen: Pubkey,
    pub id: u64,
    pub name: String,
}

#[event]
#[derive(Debug, PartialEq)]
pub struct ServiceRequested {
    pub request_id: u64,
    pub requester: Pubkey,
    pub service_type: String,
}

#[event]
#[derive(Debug, PartialEq)]
pub struct ServiceCompleted {
    pub request_id: u64,
    pub official: Pubkey,
}

#[event]
#[derive(Debug, PartialEq)]
pub struct BudgetUpdated {
    pub new_budget: u64,
    pub updated_by: Pubkey,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StoredAccount;
    use anchor_lang::error::Error;

    #[test]
    fn request_ids_stay_in_range() {
        let requester = Pubkey::new_unique();
        for t in 0..500 {
            let id = derive_request_id(1_700_000_000 + t, &requester);
            assert!((1..=REQUEST_ID_MODULUS).contains(&id));
        }
    }

    #[test]
    fn request_id_is_deterministic() {
        let requester = Pubkey::new_unique();
        assert_eq!(
            derive_request_id(1_700_000_000, &requester),
            derive_request_id(1_700_000_000, &requester)
        );
    }

    #[test]
    fn uninitialized_account_loads_as_default() {
        let mut account = StoredAccount::empty();

        let citizen: Citizen = load_or_default(&account.info()).unwrap();
        assert_eq!(citizen, Citizen::default());
        assert!(!citizen.registered);

        let request: ServiceRequest = load_or_default(&account.info()).unwrap();
        assert!(!request.exists());
    }

    #[test]
    fn stored_citizen_loads_back() {
        let citizen = Citizen {
            id: 3,
            owner: Pubkey::new_unique(),
            name: "Carol".into(),
            registered: true,
            registered_at: 1_700_000_000,
        };
        let mut account = StoredAccount::holding(&citizen);

        let loaded: Citizen = load_or_default(&account.info()).unwrap();

        assert_eq!(loaded, citizen);
    }

    #[test]
    fn foreign_owned_account_is_rejected() {
        let citizen = Citizen { id: 1, registered: true, ..Default::default() };
        let mut account = StoredAccount::holding(&citizen).owned_by(Pubkey::new_unique());

        let err = load_or_default::<Citizen>(&account.info()).unwrap_err();

        assert_eq!(
            err,
            Error::from(anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram)
        );
    }

    #[test]
    fn mismatched_record_type_is_rejected() {
        let mut account = StoredAccount::holding(&Official::default());

        assert!(load_or_default::<Citizen>(&account.info()).is_err());
    }

    #[test]
    fn stored_update_is_visible_on_reload() {
        let mut request = ServiceRequest {
            id: 77,
            requester: Pubkey::new_unique(),
            service_type: "road".into(),
            description: "pothole".into(),
            completed: false,
            requested_at: 1_700_000_000,
        };
        let mut account = StoredAccount::holding(&request);

        request.completed = true;
        store(&account.info(), &request).unwrap();

        let reloaded: ServiceRequest = load_or_default(&account.info()).unwrap();
        assert!(reloaded.completed);
        assert_eq!(reloaded, request);
    }

    #[test]
    fn only_admin_or_granted_official_completes() {
        let admin = Pubkey::new_unique();
        let official = Pubkey::new_unique();
        let registry = RegistryState { admin, ..Default::default() };

        assert!(registry.can_complete_requests(&admin, &Official::default()));
        assert!(!registry.can_complete_requests(&official, &Official::default()));

        let grant = Official { identity: official, authorized: true, authorized_at: 0 };
        assert!(registry.can_complete_requests(&official, &grant));
        assert!(!registry.can_complete_requests(&Pubkey::new_unique(), &grant));
    }
}
