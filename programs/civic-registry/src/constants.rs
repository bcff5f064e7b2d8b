// ============================================================================
// SEEDS FOR PDA DERIVATION
// ============================================================================

pub const REGISTRY_SEED: &[u8] = b"registry";

pub const ROSTER_SEED: &[u8] = b"roster";

pub const REQUEST_LOG_SEED: &[u8] = b"request_log";

pub const CITIZEN_SEED: &[u8] = b"citizen";

pub const SERVICE_REQUEST_SEED: &[u8] = b"service_request";

pub const OFFICIAL_SEED: &[u8] = b"official";

// ============================================================================
// PAGING AND TEXT LIMITS
// ============================================================================

/// Identities returned per `get_all_citizens` page (return data is capped at 1024 bytes)
pub const CITIZENS_PAGE_SIZE: usize = 30;

pub const MAX_NAME_LEN: usize = 64;

pub const MAX_SERVICE_TYPE_LEN: usize = 32;

pub const MAX_DESCRIPTION_LEN: usize = 256;

// ============================================================================
// SERVICE REQUEST IDS
// ============================================================================

/// Request IDs live in 1..=REQUEST_ID_MODULUS
pub const REQUEST_ID_MODULUS: u64 = 10_000;

/// How far behind the cluster clock a client-supplied request timestamp may lag
pub const MAX_REQUEST_CLOCK_SKEW: i64 = 300;
