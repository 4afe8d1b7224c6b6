//! Election configuration held in instance storage.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::errors::ElectionError;

const CONFIG: Symbol = symbol_short!("CONFIG");
const INITIALIZED: Symbol = symbol_short!("INIT");

/// Quorum applied until the administrator changes it.
pub const DEFAULT_QUORUM_PERCENTAGE: u32 = 50;
pub const MAX_QUORUM_PERCENTAGE: u32 = 100;

const INSTANCE_TTL_THRESHOLD: u32 = 5_184_000; // ~300 days (@ ~5s/ledger)
const INSTANCE_TTL_EXTEND_TO: u32 = 10_368_000; // ~600 days (@ ~5s/ledger)

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElectionConfig {
    pub admin: Address,
    /// Minimum participation (0–100) required to tally.
    pub quorum_percentage: u32,
}

impl ElectionConfig {
    pub fn new(admin: Address) -> Self {
        Self {
            admin,
            quorum_percentage: DEFAULT_QUORUM_PERCENTAGE,
        }
    }
}

pub(crate) fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub(crate) fn init(env: &Env, config: &ElectionConfig) {
    env.storage().instance().set(&CONFIG, config);
    env.storage().instance().set(&INITIALIZED, &true);
    extend_instance_ttl(env);
}

pub(crate) fn load(env: &Env) -> Result<ElectionConfig, ElectionError> {
    env.storage()
        .instance()
        .get(&CONFIG)
        .ok_or(ElectionError::NotInitialized)
}

pub(crate) fn store(env: &Env, config: &ElectionConfig) {
    env.storage().instance().set(&CONFIG, config);
    extend_instance_ttl(env);
}

pub(crate) fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

pub fn validate_quorum(percentage: u32) -> Result<(), ElectionError> {
    if percentage > MAX_QUORUM_PERCENTAGE {
        return Err(ElectionError::InvalidRange);
    }
    Ok(())
}
