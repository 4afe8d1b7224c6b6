//! Voter registry: eligibility records and the ordered whitelist.
//!
//! Records are append-only. A voter, once registered, is never removed or
//! unregistered; only the ballot fields change, and only through `record_ballot`.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

use crate::errors::ElectionError;

// ── Storage key prefixes ─────────────────────────────────────────────────────

const VOTER: Symbol = symbol_short!("VOTER");
const WHITELIST: Symbol = symbol_short!("WLIST");
const VOTERS_COUNT: Symbol = symbol_short!("V_COUNT");

// TTL: ~60 days at 5s/ledger
const TTL_THRESHOLD: u32 = 1_036_800;
const TTL_EXTEND_TO: u32 = 2_073_600;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Voter {
    pub is_registered: bool,
    pub has_voted: bool,
    /// Only meaningful when `has_voted` is set.
    pub voted_proposal_id: u32,
}

impl Voter {
    fn registered() -> Self {
        Self {
            is_registered: true,
            has_voted: false,
            voted_proposal_id: 0,
        }
    }
}

/// Ballot state of a registered voter as returned by `get_voter_info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoterInfo {
    pub has_voted: bool,
    pub voted_proposal_id: u32,
}

impl From<Voter> for VoterInfo {
    fn from(voter: Voter) -> Self {
        Self {
            has_voted: voter.has_voted,
            voted_proposal_id: voter.voted_proposal_id,
        }
    }
}

// ── Storage helpers ──────────────────────────────────────────────────────────

fn voter_key(identity: &Address) -> (Symbol, Address) {
    (VOTER, identity.clone())
}

pub(crate) fn load(env: &Env, identity: &Address) -> Option<Voter> {
    env.storage().persistent().get(&voter_key(identity))
}

fn store(env: &Env, identity: &Address, voter: &Voter) {
    let key = voter_key(identity);
    env.storage().persistent().set(&key, voter);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub(crate) fn is_registered(env: &Env, identity: &Address) -> bool {
    load(env, identity).map(|v| v.is_registered).unwrap_or(false)
}

/// Load a voter record, failing with `missing` when the identity was never
/// registered.
pub(crate) fn require_registered(
    env: &Env,
    identity: &Address,
    missing: ElectionError,
) -> Result<Voter, ElectionError> {
    match load(env, identity) {
        Some(voter) if voter.is_registered => Ok(voter),
        _ => Err(missing),
    }
}

pub(crate) fn whitelist(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&WHITELIST)
        .unwrap_or(Vec::new(env))
}

pub(crate) fn voters_count(env: &Env) -> u32 {
    env.storage().instance().get(&VOTERS_COUNT).unwrap_or(0)
}

/// Register `identity`. The caller is responsible for authorisation and phase
/// checks; this only enforces uniqueness.
pub(crate) fn register(env: &Env, identity: &Address) -> Result<(), ElectionError> {
    if is_registered(env, identity) {
        return Err(ElectionError::AlreadyRegistered);
    }

    store(env, identity, &Voter::registered());

    let mut list = whitelist(env);
    list.push_back(identity.clone());
    env.storage().persistent().set(&WHITELIST, &list);
    env.storage()
        .persistent()
        .extend_ttl(&WHITELIST, TTL_THRESHOLD, TTL_EXTEND_TO);

    let count = voters_count(env).saturating_add(1);
    env.storage().instance().set(&VOTERS_COUNT, &count);
    Ok(())
}

/// Persist the voter's ballot choice.
pub(crate) fn record_ballot(env: &Env, identity: &Address, voter: &mut Voter, proposal_id: u32) {
    voter.has_voted = true;
    voter.voted_proposal_id = proposal_id;
    store(env, identity, voter);
}
