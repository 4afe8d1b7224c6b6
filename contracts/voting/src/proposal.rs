//! Proposal store: insertion-ordered proposals with per-proposal vote counters.

use soroban_sdk::{contracttype, symbol_short, Env, String, Symbol, Vec};

use crate::errors::ElectionError;

// ── Storage key prefixes ─────────────────────────────────────────────────────

pub(crate) const PROPOSAL_CTR: Symbol = symbol_short!("PROP_CTR");
pub(crate) const PROPOSAL: Symbol = symbol_short!("PROP");

// TTL: ~60 days at 5s/ledger
const TTL_THRESHOLD: u32 = 1_036_800;
const TTL_EXTEND_TO: u32 = 2_073_600;

/// A submitted proposal. Duplicate descriptions are allowed.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub description: String,
    pub vote_count: u32,
}

// ── Storage helpers ──────────────────────────────────────────────────────────

pub(crate) fn count(env: &Env) -> u32 {
    env.storage().instance().get(&PROPOSAL_CTR).unwrap_or(0u32)
}

pub(crate) fn proposal_key(id: u32) -> (Symbol, u32) {
    (PROPOSAL, id)
}

pub(crate) fn store(env: &Env, id: u32, proposal: &Proposal) {
    let key = proposal_key(id);
    env.storage().persistent().set(&key, proposal);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub(crate) fn load(env: &Env, id: u32) -> Option<Proposal> {
    if id >= count(env) {
        return None;
    }
    env.storage().persistent().get(&proposal_key(id))
}

/// Append a proposal at the next index and return that index. Indices are
/// never reused.
pub(crate) fn append(env: &Env, description: String) -> u32 {
    let id = count(env);
    store(
        env,
        id,
        &Proposal {
            description,
            vote_count: 0,
        },
    );
    env.storage()
        .instance()
        .set(&PROPOSAL_CTR, &id.saturating_add(1));
    id
}

pub(crate) fn all(env: &Env) -> Vec<Proposal> {
    let mut out = Vec::new(env);
    for id in 0..count(env) {
        if let Some(p) = load(env, id) {
            out.push_back(p);
        }
    }
    out
}

/// Sum of every proposal's counter.
pub(crate) fn total_votes(env: &Env) -> u32 {
    let mut total: u32 = 0;
    for id in 0..count(env) {
        if let Some(p) = load(env, id) {
            total = total.saturating_add(p.vote_count);
        }
    }
    total
}

/// Move one vote from `from` (if any) to `to`, persisting both counters.
///
/// Both ids must already be validated. When `from == to` the counter is
/// decremented and re-incremented, leaving it unchanged.
pub(crate) fn move_vote(env: &Env, from: Option<u32>, to: u32) -> Result<(), ElectionError> {
    if let Some(old_id) = from {
        let mut old = load(env, old_id).ok_or(ElectionError::InvalidProposal)?;
        let mut new = if old_id == to {
            old.clone()
        } else {
            load(env, to).ok_or(ElectionError::InvalidProposal)?
        };
        old.vote_count = old.vote_count.saturating_sub(1);
        if old_id == to {
            new.vote_count = old.vote_count.saturating_add(1);
        } else {
            new.vote_count = new.vote_count.saturating_add(1);
            store(env, old_id, &old);
        }
        store(env, to, &new);
        return Ok(());
    }

    let mut new = load(env, to).ok_or(ElectionError::InvalidProposal)?;
    new.vote_count = new.vote_count.saturating_add(1);
    store(env, to, &new);
    Ok(())
}
