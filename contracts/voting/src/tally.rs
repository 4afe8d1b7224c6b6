//! Participation, quorum enforcement, and winner selection.
//!
//! ```text
//! participation = floor(total_votes_cast × 100 / voters_count)   (0 when no voters)
//! ```
//! Integer truncation is intentional: 1 vote among 3 voters is 33 %, not 33.33 %.

use soroban_sdk::{symbol_short, Env, Symbol};

use crate::errors::ElectionError;
use crate::proposal;
use crate::registry;

const WINNING_ID: Symbol = symbol_short!("WIN_ID");

/// Truncated percentage of registered voters that have cast a vote.
pub fn participation(total_votes_cast: u32, voters_count: u32) -> u32 {
    if voters_count == 0 {
        return 0;
    }
    (u64::from(total_votes_cast) * 100 / u64::from(voters_count)) as u32
}

pub fn check_quorum(participation: u32, quorum_percentage: u32) -> Result<(), ElectionError> {
    if participation < quorum_percentage {
        return Err(ElectionError::QuorumNotMet);
    }
    Ok(())
}

/// Index of the highest counter. A later proposal only takes the lead with a
/// strictly greater count, so exact ties go to the earliest index. An empty
/// input yields 0.
pub fn winning_index<I>(counts: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let mut winner = 0u32;
    let mut max = 0u32;
    for (id, count) in counts.into_iter().enumerate() {
        if count > max {
            max = count;
            winner = id as u32;
        }
    }
    winner
}

// ── Contract-state views ─────────────────────────────────────────────────────

pub(crate) fn current_participation(env: &Env) -> u32 {
    participation(proposal::total_votes(env), registry::voters_count(env))
}

pub(crate) fn select_winner(env: &Env) -> u32 {
    winning_index(proposal::all(env).iter().map(|p| p.vote_count))
}

pub(crate) fn store_winner(env: &Env, id: u32) {
    env.storage().instance().set(&WINNING_ID, &id);
}

pub(crate) fn load_winner(env: &Env) -> Option<u32> {
    env.storage().instance().get(&WINNING_ID)
}
