#![no_std]

//! # Voting
//!
//! A single-election voting contract run by one administrator:
//!
//! - **Voter registry**: the administrator whitelists eligible addresses
//! - **Proposals**: registered voters submit free-text proposals, indexed from 0
//! - **Revisable votes**: a voter may change their vote while the session is open
//! - **Quorum-gated tally**: the tally only succeeds when truncated participation
//!   reaches the configured quorum; exact ties go to the earliest proposal
//! - **Forward-only workflow**:
//!   RegisteringVoters → ProposalsRegistrationStarted → ProposalsRegistrationEnded
//!   → VotingSessionStarted → VotingSessionEnded → VotesTallied
//!
//! Every entry point is a single host transaction: all checks run before the
//! first storage write, and a failed call leaves the election untouched.

pub mod config;
pub mod errors;
pub mod events;
pub mod proposal;
pub mod registry;
pub mod tally;
pub mod workflow;

use soroban_sdk::{contract, contractimpl, contracttype, log, Address, Env, String, Vec};

pub use config::{ElectionConfig, DEFAULT_QUORUM_PERCENTAGE};
pub use errors::{ElectionError, ErrorKind};
pub use proposal::Proposal;
pub use registry::{Voter, VoterInfo};
pub use workflow::{Transition, WorkflowStatus};

// ── Public return types ───────────────────────────────────────────────────────

/// Snapshot of the election returned by `get_election_summary`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ElectionSummary {
    pub status: WorkflowStatus,
    pub quorum_percentage: u32,
    pub voters_count: u32,
    pub proposals_count: u32,
    pub total_votes_cast: u32,
    pub participation: u32,
    /// `None` until the votes are tallied.
    pub winning_proposal_id: Option<u32>,
}

// ── Contract ──────────────────────────────────────────────────────────────────

#[contract]
pub struct VotingContract;

#[contractimpl]
impl VotingContract {
    // ── Initialisation ────────────────────────────────────────────────────────

    /// Bootstrap the election with its administrator.
    ///
    /// The quorum starts at `DEFAULT_QUORUM_PERCENTAGE` and the workflow at
    /// `RegisteringVoters`.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ElectionError> {
        if config::is_initialized(&env) {
            return Err(ElectionError::AlreadyInitialized);
        }
        admin.require_auth();

        config::init(&env, &ElectionConfig::new(admin));
        workflow::store(&env, WorkflowStatus::RegisteringVoters);

        Ok(())
    }

    // ── Voter registry ────────────────────────────────────────────────────────

    /// Whitelist `voter`. Only possible while registering voters.
    pub fn add_voter(env: Env, caller: Address, voter: Address) -> Result<(), ElectionError> {
        Self::require_admin(&env, &caller)?;
        workflow::require_status(
            &env,
            WorkflowStatus::RegisteringVoters,
            ElectionError::VoterRegistrationClosed,
        )?;

        registry::register(&env, &voter)?;
        config::extend_instance_ttl(&env);
        events::publish_voter_registered(&env, &voter);

        Ok(())
    }

    // ── Phase transitions ─────────────────────────────────────────────────────

    pub fn start_proposals_registration(env: Env, caller: Address) -> Result<(), ElectionError> {
        Self::apply_transition(&env, &caller, Transition::StartProposalsRegistration)
    }

    pub fn end_proposals_registration(env: Env, caller: Address) -> Result<(), ElectionError> {
        Self::apply_transition(&env, &caller, Transition::EndProposalsRegistration)
    }

    pub fn start_voting_session(env: Env, caller: Address) -> Result<(), ElectionError> {
        Self::apply_transition(&env, &caller, Transition::StartVotingSession)
    }

    pub fn end_voting_session(env: Env, caller: Address) -> Result<(), ElectionError> {
        Self::apply_transition(&env, &caller, Transition::EndVotingSession)
    }

    // ── Proposals ─────────────────────────────────────────────────────────────

    /// Submit a proposal and return its index.
    ///
    /// Any registered voter may submit, any number of times, while proposal
    /// registration is open.
    pub fn submit_proposal(
        env: Env,
        caller: Address,
        description: String,
    ) -> Result<u32, ElectionError> {
        Self::require_voter(&env, &caller)?;
        workflow::require_status(
            &env,
            WorkflowStatus::ProposalsRegistrationStarted,
            ElectionError::ProposalRegistrationClosed,
        )?;
        if description.is_empty() {
            return Err(ElectionError::EmptyDescription);
        }

        let id = proposal::append(&env, description);
        config::extend_instance_ttl(&env);
        events::publish_proposal_registered(&env, id);

        Ok(id)
    }

    // ── Voting ────────────────────────────────────────────────────────────────

    /// Cast or revise the caller's vote.
    ///
    /// A first vote increments the chosen proposal. A revision moves the
    /// caller's single vote from the previous choice to `proposal_id`; picking
    /// the same proposal again leaves the counters unchanged but still counts
    /// as a revision.
    pub fn vote(env: Env, caller: Address, proposal_id: u32) -> Result<(), ElectionError> {
        let mut voter = Self::require_voter(&env, &caller)?;
        workflow::require_status(
            &env,
            WorkflowStatus::VotingSessionStarted,
            ElectionError::VotingClosed,
        )?;
        if proposal_id >= proposal::count(&env) {
            return Err(ElectionError::InvalidProposal);
        }

        let previous = if voter.has_voted {
            Some(voter.voted_proposal_id)
        } else {
            None
        };

        proposal::move_vote(&env, previous, proposal_id)?;
        registry::record_ballot(&env, &caller, &mut voter, proposal_id);
        config::extend_instance_ttl(&env);

        match previous {
            Some(old_id) => events::publish_vote_modified(&env, &caller, old_id, proposal_id),
            None => events::publish_voted(&env, &caller, proposal_id),
        }

        Ok(())
    }

    // ── Tally ─────────────────────────────────────────────────────────────────

    /// Close the election and return the winning proposal id.
    ///
    /// Fails with `QuorumNotMet` without advancing when participation is below
    /// the quorum; lowering the quorum with `set_quorum` and retrying is the
    /// only remedy once voting has ended. One-shot: a second call fails with
    /// `InvalidPhase`.
    pub fn tally_votes(env: Env, caller: Address) -> Result<u32, ElectionError> {
        let cfg = Self::require_admin(&env, &caller)?;
        workflow::require_status(
            &env,
            Transition::TallyVotes.source(),
            ElectionError::InvalidPhase,
        )?;

        let participation = tally::current_participation(&env);
        if let Err(e) = tally::check_quorum(participation, cfg.quorum_percentage) {
            log!(
                &env,
                "tally rejected: participation below quorum",
                participation,
                cfg.quorum_percentage
            );
            return Err(e);
        }

        let winner = tally::select_winner(&env);
        tally::store_winner(&env, winner);
        let (previous, new) = workflow::advance(&env, Transition::TallyVotes)?;
        config::extend_instance_ttl(&env);
        events::publish_status_changed(&env, previous, new);
        log!(&env, "votes tallied", winner, participation);

        Ok(winner)
    }

    // ── Admin ─────────────────────────────────────────────────────────────────

    /// Set the quorum percentage (0–100). Allowed in every phase, including
    /// after voting has ended, to rescue an under-quorum election.
    pub fn set_quorum(env: Env, caller: Address, percentage: u32) -> Result<(), ElectionError> {
        let mut cfg = Self::require_admin(&env, &caller)?;
        config::validate_quorum(percentage)?;

        let old = cfg.quorum_percentage;
        cfg.quorum_percentage = percentage;
        config::store(&env, &cfg);
        events::publish_quorum_updated(&env, old, percentage);

        Ok(())
    }

    /// Hand the administrator role to `new_admin`.
    pub fn transfer_admin(
        env: Env,
        caller: Address,
        new_admin: Address,
    ) -> Result<(), ElectionError> {
        let mut cfg = Self::require_admin(&env, &caller)?;

        let previous = cfg.admin.clone();
        cfg.admin = new_admin.clone();
        config::store(&env, &cfg);
        events::publish_admin_transferred(&env, &previous, &new_admin);

        Ok(())
    }

    // ── View functions ────────────────────────────────────────────────────────

    /// Registered addresses in registration order.
    pub fn get_whitelist(env: Env) -> Vec<Address> {
        registry::whitelist(&env)
    }

    /// Ballot state of `voter`. Only registered voters may look.
    pub fn get_voter_info(
        env: Env,
        caller: Address,
        voter: Address,
    ) -> Result<VoterInfo, ElectionError> {
        Self::require_voter(&env, &caller)?;
        let record = registry::require_registered(&env, &voter, ElectionError::NotRegistered)?;
        Ok(record.into())
    }

    pub fn get_voter(env: Env, voter: Address) -> Option<Voter> {
        registry::load(&env, &voter)
    }

    pub fn get_voters_count(env: Env) -> u32 {
        registry::voters_count(&env)
    }

    pub fn get_proposals_count(env: Env) -> u32 {
        proposal::count(&env)
    }

    pub fn get_proposal(env: Env, proposal_id: u32) -> Result<Proposal, ElectionError> {
        proposal::load(&env, proposal_id).ok_or(ElectionError::ProposalNotFound)
    }

    pub fn get_proposals(env: Env) -> Vec<Proposal> {
        proposal::all(&env)
    }

    /// Truncated percentage of registered voters who have voted.
    pub fn get_current_participation(env: Env) -> u32 {
        tally::current_participation(&env)
    }

    pub fn get_winning_proposal_id(env: Env) -> Result<u32, ElectionError> {
        if workflow::load(&env) != WorkflowStatus::VotesTallied {
            return Err(ElectionError::NotTalliedYet);
        }
        tally::load_winner(&env).ok_or(ElectionError::NotTalliedYet)
    }

    /// Description of the winning proposal.
    pub fn get_winning_proposal(env: Env) -> Result<String, ElectionError> {
        let id = Self::get_winning_proposal_id(env.clone())?;
        proposal::load(&env, id)
            .map(|p| p.description)
            .ok_or(ElectionError::ProposalNotFound)
    }

    pub fn get_quorum_percentage(env: Env) -> u32 {
        config::load(&env)
            .map(|cfg| cfg.quorum_percentage)
            .unwrap_or(DEFAULT_QUORUM_PERCENTAGE)
    }

    pub fn get_workflow_status(env: Env) -> WorkflowStatus {
        workflow::load(&env)
    }

    pub fn get_election_summary(env: Env) -> ElectionSummary {
        let status = workflow::load(&env);
        let winning_proposal_id = if status == WorkflowStatus::VotesTallied {
            tally::load_winner(&env)
        } else {
            None
        };
        let total_votes_cast = proposal::total_votes(&env);
        let voters_count = registry::voters_count(&env);

        ElectionSummary {
            status,
            quorum_percentage: Self::get_quorum_percentage(env.clone()),
            voters_count,
            proposals_count: proposal::count(&env),
            total_votes_cast,
            participation: tally::participation(total_votes_cast, voters_count),
            winning_proposal_id,
        }
    }

    pub fn is_initialized(env: Env) -> bool {
        config::is_initialized(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ElectionError> {
        config::load(&env).map(|cfg| cfg.admin)
    }

    // ── Internal helpers ──────────────────────────────────────────────────────

    /// Authenticate `caller` and check it holds the administrator role.
    fn require_admin(env: &Env, caller: &Address) -> Result<ElectionConfig, ElectionError> {
        let cfg = config::load(env)?;
        caller.require_auth();
        if *caller != cfg.admin {
            return Err(ElectionError::Unauthorized);
        }
        Ok(cfg)
    }

    /// Authenticate `caller` and check it is a registered voter.
    fn require_voter(env: &Env, caller: &Address) -> Result<Voter, ElectionError> {
        if !config::is_initialized(env) {
            return Err(ElectionError::NotInitialized);
        }
        caller.require_auth();
        registry::require_registered(env, caller, ElectionError::NotWhitelisted)
    }

    fn apply_transition(
        env: &Env,
        caller: &Address,
        transition: Transition,
    ) -> Result<(), ElectionError> {
        Self::require_admin(env, caller)?;
        let (previous, new) = workflow::advance(env, transition)?;
        config::extend_instance_ttl(env);
        events::publish_status_changed(env, previous, new);
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
