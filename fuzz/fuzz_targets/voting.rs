#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{testutils::Address as _, Address, Env, String};
use voting::{VotingContract, VotingContractClient, WorkflowStatus};

/// Actions modelling every state-changing voting entry point.
///
/// Caller-driven actions pick their address from a small pool that mixes
/// the admin, registered voters and outsiders.
#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    AddVoter { user: u8 },
    Advance { step: u8 },
    SubmitProposal { user: u8, len: u8 },
    Vote { user: u8, proposal_id: u8 },
    SetQuorum { caller: u8, percentage: u8 },
    Tally { caller: u8 },
}

const DESCRIPTIONS: [&str; 3] = ["", "Parc", "Piscine municipale"];

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let contract_id = env.register(VotingContract, ());
    let client = VotingContractClient::new(&env, &contract_id);

    if client.try_initialize(&admin).is_err() {
        return;
    }

    let mut users = vec![admin.clone()];
    for _ in 0..5 {
        users.push(Address::generate(&env));
    }
    let pick = |i: u8| &users[i as usize % users.len()];

    let mut last_status = client.get_workflow_status();

    for action in actions {
        match action {
            FuzzAction::AddVoter { user } => {
                let _ = client.try_add_voter(&admin, pick(user));
            }
            FuzzAction::Advance { step } => {
                let _ = match step % 4 {
                    0 => client.try_start_proposals_registration(&admin),
                    1 => client.try_end_proposals_registration(&admin),
                    2 => client.try_start_voting_session(&admin),
                    _ => client.try_end_voting_session(&admin),
                };
            }
            FuzzAction::SubmitProposal { user, len } => {
                let text = DESCRIPTIONS[len as usize % DESCRIPTIONS.len()];
                let _ = client.try_submit_proposal(pick(user), &String::from_str(&env, text));
            }
            FuzzAction::Vote { user, proposal_id } => {
                let _ = client.try_vote(pick(user), &(proposal_id as u32));
            }
            FuzzAction::SetQuorum { caller, percentage } => {
                let _ = client.try_set_quorum(pick(caller), &(percentage as u32));
            }
            FuzzAction::Tally { caller } => {
                let _ = client.try_tally_votes(pick(caller));
            }
        }

        // ── Post-action invariant checks ──
        let total: u32 = client.get_proposals().iter().map(|p| p.vote_count).sum();
        let voted = client
            .get_whitelist()
            .iter()
            .filter(|v| client.get_voter(v).map(|r| r.has_voted).unwrap_or(false))
            .count() as u32;
        assert_eq!(total, voted, "INVARIANT VIOLATION: vote counters drifted from ballots");

        let voters = client.get_voters_count();
        let participation = client.get_current_participation();
        assert!(participation <= 100, "INVARIANT VIOLATION: participation above 100");
        if voters > 0 {
            assert_eq!(participation, (total as u64 * 100 / voters as u64) as u32);
        }

        assert!(client.get_quorum_percentage() <= 100, "INVARIANT VIOLATION: quorum out of range");

        let status = client.get_workflow_status();
        assert!(
            status == last_status || status as u32 == last_status as u32 + 1,
            "INVARIANT VIOLATION: status moved from {:?} to {:?}",
            last_status,
            status
        );
        assert_eq!(
            client.try_get_winning_proposal_id().is_ok(),
            status == WorkflowStatus::VotesTallied
        );
        last_status = status;
    }
});
