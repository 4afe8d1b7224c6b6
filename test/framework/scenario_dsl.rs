//! # Scenario DSL
//!
//! A declarative, builder-pattern API for defining readable election
//! scenarios in a Given-When-Then style.
//!
//! ## Example
//!
//! ```rust,ignore
//! Scenario::new("Majority wins")
//!     .with_voters(3)
//!     .with_proposals(&["Parc", "Piscine"])
//!     .when("two voters pick the pool", |ctx| {
//!         ctx.harness.vote(0, 1);
//!         ctx.harness.vote(1, 1);
//!         ctx.harness.close_voting();
//!     })
//!     .then("the pool wins", |ctx| {
//!         assert_eq!(ctx.harness.tally(), 1);
//!     })
//!     .run();
//! ```

extern crate std;

use std::boxed::Box;
use std::string::String;
use std::vec::Vec;

use super::invariants::InvariantSet;
use super::{ElectionTestHarness, TestEnv};

// ── Scenario Context ─────────────────────────────────────────────────────────

/// Mutable context passed to scenario steps.
pub struct ScenarioContext<'a, 'b> {
    pub harness: &'a ElectionTestHarness<'b>,
    /// Storage for arbitrary test data between steps.
    pub data: std::collections::HashMap<String, u32>,
}

impl<'a, 'b> ScenarioContext<'a, 'b> {
    fn new(harness: &'a ElectionTestHarness<'b>) -> Self {
        Self {
            harness,
            data: std::collections::HashMap::new(),
        }
    }

    /// Store a named value for use in later steps.
    pub fn store(&mut self, key: &str, value: u32) {
        self.data.insert(key.into(), value);
    }

    /// Retrieve a named value stored by a previous step.
    pub fn load(&self, key: &str) -> u32 {
        *self
            .data
            .get(key)
            .unwrap_or_else(|| panic!("Scenario variable '{}' not found", key))
    }
}

// ── Step Types ───────────────────────────────────────────────────────────────

type StepFn = Box<dyn FnOnce(&mut ScenarioContext<'_, '_>)>;

struct GivenStep {
    action: StepFn,
}

struct WhenStep {
    #[allow(dead_code)]
    description: String,
    action: StepFn,
}

struct ThenStep {
    #[allow(dead_code)]
    description: String,
    assertion: StepFn,
}

// ── Scenario Builder ─────────────────────────────────────────────────────────

/// A declarative election scenario with Given-When-Then structure.
///
/// With no proposals configured the election starts in `RegisteringVoters`;
/// with proposals it starts in `VotingSessionStarted`.
pub struct Scenario {
    name: String,
    num_voters: usize,
    proposals: Vec<String>,
    quorum: Option<u32>,
    given_steps: Vec<GivenStep>,
    when_steps: Vec<WhenStep>,
    then_steps: Vec<ThenStep>,
    invariants: Option<InvariantSet>,
}

impl Scenario {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            num_voters: 3,
            proposals: Vec::new(),
            quorum: None,
            given_steps: Vec::new(),
            when_steps: Vec::new(),
            then_steps: Vec::new(),
            invariants: None,
        }
    }

    /// Number of voters registered before the first step.
    pub fn with_voters(mut self, n: usize) -> Self {
        self.num_voters = n;
        self
    }

    /// Proposals submitted before voting opens.
    pub fn with_proposals(mut self, descriptions: &[&str]) -> Self {
        self.proposals = descriptions.iter().map(|d| String::from(*d)).collect();
        self
    }

    /// Quorum applied right after deployment.
    pub fn with_quorum(mut self, percentage: u32) -> Self {
        self.quorum = Some(percentage);
        self
    }

    /// Add a precondition/setup step.
    pub fn given<F>(mut self, action: F) -> Self
    where
        F: FnOnce(&mut ScenarioContext<'_, '_>) + 'static,
    {
        self.given_steps.push(GivenStep {
            action: Box::new(action),
        });
        self
    }

    /// Add an action step with a description.
    pub fn when<F>(mut self, description: &str, action: F) -> Self
    where
        F: FnOnce(&mut ScenarioContext<'_, '_>) + 'static,
    {
        self.when_steps.push(WhenStep {
            description: description.into(),
            action: Box::new(action),
        });
        self
    }

    /// Add an assertion step with a description.
    pub fn then<F>(mut self, description: &str, assertion: F) -> Self
    where
        F: FnOnce(&mut ScenarioContext<'_, '_>) + 'static,
    {
        self.then_steps.push(ThenStep {
            description: description.into(),
            assertion: Box::new(assertion),
        });
        self
    }

    /// Attach invariants to check between when and then phases.
    pub fn with_invariants(mut self, invariants: InvariantSet) -> Self {
        self.invariants = Some(invariants);
        self
    }

    /// Execute the scenario. Panics on assertion failure.
    pub fn run(self) {
        let mut env = TestEnv::new();
        let harness = if self.proposals.is_empty() {
            ElectionTestHarness::new(&mut env, self.num_voters)
        } else {
            let descriptions: Vec<&str> = self.proposals.iter().map(|s| s.as_str()).collect();
            ElectionTestHarness::in_voting(&mut env, self.num_voters, &descriptions)
        };
        if let Some(q) = self.quorum {
            harness.set_quorum(q);
        }
        let mut ctx = ScenarioContext::new(&harness);

        for step in self.given_steps {
            (step.action)(&mut ctx);
        }

        for step in self.when_steps {
            (step.action)(&mut ctx);
        }

        if let Some(ref invariants) = self.invariants {
            let violations = invariants.check_all(&harness.snapshot());
            if !violations.is_empty() {
                let mut report = std::format!(
                    "Scenario '{}': invariant violations after actions:\n",
                    self.name
                );
                for (name, msg) in &violations {
                    report.push_str(&std::format!("  ✗ [{}]: {}\n", name, msg));
                }
                panic!("{}", report);
            }
        }

        for step in self.then_steps {
            (step.assertion)(&mut ctx);
        }
    }
}

// ── Assertion Helpers ────────────────────────────────────────────────────────

/// Assert that an action fails with the expected contract error.
///
/// Uses `try_*` client methods that return `Result`.
#[macro_export]
macro_rules! assert_contract_error {
    ($result:expr, $expected:expr) => {
        match $result {
            Err(Ok(e)) => assert_eq!(
                e, $expected,
                "Expected error {:?}, got {:?}",
                $expected, e
            ),
            Err(Err(e)) => panic!("Unexpected SDK error: {:?}", e),
            Ok(_) => panic!("Expected error {:?}, but operation succeeded", $expected),
        }
    };
}

// ── Batch Scenario Runner ────────────────────────────────────────────────────

/// Run multiple scenarios and collect results.
///
/// Returns the number of passed and failed scenarios.
pub fn run_scenarios(scenarios: Vec<Scenario>) -> (usize, usize) {
    let total = scenarios.len();
    let mut failures = 0;

    for scenario in scenarios {
        let name = scenario.name.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            scenario.run();
        }));

        match result {
            Ok(()) => std::eprintln!("  ✓ {}", name),
            Err(_) => {
                std::eprintln!("  ✗ {}", name);
                failures += 1;
            }
        }
    }

    (total - failures, failures)
}
