//! Error codes for the voting contract.
//!
//! # Code ranges
//! | Range   | Purpose                        |
//! |---------|--------------------------------|
//! | 1 – 2   | Lifecycle / initialisation     |
//! | 3 – 4   | Authorisation                  |
//! | 5 – 8   | Workflow phase                 |
//! | 9 – 14  | Validation                     |
//! | 15 – 16 | Tally business rules           |

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ElectionError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not the administrator.
    Unauthorized = 3,
    /// Caller is not a registered voter.
    NotWhitelisted = 4,
    /// Workflow transition requested from the wrong status.
    InvalidPhase = 5,
    VoterRegistrationClosed = 6,
    ProposalRegistrationClosed = 7,
    VotingClosed = 8,
    AlreadyRegistered = 9,
    NotRegistered = 10,
    InvalidProposal = 11,
    ProposalNotFound = 12,
    EmptyDescription = 13,
    InvalidRange = 14,
    QuorumNotMet = 15,
    NotTalliedYet = 16,
}

/// Failure classes. None of them is transient: retrying without changing
/// state or input fails again.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Authorization,
    Phase,
    Validation,
    BusinessRule,
}

impl ElectionError {
    /// Message exposed to existing callers. Kept byte-for-byte stable.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotInitialized => "Le scrutin n est pas initialise",
            Self::AlreadyInitialized => "Le scrutin est deja initialise",
            Self::Unauthorized => "Seul l administrateur peut effectuer cette action",
            Self::NotWhitelisted => "Vous n etes pas sur la liste blanche",
            Self::InvalidPhase => "L etat actuel ne permet pas cette action",
            Self::VoterRegistrationClosed => "Enregistrement des electeurs ferme",
            Self::ProposalRegistrationClosed => "L enregistrement des propositions est ferme",
            Self::VotingClosed => "Le vote est ferme",
            Self::AlreadyRegistered => "Cet electeur est deja inscrit",
            Self::NotRegistered => "L'electeur n'est pas enregistre",
            Self::InvalidProposal | Self::ProposalNotFound => "ID de proposition invalide",
            Self::EmptyDescription => "La description ne peut pas etre vide",
            Self::InvalidRange => "Le pourcentage doit etre entre 0 et 100",
            Self::QuorumNotMet => "Le quorum de participation minimum n'a pas ete atteint",
            Self::NotTalliedYet => "Les votes ne sont pas encore comptabilises",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Unauthorized | Self::NotWhitelisted => ErrorKind::Authorization,
            Self::NotInitialized
            | Self::AlreadyInitialized
            | Self::InvalidPhase
            | Self::VoterRegistrationClosed
            | Self::ProposalRegistrationClosed
            | Self::VotingClosed
            | Self::NotTalliedYet => ErrorKind::Phase,
            Self::AlreadyRegistered
            | Self::NotRegistered
            | Self::InvalidProposal
            | Self::ProposalNotFound
            | Self::EmptyDescription
            | Self::InvalidRange => ErrorKind::Validation,
            Self::QuorumNotMet => ErrorKind::BusinessRule,
        }
    }
}
