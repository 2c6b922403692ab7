//! UI state containers: explicit state machines driven by one repository call.

use std::collections::BTreeSet;

use mybank_core::{Bank, Operation};
use tracing::warn;

use crate::repository::BanksRepository;
use crate::service::BanksService;

const DEFAULT_LOAD_ERROR: &str = "Erreur lors du chargement";

#[derive(Debug, Clone, PartialEq)]
pub enum BanksState {
    Loading,
    /// Both lists keep the repository's (name-sorted) order
    Loaded {
        featured: Vec<Bank>,
        others: Vec<Bank>,
    },
    Failed(String),
}

impl BanksState {
    fn loaded(banks: Vec<Bank>) -> Self {
        let (featured, others) = banks.into_iter().partition(|b| b.is_featured);
        BanksState::Loaded { featured, others }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, BanksState::Loading)
    }

    /// Featured banks first, then the others. Empty unless loaded.
    pub fn banks(&self) -> impl Iterator<Item = &Bank> {
        let (featured, others): (&[Bank], &[Bank]) = match self {
            BanksState::Loaded { featured, others } => (featured, others),
            _ => (&[], &[]),
        };
        featured.iter().chain(others.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BanksEvent {
    /// Navigate to the operations screen of one account
    OpenAccount {
        bank_name: String,
        account_label: String,
    },
}

/// Bank list screen state
#[derive(Debug)]
pub struct BanksStore {
    state: BanksState,
    expanded: BTreeSet<String>,
}

impl Default for BanksStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BanksStore {
    pub fn new() -> Self {
        Self {
            state: BanksState::Loading,
            expanded: BTreeSet::new(),
        }
    }

    pub fn state(&self) -> &BanksState {
        &self.state
    }

    /// Drive one fetch. Failures clear the lists and keep the error text.
    pub async fn load<S: BanksService>(&mut self, repository: &BanksRepository<S>) {
        self.state = BanksState::Loading;
        self.state = match repository.get_banks().await {
            Ok(banks) => BanksState::loaded(banks),
            Err(e) => {
                warn!(error = %e, "loading banks failed");
                let message = format!("{e:#}");
                if message.is_empty() {
                    BanksState::Failed(DEFAULT_LOAD_ERROR.to_string())
                } else {
                    BanksState::Failed(message)
                }
            }
        };
    }

    /// Expand a collapsed bank, or collapse an expanded one.
    pub fn toggle_bank(&mut self, bank_name: &str) {
        if !self.expanded.remove(bank_name) {
            self.expanded.insert(bank_name.to_string());
        }
    }

    pub fn is_expanded(&self, bank_name: &str) -> bool {
        self.expanded.contains(bank_name)
    }

    pub fn expanded_bank_names(&self) -> &BTreeSet<String> {
        &self.expanded
    }

    pub fn open_account(&self, bank: &Bank, account_label: &str) -> BanksEvent {
        BanksEvent::OpenAccount {
            bank_name: bank.name.clone(),
            account_label: account_label.to_string(),
        }
    }
}

/// Operations screen state for one account.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationsStore {
    pub bank_name: String,
    pub account_label: String,
    pub operations: Vec<Operation>,
}

impl OperationsStore {
    /// Unknown bank or account gives an empty list, not an error.
    pub fn new(bank_name: impl Into<String>, account_label: impl Into<String>, banks: &[Bank]) -> Self {
        let bank_name = bank_name.into();
        let account_label = account_label.into();
        let operations = banks
            .iter()
            .find(|b| b.name == bank_name)
            .and_then(|b| b.account(&account_label))
            .map(|a| a.operations.clone())
            .unwrap_or_default();
        Self {
            bank_name,
            account_label,
            operations,
        }
    }

    pub fn from_event(event: &BanksEvent, banks: &[Bank]) -> Self {
        match event {
            BanksEvent::OpenAccount {
                bank_name,
                account_label,
            } => Self::new(bank_name.as_str(), account_label.as_str(), banks),
        }
    }
}
