use std::collections::HashMap;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::domain::{BillSplit, PERCENT_CAP, Person, PersonId, derive_amount, within_cap};

use super::AppError;

/// Application service owning the process-wide bill-split ledger.
/// This is the primary interface for any client (HTTP API, tests).
///
/// All mutations serialize on the write half of the lock and run to
/// completion while holding it, so batch updates are atomic to readers.
pub struct LedgerService {
    state: RwLock<BillSplit>,
}

/// Read-only snapshot of the ledger.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillSplitInfo {
    pub total_amount: f64,
    pub total_percentage: f64,
    pub people: Vec<Person>,
}

impl LedgerService {
    /// Create a service with an empty ledger: no bill amount, no people.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(BillSplit::new()),
        }
    }

    // ========================
    // Roster operations
    // ========================

    /// Add a person to the roster with a zero share.
    /// The name is trimmed and must not be empty. Returns the assigned id.
    pub async fn add_person(&self, name: &str) -> Result<PersonId, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidName);
        }

        let mut split = self.state.write().await;
        let id = split.add_person(name.to_string());
        debug!(id, name, "added person");
        Ok(id)
    }

    /// Remove a person from the roster. The freed share is not
    /// redistributed; the id is never reissued.
    pub async fn remove_person(&self, id: PersonId) -> Result<(), AppError> {
        let mut split = self.state.write().await;
        if !split.remove_person(id) {
            return Err(AppError::PersonNotFound(id));
        }
        debug!(id, "removed person");
        Ok(())
    }

    // ========================
    // Bill amount operations
    // ========================

    /// Set the bill total and recompute every person's derived amount.
    pub async fn set_bill_amount(&self, amount: f64) -> Result<(), AppError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(AppError::InvalidAmount(amount));
        }

        let mut split = self.state.write().await;
        split.total_amount = amount;
        split.recompute_amounts();
        debug!(amount, "set bill amount");
        Ok(())
    }

    /// Zero the bill total and clear every derived amount back to unset.
    pub async fn reset_bill_amount(&self) {
        let mut split = self.state.write().await;
        split.total_amount = 0.0;
        split.clear_amounts();
        debug!("reset bill amount");
    }

    // ========================
    // Share operations
    // ========================

    /// Zero every share and clear every derived amount. Idempotent.
    pub async fn reset_percentages(&self) {
        let mut split = self.state.write().await;
        for person in &mut split.people {
            person.percentage = 0.0;
        }
        split.clear_amounts();
        debug!("reset percentages");
    }

    /// Update a single person's share, keeping the roster under the cap.
    pub async fn update_percentage(
        &self,
        id: PersonId,
        percentage: f64,
    ) -> Result<(), AppError> {
        validate_share(percentage)?;

        let mut split = self.state.write().await;
        let total = split.total_percentage();
        let person = split.person_mut(id).ok_or(AppError::PersonNotFound(id))?;

        let others = total - person.percentage;
        if !within_cap(others + percentage) {
            warn!(id, percentage, "rejected share update over cap");
            return Err(AppError::AllocationExceeded {
                requested: percentage,
                available: (PERCENT_CAP - others).max(0.0),
            });
        }

        person.percentage = percentage;
        split.recompute_amounts();
        debug!(id, percentage, "updated share");
        Ok(())
    }

    /// Apply a batch of `(id, percentage)` assignments, all or nothing.
    /// Unlisted people keep their current share; a later pair for the same
    /// id wins. Validation runs against the projected whole-roster total
    /// before anything is mutated.
    pub async fn update_percentages(
        &self,
        assignments: &[(PersonId, f64)],
    ) -> Result<(), AppError> {
        for &(_, percentage) in assignments {
            validate_share(percentage)?;
        }

        let mut split = self.state.write().await;

        let mut projected: HashMap<PersonId, f64> =
            split.people.iter().map(|p| (p.id, p.percentage)).collect();
        for &(id, percentage) in assignments {
            if !projected.contains_key(&id) {
                return Err(AppError::PersonNotFound(id));
            }
            projected.insert(id, percentage);
        }

        let total: f64 = projected.values().sum();
        if !within_cap(total) {
            warn!(total, "rejected batch share update over cap");
            return Err(AppError::AllocationExceeded {
                requested: total,
                available: PERCENT_CAP,
            });
        }

        for &(id, percentage) in assignments {
            if let Some(person) = split.person_mut(id) {
                person.percentage = percentage;
            }
        }
        split.recompute_amounts();
        debug!(count = assignments.len(), "updated shares");
        Ok(())
    }

    // ========================
    // Read operations
    // ========================

    /// Preview the roster's amounts for a candidate bill total without
    /// touching the stored state.
    pub async fn calculate_amounts(&self, amount: f64) -> Vec<Person> {
        let split = self.state.read().await;
        split
            .people
            .iter()
            .map(|person| {
                let mut preview = person.clone();
                preview.amount = Some(derive_amount(amount, person.percentage));
                preview
            })
            .collect()
    }

    /// Snapshot the current ledger.
    pub async fn get_bill_split(&self) -> BillSplitInfo {
        let split = self.state.read().await;
        BillSplitInfo {
            total_amount: split.total_amount,
            total_percentage: split.total_percentage(),
            people: split.people.clone(),
        }
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_share(percentage: f64) -> Result<(), AppError> {
    if !(0.0..=PERCENT_CAP).contains(&percentage) {
        return Err(AppError::InvalidPercentage(percentage));
    }
    Ok(())
}
