use super::{Person, PersonId};

/// Maximum total share that can be allocated across the roster.
pub const PERCENT_CAP: f64 = 100.0;

/// Tolerance applied to every comparison against the cap, so repeated
/// floating-point additions cannot trigger spurious rejections.
pub const SHARE_EPSILON: f64 = 1e-9;

/// Derive the monetary amount for a share of the given bill total.
/// Full precision is kept here; rounding happens at presentation time.
pub fn derive_amount(total_amount: f64, percentage: f64) -> f64 {
    total_amount * percentage / 100.0
}

/// Sum of all allocated shares.
pub fn allocated_percentage(people: &[Person]) -> f64 {
    people.iter().map(|p| p.percentage).sum()
}

/// Whether a total allocation fits under the cap.
pub fn within_cap(total_percentage: f64) -> bool {
    total_percentage <= PERCENT_CAP + SHARE_EPSILON
}

/// The authoritative bill-split state: the bill total plus the roster of
/// participants in insertion order. Mechanical mutations live here;
/// validation is the application layer's job.
#[derive(Debug, Clone, Default)]
pub struct BillSplit {
    pub total_amount: f64,
    pub people: Vec<Person>,
    next_id: PersonId,
}

impl BillSplit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a participant with a zero share and assign the next id.
    /// Ids are monotonic and never reused, even after removal.
    pub fn add_person(&mut self, name: String) -> PersonId {
        let id = self.next_id;
        self.next_id += 1;
        self.people.push(Person::new(id, name));
        id
    }

    /// Remove a participant. Returns `false` if the id is unknown.
    /// The freed share is not redistributed; it simply becomes headroom.
    pub fn remove_person(&mut self, id: PersonId) -> bool {
        let before = self.people.len();
        self.people.retain(|p| p.id != id);
        self.people.len() != before
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    pub fn person_mut(&mut self, id: PersonId) -> Option<&mut Person> {
        self.people.iter_mut().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PersonId) -> bool {
        self.people.iter().any(|p| p.id == id)
    }

    pub fn total_percentage(&self) -> f64 {
        allocated_percentage(&self.people)
    }

    /// Recompute every participant's derived amount from the stored total.
    pub fn recompute_amounts(&mut self) {
        for person in &mut self.people {
            person.amount = Some(derive_amount(self.total_amount, person.percentage));
        }
    }

    /// Drop every derived amount back to unset.
    pub fn clear_amounts(&mut self) {
        for person in &mut self.people {
            person.amount = None;
        }
    }
}
