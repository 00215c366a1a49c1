//! Departments: named, deduplicated collections of patient records.

use std::collections::HashSet;
use std::sync::Arc;

use crate::collation::NameCollator;
use crate::id::PatientId;
use crate::patient::Patient;

/// A named collection of shared patient records.
///
/// The collection is built once. A record that appears more than once in the input is kept at
/// its first position only; records are recognised by identity, so two distinct records with the
/// same field values are both kept.
#[derive(Clone, Debug)]
pub struct Department {
    name: String,
    patients: Vec<Arc<Patient>>,
}

impl Department {
    /// Builds a department from `patients`, preserving first-occurrence order.
    pub fn new(name: impl Into<String>, patients: impl IntoIterator<Item = Arc<Patient>>) -> Self {
        let name = name.into();
        let mut seen: HashSet<PatientId> = HashSet::new();
        let mut kept = Vec::new();

        for patient in patients {
            if seen.insert(patient.id()) {
                kept.push(patient);
            } else {
                tracing::trace!(department = %name, patient = %patient.id(), "skipping duplicate patient");
            }
        }

        tracing::debug!(department = %name, count = kept.len(), "department built");
        Self {
            name,
            patients: kept,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of distinct records.
    pub fn count(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Patient>> {
        self.patients.iter()
    }

    /// Records ordered by surname then name. The department itself is not reordered.
    pub fn sorted(&self) -> Vec<Arc<Patient>> {
        let mut sorted = self.patients.clone();
        sorted.sort_by(|a, b| a.compare_to(Some(b.as_ref())));
        sorted
    }

    /// Records ordered by surname then name under a locale's collation.
    pub fn sorted_with(&self, collator: &NameCollator) -> Vec<Arc<Patient>> {
        let mut sorted = self.patients.clone();
        sorted.sort_by(|a, b| a.compare_to_with(Some(b.as_ref()), collator));
        sorted
    }
}

impl<'a> IntoIterator for &'a Department {
    type Item = &'a Arc<Patient>;
    type IntoIter = std::slice::Iter<'a, Arc<Patient>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
