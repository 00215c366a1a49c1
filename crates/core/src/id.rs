//! Record identity.
//!
//! Every [`Patient`](crate::Patient) is allocated a [`PatientId`] when it is constructed. Patients
//! are never cloned, so the id stands for the record itself: two records with identical field
//! values still carry different ids, and the same record seen twice carries the same id.

use std::fmt;
use uuid::Uuid;

/// Opaque identity handle for a single allocated patient record.
///
/// The id is a random version 4 UUID. It is displayed in the 32-character lowercase hex form
/// without hyphens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PatientId(Uuid);

impl PatientId {
    /// Allocates a fresh identity.
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}
