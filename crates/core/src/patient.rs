//! Patient records.
//!
//! A [`Patient`] carries the fields shared by every record (identity, policy, stay, billing) and a
//! [`PatientKind`] with the fields specific to the way the patient is being treated. Rendering of
//! the info block lives in [`crate::info`].

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::{NaiveDate, NaiveDateTime};
use ward_types::ServiceType;

use crate::collation::{compare_root, NameCollator};
use crate::id::PatientId;
use crate::labels::InfoLabels;
use crate::validation::validate_stay;
use crate::PatientResult;

/// Variant-specific fields of a patient record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatientKind {
    /// A plain record with no treatment-specific fields.
    General,
    /// Admitted to a ward.
    Inpatient {
        department: String,
        room_number: i64,
    },
    /// Treated within a single visit; the exact times carry time-of-day.
    Day {
        arrival_time: NaiveDateTime,
        leave_time: NaiveDateTime,
    },
    /// Seen by an attending doctor without admission.
    Ambulatory { doctor_name: String },
}

/// Validated admission and discharge dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stay {
    arrival: NaiveDate,
    discharge: NaiveDate,
}

impl Stay {
    pub fn arrival(&self) -> NaiveDate {
        self.arrival
    }

    pub fn discharge(&self) -> NaiveDate {
        self.discharge
    }
}

/// A single patient record.
///
/// Records are compared for equality by identity: two records built from the same values are
/// different patients. Use [`Patient::compare_to`] for the alphabetical ordering.
#[derive(Debug)]
pub struct Patient {
    id: PatientId,
    name: String,
    surname: String,
    policy_number: i64,
    stay: Option<Stay>,
    service_type: ServiceType,
    price: i64,
    kind: PatientKind,
}

impl Patient {
    /// Creates a general record.
    ///
    /// The stay is unset, the service type is [`ServiceType::Insurance`] and the price is zero.
    pub fn new(name: impl Into<String>, surname: impl Into<String>, policy_number: i64) -> Self {
        Self::with_kind(name, surname, policy_number, PatientKind::General)
    }

    /// Creates an inpatient record.
    pub fn inpatient(
        name: impl Into<String>,
        surname: impl Into<String>,
        policy_number: i64,
        department: impl Into<String>,
        room_number: i64,
    ) -> Self {
        Self::with_kind(
            name,
            surname,
            policy_number,
            PatientKind::Inpatient {
                department: department.into(),
                room_number,
            },
        )
    }

    /// Creates a day-patient record.
    pub fn day(
        name: impl Into<String>,
        surname: impl Into<String>,
        policy_number: i64,
        arrival_time: NaiveDateTime,
        leave_time: NaiveDateTime,
    ) -> Self {
        Self::with_kind(
            name,
            surname,
            policy_number,
            PatientKind::Day {
                arrival_time,
                leave_time,
            },
        )
    }

    /// Creates an ambulatory record.
    pub fn ambulatory(
        name: impl Into<String>,
        surname: impl Into<String>,
        policy_number: i64,
        doctor_name: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            name,
            surname,
            policy_number,
            PatientKind::Ambulatory {
                doctor_name: doctor_name.into(),
            },
        )
    }

    /// Creates a record of any kind.
    pub fn with_kind(
        name: impl Into<String>,
        surname: impl Into<String>,
        policy_number: i64,
        kind: PatientKind,
    ) -> Self {
        Self {
            id: PatientId::new(),
            name: name.into(),
            surname: surname.into(),
            policy_number,
            stay: None,
            service_type: ServiceType::default(),
            price: 0,
            kind,
        }
    }

    pub fn id(&self) -> PatientId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn set_surname(&mut self, surname: impl Into<String>) {
        self.surname = surname.into();
    }

    pub fn policy_number(&self) -> i64 {
        self.policy_number
    }

    /// The validated stay, if [`Patient::set_dates`] has succeeded.
    pub fn stay(&self) -> Option<Stay> {
        self.stay
    }

    pub fn arrival(&self) -> Option<NaiveDate> {
        self.stay.map(|s| s.arrival)
    }

    pub fn discharge(&self) -> Option<NaiveDate> {
        self.stay.map(|s| s.discharge)
    }

    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }

    pub fn set_service_type(&mut self, service_type: ServiceType) {
        self.service_type = service_type;
    }

    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn set_price(&mut self, price: i64) {
        self.price = price;
    }

    pub fn kind(&self) -> &PatientKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut PatientKind {
        &mut self.kind
    }

    /// Sets the admission and discharge dates together.
    ///
    /// # Errors
    ///
    /// Returns [`PatientError::InvalidDates`](crate::PatientError::InvalidDates) if `discharge`
    /// is not strictly after `arrival`. The previous stay is kept in that case.
    pub fn set_dates(&mut self, arrival: NaiveDate, discharge: NaiveDate) -> PatientResult<()> {
        validate_stay(arrival, discharge)?;
        self.stay = Some(Stay { arrival, discharge });
        tracing::debug!(patient = %self.id, %arrival, %discharge, "stay dates set");
        Ok(())
    }

    /// Three-way comparison by surname, then name, using the root collation.
    ///
    /// A record always sorts after an absent one.
    pub fn compare_to(&self, other: Option<&Patient>) -> Ordering {
        let Some(other) = other else {
            return Ordering::Greater;
        };
        compare_root(&self.surname, &other.surname)
            .then_with(|| compare_root(&self.name, &other.name))
    }

    /// Same as [`Patient::compare_to`] with a locale-specific collator.
    pub fn compare_to_with(&self, other: Option<&Patient>, collator: &NameCollator) -> Ordering {
        let Some(other) = other else {
            return Ordering::Greater;
        };
        collator
            .compare(&self.surname, &other.surname)
            .then_with(|| collator.compare(&self.name, &other.name))
    }

    /// Orders two records by policy number.
    pub fn cmp_by_policy_number(a: &Patient, b: &Patient) -> Ordering {
        a.policy_number.cmp(&b.policy_number)
    }

    /// Info block rendered with the default (English) labels.
    pub fn info(&self) -> [String; 3] {
        crate::info::render_info(self, crate::info::default_labels())
    }

    /// Info block rendered with the given labels.
    pub fn info_with(&self, labels: &InfoLabels) -> [String; 3] {
        crate::info::render_info(self, labels)
    }
}

impl PartialEq for Patient {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Patient {}

impl Hash for Patient {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
