//! Label text for rendered info blocks.
//!
//! Every literal that appears in a patient info block lives in [`InfoLabels`], so the wording can
//! be switched per deployment without touching the rendering code. Two presets ship with the
//! crate:
//! - [`InfoLabels::english`] (the default)
//! - [`InfoLabels::russian`], which reproduces the historical output of the ward system verbatim
//!
//! A YAML document can override any subset of keys on top of a preset; keys that are missing
//! keep the preset's value and unknown keys are rejected.

use crate::{PatientError, PatientResult};
use serde::Deserialize;
use ward_types::{Locale, ServiceType};

/// Literal text used when rendering a patient info block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoLabels {
    pub name: String,
    pub surname: String,
    pub policy_number: String,
    pub service_type: String,
    pub arrival_date: String,
    pub discharge_date: String,
    pub treatment_cost: String,
    /// Currency suffix appended to the treatment cost.
    pub currency: String,
    /// Label for [`ServiceType::Insurance`].
    pub insurance: String,
    /// Label for [`ServiceType::Paid`].
    pub paid: String,
    pub department: String,
    pub room_number: String,
    pub exact_arrival_time: String,
    pub exact_leave_time: String,
    pub attending_doctor: String,
    /// Placeholder rendered for admission and discharge dates before they have been set.
    pub date_not_set: String,
}

impl Default for InfoLabels {
    fn default() -> Self {
        Self::english()
    }
}

impl InfoLabels {
    /// English labels.
    pub fn english() -> Self {
        Self {
            name: "Name".into(),
            surname: "Surname".into(),
            policy_number: "Policy number".into(),
            service_type: "Service type".into(),
            arrival_date: "Arrival date".into(),
            discharge_date: "Discharge date".into(),
            treatment_cost: "Treatment cost".into(),
            currency: "rub.".into(),
            insurance: "Insurance".into(),
            paid: "Paid".into(),
            department: "Department".into(),
            room_number: "Room number".into(),
            exact_arrival_time: "Exact arrival time".into(),
            exact_leave_time: "Exact leave time".into(),
            attending_doctor: "Attending doctor".into(),
            date_not_set: "not set".into(),
        }
    }

    /// Russian labels, identical to the strings printed by earlier releases.
    pub fn russian() -> Self {
        Self {
            name: "Имя".into(),
            surname: "Фамилия".into(),
            policy_number: "Номер полиса".into(),
            service_type: "Тип обслуживания".into(),
            arrival_date: "Дата поступления".into(),
            discharge_date: "Дата выписки".into(),
            treatment_cost: "Стоимость лечения".into(),
            currency: "руб.".into(),
            insurance: "Страховое".into(),
            paid: "Платное".into(),
            department: "Название отделения".into(),
            room_number: "Номер палаты".into(),
            exact_arrival_time: "Точное время прихода".into(),
            exact_leave_time: "Точное время ухода".into(),
            attending_doctor: "ФИО лечащего врача".into(),
            date_not_set: "не указана".into(),
        }
    }

    /// Preset for a locale.
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::English => Self::english(),
            Locale::Russian => Self::russian(),
        }
    }

    /// Parse labels from a YAML mapping. Missing keys take their English value.
    ///
    /// # Errors
    ///
    /// Returns [`PatientError::LabelsYaml`] if the document is not a mapping of known label keys
    /// to strings.
    pub fn from_yaml_str(yaml: &str) -> PatientResult<Self> {
        Self::english().with_yaml_overrides(yaml)
    }

    /// Replace the labels named in a YAML mapping, keeping every other label as it is.
    ///
    /// # Errors
    ///
    /// Returns [`PatientError::LabelsYaml`] if the document is not a mapping of known label keys
    /// to strings.
    pub fn with_yaml_overrides(mut self, yaml: &str) -> PatientResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(self);
        }
        let overrides: LabelOverrides = serde_yaml::from_str(yaml).map_err(PatientError::LabelsYaml)?;
        overrides.apply(&mut self);
        Ok(self)
    }

    /// Label for a service type.
    pub fn service_type(&self, service_type: ServiceType) -> &str {
        match service_type {
            ServiceType::Insurance => &self.insurance,
            ServiceType::Paid => &self.paid,
        }
    }
}

macro_rules! label_overrides {
    ($($field:ident),+ $(,)?) => {
        /// Subset of [`InfoLabels`] read from a YAML document.
        #[derive(Debug, Default, Deserialize)]
        #[serde(default, deny_unknown_fields)]
        struct LabelOverrides {
            $($field: Option<String>,)+
        }

        impl LabelOverrides {
            fn apply(self, labels: &mut InfoLabels) {
                $(
                    if let Some(value) = self.$field {
                        labels.$field = value;
                    }
                )+
            }
        }
    };
}

label_overrides!(
    name,
    surname,
    policy_number,
    service_type,
    arrival_date,
    discharge_date,
    treatment_cost,
    currency,
    insurance,
    paid,
    department,
    room_number,
    exact_arrival_time,
    exact_leave_time,
    attending_doctor,
    date_not_set,
);
