//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed to the rendering code. Environment variables and label files are read by the binary,
//! never during rendering.

use crate::collation::NameCollator;
use crate::labels::InfoLabels;
use crate::{PatientError, PatientResult};
use std::path::Path;
use ward_types::Locale;

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    locale: Locale,
    labels: InfoLabels,
}

impl CoreConfig {
    /// Create a new `CoreConfig` with explicit labels.
    pub fn new(locale: Locale, labels: InfoLabels) -> Self {
        Self { locale, labels }
    }

    /// Configuration using the built-in label preset for `locale`.
    pub fn for_locale(locale: Locale) -> Self {
        Self::new(locale, InfoLabels::for_locale(locale))
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn labels(&self) -> &InfoLabels {
        &self.labels
    }

    /// Collator for ordering names under the configured locale.
    ///
    /// # Errors
    ///
    /// Returns [`PatientError::Collation`] if the locale has no collation data.
    pub fn name_collator(&self) -> PatientResult<NameCollator> {
        NameCollator::new(self.locale)
    }
}

/// Parse the locale from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns the default locale.
pub fn locale_from_env_value(value: Option<String>) -> PatientResult<Locale> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());
    let parsed = value.map(|v| v.parse::<Locale>()).transpose()?;

    Ok(parsed.unwrap_or_default())
}

/// Read label overrides from a YAML file and apply them on top of `base`.
///
/// # Errors
///
/// Returns [`PatientError::FileRead`] if the file cannot be read and
/// [`PatientError::LabelsYaml`] if it is not a valid labels document.
pub fn load_labels_file(path: &Path, base: InfoLabels) -> PatientResult<InfoLabels> {
    if !path.is_file() {
        return Err(PatientError::InvalidInput(format!(
            "labels file does not exist: {}",
            path.display()
        )));
    }
    let yaml = std::fs::read_to_string(path).map_err(PatientError::FileRead)?;
    base.with_yaml_overrides(&yaml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn locale_defaults_when_unset_or_blank() {
        assert_eq!(locale_from_env_value(None).expect("default"), Locale::English);
        assert_eq!(
            locale_from_env_value(Some("   ".into())).expect("default"),
            Locale::English
        );
    }

    #[test]
    fn locale_parses_value() {
        assert_eq!(
            locale_from_env_value(Some(" ru ".into())).expect("parse"),
            Locale::Russian
        );
    }

    #[test]
    fn locale_rejects_unknown_value() {
        let err = locale_from_env_value(Some("fr".into())).expect_err("should reject");
        assert!(matches!(err, PatientError::InvalidValue(_)));
    }

    #[test]
    fn for_locale_uses_preset() {
        let cfg = CoreConfig::for_locale(Locale::Russian);
        assert_eq!(cfg.locale(), Locale::Russian);
        assert_eq!(cfg.labels(), &InfoLabels::russian());
    }

    #[test]
    fn loads_labels_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "currency: USD").expect("write labels");
        writeln!(file, "name: Given name").expect("write labels");

        let labels = load_labels_file(file.path(), InfoLabels::english()).expect("load labels");
        assert_eq!(labels.currency, "USD");
        assert_eq!(labels.name, "Given name");
        assert_eq!(labels.surname, "Surname");
    }

    #[test]
    fn missing_labels_file_is_invalid_input() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load_labels_file(&dir.path().join("absent.yaml"), InfoLabels::english()).expect_err("missing file");
        assert!(matches!(err, PatientError::InvalidInput(_)));
    }

    #[test]
    fn malformed_labels_file_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "currency: [not, a, string]").expect("write labels");

        let err = load_labels_file(file.path(), InfoLabels::english()).expect_err("malformed labels");
        assert!(matches!(err, PatientError::LabelsYaml(_)));
    }

    #[test]
    fn partial_labels_file_keeps_locale_preset() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "currency: USD").expect("write labels");

        let labels = load_labels_file(file.path(), InfoLabels::for_locale(Locale::Russian))
            .expect("load labels");
        assert_eq!(labels.currency, "USD");
        assert_eq!(labels.surname, "Фамилия");
        assert_eq!(labels.insurance, "Страховое");
    }

    #[test]
    fn name_collator_follows_locale() {
        let collator = CoreConfig::for_locale(Locale::Russian)
            .name_collator()
            .expect("ru collation");
        assert_eq!(
            collator.compare("Ёлкин", "Жуков"),
            std::cmp::Ordering::Less
        );
    }
}
