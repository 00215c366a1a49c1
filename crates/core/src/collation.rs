//! Locale-aware ordering of names.
//!
//! Surnames and given names are ordered with the Unicode Collation Algorithm as tailored by
//! CLDR for the active [`Locale`], not by code point. This keeps `Ё` next to `Е`, sorts case
//! variants together, and treats spaces inside names the way a printed roster would.

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use ward_types::Locale;

use crate::{PatientError, PatientResult};

/// Compares names according to a locale's collation rules.
pub struct NameCollator {
    collator: Collator,
}

impl NameCollator {
    /// Collator tailored for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`PatientError::Collation`] if no collation data is available for the locale.
    pub fn new(locale: Locale) -> PatientResult<Self> {
        let tag = match locale {
            Locale::English => locale!("en"),
            Locale::Russian => locale!("ru"),
        };
        let collator = Collator::try_new(&tag.into(), CollatorOptions::new())
            .map_err(|e| PatientError::Collation(format!("{e:?}")))?;
        Ok(Self { collator })
    }

    /// Collator for the CLDR root collation, used when no locale has been chosen.
    ///
    /// # Errors
    ///
    /// Returns [`PatientError::Collation`] if the root collation data is unavailable.
    pub fn root() -> PatientResult<Self> {
        let collator = Collator::try_new(&locale!("und").into(), CollatorOptions::new())
            .map_err(|e| PatientError::Collation(format!("{e:?}")))?;
        Ok(Self { collator })
    }

    /// Three-way comparison of two strings.
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }
}

impl std::fmt::Debug for NameCollator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameCollator").finish_non_exhaustive()
    }
}

thread_local! {
    static ROOT_COLLATOR: Option<NameCollator> = NameCollator::root()
        .map_err(|e| tracing::warn!(error = %e, "root collation unavailable; ordering by code point"))
        .ok();
}

/// Compares with the root collation.
pub(crate) fn compare_root(left: &str, right: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(left, right),
        None => left.cmp(right),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yo_sorts_with_ye_not_before_a() {
        let collator = NameCollator::new(Locale::Russian).expect("ru collation");
        assert_eq!(collator.compare("Ёлкин", "Абрамов"), Ordering::Greater);
        assert_eq!(collator.compare("Ёлкин", "Жуков"), Ordering::Less);
        assert_eq!(collator.compare("ёлкин", "яковлев"), Ordering::Less);
    }

    #[test]
    fn case_does_not_outweigh_letters() {
        let collator = NameCollator::new(Locale::English).expect("en collation");
        assert_eq!(collator.compare("apple", "Banana"), Ordering::Less);
        assert_eq!(collator.compare("de Gaulle", "Dupont"), Ordering::Less);
        assert_eq!(collator.compare("smith", "Smith"), Ordering::Less);
    }

    #[test]
    fn root_collation_matches_locale_for_basic_names() {
        assert_eq!(compare_root("Ёлкин", "Абрамов"), Ordering::Greater);
        assert_eq!(compare_root("Collins", "Gabriel"), Ordering::Less);
        assert_eq!(compare_root("Петров", "Петров"), Ordering::Equal);
    }
}
