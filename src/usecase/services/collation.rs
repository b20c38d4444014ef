use std::cmp::Ordering;
use std::fmt;

use icu::collator::options::CollatorOptions;
use icu::collator::{Collator, CollatorBorrowed};
use icu::locale::{locale, Locale};

use crate::error::{Result, TableError};

/// Locale-aware string ordering for text cells.
///
/// Falls back to code point order when no collation data could be loaded for
/// the root locale.
pub struct Collation {
    tag: String,
    collator: Option<CollatorBorrowed<'static>>,
}

impl Collation {
    /// Root locale collation, the default for tables without a locale.
    pub fn root() -> Self {
        let collator = match Collator::try_new(locale!("und").into(), CollatorOptions::default())
        {
            Ok(collator) => Some(collator),
            Err(err) => {
                tracing::warn!("root collation unavailable, using code point order: {err}");
                None
            }
        };
        Self {
            tag: "und".to_string(),
            collator,
        }
    }

    pub fn for_locale(tag: &str) -> Result<Self> {
        let locale: Locale = tag.parse().map_err(|err| TableError::InvalidLocale {
            tag: tag.to_string(),
            message: format!("{err:?}"),
        })?;
        let collator = Collator::try_new(locale.into(), CollatorOptions::default()).map_err(
            |err| TableError::Collation {
                tag: tag.to_string(),
                message: err.to_string(),
            },
        )?;
        tracing::debug!(locale = tag, "loaded collation");
        Ok(Self {
            tag: tag.to_string(),
            collator: Some(collator),
        })
    }

    pub fn locale_tag(&self) -> &str {
        &self.tag
    }

    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(left, right),
            None => left.cmp(right),
        }
    }
}

impl Default for Collation {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Debug for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collation")
            .field("tag", &self.tag)
            .field("loaded", &self.collator.is_some())
            .finish()
    }
}
