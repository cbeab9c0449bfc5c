//! Display ordering for roster names.
//!
//! Names are shown in Korean dictionary order (가나다 순). Plain `str`
//! ordering compares code points, which misplaces Latin names relative to
//! each other by case and disagrees with the audience's expectations, so the
//! ordering goes through the ICU collator for the `ko` locale.

use std::cell::OnceCell;
use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;

use super::Error;

thread_local! {
    // Collator payloads are not `Send`, so each worker thread keeps its own.
    static KOREAN: OnceCell<DisplayCollation> = const { OnceCell::new() };
}

/// Locale-aware comparator used for every roster listing.
pub struct DisplayCollation {
    collator: Collator,
}

impl DisplayCollation {
    /// Load the Korean collation tables.
    pub fn korean() -> Result<Self, Error> {
        let collator = Collator::try_new(&locale!("ko").into(), CollatorOptions::new())
            .map_err(|err| Error::internal(format!("failed to load Korean collation: {err}")))?;
        Ok(Self { collator })
    }

    /// Compare two names in display order.
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        self.collator.compare(left, right)
    }

    /// Return a sorted copy of `names`. The sort is stable.
    pub fn sorted(&self, names: &[String]) -> Vec<String> {
        let mut sorted = names.to_vec();
        sorted.sort_by(|a, b| self.compare(a, b));
        sorted
    }
}

/// Sort `names` in Korean display order.
///
/// # Examples
/// ```
/// use roster::domain::sorted_for_display;
///
/// let names = vec!["다현".to_owned(), "가은".to_owned(), "나래".to_owned()];
/// let sorted = sorted_for_display(&names).unwrap();
/// assert_eq!(sorted, ["가은", "나래", "다현"]);
/// ```
pub fn sorted_for_display(names: &[String]) -> Result<Vec<String>, Error> {
    KOREAN.with(|cell| {
        let collation = match cell.get() {
            Some(collation) => collation,
            None => {
                let loaded = DisplayCollation::korean()?;
                cell.get_or_init(|| loaded)
            }
        };
        Ok(collation.sorted(names))
    })
}
