//! Roster document and the list-management rules applied to it.
//!
//! Everything here is synchronous and operates on a document borrowed for
//! the duration of one request. The service layer owns loading, locking, and
//! saving.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Error;

pub(crate) const BLANK_INPUT_MESSAGE: &str = "이름을 입력해주세요.";
pub(crate) const NO_VALID_NAMES_MESSAGE: &str = "유효한 이름을 입력해주세요.";
pub(crate) const ALREADY_REGISTERED_MESSAGE: &str = "이미 등록된 이름입니다.";
pub(crate) const ALL_ALREADY_REGISTERED_MESSAGE: &str = "모든 이름이 이미 등록되어 있습니다.";
pub(crate) const STUDENT_NOT_FOUND_MESSAGE: &str = "해당 학생을 찾을 수 없습니다.";
pub(crate) const NOTHING_TO_REMOVE_MESSAGE: &str = "삭제할 학생이 없습니다.";

/// Persisted roster: the registered names and the admin password.
///
/// ## Invariants
/// - `students` holds no two identical strings. Order at rest carries no
///   meaning; listings are re-sorted on every read.
///
/// # Examples
/// ```
/// use roster::domain::RosterDocument;
///
/// let doc: RosterDocument =
///     serde_json::from_str(r#"{"students":["Kim"],"adminPassword":"pw"}"#).unwrap();
/// assert!(doc.contains("Kim"));
/// assert_eq!(doc.admin_password, "pw");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterDocument {
    #[serde(default)]
    pub students: Vec<String>,
    #[serde(default)]
    pub admin_password: String,
}

/// Result of splitting candidates against the current roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePartition {
    /// Candidates appended to the roster, in input order.
    pub added: Vec<String>,
    /// Candidates skipped because they were already registered, in input
    /// order. Includes repeats within the same request.
    pub duplicates: Vec<String>,
}

impl RosterDocument {
    /// Empty roster guarded by `admin_password`.
    pub fn new(admin_password: impl Into<String>) -> Self {
        Self {
            students: Vec::new(),
            admin_password: admin_password.into(),
        }
    }

    /// Whether `name` is registered, by exact string equality.
    pub fn contains(&self, name: &str) -> bool {
        self.students.iter().any(|student| student == name)
    }

    /// Append every candidate not yet registered and report the split.
    ///
    /// A name repeated within `candidates` is added once; its later
    /// occurrences are reported as duplicates.
    pub fn add_names<I>(&mut self, candidates: I) -> NamePartition
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen: HashSet<String> = self.students.iter().cloned().collect();
        let mut partition = NamePartition::default();
        for name in candidates {
            if seen.insert(name.clone()) {
                partition.added.push(name);
            } else {
                partition.duplicates.push(name);
            }
        }
        self.students.extend(partition.added.iter().cloned());
        partition
    }

    /// Free-text insertion: like [`Self::add_names`] but refuses a request in
    /// which nothing would be added. The document is untouched on error.
    pub fn add_new_names<I>(&mut self, candidates: I) -> Result<NamePartition, Error>
    where
        I: IntoIterator<Item = String>,
    {
        let mut staged = self.clone();
        let partition = staged.add_names(candidates);
        if partition.added.is_empty() {
            let message = if partition.duplicates.len() == 1 {
                ALREADY_REGISTERED_MESSAGE
            } else {
                ALL_ALREADY_REGISTERED_MESSAGE
            };
            return Err(Error::invalid_request(message));
        }
        *self = staged;
        Ok(partition)
    }

    /// Remove the single entry equal to `name`.
    pub fn remove(&mut self, name: &str) -> Result<(), Error> {
        let Some(index) = self.students.iter().position(|student| student == name) else {
            return Err(Error::not_found(STUDENT_NOT_FOUND_MESSAGE));
        };
        self.students.remove(index);
        Ok(())
    }

    /// Empty the roster and return how many names it held.
    pub fn remove_all(&mut self) -> Result<usize, Error> {
        if self.students.is_empty() {
            return Err(Error::invalid_request(NOTHING_TO_REMOVE_MESSAGE));
        }
        let count = self.students.len();
        self.students.clear();
        Ok(count)
    }
}

/// Split comma-separated input into trimmed, non-empty candidates.
///
/// # Examples
/// ```
/// use roster::domain::parse_name_input;
///
/// assert_eq!(parse_name_input(" Kim, ,Lee ").unwrap(), ["Kim", "Lee"]);
/// assert!(parse_name_input("   ").is_err());
/// ```
pub fn parse_name_input(raw: &str) -> Result<Vec<String>, Error> {
    if raw.trim().is_empty() {
        return Err(Error::invalid_request(BLANK_INPUT_MESSAGE));
    }
    let names: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect();
    if names.is_empty() {
        return Err(Error::invalid_request(NO_VALID_NAMES_MESSAGE));
    }
    Ok(names)
}

/// Confirmation shown after names were added.
pub fn added_message(added: usize, duplicates: usize) -> String {
    let mut message = format!("{added}명이 추가되었습니다.");
    if duplicates > 0 {
        message.push_str(&format!(" (중복 제외: {duplicates}명)"));
    }
    message
}

/// Confirmation shown after a single removal.
pub fn removed_message(name: &str) -> String {
    format!("{name}님이 명단에서 삭제되었습니다.")
}

/// Confirmation shown after the roster was emptied.
pub fn removed_all_message(count: usize) -> String {
    format!("전체 {count}명의 학생이 삭제되었습니다.")
}
