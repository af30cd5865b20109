//! Instructor selections and saved team views.
//!
//! A [`TeamSelection`] is the resolved set of instructors an overlap is
//! computed for. It can be built ad hoc from emails picked in the dashboard or
//! replayed from a [`SavedView`]; the engine treats both the same way.

use serde::{Deserialize, Serialize};

use crate::error::{OverlapError, Result};

/// Minimum number of distinct instructors for an overlap to mean anything.
pub const MIN_TEAM_SIZE: usize = 2;

/// An ordered set of distinct instructor emails.
///
/// Entries are trimmed of surrounding whitespace, duplicates are dropped
/// (first occurrence wins) and blank entries ignored,
/// so the order of `emails()` is the order the caller listed them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TeamSelection {
    emails: Vec<String>,
}

impl TeamSelection {
    /// Build a selection for overlap computation.
    ///
    /// # Errors
    /// Returns `OverlapError::InsufficientInstructors` when fewer than two
    /// distinct, non-blank emails are given.
    pub fn new<I, S>(emails: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let selection = Self::any_size(emails);
        if selection.len() < MIN_TEAM_SIZE {
            return Err(OverlapError::InsufficientInstructors {
                selected: selection.len(),
            });
        }
        Ok(selection)
    }

    /// Build a selection without the team-size check, for views that are
    /// meaningful for a single instructor.
    pub(crate) fn any_size<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut unique: Vec<String> = Vec::new();
        for email in emails {
            let email = email.as_ref().trim();
            if email.is_empty() || unique.iter().any(|e| e == email) {
                continue;
            }
            unique.push(email.to_string());
        }
        Self { emails: unique }
    }

    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    pub fn len(&self) -> usize {
        self.emails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emails.is_empty()
    }

    pub fn contains(&self, email: &str) -> bool {
        self.emails.iter().any(|e| e == email)
    }
}

/// A named instructor group saved by an admin or director so the same team
/// can be checked again later. Storage is handled elsewhere; `id` is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedView {
    pub id: String,
    pub name: String,
    pub instructor_emails: Vec<String>,
}

impl SavedView {
    /// Create a validated view. The name is trimmed and the email list
    /// de-duplicated.
    ///
    /// # Errors
    /// - `OverlapError::InvalidViewName` if the name is blank.
    /// - `OverlapError::InsufficientInstructors` if fewer than two distinct
    ///   emails remain.
    pub fn new<S>(id: impl Into<String>, name: &str, instructor_emails: &[S]) -> Result<Self>
    where
        S: AsRef<str>,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(OverlapError::InvalidViewName);
        }
        let selection = TeamSelection::new(instructor_emails)?;
        Ok(Self {
            id: id.into(),
            name: name.to_string(),
            instructor_emails: selection.emails,
        })
    }

    /// Resolve the view into a selection. Views loaded from storage are
    /// re-validated here since their fields are public.
    ///
    /// # Errors
    /// Same as [`SavedView::new`].
    pub fn selection(&self) -> Result<TeamSelection> {
        if self.name.trim().is_empty() {
            return Err(OverlapError::InvalidViewName);
        }
        TeamSelection::new(&self.instructor_emails)
    }
}
