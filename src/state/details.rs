//! Dashboard details payload and its loading flag.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard fetches `/api/user/details` on mount and on refresh. This
//! state keeps the last good payload visible while a refresh runs and when
//! one fails.

#[cfg(test)]
#[path = "details_test.rs"]
mod details_test;

use crate::error::SessionError;
use crate::net::types::UserDetails;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailsState {
    pub details: Option<UserDetails>,
    pub loading: bool,
}

impl DetailsState {
    /// Mark a fetch as started. Returns `false` if one is already running.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Record a fetch outcome. Errors keep the previous payload.
    pub fn finish(&mut self, result: Result<UserDetails, SessionError>) -> Option<SessionError> {
        self.loading = false;
        match result {
            Ok(details) => {
                self.details = Some(details);
                None
            }
            Err(e) => Some(e),
        }
    }

    pub fn has_data(&self) -> bool {
        self.details.as_ref().is_some_and(|d| !d.is_empty())
    }
}
