//! App-level session state: signed-in user, current Drive file, selected
//! month, and profile fields. Same copy semantics as the selector reducer.

use crate::month::MonthYear;
use crate::profile::{ProfileField, ProfileFields};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDetails {
    pub username: String,
    pub email: String,
    pub logged_in: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSection {
    pub details: UserDetails,
    pub loading: bool,
    pub error: Option<String>,
}

/// The Drive file backing the selected month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetSection {
    pub id: String,
    pub name: String,
    pub loading: bool,
    pub error: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: UserSection,
    pub sheet: SheetSection,
    pub month_year: MonthYear,
    pub profile: ProfileFields,
}

impl SessionState {
    pub fn new(month_year: MonthYear) -> Self {
        SessionState {
            user: UserSection::default(),
            sheet: SheetSection::default(),
            month_year,
            profile: ProfileFields::default(),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::new(MonthYear::current())
    }
}

#[derive(Debug, Clone)]
pub enum SessionAction {
    UserLoading,
    UserSuccess(UserDetails),
    UserError(String),
    UserReset,
    SheetLoading,
    SheetSuccess { id: String, name: String },
    SheetError,
    SetMonthYear(MonthYear),
    SetProfileField { field: ProfileField, value: String },
    SetProfileAll(ProfileFields),
}

pub fn reduce_session(state: &SessionState, action: SessionAction) -> SessionState {
    match action {
        SessionAction::UserLoading => SessionState {
            user: UserSection {
                loading: true,
                error: None,
                ..state.user.clone()
            },
            ..state.clone()
        },
        SessionAction::UserSuccess(details) => SessionState {
            user: UserSection {
                details,
                loading: false,
                error: None,
            },
            ..state.clone()
        },
        SessionAction::UserError(message) => SessionState {
            user: UserSection {
                loading: false,
                error: Some(message),
                ..state.user.clone()
            },
            ..state.clone()
        },
        SessionAction::UserReset => SessionState {
            user: UserSection::default(),
            ..state.clone()
        },
        SessionAction::SheetLoading => SessionState {
            sheet: SheetSection {
                loading: true,
                error: false,
                ..state.sheet.clone()
            },
            ..state.clone()
        },
        SessionAction::SheetSuccess { id, name } => SessionState {
            sheet: SheetSection {
                id,
                name,
                loading: false,
                error: false,
            },
            ..state.clone()
        },
        SessionAction::SheetError => SessionState {
            sheet: SheetSection {
                loading: false,
                error: true,
                ..state.sheet.clone()
            },
            ..state.clone()
        },
        SessionAction::SetMonthYear(month_year) => SessionState {
            month_year,
            ..state.clone()
        },
        SessionAction::SetProfileField { field, value } => {
            let mut profile = state.profile.clone();
            profile.set(field, value);
            SessionState {
                profile,
                ..state.clone()
            }
        }
        SessionAction::SetProfileAll(profile) => SessionState {
            profile,
            ..state.clone()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_in() -> SessionState {
        let state = SessionState::new("August2025".parse().unwrap());
        reduce_session(
            &state,
            SessionAction::UserSuccess(UserDetails {
                username: "Vijay B".into(),
                email: "vijay@example.com".into(),
                logged_in: true,
            }),
        )
    }

    #[test]
    fn user_error_keeps_details_but_stops_loading() {
        let state = signed_in();
        let loading = reduce_session(&state, SessionAction::UserLoading);
        assert!(loading.user.loading);

        let failed = reduce_session(&loading, SessionAction::UserError("auth failed".into()));
        assert!(!failed.user.loading);
        assert_eq!(failed.user.error.as_deref(), Some("auth failed"));
        assert_eq!(failed.user.details.email, "vijay@example.com");
    }

    #[test]
    fn user_reset_clears_the_section() {
        let state = signed_in();
        let reset = reduce_session(&state, SessionAction::UserReset);
        assert_eq!(reset.user, UserSection::default());
        assert_eq!(reset.month_year, state.month_year);
    }

    #[test]
    fn sheet_loading_clears_prior_error() {
        let state = signed_in();
        let errored = reduce_session(&state, SessionAction::SheetError);
        assert!(errored.sheet.error);

        let retried = reduce_session(&errored, SessionAction::SheetLoading);
        assert!(retried.sheet.loading);
        assert!(!retried.sheet.error);
    }

    #[test]
    fn sheet_success_replaces_the_section() {
        let state = reduce_session(&signed_in(), SessionAction::SheetLoading);
        let done = reduce_session(
            &state,
            SessionAction::SheetSuccess {
                id: "abc123".into(),
                name: "August2025-INDECOMM-TIMESHEET".into(),
            },
        );
        assert_eq!(done.sheet.id, "abc123");
        assert!(!done.sheet.loading);
        assert!(!done.sheet.error);
    }

    #[test]
    fn profile_fields_update_individually_and_wholesale() {
        let state = signed_in();
        let updated = reduce_session(
            &state,
            SessionAction::SetProfileField {
                field: ProfileField::Division,
                value: "Platform".into(),
            },
        );
        assert_eq!(updated.profile.division, "Platform");
        assert_eq!(updated.profile.employee_name, "");

        let mut all = ProfileFields::default();
        all.set(ProfileField::EmployeeName, "V".into());
        let replaced = reduce_session(&updated, SessionAction::SetProfileAll(all.clone()));
        assert_eq!(replaced.profile, all);
    }
}
