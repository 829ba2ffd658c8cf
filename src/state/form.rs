use crate::model::{College, Role, Selection};
use crate::state::ui::Route;
use crate::state::{AppError, ValidationError};

/// Lifecycle of a login screen, from directory fetch to submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Directory fetch still in flight.
    Loading,
    /// Directory resolved, no institution chosen yet.
    AwaitingSelection,
    /// Concrete institution chosen, credential fields live.
    Selected,
    /// Sentinel chosen, only the registration path is offered.
    NotListedChosen,
    /// Validation passed, navigation requested.
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    Picker,
    Email,
    Password,
    Submit,
    Register,
}

/// Inputs to the form state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    DirectoryLoaded(Vec<College>),
    DirectoryFailed(String),
    Select(Selection),
    Submit,
    SubmissionFailed(String),
}

/// Side effects requested by a transition. Navigation is fire-and-forget:
/// the form never awaits a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEffect {
    Navigate(Route),
}

/// One row of the institution selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorRow<'a> {
    College(&'a College),
    NotListed,
}

impl SelectorRow<'_> {
    pub fn label(&self) -> &str {
        match self {
            SelectorRow::College(college) => &college.college_name,
            SelectorRow::NotListed => "My college is not listed...",
        }
    }
}

/// State for one login screen instance. Created on mount with everything
/// empty, destroyed on unmount; both portals share this machine,
/// parameterized by role.
pub struct LoginFormState {
    pub role: Role,
    pub phase: FormPhase,
    pub colleges: Vec<College>,
    pub selection: Selection,
    pub picker_index: usize,
    pub email: String,
    pub password: String,
    pub error: Option<AppError>,
    pub focus: FormFocus,
}

impl LoginFormState {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            phase: FormPhase::Loading,
            colleges: Vec::new(),
            selection: Selection::Unset,
            picker_index: 0,
            email: String::new(),
            password: String::new(),
            error: None,
            focus: FormFocus::Picker,
        }
    }

    /// Pure transition: old state + event -> new state, plus at most one
    /// requested effect.
    pub fn apply(&mut self, event: FormEvent) -> Option<FormEffect> {
        match event {
            FormEvent::DirectoryLoaded(colleges) => {
                if self.phase == FormPhase::Loading {
                    self.colleges = colleges;
                    self.phase = FormPhase::AwaitingSelection;
                }
                None
            }
            FormEvent::DirectoryFailed(msg) => {
                if self.phase == FormPhase::Loading {
                    // Non-fatal: the screen stays usable with an empty list.
                    self.colleges.clear();
                    self.error = Some(AppError::DirectoryFetch(msg));
                    self.phase = FormPhase::AwaitingSelection;
                }
                None
            }
            FormEvent::Select(selection) => {
                // Any selection change clears the error, exactly.
                self.error = None;
                self.selection = selection;
                self.phase = match selection {
                    Selection::Unset => FormPhase::AwaitingSelection,
                    Selection::College(_) => FormPhase::Selected,
                    Selection::NotListed => FormPhase::NotListedChosen,
                };
                if !selection.is_concrete() {
                    self.focus = FormFocus::Picker;
                }
                None
            }
            FormEvent::Submit => self.submit(),
            FormEvent::SubmissionFailed(msg) => {
                if self.phase == FormPhase::Submitting {
                    self.error = Some(AppError::Submission(msg));
                    self.phase = FormPhase::Selected;
                }
                None
            }
        }
    }

    fn submit(&mut self) -> Option<FormEffect> {
        // One submission at a time.
        if self.phase == FormPhase::Submitting {
            return None;
        }
        // Fixed validation order, first failure wins.
        let failure = match self.selection {
            Selection::Unset => Some(ValidationError::MissingSelection),
            Selection::NotListed => Some(ValidationError::CollegeNotListed),
            Selection::College(_) => {
                if self.email.is_empty() || self.password.is_empty() {
                    Some(ValidationError::MissingFields)
                } else {
                    None
                }
            }
        };
        if let Some(err) = failure {
            self.error = Some(AppError::Validation(err));
            return None;
        }
        self.error = None;
        self.phase = FormPhase::Submitting;
        Some(FormEffect::Navigate(self.dashboard_route()))
    }

    pub fn dashboard_route(&self) -> Route {
        match self.role {
            Role::Student => Route::StudentDashboard,
            Role::Admin => Route::AdminDashboard,
        }
    }

    /// The registration transition available for the current selection,
    /// if any. Students get it for any selection (carrying the institution
    /// when concrete); admins only via the sentinel.
    pub fn register_route(&self) -> Option<Route> {
        match (self.role, self.selection) {
            (Role::Student, Selection::College(id)) => {
                Some(Route::StudentRegister { college_id: Some(id) })
            }
            (Role::Student, Selection::NotListed) => {
                Some(Route::StudentRegister { college_id: None })
            }
            (Role::Admin, Selection::NotListed) => Some(Route::CollegeAdminRequest),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FormPhase::Loading
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Credential fields are rendered and editable only behind a concrete
    /// institution selection.
    pub fn shows_credentials(&self) -> bool {
        matches!(self.phase, FormPhase::Selected | FormPhase::Submitting)
    }

    /// Every fetched college once, plus exactly one sentinel row.
    pub fn selector_rows(&self) -> Vec<SelectorRow<'_>> {
        let mut rows: Vec<SelectorRow<'_>> =
            self.colleges.iter().map(SelectorRow::College).collect();
        rows.push(SelectorRow::NotListed);
        rows
    }

    pub fn selector_len(&self) -> usize {
        self.colleges.len() + 1
    }

    /// Selection value a given picker row stands for.
    pub fn selection_at(&self, index: usize) -> Selection {
        match self.colleges.get(index) {
            Some(college) => Selection::College(college.college_id),
            None => Selection::NotListed,
        }
    }

    pub fn picker_up(&mut self) {
        let len = self.selector_len();
        self.picker_index = (self.picker_index + len - 1) % len;
    }

    pub fn picker_down(&mut self) {
        self.picker_index = (self.picker_index + 1) % self.selector_len();
    }

    /// Commit the picker row under the cursor as the selection.
    pub fn confirm_picker(&mut self) -> Option<FormEffect> {
        let selection = self.selection_at(self.picker_index);
        self.apply(FormEvent::Select(selection))
    }

    /// Tab order through the card for the current phase.
    pub fn focus_order(&self) -> Vec<FormFocus> {
        let mut order = vec![FormFocus::Picker];
        if self.shows_credentials() {
            order.push(FormFocus::Email);
            order.push(FormFocus::Password);
            order.push(FormFocus::Submit);
            if self.register_route().is_some() {
                order.push(FormFocus::Register);
            }
        } else if self.phase == FormPhase::NotListedChosen && self.register_route().is_some() {
            order.push(FormFocus::Register);
        }
        order
    }

    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(current + 1) % order.len()];
    }

    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(current + order.len() - 1) % order.len()];
    }

    pub fn error_text(&self) -> Option<String> {
        self.error.as_ref().map(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn acme() -> College {
        College {
            college_id: 1,
            college_name: "Acme University".to_string(),
        }
    }

    fn loaded_form(role: Role, colleges: Vec<College>) -> LoginFormState {
        let mut form = LoginFormState::new(role);
        assert_eq!(form.apply(FormEvent::DirectoryLoaded(colleges)), None);
        form
    }

    #[test]
    fn selector_offers_every_college_plus_one_sentinel() {
        let colleges = vec![
            acme(),
            College {
                college_id: 2,
                college_name: "Borealis Institute".to_string(),
            },
        ];
        let form = loaded_form(Role::Student, colleges.clone());
        let rows = form.selector_rows();
        assert_eq!(rows.len(), colleges.len() + 1);
        assert_eq!(rows[0], SelectorRow::College(&colleges[0]));
        assert_eq!(rows[1], SelectorRow::College(&colleges[1]));
        assert_eq!(rows[2], SelectorRow::NotListed);
        let sentinels = rows
            .iter()
            .filter(|r| matches!(r, SelectorRow::NotListed))
            .count();
        assert_eq!(sentinels, 1);
    }

    #[test]
    fn fetch_failure_is_non_fatal() {
        let mut form = LoginFormState::new(Role::Admin);
        form.apply(FormEvent::DirectoryFailed(
            "Unable to fetch colleges.".to_string(),
        ));
        assert_eq!(form.phase, FormPhase::AwaitingSelection);
        assert!(form.colleges.is_empty());
        assert_eq!(
            form.error,
            Some(AppError::DirectoryFetch("Unable to fetch colleges.".to_string()))
        );
        // The selector still offers the sentinel.
        assert_eq!(form.selector_rows(), vec![SelectorRow::NotListed]);
    }

    #[test]
    fn submit_without_selection_sets_error_and_no_effect() {
        let mut form = loaded_form(Role::Student, vec![]);
        let effect = form.apply(FormEvent::Submit);
        assert_eq!(effect, None);
        assert_eq!(
            form.error_text().as_deref(),
            Some("Please select your college first.")
        );
        assert_eq!(form.phase, FormPhase::AwaitingSelection);
    }

    #[test]
    fn submit_with_empty_fields_sets_error_and_no_effect() {
        let mut form = loaded_form(Role::Student, vec![acme()]);
        form.apply(FormEvent::Select(Selection::College(1)));
        let effect = form.apply(FormEvent::Submit);
        assert_eq!(effect, None);
        assert_eq!(form.error_text().as_deref(), Some("Please fill all fields."));
        assert!(!form.is_submitting());
    }

    #[test]
    fn submit_with_sentinel_is_rejected() {
        let mut form = loaded_form(Role::Student, vec![acme()]);
        form.apply(FormEvent::Select(Selection::NotListed));
        let effect = form.apply(FormEvent::Submit);
        assert_eq!(effect, None);
        assert_eq!(form.error_text().as_deref(), Some("College not registered."));
    }

    #[test]
    fn valid_submit_requests_exactly_one_transition() {
        let mut form = loaded_form(Role::Student, vec![acme()]);
        form.apply(FormEvent::Select(Selection::College(1)));
        form.email = "alex@university.edu".to_string();
        form.password = "hunter2".to_string();
        let effect = form.apply(FormEvent::Submit);
        assert_eq!(effect, Some(FormEffect::Navigate(Route::StudentDashboard)));
        assert!(form.is_submitting());
        // A second submit while one is in flight does nothing.
        assert_eq!(form.apply(FormEvent::Submit), None);
    }

    #[test]
    fn admin_submit_targets_admin_dashboard() {
        let mut form = loaded_form(Role::Admin, vec![acme()]);
        form.apply(FormEvent::Select(Selection::College(1)));
        form.email = "admin@institution.edu".to_string();
        form.password = "hunter2".to_string();
        assert_eq!(
            form.apply(FormEvent::Submit),
            Some(FormEffect::Navigate(Route::AdminDashboard))
        );
    }

    #[test]
    fn submission_failure_reenables_the_form() {
        let mut form = loaded_form(Role::Admin, vec![acme()]);
        form.apply(FormEvent::Select(Selection::College(1)));
        form.email = "admin@institution.edu".to_string();
        form.password = "hunter2".to_string();
        form.apply(FormEvent::Submit);
        form.apply(FormEvent::SubmissionFailed("Check credentials.".to_string()));
        assert_eq!(form.phase, FormPhase::Selected);
        assert!(!form.is_submitting());
        assert_eq!(
            form.error_text().as_deref(),
            Some("Login failed: Check credentials.")
        );
    }

    #[test]
    fn sentinel_hides_credentials_and_offers_registration_only() {
        let mut form = loaded_form(Role::Admin, vec![acme()]);
        form.apply(FormEvent::Select(Selection::NotListed));
        assert_eq!(form.phase, FormPhase::NotListedChosen);
        assert!(!form.shows_credentials());
        assert_eq!(form.register_route(), Some(Route::CollegeAdminRequest));
        assert_eq!(form.focus_order(), vec![FormFocus::Picker, FormFocus::Register]);
    }

    #[test]
    fn concrete_selection_shows_exactly_the_credential_fields() {
        let mut form = loaded_form(Role::Student, vec![acme()]);
        form.apply(FormEvent::Select(Selection::College(1)));
        assert!(form.shows_credentials());
        assert_eq!(
            form.focus_order(),
            vec![
                FormFocus::Picker,
                FormFocus::Email,
                FormFocus::Password,
                FormFocus::Submit,
                FormFocus::Register,
            ]
        );
    }

    #[test]
    fn student_register_route_carries_the_selected_institution() {
        let mut form = loaded_form(Role::Student, vec![acme()]);
        form.apply(FormEvent::Select(Selection::College(1)));
        assert_eq!(
            form.register_route(),
            Some(Route::StudentRegister { college_id: Some(1) })
        );
        form.apply(FormEvent::Select(Selection::NotListed));
        assert_eq!(
            form.register_route(),
            Some(Route::StudentRegister { college_id: None })
        );
    }

    #[test]
    fn selection_change_clears_error_and_nothing_else() {
        let mut form = loaded_form(Role::Student, vec![acme()]);
        form.apply(FormEvent::Select(Selection::College(1)));
        form.email = "alex@university.edu".to_string();
        form.apply(FormEvent::Submit); // password empty -> error
        assert!(form.error.is_some());
        form.apply(FormEvent::Select(Selection::College(1)));
        assert_eq!(form.error, None);
        assert_eq!(form.email, "alex@university.edu");
        assert_eq!(form.phase, FormPhase::Selected);
    }

    #[test]
    fn picker_wraps_and_maps_rows_to_selections() {
        let mut form = loaded_form(Role::Student, vec![acme()]);
        assert_eq!(form.selection_at(0), Selection::College(1));
        assert_eq!(form.selection_at(1), Selection::NotListed);
        form.picker_up();
        assert_eq!(form.picker_index, 1);
        form.picker_down();
        assert_eq!(form.picker_index, 0);
        form.confirm_picker();
        assert_eq!(form.selection, Selection::College(1));
    }

    #[test]
    fn late_directory_events_after_resolution_are_ignored() {
        let mut form = loaded_form(Role::Student, vec![acme()]);
        form.apply(FormEvent::Select(Selection::College(1)));
        form.apply(FormEvent::DirectoryLoaded(vec![]));
        assert_eq!(form.colleges, vec![acme()]);
        form.apply(FormEvent::DirectoryFailed("late".to_string()));
        assert_eq!(form.error, None);
        assert_eq!(form.phase, FormPhase::Selected);
    }
}
