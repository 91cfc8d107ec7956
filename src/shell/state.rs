use crate::modules::roles::use_cases::manage_roles::handler::RoleBoard;
use crate::modules::timesheets::core::visibility::CurrentUser;
use crate::modules::timesheets::use_cases::view_timesheet::handler::TimesheetBoard;
use crate::shared::infrastructure::session_store::SessionStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub timesheet: Arc<TimesheetBoard>,
    pub roles: Arc<RoleBoard>,
    pub session: Arc<dyn SessionStore>,
    /// Identity shared by the surrounding application, used when the session
    /// holds none.
    pub context_user: Option<CurrentUser>,
}
