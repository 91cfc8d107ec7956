use std::sync::Arc;

use crate::modules::roles::adapters::outbound::roles_in_memory::InMemoryRoles;
use crate::modules::roles::use_cases::manage_roles::handler::{DEFAULT_ROLES_PER_PAGE, RoleBoard};
use crate::modules::timesheets::adapters::outbound::timesheets_in_memory::{
    InMemoryProjectCatalog, InMemoryTimesheets,
};
use crate::modules::timesheets::use_cases::view_timesheet::handler::{
    TimesheetBoard, TimesheetSettings,
};
use crate::shared::infrastructure::session_store::in_memory::InMemorySessionStore;
use crate::shell::state::AppState;

/// Application state over in-memory backends, with an empty session and no
/// context user.
pub fn app_state(
    timesheets: InMemoryTimesheets,
    catalog: InMemoryProjectCatalog,
    roles: InMemoryRoles,
) -> AppState {
    AppState {
        timesheet: Arc::new(TimesheetBoard::new(
            Arc::new(timesheets),
            Arc::new(catalog),
            TimesheetSettings::default(),
        )),
        roles: Arc::new(RoleBoard::new(Arc::new(roles), DEFAULT_ROLES_PER_PAGE)),
        session: Arc::new(InMemorySessionStore::new()),
        context_user: None,
    }
}
