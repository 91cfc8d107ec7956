use crate::modules::timesheets::adapters::outbound::timesheets_api::{
    ProjectCatalog, TimesheetsApi,
};
use crate::modules::timesheets::core::entry::{Project, ProjectId, TimeEntry};
use crate::modules::timesheets::core::grid::{GridRow, WeekGrid};
use crate::modules::timesheets::core::visibility::{AccessPolicy, CurrentUser};
use crate::modules::timesheets::core::week::{display_label, shift_weeks, today_in, week_dates};
use crate::modules::timesheets::use_cases::load_time_entries::handler::{EntryLoader, LoadOutcome};
use crate::shared::core::pagination::{
    PageMarker, clamp_page, page_numbers, page_window, total_pages,
};
use chrono::NaiveDate;
use chrono_tz::Tz;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

pub const DEFAULT_PROJECTS_PER_PAGE: u32 = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimesheetError {
    #[error("Failed to load time entries")]
    LoadFailed(String),

    #[error("page size must be at least 1")]
    InvalidPageSize,

    #[error("week is outside the supported calendar")]
    WeekOutOfRange,
}

#[derive(Debug, Clone)]
pub struct TimesheetSettings {
    pub timezone: Tz,
    pub page_size: u32,
    pub policy: AccessPolicy,
}

impl Default for TimesheetSettings {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            page_size: DEFAULT_PROJECTS_PER_PAGE,
            policy: AccessPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekDay {
    pub date: NaiveDate,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageInfo {
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub markers: Vec<PageMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimesheetGrid {
    pub week: Vec<WeekDay>,
    pub rows: Vec<GridRow>,
    pub column_totals: Vec<String>,
    pub grand_total: String,
    pub pagination: PageInfo,
    pub loading: bool,
    pub error: Option<String>,
    pub viewer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefreshSummary {
    pub generation: Option<u64>,
    pub projects: usize,
    pub entries: usize,
    pub failed_projects: Vec<ProjectId>,
    pub applied: bool,
}

struct BoardState {
    projects: Vec<Project>,
    entries: Vec<TimeEntry>,
    viewer: Option<CurrentUser>,
    anchor: NaiveDate,
    page: u32,
    page_size: u32,
    loading: bool,
    error: Option<String>,
    applied_generation: u64,
}

/// State of the weekly timesheet screen.
///
/// Entries are kept unfiltered; visibility is applied on every [`grid`]
/// call, so a viewer change never needs a refetch.
///
/// [`grid`]: TimesheetBoard::grid
pub struct TimesheetBoard {
    loader: EntryLoader,
    catalog: Arc<dyn ProjectCatalog>,
    policy: AccessPolicy,
    timezone: Tz,
    state: RwLock<BoardState>,
}

impl TimesheetBoard {
    pub fn new(
        api: Arc<dyn TimesheetsApi>,
        catalog: Arc<dyn ProjectCatalog>,
        settings: TimesheetSettings,
    ) -> Self {
        let state = BoardState {
            projects: Vec::new(),
            entries: Vec::new(),
            viewer: None,
            anchor: today_in(&settings.timezone),
            page: 1,
            page_size: settings.page_size.max(1),
            loading: false,
            error: None,
            applied_generation: 0,
        };
        Self {
            loader: EntryLoader::new(api),
            catalog,
            policy: settings.policy,
            timezone: settings.timezone,
            state: RwLock::new(state),
        }
    }

    pub async fn refresh(&self) -> Result<RefreshSummary, TimesheetError> {
        let projects = match self.catalog.list_projects().await {
            Ok(projects) => projects,
            Err(error) => {
                tracing::error!(error = %error, "failed to load projects");
                let failure = TimesheetError::LoadFailed(error.to_string());
                self.state.write().await.error = Some(failure.to_string());
                return Err(failure);
            }
        };

        {
            let mut state = self.state.write().await;
            if state.projects.len() != projects.len() {
                state.page = 1;
            }
            state.projects = projects.clone();
            if projects.is_empty() {
                return Ok(RefreshSummary {
                    generation: None,
                    projects: 0,
                    entries: state.entries.len(),
                    failed_projects: Vec::new(),
                    applied: false,
                });
            }
            state.loading = true;
            state.error = None;
        }

        match self.loader.load(&projects).await {
            LoadOutcome::Current {
                generation,
                entries,
                failed_projects,
            } => {
                let mut state = self.state.write().await;
                let applied = generation > state.applied_generation;
                if applied {
                    state.applied_generation = generation;
                    state.entries = entries;
                    state.loading = false;
                }
                Ok(RefreshSummary {
                    generation: Some(generation),
                    projects: projects.len(),
                    entries: state.entries.len(),
                    failed_projects,
                    applied,
                })
            }
            LoadOutcome::Superseded { generation } => Ok(RefreshSummary {
                generation: Some(generation),
                projects: projects.len(),
                entries: 0,
                failed_projects: Vec::new(),
                applied: false,
            }),
        }
    }

    pub async fn previous_week(&self) -> Result<NaiveDate, TimesheetError> {
        self.shift_week(-1).await
    }

    pub async fn next_week(&self) -> Result<NaiveDate, TimesheetError> {
        self.shift_week(1).await
    }

    /// Moves the visible week. The anchor stays put when the target week
    /// falls outside the calendar.
    pub async fn shift_week(&self, weeks: i64) -> Result<NaiveDate, TimesheetError> {
        let mut state = self.state.write().await;
        let Some(anchor) = shift_weeks(state.anchor, weeks) else {
            tracing::warn!(anchor = %state.anchor, weeks, "week shift out of range");
            return Err(TimesheetError::WeekOutOfRange);
        };
        state.anchor = anchor;
        tracing::debug!(anchor = %state.anchor, "week anchor moved");
        Ok(anchor)
    }

    pub async fn current_week(&self) -> NaiveDate {
        let today = today_in(&self.timezone);
        self.move_anchor(|_| today).await
    }

    pub async fn set_anchor(&self, anchor: NaiveDate) -> NaiveDate {
        self.move_anchor(|_| anchor).await
    }

    async fn move_anchor(&self, step: impl FnOnce(NaiveDate) -> NaiveDate) -> NaiveDate {
        let mut state = self.state.write().await;
        state.anchor = step(state.anchor);
        tracing::debug!(anchor = %state.anchor, "week anchor moved");
        state.anchor
    }

    /// Selects a page, clamped to the pages that exist.
    pub async fn set_page(&self, page: u32) -> u32 {
        let mut state = self.state.write().await;
        state.page = clamp_page(page, state.projects.len() as u64, state.page_size);
        state.page
    }

    pub async fn set_page_size(&self, page_size: u32) -> Result<(), TimesheetError> {
        if page_size == 0 {
            return Err(TimesheetError::InvalidPageSize);
        }
        let mut state = self.state.write().await;
        state.page_size = page_size;
        state.page = 1;
        Ok(())
    }

    pub async fn set_viewer(&self, viewer: Option<CurrentUser>) {
        self.state.write().await.viewer = viewer;
    }

    pub async fn grid(&self) -> TimesheetGrid {
        let state = self.state.read().await;

        let visible = self.policy.filter_by_role(&state.entries, state.viewer.as_ref());
        let week = week_dates(state.anchor);
        let total_items = state.projects.len() as u64;
        let page = clamp_page(state.page, total_items, state.page_size);
        let paged = page_window(&state.projects, page, state.page_size);
        let matrix = WeekGrid::new(&visible, paged, &week, &self.timezone).matrix();
        let pages = total_pages(total_items, state.page_size);

        TimesheetGrid {
            week: week
                .iter()
                .map(|date| WeekDay {
                    date: *date,
                    label: display_label(*date),
                })
                .collect(),
            rows: matrix.rows,
            column_totals: matrix.column_totals,
            grand_total: matrix.grand_total,
            pagination: PageInfo {
                page,
                page_size: state.page_size,
                total_pages: pages,
                total_items,
                markers: page_numbers(pages, page),
            },
            loading: state.loading,
            error: state.error.clone(),
            viewer: state.viewer.as_ref().and_then(|viewer| viewer.user_name.clone()),
        }
    }
}
