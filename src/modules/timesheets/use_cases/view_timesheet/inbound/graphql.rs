use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::timesheets::core::grid::GridRow;
use crate::modules::timesheets::use_cases::view_timesheet::handler::{
    PageInfo, TimesheetGrid, WeekDay,
};
use crate::shared::core::pagination::PageMarker;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlWeekDay {
    pub date: String,
    pub label: String,
}

impl From<WeekDay> for GqlWeekDay {
    fn from(v: WeekDay) -> Self {
        Self {
            date: v.date.to_string(),
            label: v.label,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlGridRow {
    pub project_id: i64,
    pub project_name: String,
    pub color: Option<String>,
    pub cells: Vec<String>,
    pub total: String,
}

impl From<GridRow> for GqlGridRow {
    fn from(v: GridRow) -> Self {
        Self {
            project_id: v.project_id,
            project_name: v.project_name,
            color: v.color,
            cells: v.cells,
            total: v.total,
        }
    }
}

/// A page link; `page` is absent for an ellipsis.
#[derive(SimpleObject, Clone)]
pub struct GqlPageMarker {
    pub gap: bool,
    pub page: Option<u32>,
}

impl From<PageMarker> for GqlPageMarker {
    fn from(v: PageMarker) -> Self {
        match v {
            PageMarker::Page(page) => Self {
                gap: false,
                page: Some(page),
            },
            PageMarker::Gap => Self {
                gap: true,
                page: None,
            },
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlPageInfo {
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub markers: Vec<GqlPageMarker>,
}

impl From<PageInfo> for GqlPageInfo {
    fn from(v: PageInfo) -> Self {
        Self {
            page: v.page,
            page_size: v.page_size,
            total_pages: v.total_pages,
            total_items: v.total_items,
            markers: v.markers.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlTimesheetGrid {
    pub week: Vec<GqlWeekDay>,
    pub rows: Vec<GqlGridRow>,
    pub column_totals: Vec<String>,
    pub grand_total: String,
    pub pagination: GqlPageInfo,
    pub loading: bool,
    pub error: Option<String>,
    pub viewer: Option<String>,
}

impl From<TimesheetGrid> for GqlTimesheetGrid {
    fn from(v: TimesheetGrid) -> Self {
        Self {
            week: v.week.into_iter().map(Into::into).collect(),
            rows: v.rows.into_iter().map(Into::into).collect(),
            column_totals: v.column_totals,
            grand_total: v.grand_total,
            pagination: v.pagination.into(),
            loading: v.loading,
            error: v.error,
            viewer: v.viewer,
        }
    }
}

#[derive(Default)]
pub struct TimesheetQuery;

#[Object]
impl TimesheetQuery {
    async fn timesheet_grid(&self, context: &Context<'_>) -> GqlResult<GqlTimesheetGrid> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.timesheet.grid().await.into())
    }
}

#[derive(Default)]
pub struct TimesheetMutation;

#[Object]
impl TimesheetMutation {
    async fn refresh_timesheet(&self, context: &Context<'_>) -> GqlResult<GqlTimesheetGrid> {
        let state = context.data_unchecked::<AppState>();
        state
            .timesheet
            .refresh()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(state.timesheet.grid().await.into())
    }

    /// Moves the visible week by `weeks`; zero jumps to the current week.
    async fn shift_timesheet_week(
        &self,
        context: &Context<'_>,
        weeks: i32,
    ) -> GqlResult<GqlTimesheetGrid> {
        let state = context.data_unchecked::<AppState>();
        match weeks {
            0 => {
                state.timesheet.current_week().await;
            }
            n => {
                state
                    .timesheet
                    .shift_week(i64::from(n))
                    .await
                    .map_err(|e| async_graphql::Error::new(e.to_string()))?;
            }
        }
        Ok(state.timesheet.grid().await.into())
    }
}
