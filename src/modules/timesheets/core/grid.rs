// Week x project matrix with row, column and grand totals.
//
// Totals are summed from the rendered cell strings, so a total is exactly the
// sum of what the cells show, truncation included.

use chrono::{NaiveDate, TimeZone};
use serde::Serialize;

use crate::modules::timesheets::core::aggregate::{cell_display, sum_duration};
use crate::modules::timesheets::core::entry::{Project, ProjectId, TimeEntry};
use crate::modules::timesheets::core::time_format::{format_time, parse_time};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridRow {
    pub project_id: ProjectId,
    pub project_name: String,
    pub color: Option<String>,
    pub cells: Vec<String>,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridMatrix {
    pub rows: Vec<GridRow>,
    pub column_totals: Vec<String>,
    pub grand_total: String,
}

/// Cells and totals for one page of projects over one week.
pub struct WeekGrid<'a, Tz: TimeZone> {
    entries: &'a [TimeEntry],
    projects: &'a [Project],
    week: &'a [NaiveDate],
    timezone: &'a Tz,
}

impl<'a, Tz: TimeZone> WeekGrid<'a, Tz> {
    /// `projects` must already be the paged slice; column and grand totals
    /// only cover it.
    pub fn new(
        entries: &'a [TimeEntry],
        projects: &'a [Project],
        week: &'a [NaiveDate],
        timezone: &'a Tz,
    ) -> Self {
        Self {
            entries,
            projects,
            week,
            timezone,
        }
    }

    pub fn cell(&self, project_id: ProjectId, date: NaiveDate) -> String {
        cell_display(sum_duration(self.entries, project_id, date, self.timezone))
    }

    fn cell_hours(&self, project_id: ProjectId, date: NaiveDate) -> f64 {
        reparse(&self.cell(project_id, date))
    }

    pub fn row_total(&self, project_id: ProjectId) -> String {
        let hours = self
            .week
            .iter()
            .map(|date| self.cell_hours(project_id, *date))
            .sum();
        format_time(hours)
    }

    pub fn column_total(&self, date: NaiveDate) -> String {
        let hours = self
            .projects
            .iter()
            .map(|project| self.cell_hours(project.id, date))
            .sum();
        format_time(hours)
    }

    pub fn grand_total(&self) -> String {
        let hours = self
            .projects
            .iter()
            .flat_map(|project| {
                self.week
                    .iter()
                    .map(move |date| self.cell_hours(project.id, *date))
            })
            .sum();
        format_time(hours)
    }

    pub fn matrix(&self) -> GridMatrix {
        let rows = self
            .projects
            .iter()
            .map(|project| GridRow {
                project_id: project.id,
                project_name: project.name.clone(),
                color: project.color.clone(),
                cells: self.week.iter().map(|date| self.cell(project.id, *date)).collect(),
                total: self.row_total(project.id),
            })
            .collect();

        GridMatrix {
            rows,
            column_totals: self.week.iter().map(|date| self.column_total(*date)).collect(),
            grand_total: self.grand_total(),
        }
    }
}

fn reparse(cell: &str) -> f64 {
    if cell.is_empty() {
        return 0.0;
    }
    parse_time(cell).unwrap_or_else(|error| {
        tracing::warn!(%error, "unparseable grid cell counted as zero");
        0.0
    })
}
