// Shared test fixtures for time entries and projects.

use chrono::{DateTime, Utc};

use crate::modules::timesheets::core::entry::{
    EntryCreator, EntryId, Project, ProjectId, TimeEntry,
};

pub fn project(id: ProjectId, name: &str) -> Project {
    Project {
        id,
        name: name.to_string(),
        color: Some("#22d3ee".to_string()),
    }
}

fn timestamp(value: &str) -> DateTime<Utc> {
    value
        .parse()
        .unwrap_or_else(|_| panic!("invalid fixture timestamp {value:?}"))
}

/// An entry of `hours` on `project`, starting at the RFC 3339 `starts`.
pub fn logged(project: ProjectId, starts: &str, hours: f64) -> TimeEntry {
    TimeEntryBuilder::new()
        .project(project)
        .starts(starts)
        .hours(hours)
        .build()
}

pub struct TimeEntryBuilder {
    inner: TimeEntry,
}

impl Default for TimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: TimeEntry {
                id: 1,
                description: "This is a test".to_string(),
                start_date: timestamp("2024-05-06T09:00:00Z"),
                end_date: Some(timestamp("2024-05-06T10:00:00Z")),
                duration: Some(1.0),
                status: "approved".to_string(),
                project_id: 1,
                user_id: None,
                created_by: Some(12),
                creator: Some(EntryCreator {
                    user_name: Some("alice".to_string()),
                }),
            },
        }
    }

    pub fn id(mut self, v: EntryId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn project(mut self, v: ProjectId) -> Self {
        self.inner.project_id = v;
        self
    }

    pub fn starts(mut self, v: &str) -> Self {
        self.inner.start_date = timestamp(v);
        self
    }

    pub fn ends(mut self, v: &str) -> Self {
        self.inner.end_date = Some(timestamp(v));
        self
    }

    pub fn hours(mut self, v: f64) -> Self {
        self.inner.duration = Some(v);
        self
    }

    pub fn no_duration(mut self) -> Self {
        self.inner.duration = None;
        self
    }

    pub fn creator(mut self, user_name: impl Into<String>) -> Self {
        self.inner.creator = Some(EntryCreator {
            user_name: Some(user_name.into()),
        });
        self
    }

    pub fn without_creator(mut self) -> Self {
        self.inner.creator = None;
        self.inner.created_by = None;
        self
    }

    pub fn build(self) -> TimeEntry {
        self.inner
    }
}

#[cfg(test)]
mod time_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = TimeEntryBuilder::default().build();
        assert_eq!(built.id, 1);
        assert_eq!(built.project_id, 1);
        assert_eq!(built.duration, Some(1.0));
        assert_eq!(built.creator_user_name(), Some("alice"));
    }

    #[rstest]
    fn setters_override_fields() {
        let built = TimeEntryBuilder::new()
            .id(9)
            .project(4)
            .starts("2024-01-01T00:00:00Z")
            .ends("2024-01-01T02:00:00Z")
            .hours(2.0)
            .creator("bob")
            .build();

        assert_eq!(built.id, 9);
        assert_eq!(built.project_id, 4);
        assert_eq!(built.start_date, timestamp("2024-01-01T00:00:00Z"));
        assert_eq!(built.end_date, Some(timestamp("2024-01-01T02:00:00Z")));
        assert_eq!(built.duration, Some(2.0));
        assert_eq!(built.creator_user_name(), Some("bob"));
    }
}
