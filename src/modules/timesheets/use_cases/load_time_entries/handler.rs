use crate::modules::timesheets::adapters::outbound::timesheets_api::TimesheetsApi;
use crate::modules::timesheets::core::entry::{Project, ProjectId, TimeEntry};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::task::JoinSet;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Current {
        generation: u64,
        entries: Vec<TimeEntry>,
        failed_projects: Vec<ProjectId>,
    },
    /// A newer load started before this one finished; its entries were dropped.
    Superseded { generation: u64 },
}

/// Fetches the entries of every project concurrently.
///
/// Every call to [`EntryLoader::load`] takes the next generation. Only the
/// latest generation may report [`LoadOutcome::Current`].
pub struct EntryLoader {
    api: Arc<dyn TimesheetsApi>,
    generation: AtomicU64,
}

impl EntryLoader {
    pub fn new(api: Arc<dyn TimesheetsApi>) -> Self {
        Self {
            api,
            generation: AtomicU64::new(0),
        }
    }

    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    pub async fn load(&self, projects: &[Project]) -> LoadOutcome {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!(generation, projects = projects.len(), "loading time entries");

        let mut tasks = JoinSet::new();
        for (position, project) in projects.iter().enumerate() {
            let api = Arc::clone(&self.api);
            let project_id = project.id;
            tasks.spawn(async move {
                let fetched = api.list_by_project(project_id).await;
                (position, project_id, fetched)
            });
        }

        let mut fetched: Vec<(usize, Vec<TimeEntry>)> = Vec::with_capacity(projects.len());
        let mut failed_projects = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((position, _, Ok(entries))) => fetched.push((position, entries)),
                Ok((_, project_id, Err(error))) => {
                    tracing::error!(
                        project_id,
                        error = %error,
                        "failed to fetch entries for project"
                    );
                    failed_projects.push(project_id);
                }
                Err(error) => tracing::error!(error = %error, "entry fetch task aborted"),
            }
        }

        if self.latest_generation() != generation {
            tracing::info!(generation, "discarding superseded time entries");
            return LoadOutcome::Superseded { generation };
        }

        fetched.sort_by_key(|(position, _)| *position);
        failed_projects.sort_unstable();
        let entries: Vec<TimeEntry> = fetched
            .into_iter()
            .flat_map(|(_, entries)| entries)
            .collect();
        tracing::info!(
            generation,
            entries = entries.len(),
            failed = failed_projects.len(),
            "time entries loaded"
        );

        LoadOutcome::Current {
            generation,
            entries,
            failed_projects,
        }
    }
}
