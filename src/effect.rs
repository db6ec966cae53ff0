//! Effects - side effects declared by the reducer

use crate::action::Action;
use crate::api::CatalogClient;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the first `count` summaries
    FetchList { count: usize },
    /// Fetch one entry's detail
    FetchEntry { name: String },
}

impl Effect {
    /// Task key; a new task with the same key supersedes the running one.
    pub fn task_key(&self) -> &'static str {
        match self {
            Effect::FetchList { .. } => "catalog_list",
            Effect::FetchEntry { .. } => "catalog_entry",
        }
    }
}

/// Perform the effect against `client` and turn the outcome into an action.
pub async fn run_effect<C>(client: &C, effect: Effect) -> Action
where
    C: CatalogClient + ?Sized,
{
    match effect {
        Effect::FetchList { count } => match client.fetch_summary_list(count).await {
            Ok(entries) => {
                tracing::info!(count = entries.len(), "catalog list loaded");
                Action::ListDidLoad(entries)
            }
            Err(error) => {
                tracing::warn!(%error, "catalog list failed");
                Action::ListDidError(error.to_string())
            }
        },
        Effect::FetchEntry { name } => match client.fetch_detail(&name).await {
            Ok(detail) => {
                tracing::info!(name = %detail.name, id = detail.id, "entry loaded");
                Action::EntryDidLoad(detail)
            }
            Err(error) => {
                tracing::warn!(%name, %error, "entry failed");
                Action::EntryDidError {
                    name,
                    error: error.to_string(),
                }
            }
        },
    }
}
