use super::error::{Result, ServiceError};
use crate::extract::{ExtractionBackend, SearchResultEntry};

#[derive(Debug, Clone)]
pub struct SearchService<E> {
    backend: E,
    max_results: usize,
}

impl<E: ExtractionBackend> SearchService<E> {
    pub fn new(backend: E, max_results: usize) -> Self {
        Self {
            backend,
            max_results,
        }
    }

    /// Search the extraction backend; at most `max_results` entries, provider
    /// order, thumbnails resolved.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResultEntry>> {
        if query.trim().is_empty() {
            return Err(ServiceError::InvalidRequest(
                "No search query provided".to_string(),
            ));
        }

        tracing::info!(query, "searching");
        let entries = self
            .backend
            .search(query, self.max_results)
            .await
            .map_err(|e| ServiceError::backend("search", e))?;

        Ok(entries
            .into_iter()
            .take(self.max_results)
            .map(SearchResultEntry::from_raw)
            .collect())
    }
}
