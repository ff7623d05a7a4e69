//! Offline answer service
//!
//! Waits for a fixed delay and answers every query with a "no tags found"
//! card, so the interface can be exercised without a backend.

use std::time::Duration;

use super::AnswerError;

#[derive(Debug, Clone)]
pub struct MockAnswerClient {
    delay: Duration,
}

impl MockAnswerClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub async fn ask(&self, query: &str) -> Result<String, AnswerError> {
        tokio::time::sleep(self.delay).await;
        Ok(no_tags_found(query))
    }
}

fn no_tags_found(query: &str) -> String {
    format!(
        "# {query}\n## NO TAGS FOUND\n\"{query}\" did not match any tags currently used in projects. Please try again or create a new tag."
    )
}
