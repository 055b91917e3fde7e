//! Contract tests for the canned completion provider.

use crate::assist::{
    adapters::memory::CannedCompletionProvider,
    domain::{AssistDomainError, BreakdownRequest, TaskBreakdown},
    ports::CompletionProvider,
};
use rstest::{fixture, rstest};

#[fixture]
fn provider() -> CannedCompletionProvider {
    CannedCompletionProvider::new(TaskBreakdown {
        description: "Wire the webhook receiver".to_owned(),
        subtasks: vec!["decode payload".to_owned(), "resolve project".to_owned()],
        points: 5,
    })
}

#[rstest]
fn breakdown_request_rejects_empty_title() {
    let result = BreakdownRequest::new("   ", "feature");
    assert_eq!(result, Err(AssistDomainError::EmptyTitle));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn breakdown_returns_the_configured_response(provider: CannedCompletionProvider) {
    let request =
        BreakdownRequest::new("Wire the webhook receiver", "feature").expect("valid request");
    let breakdown = provider.breakdown(&request).await.expect("breakdown");

    assert_eq!(breakdown.description, "Wire the webhook receiver");
    assert_eq!(breakdown.subtasks.len(), 2);
    assert_eq!(breakdown.points, 5);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn polish_trims_surrounding_whitespace(provider: CannedCompletionProvider) {
    let polished = provider.polish("  tidy this up  ").await.expect("polish");
    assert_eq!(polished, "tidy this up");
}
