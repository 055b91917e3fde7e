//! Status policy tests for the closing-keyword heuristic.

use crate::board::domain::TaskStatus;
use crate::sync::domain::{CLOSING_KEYWORDS, StatusPolicy};
use rstest::{fixture, rstest};

#[fixture]
fn policy() -> StatusPolicy {
    StatusPolicy::default()
}

#[rstest]
fn every_default_keyword_signals_done(policy: StatusPolicy) {
    for keyword in CLOSING_KEYWORDS {
        let message = format!("{keyword} NEX-1");
        assert_eq!(
            policy.target_status(&message),
            TaskStatus::Done,
            "keyword '{keyword}' should signal done",
        );
    }
}

#[rstest]
#[case("FIXES NEX-3")]
#[case("Closes NEX-3")]
#[case("reSOLved NEX-3")]
fn keyword_matching_is_case_insensitive(policy: StatusPolicy, #[case] message: &str) {
    assert_eq!(policy.target_status(message), TaskStatus::Done);
}

#[rstest]
fn keyword_matching_is_substring_based_not_word_bounded(policy: StatusPolicy) {
    // "prefixes" contains "fix"; the imprecision is contractual.
    assert_eq!(
        policy.target_status("prefixes renamed in NEX-8"),
        TaskStatus::Done
    );
}

#[rstest]
#[case("wip on NEX-3")]
#[case("refactor around NEX-3")]
#[case("NEX-3 groundwork")]
fn messages_without_closing_keywords_signal_in_progress(
    policy: StatusPolicy,
    #[case] message: &str,
) {
    assert_eq!(policy.target_status(message), TaskStatus::InProgress);
}

#[rstest]
fn custom_vocabulary_replaces_the_default_set() {
    let policy = StatusPolicy::new(vec!["ship".to_owned()]);

    assert_eq!(policy.target_status("ship NEX-1"), TaskStatus::Done);
    assert_eq!(
        policy.target_status("fixes NEX-1"),
        TaskStatus::InProgress,
        "default keywords should not apply to a custom vocabulary",
    );
}
