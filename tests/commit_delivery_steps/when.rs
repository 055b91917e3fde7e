//! When steps for commit synchronization BDD scenarios.

use super::world::{SyncWorld, run_async};
use rstest_bdd_macros::when;
use serde_json::json;

fn push_body(repository: &str, messages: &[&str]) -> Vec<u8> {
    let commits: Vec<_> = messages
        .iter()
        .enumerate()
        .map(|(index, message)| {
            json!({
                "id": format!("c{index}"),
                "message": message,
                "url": format!("https://example.test/c/c{index}"),
            })
        })
        .collect();
    json!({ "repository": { "full_name": repository }, "commits": commits })
        .to_string()
        .into_bytes()
}

fn scenario_repository(world: &SyncWorld) -> Result<String, eyre::Report> {
    world
        .project
        .as_ref()
        .map(|project| project.repo_full_name().as_str().to_owned())
        .ok_or_else(|| eyre::eyre!("missing scenario project"))
}

#[when(r#"a push delivery arrives with a commit "{message}""#)]
fn push_with_single_commit(world: &mut SyncWorld, message: String) -> Result<(), eyre::Report> {
    let repository = scenario_repository(world)?;
    let body = push_body(&repository, &[&message]);
    world.last_outcome = Some(run_async(world.service.process_delivery("push", &body)));
    Ok(())
}

#[when(r#"a push delivery arrives with a commit "{first}" followed by a commit "{second}""#)]
fn push_with_two_commits(
    world: &mut SyncWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let repository = scenario_repository(world)?;
    let body = push_body(&repository, &[&first, &second]);
    world.last_outcome = Some(run_async(world.service.process_delivery("push", &body)));
    Ok(())
}

#[when(r#"a push delivery arrives for repository "{repository}" with a commit "{message}""#)]
fn push_for_explicit_repository(
    world: &mut SyncWorld,
    repository: String,
    message: String,
) {
    let body = push_body(&repository, &[&message]);
    world.last_outcome = Some(run_async(world.service.process_delivery("push", &body)));
}

#[when(r#"a "{event_type}" delivery arrives"#)]
fn non_push_delivery(world: &mut SyncWorld, event_type: String) {
    world.last_outcome = Some(run_async(
        world.service.process_delivery(&event_type, b"{}"),
    ));
}
