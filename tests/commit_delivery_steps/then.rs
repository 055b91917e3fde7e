//! Then steps for commit synchronization BDD scenarios.

use super::world::SyncWorld;
use rstest_bdd_macros::then;
use trellis::board::domain::TaskStatus;
use trellis::sync::domain::{DeliveryOutcome, RejectionKind};

fn last_outcome(world: &SyncWorld) -> Result<&DeliveryOutcome, eyre::Report> {
    let outcome = world
        .last_outcome
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing delivery outcome in scenario world"))?;
    outcome
        .as_ref()
        .map_err(|err| eyre::eyre!("unexpected delivery failure: {err}"))
}

#[then("the delivery completes successfully")]
fn delivery_completes(world: &SyncWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    if !matches!(outcome, DeliveryOutcome::Completed { .. }) {
        return Err(eyre::eyre!("expected completed delivery, got {outcome:?}"));
    }
    Ok(())
}

#[then("the delivery completes with {count:usize} task updates")]
fn delivery_completes_with_count(world: &SyncWorld, count: usize) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    if *outcome != (DeliveryOutcome::Completed {
        tasks_updated: count,
    }) {
        return Err(eyre::eyre!(
            "expected {count} applied task updates, got {outcome:?}"
        ));
    }
    Ok(())
}

#[then("the delivery is rejected because no project matches")]
fn delivery_rejected_project_not_found(world: &SyncWorld) -> Result<(), eyre::Report> {
    let outcome = last_outcome(world)?;
    if !matches!(
        outcome,
        DeliveryOutcome::Rejected(RejectionKind::ProjectNotFound { .. })
    ) {
        return Err(eyre::eyre!(
            "expected project-not-found rejection, got {outcome:?}"
        ));
    }
    Ok(())
}

#[then(r#"task "{key}" has status "{status}""#)]
fn task_has_status(world: &SyncWorld, key: String, status: String) -> Result<(), eyre::Report> {
    let task = world
        .fetch_task(&key)?
        .ok_or_else(|| eyre::eyre!("task {key} should exist"))?;
    if task.status().as_str() != status {
        return Err(eyre::eyre!(
            "expected task {key} status {status}, found {}",
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"task "{key}" records last commit message "{message}""#)]
fn task_records_commit_message(
    world: &SyncWorld,
    key: String,
    message: String,
) -> Result<(), eyre::Report> {
    let task = world
        .fetch_task(&key)?
        .ok_or_else(|| eyre::eyre!("task {key} should exist"))?;
    if task.last_commit_message() != Some(message.as_str()) {
        return Err(eyre::eyre!(
            "expected task {key} last commit message {message:?}, found {:?}",
            task.last_commit_message()
        ));
    }
    Ok(())
}

#[then(r#"task "{key}" remains untouched"#)]
fn task_remains_untouched(world: &SyncWorld, key: String) -> Result<(), eyre::Report> {
    let task = world
        .fetch_task(&key)?
        .ok_or_else(|| eyre::eyre!("task {key} should exist"))?;
    if task.status() != &TaskStatus::Todo || task.last_commit_message().is_some() {
        return Err(eyre::eyre!("expected task {key} to be untouched"));
    }
    Ok(())
}
