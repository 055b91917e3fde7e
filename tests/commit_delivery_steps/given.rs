//! Given steps for commit synchronization BDD scenarios.

use super::world::{SyncWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use trellis::board::{
    domain::{Project, ProjectKey, RepositoryFullName, Task, TaskKey},
    ports::{ProjectRepository, TaskRepository},
};

#[given(r#"a project "{key}" linked to repository "{repository}""#)]
fn project_linked_to_repository(
    world: &mut SyncWorld,
    key: String,
    repository: String,
) -> Result<(), eyre::Report> {
    let project = Project::new(
        Some(ProjectKey::new(key).wrap_err("construct project key")?),
        RepositoryFullName::new(repository).wrap_err("construct repository name")?,
        &world.clock,
    );
    run_async(world.projects.store(&project)).wrap_err("store scenario project")?;
    world.project = Some(project);
    Ok(())
}

#[given(r#"the project has a task "{key}""#)]
fn project_has_task(world: &mut SyncWorld, key: String) -> Result<(), eyre::Report> {
    let project = world
        .project
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing scenario project"))?;
    let task = Task::new(
        project.id(),
        TaskKey::new(key).wrap_err("construct task key")?,
        &world.clock,
    );
    run_async(world.tasks.store(&task)).wrap_err("store scenario task")?;
    Ok(())
}
