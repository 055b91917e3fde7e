//! Port contracts for board persistence.

mod repository;

pub use repository::{
    ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult, TaskRepository,
    TaskRepositoryError, TaskRepositoryResult,
};
