//! Service layer for task creation and assignee notification.

use crate::directory::{
    domain::EmailAddress,
    ports::{UserRepository, UserRepositoryError},
    services::UserDirectoryService,
};
use crate::group::{
    domain::{Group, GroupId},
    ports::{GroupRepository, GroupRepositoryError},
};
use crate::notify::{ports::NotificationGateway, services::MailRenderer};
use crate::task::{
    domain::Task,
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a task in a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    assignee_email: Option<EmailAddress>,
    due_date: Option<DateTime<Utc>>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            assignee_email: None,
            due_date: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the assignee address.
    ///
    /// The address is resolved through the user directory at creation time;
    /// it is not required to belong to a member of the group.
    #[must_use]
    pub fn with_assignee(mut self, assignee_email: EmailAddress) -> Self {
        self.assignee_email = Some(assignee_email);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Service-level errors for task registry operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Task repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// Group resolution failed.
    #[error(transparent)]
    Group(#[from] GroupRepositoryError),
    /// Assignee resolution failed.
    #[error(transparent)]
    User(#[from] UserRepositoryError),
}

/// Result type for task registry service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Task registry orchestration service.
#[derive(Clone)]
pub struct TaskService<T, G, U, C>
where
    T: TaskRepository,
    G: GroupRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    groups: Arc<G>,
    directory: UserDirectoryService<U, C>,
    gateway: Arc<dyn NotificationGateway>,
    renderer: MailRenderer,
    clock: Arc<C>,
}

impl<T, G, U, C> TaskService<T, G, U, C>
where
    T: TaskRepository,
    G: GroupRepository,
    U: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task registry service.
    #[must_use]
    pub const fn new(
        tasks: Arc<T>,
        groups: Arc<G>,
        directory: UserDirectoryService<U, C>,
        gateway: Arc<dyn NotificationGateway>,
        renderer: MailRenderer,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            groups,
            directory,
            gateway,
            renderer,
            clock,
        }
    }

    /// Creates a task in the given group.
    ///
    /// When an assignee is given it is resolved through the user directory
    /// (created on first reference) and receives a best-effort notification
    /// naming the group and the task. Unassigned tasks notify nobody.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Group`] wrapping
    /// [`GroupRepositoryError::NotFound`] when the group does not exist, or
    /// other variants when persistence fails.
    pub async fn create_task(
        &self,
        group_id: GroupId,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        let group = self
            .groups
            .find_by_id(group_id)
            .await?
            .ok_or(GroupRepositoryError::NotFound(group_id))?;

        let mut assignee = None;
        if let Some(email) = &request.assignee_email {
            assignee = Some(self.directory.get_or_create(email, None).await?);
        }

        let task = Task::new(
            group_id,
            request.title,
            request.description,
            assignee.as_ref().map(|user| user.email().clone()),
            request.due_date,
            &*self.clock,
        );
        self.tasks.store(&task).await?;

        if let Some(user) = assignee {
            self.notify_assignee(&group, &task, user.email()).await;
        }

        Ok(task)
    }

    /// Returns all tasks created in the given group, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when persistence lookup
    /// fails.
    pub async fn list_for_group(&self, group_id: GroupId) -> TaskServiceResult<Vec<Task>> {
        Ok(self.tasks.list_for_group(group_id).await?)
    }

    async fn notify_assignee(&self, group: &Group, task: &Task, assignee: &EmailAddress) {
        match self.renderer.assignment_email(
            assignee,
            group.name(),
            group.description(),
            task.title(),
            task.description(),
        ) {
            Ok(message) => {
                if !self.gateway.send(&message).await {
                    tracing::warn!(
                        group_id = %group.id(),
                        task_id = %task.id(),
                        assignee = %assignee,
                        "assignment notice was not delivered"
                    );
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "assignment notice could not be rendered");
            }
        }
    }
}
