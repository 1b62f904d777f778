//! Application services for task creation and assignment.

mod assignment;

pub use assignment::{CreateTaskRequest, TaskService, TaskServiceError, TaskServiceResult};
