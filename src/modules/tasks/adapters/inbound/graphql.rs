use async_graphql::{Context, Enum, ErrorExtensions, ID, Object, Result as GqlResult, SimpleObject};
use uuid::Uuid;

use crate::modules::auth::core::claims::Identity;
use crate::modules::tasks::core::filters::TaskFilters;
use crate::modules::tasks::core::task::{TaskPriority, TaskStatus, TaskView};
use crate::modules::tasks::core::time_entry::TimeEntry;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "TaskStatus")]
pub enum GqlTaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl From<TaskStatus> for GqlTaskStatus {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Pending => Self::Pending,
            TaskStatus::InProgress => Self::InProgress,
            TaskStatus::Completed => Self::Completed,
        }
    }
}

impl From<GqlTaskStatus> for TaskStatus {
    fn from(status: GqlTaskStatus) -> Self {
        match status {
            GqlTaskStatus::Pending => Self::Pending,
            GqlTaskStatus::InProgress => Self::InProgress,
            GqlTaskStatus::Completed => Self::Completed,
        }
    }
}

#[derive(Enum, Copy, Clone, Eq, PartialEq)]
#[graphql(name = "TaskPriority")]
pub enum GqlTaskPriority {
    Low,
    Medium,
    High,
}

impl From<TaskPriority> for GqlTaskPriority {
    fn from(priority: TaskPriority) -> Self {
        match priority {
            TaskPriority::Low => Self::Low,
            TaskPriority::Medium => Self::Medium,
            TaskPriority::High => Self::High,
        }
    }
}

impl From<GqlTaskPriority> for TaskPriority {
    fn from(priority: GqlTaskPriority) -> Self {
        match priority {
            GqlTaskPriority::Low => Self::Low,
            GqlTaskPriority::Medium => Self::Medium,
            GqlTaskPriority::High => Self::High,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "TimeEntry")]
pub struct GqlTimeEntry {
    pub id: ID,
    pub task_id: ID,
    pub start_time: String,
    pub end_time: Option<String>,
    pub duration: i64,
}

impl From<TimeEntry> for GqlTimeEntry {
    fn from(entry: TimeEntry) -> Self {
        Self {
            id: ID(entry.id.to_string()),
            task_id: ID(entry.task_id.to_string()),
            start_time: entry.start_time.to_rfc3339(),
            end_time: entry.end_time.map(|end| end.to_rfc3339()),
            duration: entry.duration,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Task")]
pub struct GqlTask {
    pub id: ID,
    pub title: String,
    pub description: Option<String>,
    pub status: GqlTaskStatus,
    pub category: Option<String>,
    pub priority: GqlTaskPriority,
    pub created_at: String,
    pub updated_at: String,
    pub time_entries: Vec<GqlTimeEntry>,
    pub total_time: i64,
}

impl From<TaskView> for GqlTask {
    fn from(view: TaskView) -> Self {
        let task = view.task;
        Self {
            id: ID(task.id.to_string()),
            title: task.title,
            description: task.description,
            status: task.status.into(),
            category: task.category,
            priority: task.priority.into(),
            created_at: task.created_at.to_rfc3339(),
            updated_at: task.updated_at.to_rfc3339(),
            time_entries: view.time_entries.into_iter().map(Into::into).collect(),
            total_time: view.total_time,
        }
    }
}

/// The identity the `/gql` route attached to this request.
pub fn caller<'a>(context: &'a Context<'_>) -> GqlResult<&'a Identity> {
    context
        .data::<Identity>()
        .map_err(|_| ApplicationError::Unauthorized("Missing bearer token".into()).extend())
}

fn parse_task_id(id: &ID) -> GqlResult<Uuid> {
    Uuid::parse_str(id.as_str()).map_err(|_| ApplicationError::NotFound("task").extend())
}

#[derive(Default)]
pub struct TaskQuery;

#[Object]
impl TaskQuery {
    async fn tasks(
        &self,
        context: &Context<'_>,
        status: Option<GqlTaskStatus>,
        category: Option<String>,
        priority: Option<GqlTaskPriority>,
        search: Option<String>,
    ) -> GqlResult<Vec<GqlTask>> {
        let identity = caller(context)?;
        let state = context.data_unchecked::<AppState>();
        let filters = TaskFilters {
            status: status.map(Into::into),
            category,
            priority: priority.map(Into::into),
            search,
        };
        let views = state
            .list_tasks_handler
            .handle(identity.user_id, &filters)
            .await
            .map_err(|e| e.extend())?;
        Ok(views.into_iter().map(Into::into).collect())
    }

    async fn task(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlTask> {
        let identity = caller(context)?;
        let state = context.data_unchecked::<AppState>();
        let view = state
            .get_task_handler
            .handle(identity.user_id, parse_task_id(&id)?)
            .await
            .map_err(|e| e.extend())?;
        Ok(view.into())
    }
}

#[derive(Default)]
pub struct TaskMutation;

#[Object]
impl TaskMutation {
    async fn start_timer(&self, context: &Context<'_>, task_id: ID) -> GqlResult<GqlTimeEntry> {
        let identity = caller(context)?;
        let state = context.data_unchecked::<AppState>();
        let entry = state
            .start_timer_handler
            .handle(identity.user_id, parse_task_id(&task_id)?)
            .await
            .map_err(|e| e.extend())?;
        Ok(entry.into())
    }

    async fn stop_timer(&self, context: &Context<'_>, task_id: ID) -> GqlResult<GqlTimeEntry> {
        let identity = caller(context)?;
        let state = context.data_unchecked::<AppState>();
        let entry = state
            .stop_timer_handler
            .handle(identity.user_id, parse_task_id(&task_id)?)
            .await
            .map_err(|e| e.extend())?;
        Ok(entry.into())
    }
}
