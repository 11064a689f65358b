use crate::modules::tasks::adapters::outbound::task_repository::TaskRepository;
use crate::modules::tasks::core::task::{Task, TaskStatus, TaskView};
use crate::modules::tasks::use_cases::create_task::command::{CreateTask, optional_text};
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::clock::Clock;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct CreateTaskHandler<TTasks>
where
    TTasks: TaskRepository + 'static,
{
    tasks: Arc<TTasks>,
    clock: Arc<dyn Clock>,
}

impl<TTasks> CreateTaskHandler<TTasks>
where
    TTasks: TaskRepository + 'static,
{
    pub fn new(tasks: Arc<TTasks>, clock: Arc<dyn Clock>) -> Self {
        Self { tasks, clock }
    }

    pub async fn handle(
        &self,
        user_id: Uuid,
        command: CreateTask,
    ) -> Result<TaskView, ApplicationError> {
        command.validate()?;

        let now = self.clock.now();
        let task = Task {
            id: Uuid::now_v7(),
            user_id,
            title: command.title.trim().to_string(),
            description: optional_text(command.description),
            status: TaskStatus::Pending,
            category: optional_text(command.category),
            priority: command.priority.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };
        self.tasks.insert_task(task.clone()).await?;
        tracing::info!(task_id = %task.id, %user_id, "task created");

        Ok(TaskView::new(task, Vec::new()))
    }
}
