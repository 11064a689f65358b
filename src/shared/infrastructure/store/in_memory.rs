// In memory implementation of the UserRepository and TaskRepository ports.
//
// Purpose
// - Back the service and its tests without a database.
//
// Responsibilities
// - Keep users, tasks and time entries as three tables behind one lock.
// - Enforce unique emails and at most one open time entry per task.
// - Scope every task read by its owner and cascade task deletes to time entries.

use crate::modules::tasks::adapters::outbound::task_repository::TaskRepository;
use crate::modules::tasks::core::filters::TaskFilters;
use crate::modules::tasks::core::task::{Task, TaskPatch, TaskView};
use crate::modules::tasks::core::time_entry::TimeEntry;
use crate::modules::users::adapters::outbound::user_repository::UserRepository;
use crate::modules::users::core::user::User;
use crate::shared::infrastructure::store::StoreError;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
struct Tables {
    users: HashMap<Uuid, User>,
    tasks: HashMap<Uuid, Task>,
    time_entries: HashMap<Uuid, TimeEntry>,
}

impl Tables {
    fn entries_of(&self, task_id: Uuid) -> Vec<TimeEntry> {
        self.time_entries
            .values()
            .filter(|entry| entry.task_id == task_id)
            .cloned()
            .collect()
    }

    fn view_of(&self, task: &Task) -> TaskView {
        TaskView::new(task.clone(), self.entries_of(task.id))
    }

    fn owned_task(&self, user_id: Uuid, task_id: Uuid) -> Option<&Task> {
        self.tasks
            .get(&task_id)
            .filter(|task| task.user_id == user_id)
    }
}

#[derive(Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    is_offline: bool,
    write_delay_ms: AtomicU64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Delays every write before it takes the lock, widening check-then-act windows.
    pub fn set_write_delay_ms(&self, ms: u64) {
        self.write_delay_ms.store(ms, Ordering::Relaxed);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Store offline".into()));
        }
        Ok(())
    }

    async fn before_write(&self) -> Result<(), StoreError> {
        self.ensure_online()?;
        let delay = self.write_delay_ms.load(Ordering::Relaxed);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        Ok(())
    }

    pub async fn open_entry_count(&self, task_id: Uuid) -> usize {
        self.tables
            .read()
            .await
            .time_entries
            .values()
            .filter(|entry| entry.task_id == task_id && entry.is_open())
            .count()
    }

    pub async fn time_entry_count(&self) -> usize {
        self.tables.read().await.time_entries.len()
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryStore {
    async fn insert_user(&self, user: User) -> Result<(), StoreError> {
        self.before_write().await?;
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail { email: user.email });
        }
        tables.users.insert(user.id, user);
        Ok(())
    }

    async fn find_user(&self, user_id: Uuid) -> Result<Option<User>, StoreError> {
        self.ensure_online()?;
        Ok(self.tables.read().await.users.get(&user_id).cloned())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        self.ensure_online()?;
        Ok(self
            .tables
            .read()
            .await
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[async_trait::async_trait]
impl TaskRepository for InMemoryStore {
    async fn insert_task(&self, task: Task) -> Result<(), StoreError> {
        self.before_write().await?;
        self.tables.write().await.tasks.insert(task.id, task);
        Ok(())
    }

    async fn list_tasks(
        &self,
        user_id: Uuid,
        filters: &TaskFilters,
    ) -> Result<Vec<TaskView>, StoreError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        let mut views: Vec<TaskView> = tables
            .tasks
            .values()
            .filter(|task| task.user_id == user_id && filters.matches(task))
            .map(|task| tables.view_of(task))
            .collect();
        views.sort_by(|a, b| {
            b.task
                .created_at
                .cmp(&a.task.created_at)
                .then_with(|| b.task.id.cmp(&a.task.id))
        });
        Ok(views)
    }

    async fn find_task(
        &self,
        user_id: Uuid,
        task_id: Uuid,
    ) -> Result<Option<TaskView>, StoreError> {
        self.ensure_online()?;
        let tables = self.tables.read().await;
        Ok(tables
            .owned_task(user_id, task_id)
            .map(|task| tables.view_of(task)))
    }

    async fn update_task(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        patch: TaskPatch,
        now: DateTime<Utc>,
    ) -> Result<TaskView, StoreError> {
        self.before_write().await?;
        let mut tables = self.tables.write().await;
        let task = match tables.owned_task(user_id, task_id) {
            Some(task) => patch.apply(task.clone(), now),
            None => return Err(StoreError::TaskNotFound { task_id }),
        };
        let view = tables.view_of(&task);
        tables.tasks.insert(task_id, task);
        Ok(view)
    }

    async fn delete_task(&self, user_id: Uuid, task_id: Uuid) -> Result<(), StoreError> {
        self.before_write().await?;
        let mut tables = self.tables.write().await;
        if tables.owned_task(user_id, task_id).is_none() {
            return Err(StoreError::TaskNotFound { task_id });
        }
        tables.time_entries.retain(|_, entry| entry.task_id != task_id);
        tables.tasks.remove(&task_id);
        Ok(())
    }

    async fn open_time_entry(&self, user_id: Uuid, entry: TimeEntry) -> Result<(), StoreError> {
        self.before_write().await?;
        let task_id = entry.task_id;
        let mut tables = self.tables.write().await;
        let task = match tables.owned_task(user_id, task_id) {
            Some(task) => task.clone().timer_started(entry.start_time),
            None => return Err(StoreError::TaskNotFound { task_id }),
        };
        if tables
            .time_entries
            .values()
            .any(|e| e.task_id == task_id && e.is_open())
        {
            return Err(StoreError::OpenEntryExists { task_id });
        }
        tables.tasks.insert(task_id, task);
        tables.time_entries.insert(entry.id, entry);
        Ok(())
    }

    async fn close_time_entry(&self, entry: TimeEntry) -> Result<(), StoreError> {
        self.before_write().await?;
        let mut tables = self.tables.write().await;
        match tables.time_entries.get_mut(&entry.id) {
            Some(stored) if stored.is_open() => {
                *stored = entry;
                Ok(())
            }
            _ => Err(StoreError::NoOpenEntry {
                time_entry_id: entry.id,
            }),
        }
    }
}
