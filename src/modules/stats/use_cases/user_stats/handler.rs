use crate::modules::stats::core::aggregate::{StatsZone, UserStats, aggregate};
use crate::modules::tasks::adapters::outbound::task_repository::TaskRepository;
use crate::modules::tasks::core::filters::TaskFilters;
use crate::modules::users::adapters::outbound::user_repository::UserRepository;
use crate::shared::application::errors::ApplicationError;
use crate::shared::core::clock::Clock;
use std::sync::Arc;
use uuid::Uuid;

pub struct UserStatsHandler<TUsers, TTasks>
where
    TUsers: UserRepository + 'static,
    TTasks: TaskRepository + 'static,
{
    users: Arc<TUsers>,
    tasks: Arc<TTasks>,
    clock: Arc<dyn Clock>,
    zone: StatsZone,
}

impl<TUsers, TTasks> UserStatsHandler<TUsers, TTasks>
where
    TUsers: UserRepository + 'static,
    TTasks: TaskRepository + 'static,
{
    pub fn new(
        users: Arc<TUsers>,
        tasks: Arc<TTasks>,
        clock: Arc<dyn Clock>,
        zone: StatsZone,
    ) -> Self {
        Self {
            users,
            tasks,
            clock,
            zone,
        }
    }

    pub async fn handle(&self, user_id: Uuid) -> Result<UserStats, ApplicationError> {
        if self.users.find_user(user_id).await?.is_none() {
            return Err(ApplicationError::NotFound("user"));
        }
        let views = self
            .tasks
            .list_tasks(user_id, &TaskFilters::default())
            .await?;
        let window = self.zone.window(self.clock.now());
        Ok(aggregate(&views, &window))
    }
}
