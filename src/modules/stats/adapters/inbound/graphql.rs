use async_graphql::{Context, ErrorExtensions, Object, Result as GqlResult, SimpleObject};

use crate::modules::stats::core::aggregate::UserStats;
use crate::modules::tasks::adapters::inbound::graphql::caller;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
#[graphql(name = "UserStats")]
pub struct GqlUserStats {
    pub tasks_completed_today: i64,
    pub tasks_completed_week: i64,
    pub total_hours_today: f64,
    pub total_hours_week: f64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
}

impl From<UserStats> for GqlUserStats {
    fn from(stats: UserStats) -> Self {
        Self {
            tasks_completed_today: stats.tasks_completed_today,
            tasks_completed_week: stats.tasks_completed_week,
            total_hours_today: stats.total_hours_today,
            total_hours_week: stats.total_hours_week,
            total_tasks: stats.total_tasks,
            completed_tasks: stats.completed_tasks,
        }
    }
}

#[derive(Default)]
pub struct StatsQuery;

#[Object]
impl StatsQuery {
    async fn stats(&self, context: &Context<'_>) -> GqlResult<GqlUserStats> {
        let identity = caller(context)?;
        let state = context.data_unchecked::<AppState>();
        let stats = state
            .user_stats_handler
            .handle(identity.user_id)
            .await
            .map_err(|e| e.extend())?;
        Ok(stats.into())
    }
}
