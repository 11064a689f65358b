use crate::modules::auth::core::passwords::PasswordHasher;
use crate::modules::auth::core::tokens::TokenService;
use crate::modules::auth::use_cases::login::handler::LoginHandler;
use crate::modules::auth::use_cases::register::handler::RegisterUserHandler;
use crate::modules::stats::core::aggregate::StatsZone;
use crate::modules::stats::use_cases::productivity_breakdown::handler::ProductivityBreakdownHandler;
use crate::modules::stats::use_cases::user_stats::handler::UserStatsHandler;
use crate::modules::tasks::use_cases::create_task::handler::CreateTaskHandler;
use crate::modules::tasks::use_cases::delete_task::handler::DeleteTaskHandler;
use crate::modules::tasks::use_cases::get_task::handler::GetTaskHandler;
use crate::modules::tasks::use_cases::list_tasks::handler::ListTasksHandler;
use crate::modules::tasks::use_cases::start_timer::handler::StartTimerHandler;
use crate::modules::tasks::use_cases::stop_timer::handler::StopTimerHandler;
use crate::modules::tasks::use_cases::total_time::handler::TotalTimeHandler;
use crate::modules::tasks::use_cases::update_task::handler::UpdateTaskHandler;
use crate::modules::users::use_cases::get_profile::handler::GetProfileHandler;
use crate::shared::core::clock::Clock;
use crate::shared::infrastructure::store::in_memory::InMemoryStore;
use crate::shell::config::AuthConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenService>,
    pub register_handler: Arc<RegisterUserHandler<InMemoryStore>>,
    pub login_handler: Arc<LoginHandler<InMemoryStore>>,
    pub get_profile_handler: Arc<GetProfileHandler<InMemoryStore>>,
    pub create_task_handler: Arc<CreateTaskHandler<InMemoryStore>>,
    pub list_tasks_handler: Arc<ListTasksHandler<InMemoryStore>>,
    pub get_task_handler: Arc<GetTaskHandler<InMemoryStore>>,
    pub update_task_handler: Arc<UpdateTaskHandler<InMemoryStore>>,
    pub delete_task_handler: Arc<DeleteTaskHandler<InMemoryStore>>,
    pub start_timer_handler: Arc<StartTimerHandler<InMemoryStore>>,
    pub stop_timer_handler: Arc<StopTimerHandler<InMemoryStore>>,
    pub total_time_handler: Arc<TotalTimeHandler<InMemoryStore>>,
    pub user_stats_handler: Arc<UserStatsHandler<InMemoryStore, InMemoryStore>>,
    pub breakdown_handler: Arc<ProductivityBreakdownHandler<InMemoryStore, InMemoryStore>>,
}

impl AppState {
    pub fn new(
        store: Arc<InMemoryStore>,
        auth: &AuthConfig,
        stats_zone: StatsZone,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let hasher = PasswordHasher::new(auth.bcrypt_cost);
        let tokens = Arc::new(TokenService::new(
            &auth.jwt_secret,
            auth.token_ttl,
            clock.clone(),
        ));

        Self {
            register_handler: Arc::new(RegisterUserHandler::new(
                store.clone(),
                hasher,
                tokens.clone(),
                clock.clone(),
            )),
            login_handler: Arc::new(LoginHandler::new(store.clone(), hasher, tokens.clone())),
            get_profile_handler: Arc::new(GetProfileHandler::new(store.clone())),
            create_task_handler: Arc::new(CreateTaskHandler::new(store.clone(), clock.clone())),
            list_tasks_handler: Arc::new(ListTasksHandler::new(store.clone())),
            get_task_handler: Arc::new(GetTaskHandler::new(store.clone())),
            update_task_handler: Arc::new(UpdateTaskHandler::new(store.clone(), clock.clone())),
            delete_task_handler: Arc::new(DeleteTaskHandler::new(store.clone())),
            start_timer_handler: Arc::new(StartTimerHandler::new(store.clone(), clock.clone())),
            stop_timer_handler: Arc::new(StopTimerHandler::new(store.clone(), clock.clone())),
            total_time_handler: Arc::new(TotalTimeHandler::new(store.clone())),
            user_stats_handler: Arc::new(UserStatsHandler::new(
                store.clone(),
                store.clone(),
                clock,
                stats_zone,
            )),
            breakdown_handler: Arc::new(ProductivityBreakdownHandler::new(store.clone(), store)),
            tokens,
        }
    }
}
