use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::auth::adapters::inbound::bearer::AuthenticatedUser;
use crate::modules::stats::adapters::inbound::graphql::StatsQuery;
use crate::modules::tasks::adapters::inbound::graphql::{TaskMutation, TaskQuery};
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(TaskQuery, StatsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(TaskMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    AuthenticatedUser(identity): AuthenticatedUser,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner().data(identity)).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
