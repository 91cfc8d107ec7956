use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::roles::use_cases::manage_roles::inbound::graphql::{RolesMutation, RolesQuery};
use crate::modules::timesheets::use_cases::view_timesheet::inbound::graphql::{
    TimesheetMutation, TimesheetQuery,
};
pub use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(TimesheetQuery, RolesQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(TimesheetMutation, RolesMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint("/gql").finish())
}
