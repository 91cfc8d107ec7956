use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::roles::core::role::{Role, RoleId};
use crate::modules::roles::use_cases::manage_roles::handler::RolesView;
use crate::modules::timesheets::use_cases::view_timesheet::inbound::graphql::GqlPageMarker;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlRole {
    pub id: RoleId,
    pub name: String,
    pub is_enabled: bool,
}

impl From<Role> for GqlRole {
    fn from(v: Role) -> Self {
        Self {
            id: v.id,
            name: v.name,
            is_enabled: v.is_enabled,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlRolePage {
    pub rows: Vec<GqlRole>,
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
    pub markers: Vec<GqlPageMarker>,
    pub error: Option<String>,
}

impl From<RolesView> for GqlRolePage {
    fn from(v: RolesView) -> Self {
        Self {
            rows: v.rows.into_iter().map(Into::into).collect(),
            page: v.page,
            limit: v.limit,
            total: v.total,
            total_pages: v.total_pages,
            markers: v.markers.into_iter().map(Into::into).collect(),
            error: v.error,
        }
    }
}

fn gql_error(e: impl ToString) -> async_graphql::Error {
    async_graphql::Error::new(e.to_string())
}

#[derive(Default)]
pub struct RolesQuery;

#[Object]
impl RolesQuery {
    async fn roles(
        &self,
        context: &Context<'_>,
        page: Option<u32>,
        limit: Option<u32>,
    ) -> GqlResult<GqlRolePage> {
        let state = context.data_unchecked::<AppState>();
        let view = state
            .roles
            .show(page.unwrap_or(1), limit)
            .await
            .map_err(gql_error)?;
        Ok(view.into())
    }
}

#[derive(Default)]
pub struct RolesMutation;

#[Object]
impl RolesMutation {
    async fn create_role(&self, context: &Context<'_>, name: String) -> GqlResult<GqlRole> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.roles.create(&name).await.map_err(gql_error)?.into())
    }

    async fn set_role_enabled(
        &self,
        context: &Context<'_>,
        id: RoleId,
        enabled: bool,
    ) -> GqlResult<GqlRole> {
        let state = context.data_unchecked::<AppState>();
        Ok(state
            .roles
            .set_enabled(id, enabled)
            .await
            .map_err(gql_error)?
            .into())
    }

    async fn delete_role(
        &self,
        context: &Context<'_>,
        id: RoleId,
        confirm: bool,
    ) -> GqlResult<GqlRolePage> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.roles.delete(id, confirm).await.map_err(gql_error)?.into())
    }
}
