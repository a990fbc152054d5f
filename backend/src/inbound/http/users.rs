//! User API handlers.
//!
//! ```text
//! POST   /user        {"name":"Ann","age":30}
//! GET    /user/{id}
//! PUT    /user/{id}   {"name":"Ann","age":31}
//! DELETE /user/{id}
//! GET    /users
//! ```
//!
//! Every handler answers with a [`JsonResult`] envelope. Rejections surface
//! as [`ApiError`](crate::inbound::http::error::ApiError), which renders the
//! `ERROR` form of the same envelope.

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{User, UserDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::JsonResult;
use crate::inbound::http::extractors::OptionalJson;
use crate::inbound::http::schemas::{
    ErrorResultSchema, IdResultSchema, UserListResultSchema, UserResultSchema,
};
use crate::inbound::http::state::HttpState;

/// Request body for creating or updating a user.
///
/// Every field is optional on the wire so that a missing name is reported as
/// a validation failure rather than a decoding error. The body itself may be
/// empty or `null`, which reads as a request with no fields. `id` is accepted for
/// compatibility and ignored; the store assigns ids and the path selects the
/// record to update.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    /// Ignored.
    pub id: Option<u32>,
    /// Required, non-empty.
    #[schema(example = "Ann")]
    pub name: Option<String>,
    /// Defaults to 0 when absent.
    #[schema(example = 30)]
    pub age: Option<i32>,
}

impl From<UserRequest> for UserDraft {
    fn from(value: UserRequest) -> Self {
        Self::new(value.name.unwrap_or_default(), value.age.unwrap_or_default())
    }
}

fn draft_from(payload: OptionalJson<UserRequest>) -> UserDraft {
    payload
        .into_inner()
        .map(UserDraft::from)
        .unwrap_or_default()
}

/// Create a user.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_api::inbound::http::users::create_user;
///
/// let app = App::new().service(create_user);
/// ```
#[utoipa::path(
    post,
    path = "/user",
    request_body = UserRequest,
    responses(
        (status = 200, description = "User created; data is the new id", body = IdResultSchema),
        (status = 400, description = "User or username is empty", body = ErrorResultSchema),
        (status = 500, description = "Internal server error", body = ErrorResultSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/user")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: OptionalJson<UserRequest>,
) -> ApiResult<web::Json<JsonResult<UserId>>> {
    let id = state.users.create(draft_from(payload))?;
    info!(user_id = %id, "user created");
    Ok(web::Json(JsonResult::success(id)))
}

/// Fetch a user by id.
#[utoipa::path(
    get,
    path = "/user/{id}",
    params(("id" = u32, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserResultSchema),
        (status = 400, description = "Malformed user id", body = ErrorResultSchema),
        (status = 404, description = "User not found", body = ErrorResultSchema)
    ),
    tags = ["users"],
    operation_id = "getUserById"
)]
#[get("/user/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<u32>,
) -> ApiResult<web::Json<JsonResult<User>>> {
    let user = state.users.get(UserId::new(path.into_inner()))?;
    Ok(web::Json(JsonResult::success(user)))
}

/// Update the name and age of a user.
///
/// The path id selects the record; an `id` in the body is ignored.
#[utoipa::path(
    put,
    path = "/user/{id}",
    params(("id" = u32, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResultSchema),
        (status = 400, description = "Update payload or username is empty", body = ErrorResultSchema),
        (status = 404, description = "User not found", body = ErrorResultSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/user/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<u32>,
    payload: OptionalJson<UserRequest>,
) -> ApiResult<web::Json<JsonResult<User>>> {
    let id = UserId::new(path.into_inner());
    let user = state.users.update(id, draft_from(payload))?;
    info!(user_id = %id, "user updated");
    Ok(web::Json(JsonResult::success(user)))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/user/{id}",
    params(("id" = u32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted; data is the removed id", body = IdResultSchema),
        (status = 400, description = "Malformed user id", body = ErrorResultSchema),
        (status = 404, description = "User not found", body = ErrorResultSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/user/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<u32>,
) -> ApiResult<web::Json<JsonResult<UserId>>> {
    let id = state.users.delete(UserId::new(path.into_inner()))?;
    info!(user_id = %id, "user deleted");
    Ok(web::Json(JsonResult::success(id)))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = UserListResultSchema),
        (status = 500, description = "Internal server error", body = ErrorResultSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<JsonResult<Vec<User>>>> {
    let users = state.users.list()?;
    Ok(web::Json(JsonResult::success(users)))
}

/// Plain-text greeting kept out of the OpenAPI document.
///
/// Must be registered before [`get_user`] so `/user/hi` is not parsed as an
/// id.
#[get("/user/hi")]
pub async fn greet() -> &'static str {
    " hi you!"
}
