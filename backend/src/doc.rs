//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the user and health endpoints together with the
//! envelope schema wrappers from [`crate::inbound::http::schemas`]. The
//! greeting endpoint is left out on purpose.
//!
//! The document backs Swagger UI when enabled and is exported by
//! `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{
    ErrorResultSchema, IdResultSchema, ResultCodeSchema, UserListResultSchema, UserResultSchema,
    UserSchema,
};
use crate::inbound::http::users::UserRequest;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        description = "In-memory user management with a uniform result envelope."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserRequest,
        UserSchema,
        ResultCodeSchema,
        IdResultSchema,
        UserResultSchema,
        UserListResultSchema,
        ErrorResultSchema
    )),
    tags(
        (name = "users", description = "Create, read, update and delete users"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
