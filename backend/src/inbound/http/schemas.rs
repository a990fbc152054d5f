//! OpenAPI schema definitions for domain and envelope types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers below mirror their JSON shape and live in the inbound adapter
//! layer where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::inbound::http::envelope::ResultCode`].
#[derive(ToSchema)]
#[schema(as = ResultCode)]
pub enum ResultCodeSchema {
    /// The operation completed.
    #[schema(rename = "SUCCESS")]
    Success,
    /// The operation was rejected.
    #[schema(rename = "ERROR")]
    Error,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserSchema {
    /// Store-assigned identifier.
    #[schema(example = 1, minimum = 1)]
    id: u32,
    /// User name.
    #[schema(example = "Tom", min_length = 1)]
    name: String,
    /// Age in years.
    #[schema(example = 18)]
    age: i32,
    /// Creation timestamp, RFC 3339.
    #[schema(
        rename = "createTime",
        value_type = String,
        format = DateTime,
        example = "2018-05-07T08:00:00Z"
    )]
    create_time: String,
}

/// Envelope whose payload is a user id.
#[derive(ToSchema)]
#[schema(as = IdResult)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct IdResultSchema {
    /// Outcome discriminator.
    code: ResultCodeSchema,
    /// Present only on `ERROR`.
    message: Option<String>,
    /// Present only on `SUCCESS`.
    #[schema(example = 6)]
    data: Option<u32>,
}

/// Envelope whose payload is a single user.
#[derive(ToSchema)]
#[schema(as = UserResult)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserResultSchema {
    /// Outcome discriminator.
    code: ResultCodeSchema,
    /// Present only on `ERROR`.
    message: Option<String>,
    /// Present only on `SUCCESS`.
    data: Option<UserSchema>,
}

/// Envelope whose payload is a list of users.
#[derive(ToSchema)]
#[schema(as = UserListResult)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct UserListResultSchema {
    /// Outcome discriminator.
    code: ResultCodeSchema,
    /// Present only on `ERROR`.
    message: Option<String>,
    /// Present only on `SUCCESS`.
    data: Option<Vec<UserSchema>>,
}

/// Envelope returned for every rejected request.
#[derive(ToSchema)]
#[schema(as = ErrorResult)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorResultSchema {
    /// Always `ERROR`.
    code: ResultCodeSchema,
    /// Human-readable reason.
    #[schema(example = "user not found")]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn object_properties<S: PartialSchema>() -> Vec<String> {
        match S::schema() {
            RefOr::T(Schema::Object(obj)) => obj.properties.keys().cloned().collect(),
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn user_schema_uses_camel_case_fields() {
        let fields = object_properties::<UserSchema>();
        for field in ["id", "name", "age", "createTime"] {
            assert!(fields.iter().any(|f| f == field), "missing field '{field}'");
        }
    }

    #[test]
    fn envelope_schemas_expose_code_message_and_data() {
        for fields in [
            object_properties::<IdResultSchema>(),
            object_properties::<UserResultSchema>(),
            object_properties::<UserListResultSchema>(),
        ] {
            for field in ["code", "message", "data"] {
                assert!(fields.iter().any(|f| f == field), "missing field '{field}'");
            }
        }
    }

    #[test]
    fn error_schema_has_no_data() {
        let fields = object_properties::<ErrorResultSchema>();
        assert!(!fields.iter().any(|f| f == "data"));
    }
}
