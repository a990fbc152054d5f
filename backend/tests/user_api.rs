//! End-to-end flows through the fully wired application.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web};
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use user_api::domain::UserId;
use user_api::inbound::http::envelope::{JsonResult, ResultCode};
use user_api::inbound::http::health::HealthState;
use user_api::inbound::http::state::HttpState;
use user_api::middleware::trace::TRACE_ID_HEADER;
use user_api::outbound::memory::InMemoryUserStore;
use user_api::server::{AppDependencies, build_app};

struct FrozenClock(DateTime<Utc>);

impl Clock for FrozenClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[fixture]
fn deps() -> AppDependencies {
    let now = Utc
        .with_ymd_and_hms(2018, 5, 7, 8, 0, 0)
        .single()
        .expect("valid timestamp");
    let store = InMemoryUserStore::seeded(Arc::new(FrozenClock(now))).expect("seed users");
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    AppDependencies {
        health_state,
        http_state: web::Data::new(HttpState::new(Arc::new(store))),
        json_limit: 256,
        swagger_ui: true,
    }
}

#[rstest]
#[actix_web::test]
async fn create_read_update_delete_round_trip(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;

    let created: JsonResult<UserId> = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/user")
            .set_json(json!({"name": "Ann", "age": 30}))
            .to_request(),
    )
    .await;
    assert_eq!(created.code(), ResultCode::Success);
    assert_eq!(created.into_data(), Some(UserId::new(6)));

    let fetched: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/user/6").to_request(),
    )
    .await;
    assert_eq!(
        fetched,
        json!({
            "code": "SUCCESS",
            "data": {
                "id": 6,
                "name": "Ann",
                "age": 30,
                "createTime": "2018-05-07T08:00:00Z"
            }
        })
    );

    let updated: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::put()
            .uri("/user/6")
            .set_json(json!({"name": "Annie", "age": 31}))
            .to_request(),
    )
    .await;
    assert_eq!(updated["data"]["name"], "Annie");
    assert_eq!(updated["data"]["createTime"], "2018-05-07T08:00:00Z");

    let deleted: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::delete().uri("/user/6").to_request(),
    )
    .await;
    assert_eq!(deleted, json!({"code": "SUCCESS", "data": 6}));

    let res = test::call_service(&app, test::TestRequest::get().uri("/user/6").to_request()).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body, json!({"code": "ERROR", "message": "user not found"}));

    let again: JsonResult<UserId> = test::call_and_read_body_json(
        &app,
        test::TestRequest::post()
            .uri("/user")
            .set_json(json!({"name": "Bob", "age": 40}))
            .to_request(),
    )
    .await;
    assert_eq!(again.into_data(), Some(UserId::new(7)));
}

#[rstest]
#[actix_web::test]
async fn every_response_carries_a_trace_id(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;

    for uri in ["/users", "/user/999", "/user/abc", "/health/ready"] {
        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert!(
            res.headers().contains_key(TRACE_ID_HEADER),
            "missing trace id on {uri}"
        );
    }
}

#[rstest]
#[actix_web::test]
async fn oversized_bodies_are_rejected_with_the_envelope(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;
    let name = "x".repeat(512);

    let res = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/user")
            .set_json(json!({"name": name, "age": 1}))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "ERROR");
}

#[rstest]
#[actix_web::test]
async fn greeting_wins_over_the_id_route(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;

    let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/user/hi").to_request())
        .await;
    assert_eq!(body.as_ref(), b" hi you!");
}

#[rstest]
#[actix_web::test]
async fn openapi_document_is_served_when_enabled(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;

    let doc: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/api-docs/openapi.json").to_request(),
    )
    .await;
    assert_eq!(doc["info"]["title"], "User API");
    assert!(doc["paths"].get("/users").is_some());
    assert!(doc["paths"].get("/user/hi").is_none());
}

#[rstest]
#[actix_web::test]
async fn openapi_document_is_absent_when_disabled(deps: AppDependencies) {
    let app = test::init_service(build_app(AppDependencies {
        swagger_ui: false,
        ..deps
    }))
    .await;

    let res = test::call_service(
        &app,
        test::TestRequest::get().uri("/api-docs/openapi.json").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
