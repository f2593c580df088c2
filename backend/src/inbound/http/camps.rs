//! Camp API handlers.
//!
//! ```text
//! GET /camps
//! POST /camps {"name":"Spring drive","location":"Town hall","date":"2026-04-01","available_spots":25}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;

use crate::domain::{Camp, CampDraft, IntegerInput};
use crate::inbound::http::ApiResult;
use crate::inbound::http::donors::MessageResponse;
use crate::inbound::http::schemas::{CampSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// Success message for `POST /camps`.
pub const CAMP_ADDED_MESSAGE: &str = "Camp added successfully!";

/// Request body for `POST /camps`.
#[derive(Debug, Default, Deserialize, utoipa::ToSchema)]
#[serde(deny_unknown_fields)]
pub struct AddCampRequest {
    #[schema(example = "Spring drive")]
    pub name: Option<String>,
    #[schema(example = "Town hall")]
    pub location: Option<String>,
    #[schema(example = "2026-04-01")]
    pub date: Option<String>,
    /// Integer, or a string holding one.
    #[schema(value_type = Option<i64>, example = 25)]
    pub available_spots: Option<IntegerInput>,
}

impl From<AddCampRequest> for CampDraft {
    fn from(value: AddCampRequest) -> Self {
        Self {
            name: value.name,
            location: value.location,
            date: value.date,
            available_spots: value.available_spots,
        }
    }
}

/// List all donation camps.
#[utoipa::path(
    get,
    path = "/camps",
    responses(
        (status = 200, description = "Camps", body = [CampSchema]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["camps"],
    operation_id = "listCamps"
)]
#[get("/camps")]
pub async fn list_camps(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Camp>>> {
    Ok(web::Json(state.camps_query.list_camps().await?))
}

/// Create a donation camp.
#[utoipa::path(
    post,
    path = "/camps",
    request_body = AddCampRequest,
    responses(
        (status = 201, description = "Camp added", body = MessageResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["camps"],
    operation_id = "addCamp"
)]
#[post("/camps")]
pub async fn add_camp(
    state: web::Data<HttpState>,
    payload: web::Json<AddCampRequest>,
) -> ApiResult<HttpResponse> {
    state.camps.add_camp(payload.into_inner().into()).await?;
    Ok(HttpResponse::Created().json(MessageResponse::new(CAMP_ADDED_MESSAGE)))
}

#[cfg(test)]
mod tests {
    //! Handler tests over in-memory adapters and mocked ports.
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test, web};
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::Error;
    use crate::domain::ports::MockCampsQuery;
    use crate::inbound::http::test_utils::{TestHarness, read_json};
    use crate::inbound::http::validation::json_config;

    #[rstest]
    #[actix_web::test]
    async fn added_camp_is_listed() {
        let harness = TestHarness::new();
        let app = actix_test::init_service(harness.app()).await;

        let created = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/camps")
                .set_json(json!({
                    "name": "Spring drive",
                    "location": "Town hall",
                    "date": "2026-04-01",
                    "available_spots": "25",
                }))
                .to_request(),
        )
        .await;
        assert_eq!(created.status(), StatusCode::CREATED);
        assert_eq!(
            read_json(created).await,
            json!({ "message": CAMP_ADDED_MESSAGE })
        );

        let listed =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/camps").to_request())
                .await;
        assert_eq!(listed.status(), StatusCode::OK);
        let body = read_json(listed).await;
        let camps = body.as_array().expect("camp array");
        assert_eq!(camps.len(), 1);
        assert_eq!(camps[0]["available_spots"], 25);
        assert!(camps[0].get("_id").is_none());
        assert!(camps[0]["created_at"].is_string());
    }

    #[rstest]
    #[case(json!({ "name": "n", "location": "l", "available_spots": 3 }), json!(["date"]))]
    #[case(json!({ "name": "n", "location": "l", "date": null, "available_spots": 3 }), json!(["date"]))]
    #[case(json!({}), json!(["name", "location", "date", "available_spots"]))]
    #[actix_web::test]
    async fn missing_fields_are_listed(#[case] payload: Value, #[case] expected: Value) {
        let harness = TestHarness::new();
        let app = actix_test::init_service(harness.app()).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/camps")
                .set_json(payload)
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = read_json(response).await;
        assert_eq!(body["message"], "Missing required fields");
        assert_eq!(body["details"]["missing_fields"], expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn list_failure_is_upstream_error() {
        let harness = TestHarness::new();
        let mut query = MockCampsQuery::new();
        query
            .expect_list_camps()
            .returning(|| Err(Error::upstream("camp repository connection failed: timeout")));
        let mut state = harness.state();
        state.camps_query = Arc::new(query);

        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(json_config())
                .service(list_camps),
        )
        .await;
        let response =
            actix_test::call_service(&app, actix_test::TestRequest::get().uri("/camps").to_request())
                .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(response).await;
        assert_eq!(body["code"], "upstream_failure");
    }
}
