//! # REST API for Pet Dashboards
//!
//! Read-only endpoints that return a pet's care status.
//!
//! - `GET /api/pets/:pet_id/dashboard?as_of=YYYY-MM-DD`
//! - `GET /api/pets/:pet_id/dashboard/summary?as_of=YYYY-MM-DD&limit=3`
//!
//! `as_of` defaults to the server's local date.

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use chrono::{Local, NaiveDate};
use log::{error, info, warn};
use shared::{ErrorResponse, PetDashboardRequest};

use super::mappers::dashboard_mapper::DashboardMapper;
use crate::backend::domain::care_dates::parse_care_date;
use crate::backend::domain::care_status::DEFAULT_PREVIEW_LIMIT;
use crate::backend::domain::CareError;
use crate::backend::AppState;

/// Get the full dashboard for a pet
pub async fn get_pet_dashboard(
    State(state): State<AppState>,
    pet_id: Result<Path<i64>, PathRejection>,
    request: Result<Query<PetDashboardRequest>, QueryRejection>,
) -> impl IntoResponse {
    let (pet_id, request) = match (pet_id, request) {
        (Ok(Path(pet_id)), Ok(Query(request))) => (pet_id, request),
        (Err(rejection), _) => return bad_request(rejection.body_text()),
        (_, Err(rejection)) => return bad_request(rejection.body_text()),
    };
    info!("GET /api/pets/{}/dashboard - request: {:?}", pet_id, request);

    let as_of = match resolve_as_of(request.as_of.as_deref()) {
        Ok(as_of) => as_of,
        Err(e) => return care_error_response(e),
    };

    match state.dashboard_service.build_pet_dashboard(pet_id, as_of).await {
        Ok(snapshot) => (
            StatusCode::OK,
            Json(DashboardMapper::to_dashboard_dto(snapshot)),
        )
            .into_response(),
        Err(e) => care_error_response(e),
    }
}

/// Get the dashboard with every section cut to `limit` items
pub async fn get_pet_dashboard_summary(
    State(state): State<AppState>,
    pet_id: Result<Path<i64>, PathRejection>,
    request: Result<Query<PetDashboardRequest>, QueryRejection>,
) -> impl IntoResponse {
    let (pet_id, request) = match (pet_id, request) {
        (Ok(Path(pet_id)), Ok(Query(request))) => (pet_id, request),
        (Err(rejection), _) => return bad_request(rejection.body_text()),
        (_, Err(rejection)) => return bad_request(rejection.body_text()),
    };
    info!("GET /api/pets/{}/dashboard/summary - request: {:?}", pet_id, request);

    let as_of = match resolve_as_of(request.as_of.as_deref()) {
        Ok(as_of) => as_of,
        Err(e) => return care_error_response(e),
    };
    let limit = request.limit.unwrap_or(DEFAULT_PREVIEW_LIMIT);

    match state
        .dashboard_service
        .build_pet_dashboard_summary(pet_id, as_of, limit)
        .await
    {
        Ok(summary) => (
            StatusCode::OK,
            Json(DashboardMapper::to_summary_dto(summary)),
        )
            .into_response(),
        Err(e) => care_error_response(e),
    }
}

/// Liveness probe
pub async fn health() -> &'static str {
    "ok"
}

fn resolve_as_of(as_of: Option<&str>) -> Result<NaiveDate, CareError> {
    match as_of {
        Some(raw) => parse_care_date(raw),
        None => Ok(Local::now().date_naive()),
    }
}

/// Malformed path or query parameters, rejected before reaching the domain
fn bad_request(message: String) -> Response {
    warn!("Rejected dashboard request: {}", message);
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse { error: message }),
    )
        .into_response()
}

fn care_error_response(e: CareError) -> Response {
    let status = match &e {
        CareError::InvalidDate { .. } => {
            warn!("Rejected dashboard request: {}", e);
            StatusCode::BAD_REQUEST
        }
        CareError::PetNotFound(_) => {
            warn!("Dashboard requested for missing pet: {}", e);
            StatusCode::NOT_FOUND
        }
        CareError::Fetch { source, .. } => {
            error!("Failed to build dashboard: {}: {:#}", e, source);
            StatusCode::BAD_GATEWAY
        }
        CareError::InvalidRecord { .. } => {
            error!("Failed to build dashboard: {}", e);
            StatusCode::BAD_GATEWAY
        }
    };

    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use shared::{ErrorResponse, PetDashboardResponse, PetDashboardSummaryResponse};
    use tower::ServiceExt;

    use crate::backend::domain::CareResource;
    use crate::backend::storage::csv::test_utils::TestEnvironment;
    use crate::backend::{create_router, AppState};

    fn router(env: &TestEnvironment) -> Router {
        let state = AppState::new(env.repository());
        create_router(state, "http://localhost:8080").expect("Failed to build router")
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    fn fixture() -> TestEnvironment {
        let env = TestEnvironment::new().expect("Failed to create test environment");
        env.write_shelter_fixture().expect("Failed to write fixture");
        env
    }

    #[tokio::test]
    async fn test_get_dashboard() {
        let env = fixture();

        let (status, body) = get(router(&env), "/api/pets/1/dashboard?as_of=2025-03-15").await;

        assert_eq!(status, StatusCode::OK);
        let dashboard: PetDashboardResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(dashboard.pet.name, "Biscuit");
        assert_eq!(dashboard.as_of, "2025-03-15");
        assert_eq!(dashboard.active_medications.len(), 1);
        assert_eq!(dashboard.active_medications[0].date_started, "2025-03-01");
        assert_eq!(dashboard.recent_injuries.len(), 1);
        assert_eq!(dashboard.recent_injuries[0].date, "2025-03-10");
        assert_eq!(dashboard.totals.diet, 2);
    }

    #[tokio::test]
    async fn test_get_dashboard_summary_with_limit() {
        let env = fixture();

        let (status, body) = get(
            router(&env),
            "/api/pets/1/dashboard/summary?as_of=2024-12-01&limit=1",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let summary: PetDashboardSummaryResponse = serde_json::from_slice(&body).unwrap();
        // Open-ended diets count as active before their start date
        assert_eq!(summary.diet.items.len(), 1);
        assert_eq!(summary.diet.remaining, 1);
        assert_eq!(summary.recent_injuries.items.len(), 0);
        assert_eq!(summary.totals.vaccinations, 1);
    }

    #[tokio::test]
    async fn test_as_of_defaults_to_today() {
        let env = fixture();

        let (status, body) = get(router(&env), "/api/pets/1/dashboard").await;

        assert_eq!(status, StatusCode::OK);
        let dashboard: PetDashboardResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(dashboard.as_of.len(), "YYYY-MM-DD".len());
    }

    #[tokio::test]
    async fn test_invalid_as_of_is_bad_request() {
        let env = fixture();

        let (status, body) = get(router(&env), "/api/pets/1/dashboard?as_of=2025-13-45").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error.error.contains("2025-13-45"));
    }

    #[tokio::test]
    async fn test_malformed_limit_is_json_bad_request() {
        let env = fixture();

        for uri in [
            "/api/pets/1/dashboard/summary?as_of=2025-03-15&limit=abc",
            "/api/pets/1/dashboard/summary?as_of=2025-03-15&limit=-1",
        ] {
            let (status, body) = get(router(&env), uri).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
            let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
            assert!(error.error.contains("query string"), "{}", error.error);
        }
    }

    #[tokio::test]
    async fn test_non_numeric_pet_id_is_json_bad_request() {
        let env = fixture();

        let (status, body) = get(router(&env), "/api/pets/abc/dashboard").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error.error.contains("abc"), "{}", error.error);
    }

    #[tokio::test]
    async fn test_unknown_pet_is_not_found() {
        let env = fixture();

        let (status, body) = get(router(&env), "/api/pets/99/dashboard/summary?as_of=2025-03-15").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "pet not found: 99");
    }

    #[tokio::test]
    async fn test_unreadable_collection_is_bad_gateway() {
        let env = fixture();
        env.write_resource(
            CareResource::InjuryReports,
            "id,pet_id,injury_id,body_part,description,date\n\
             1,1,2,leg,Limping,not-a-date\n",
        )
        .unwrap();

        let (status, body) = get(router(&env), "/api/pets/1/dashboard?as_of=2025-03-15").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "failed to fetch injury_reports");
    }

    #[tokio::test]
    async fn test_health() {
        let env = fixture();

        let (status, body) = get(router(&env), "/api/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }
}
