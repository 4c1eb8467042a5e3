use super::*;
use std::sync::Arc;

use axum::{body::Body, http::Request, http::StatusCode};
use shared::protocol::SimulationQuery;
use tower::ServiceExt;

fn ctx() -> ApiContext {
    ApiContext { max_shots: 10_000 }
}

#[tokio::test]
async fn success_returns_every_documented_field() {
    let response = run_simulation(&ctx(), "bell_phi_plus", Some(32))
        .await
        .expect("simulation succeeds");

    assert_eq!(response.bell_state, BellState::PhiPlus);
    assert_eq!(response.shots, 32);
    assert_eq!(response.bell_label, "|Φ⁺⟩ = (|00⟩ + |11⟩)/√2");
    assert_eq!(response.statevector, "0.707|00⟩ + 0.707|11⟩");
    assert!(!response.circuit_image.is_empty());
    assert!(!response.bloch_image.is_empty());
    assert!(!response.hist_image.is_empty());
}

#[tokio::test]
async fn artifact_payloads_decode_as_png() {
    let response = run_simulation(&ctx(), "bell_psi_minus", Some(16))
        .await
        .expect("simulation succeeds");

    for payload in [
        &response.circuit_image,
        &response.bloch_image,
        &response.hist_image,
    ] {
        let bytes = STANDARD.decode(payload).expect("valid base64");
        image::load_from_memory(&bytes).expect("valid PNG");
    }
}

#[tokio::test]
async fn shots_default_when_absent() {
    let response = run_simulation(&ctx(), "bell_phi_minus", None)
        .await
        .expect("simulation succeeds");
    assert_eq!(response.shots, DEFAULT_SHOTS);
}

#[tokio::test]
async fn rejects_unknown_bell_state() {
    let err = run_simulation(&ctx(), "bell_omega_plus", Some(8))
        .await
        .expect_err("unknown state must fail");
    assert_eq!(err.code, ErrorCode::Validation);
    assert!(err.message.contains("bell_omega_plus"));
}

#[tokio::test]
async fn rejects_zero_shots() {
    let err = run_simulation(&ctx(), "bell_phi_plus", Some(0))
        .await
        .expect_err("zero shots must fail");
    assert_eq!(err.code, ErrorCode::Validation);
}

#[tokio::test]
async fn rejects_shots_beyond_the_cap() {
    let ctx = ApiContext { max_shots: 100 };
    let err = run_simulation(&ctx, "bell_phi_plus", Some(101))
        .await
        .expect_err("excessive shots must fail");
    assert_eq!(err.code, ErrorCode::Validation);
    assert!(err.message.contains("100"));
}

#[tokio::test]
async fn router_serves_a_simulation_run() {
    let app = crate::build_router(Arc::new(crate::AppState { api: ctx() }));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/run_simulation?bell_state=bell_phi_plus&shots=16")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: SimulationResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.shots, 16);
    assert_eq!(body.statevector, "0.707|00⟩ + 0.707|11⟩");
}

#[tokio::test]
async fn router_maps_validation_failures_to_bad_request() {
    let app = crate::build_router(Arc::new(crate::AppState { api: ctx() }));
    let response = app
        .oneshot(
            Request::builder()
                .uri("/run_simulation?bell_state=nonsense")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let err: ApiError = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(err.code, ErrorCode::Validation);
}

#[test]
fn query_shape_matches_the_route_contract() {
    let query: SimulationQuery =
        serde_json::from_str(r#"{"bell_state":"bell_phi_plus","shots":1024}"#).unwrap();
    assert_eq!(query.bell_state, "bell_phi_plus");
    assert_eq!(query.shots, Some(1024));
}
