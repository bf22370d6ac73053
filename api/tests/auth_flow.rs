//! End-to-end tests for the HTTP API over in-memory stores.

use actix_web::cookie::Cookie;
use actix_web::{test, web};
use std::sync::Arc;

use gl_api::app::create_app;
use gl_api::routes::AppState;
use gl_core::repositories::{
    MockEmailVerificationRepository, MockExerciseRepository, MockPasswordResetRepository,
    MockSessionRepository, MockUserRepository,
};
use gl_core::repositories::MockWorkoutSetRepository;
use gl_core::services::auth::{AuthService, AuthServiceConfig};
use gl_core::services::catalog::CatalogService;
use gl_core::services::session::SessionService;
use gl_core::services::verification::{VerificationService, VerificationServiceConfig};
use gl_core::services::workout::WorkoutService;
use gl_infra::mail::MockMailService;
use gl_shared::config::SessionConfig;

type TestState = AppState<
    MockUserRepository,
    MockEmailVerificationRepository,
    MockPasswordResetRepository,
    MockSessionRepository,
    MockMailService,
    MockExerciseRepository,
    MockWorkoutSetRepository,
>;

fn test_state() -> (web::Data<TestState>, Arc<MockMailService>) {
    let users = Arc::new(MockUserRepository::new());
    let verifications = Arc::new(MockEmailVerificationRepository::new());
    let resets = Arc::new(MockPasswordResetRepository::new());
    let sessions = Arc::new(MockSessionRepository::new());
    let exercises = Arc::new(MockExerciseRepository::new());
    let workouts = Arc::new(MockWorkoutSetRepository::new());
    let mail = Arc::new(MockMailService::new());

    let verification_service = Arc::new(VerificationService::new(
        verifications,
        resets,
        mail.clone(),
        VerificationServiceConfig::default(),
    ));
    let session_service = Arc::new(SessionService::new(sessions, 30));
    let auth_service = Arc::new(AuthService::new(
        users,
        verification_service,
        session_service.clone(),
        AuthServiceConfig::default(),
    ));
    let catalog_service = Arc::new(CatalogService::new(exercises.clone(), workouts.clone()));
    let workout_service = Arc::new(WorkoutService::new(exercises, workouts));

    let state = web::Data::new(AppState {
        auth_service,
        session_service,
        catalog_service,
        workout_service,
        session_config: SessionConfig::default(),
        database_configured: false,
        mail_configured: false,
    });

    (state, mail)
}

fn session_cookie_from<B>(resp: &actix_web::dev::ServiceResponse<B>) -> Option<Cookie<'static>> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "session")
        .map(|c| c.into_owned())
}

#[actix_web::test]
async fn test_register_verify_login_flow() {
    let (state, mail) = test_state();
    let app = test::init_service(create_app(state)).await;

    // Register: a code goes out
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "new@example.com",
                "password": "abcdefgh"
            }))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let code = mail.sent_code("new@example.com").unwrap();

    // Immediate re-request hits the cooldown
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "new@example.com",
                "password": "abcdefgh"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 429);

    // Wrong code is rejected
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/verify")
            .set_json(serde_json::json!({
                "email": "new@example.com",
                "code": "XXXXXX"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 401);

    // Correct code creates the account and sets the session cookie
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/verify")
            .set_json(serde_json::json!({
                "email": "new@example.com",
                "code": code
            }))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    assert!(session_cookie_from(&resp).is_some());

    // Password login works afterwards
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "new@example.com",
                "password": "abcdefgh"
            }))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    // Wrong password does not
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "new@example.com",
                "password": "wrong-password"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 401);
}

#[actix_web::test]
async fn test_duplicate_registration_conflict() {
    let (state, mail) = test_state();
    let app = test::init_service(create_app(state)).await;

    for uri_body in [("new@example.com", "abcdefgh")] {
        let resp = test::call_service(
            &app,
            test::TestRequest::post()
                .uri("/api/auth/register")
                .set_json(serde_json::json!({
                    "email": uri_body.0,
                    "password": uri_body.1
                }))
                .to_request(),
        )
        .await;
        assert!(resp.status().is_success());
    }
    let code = mail.sent_code("new@example.com").unwrap();
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/verify")
            .set_json(serde_json::json!({"email": "new@example.com", "code": code}))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    // Registering the same address again conflicts
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "new@example.com",
                "password": "abcdefgh"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 409);
}

#[actix_web::test]
async fn test_password_reset_flow() {
    let (state, mail) = test_state();
    let app = test::init_service(create_app(state)).await;

    // Reset for an unknown account is reported
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/forgot")
            .set_json(serde_json::json!({"email": "missing@example.com"}))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 404);

    // Create an account
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "user@example.com",
                "password": "abcdefgh"
            }))
            .to_request(),
    )
    .await;
    let code = mail.sent_code("user@example.com").unwrap();
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/verify")
            .set_json(serde_json::json!({"email": "user@example.com", "code": code}))
            .to_request(),
    )
    .await;

    // Request and confirm a reset
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/forgot")
            .set_json(serde_json::json!({"email": "user@example.com"}))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let reset_code = mail.sent_code("user@example.com").unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/reset")
            .set_json(serde_json::json!({
                "email": "user@example.com",
                "code": reset_code,
                "new_password": "12345678x"
            }))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    assert!(session_cookie_from(&resp).is_some());

    // Only the new password logs in
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "user@example.com",
                "password": "abcdefgh"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 401);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "user@example.com",
                "password": "12345678x"
            }))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
}

#[actix_web::test]
async fn test_app_routes_require_session() {
    let (state, _) = test_state();
    let app = test::init_service(create_app(state)).await;

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/app/exercises")
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 401);
}

#[actix_web::test]
async fn test_exercise_and_log_flow() {
    let (state, mail) = test_state();
    let app = test::init_service(create_app(state)).await;

    // Register and verify to obtain a session cookie
    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "lifter@example.com",
                "password": "abcdefgh"
            }))
            .to_request(),
    )
    .await;
    let code = mail.sent_code("lifter@example.com").unwrap();
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/verify")
            .set_json(serde_json::json!({"email": "lifter@example.com", "code": code}))
            .to_request(),
    )
    .await;
    let cookie = session_cookie_from(&resp).unwrap();

    // Unknown equipment is rejected at the boundary
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/app/exercises")
            .cookie(cookie.clone())
            .set_json(serde_json::json!({
                "name": "Kettlebell swing",
                "equipment": "kettlebell",
                "muscle": "fullbody"
            }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 400);

    // Create a private exercise
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/app/exercises")
            .cookie(cookie.clone())
            .set_json(serde_json::json!({
                "name": "Incline press",
                "equipment": "dumbbell",
                "muscle": "chest"
            }))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());
    let body: serde_json::Value = test::read_body_json(resp).await;
    let exercise_id = body["data"]["exercise"]["id"].as_str().unwrap().to_string();

    // Record a set against it
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/app/logs")
            .cookie(cookie.clone())
            .set_json(serde_json::json!({
                "exercise_id": exercise_id,
                "weight_kg": 27.5,
                "reps": 10,
                "comment": "warm-up"
            }))
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    // The exercise now shows up in the recent shelf
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/app/exercises")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["recent"][0]["name"], "Incline press");

    // History lists the set, flat and grouped
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/api/app/logs?exercise_id={}", exercise_id))
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["logs"][0]["reps"], 10);

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!(
                "/api/app/logs?exercise_id={}&group=day",
                exercise_id
            ))
            .cookie(cookie)
            .to_request(),
    )
    .await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["days"][0]["items"][0]["weight_kg"], 27.5);
}

#[actix_web::test]
async fn test_logout_clears_session() {
    let (state, mail) = test_state();
    let app = test::init_service(create_app(state)).await;

    test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "email": "user@example.com",
                "password": "abcdefgh"
            }))
            .to_request(),
    )
    .await;
    let code = mail.sent_code("user@example.com").unwrap();
    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/verify")
            .set_json(serde_json::json!({"email": "user@example.com", "code": code}))
            .to_request(),
    )
    .await;
    let cookie = session_cookie_from(&resp).unwrap();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/api/auth/logout")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    // The revoked session no longer authenticates
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/api/app/exercises")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(resp.status().as_u16(), 401);
}
