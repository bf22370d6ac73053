//! Workout log routes.

use actix_web::{web, HttpRequest, HttpResponse};

use gl_core::repositories::{
    EmailVerificationRepository, ExerciseRepository, PasswordResetRepository,
    SessionRepository, UserRepository, WorkoutSetRepository,
};
use gl_core::services::verification::MailServiceTrait;
use gl_shared::types::ApiResponse;

use crate::dto::workout::{
    DayLogs, GroupedLogsResponse, LogsQuery, LogsResponse, RecordSetRequest,
    SetRecordedResponse,
};
use crate::handlers::to_response;
use crate::routes::AppState;
use crate::session::authenticate;

/// Handler for POST /api/app/logs
///
/// Records one set against an exercise visible to the caller.
pub async fn record_set<U, V, R, S, M, E, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, V, R, S, M, E, W>>,
    request: web::Json<RecordSetRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    V: EmailVerificationRepository + 'static,
    R: PasswordResetRepository + 'static,
    S: SessionRepository + 'static,
    M: MailServiceTrait + 'static,
    E: ExerciseRepository + 'static,
    W: WorkoutSetRepository + 'static,
{
    let user_id = match authenticate(&req, &state.session_service, &state.session_config).await
    {
        Ok(user_id) => user_id,
        Err(error) => return to_response(&error),
    };

    match state
        .workout_service
        .record_set(
            user_id,
            request.exercise_id,
            request.weight_kg,
            request.reps,
            request.comment.clone(),
        )
        .await
    {
        Ok(log) => HttpResponse::Ok().json(ApiResponse::success(SetRecordedResponse { log })),
        Err(error) => to_response(&error),
    }
}

/// Handler for GET /api/app/logs?exercise_id=...[&group=day]
///
/// The caller's history for one exercise, newest first; `group=day` buckets
/// consecutive entries by calendar day.
pub async fn list_logs<U, V, R, S, M, E, W>(
    req: HttpRequest,
    state: web::Data<AppState<U, V, R, S, M, E, W>>,
    query: web::Query<LogsQuery>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    V: EmailVerificationRepository + 'static,
    R: PasswordResetRepository + 'static,
    S: SessionRepository + 'static,
    M: MailServiceTrait + 'static,
    E: ExerciseRepository + 'static,
    W: WorkoutSetRepository + 'static,
{
    let user_id = match authenticate(&req, &state.session_service, &state.session_config).await
    {
        Ok(user_id) => user_id,
        Err(error) => return to_response(&error),
    };

    if query.group.as_deref() == Some("day") {
        match state
            .workout_service
            .history_by_day(user_id, query.exercise_id)
            .await
        {
            Ok(groups) => {
                let days = groups
                    .into_iter()
                    .map(|g| DayLogs {
                        day: g.day,
                        items: g.items,
                    })
                    .collect();
                HttpResponse::Ok().json(ApiResponse::success(GroupedLogsResponse { days }))
            }
            Err(error) => to_response(&error),
        }
    } else {
        match state
            .workout_service
            .history(user_id, query.exercise_id)
            .await
        {
            Ok(logs) => HttpResponse::Ok().json(ApiResponse::success(LogsResponse { logs })),
            Err(error) => to_response(&error),
        }
    }
}
