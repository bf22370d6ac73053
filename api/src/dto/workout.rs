use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gl_core::domain::entities::workout_set::WorkoutSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordSetRequest {
    pub exercise_id: Uuid,
    pub weight_kg: f64,
    pub reps: i32,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogsQuery {
    pub exercise_id: Uuid,
    /// `day` groups the response into calendar-day buckets
    pub group: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRecordedResponse {
    pub log: WorkoutSet,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsResponse {
    pub logs: Vec<WorkoutSet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayLogs {
    pub day: NaiveDate,
    pub items: Vec<WorkoutSet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupedLogsResponse {
    pub days: Vec<DayLogs>,
}
