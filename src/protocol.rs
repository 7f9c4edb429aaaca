//! Public protocol structs for the HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.
//!
//! Request field names follow the front end (`studentData`, `curriculumTopics`,
//! `availableTopics`); engine records inside them keep their storage names.

use serde::{Deserialize, Serialize};

use crate::domain::{CurriculumTopic, LearningPath, ProgressRecord, Question, RecommendationResult, StudentData};

#[derive(Debug, Deserialize)]
pub struct AnalysisIn {
    #[serde(rename = "studentData", default)]
    pub student_data: StudentData,
    #[serde(rename = "curriculumTopics", default)]
    pub curriculum_topics: Vec<CurriculumTopic>,
}
#[derive(Serialize)]
pub struct AnalysisOut {
    pub success: bool,
    pub analysis: RecommendationResult,
}

#[derive(Debug, Deserialize)]
pub struct LearningPathIn {
    #[serde(rename = "studentData", default)]
    pub student_data: StudentData,
    #[serde(rename = "availableTopics", default)]
    pub available_topics: Vec<CurriculumTopic>,
}
#[derive(Serialize)]
pub struct LearningPathOut {
    pub success: bool,
    pub recommendations: LearningPath,
}

#[derive(Debug, Deserialize)]
pub struct QuestionsIn {
    pub topic: CurriculumTopic,
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub index: Option<u64>,
    /// Reproducible batch; otherwise the configured or wall-clock seed applies.
    #[serde(default)]
    pub seed: Option<u64>,
}
#[derive(Serialize)]
pub struct QuestionsOut {
    pub success: bool,
    /// Count actually attempted after defaults and caps.
    pub requested: usize,
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
pub struct DifficultyIn {
    #[serde(default)]
    pub progress: Option<ProgressRecord>,
}
#[derive(Serialize)]
pub struct DifficultyOut {
    pub level: u8,
    pub label: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}
