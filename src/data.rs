use crate::model::Dataset;
use crate::solver::{Solution, StrategyKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

/// One survey row as handed over by the upload/parsing layer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfessorSurvey {
    pub name: String,
    /// Course name to the raw rating cell. Numbers and strings are accepted.
    #[serde(default)]
    pub preferences: HashMap<String, Value>,
    /// Timeslot labels the professor ticked.
    #[serde(default)]
    pub availability: Vec<String>,
}

/// A course entry when the request overrides the standard catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CourseSpec {
    pub name: String,
    pub duration: u8,
}

/// The complete input for the scheduling problem.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchedulingInput {
    pub professors: Vec<ProfessorSurvey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<CourseSpec>>,
    /// Duration in hours ("2", "3") to ordered slot labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeslots: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    pub strategy: StrategyKind,
}

impl SchedulingInput {
    /// The single-row survey bundled for demonstrations.
    pub fn sample() -> Self {
        let preferences = [
            ("Design and Analysis of Algorithms", "5"),
            ("Information Management", "5"),
            ("Operating Systems", "1"),
            ("Data Communications and Networking", "2"),
            ("Technical Documentations", "3"),
        ]
        .into_iter()
        .map(|(course, rating)| (course.to_string(), Value::from(rating)))
        .collect();

        Self {
            professors: vec![ProfessorSurvey {
                name: "Kevin G. Fulgencio".to_string(),
                preferences,
                availability: vec![
                    "9:00 am - 12:00 pm".to_string(),
                    "12:00 pm - 3:00 pm".to_string(),
                ],
            }],
            courses: None,
            timeslots: None,
            strategy: StrategyKind::Greedy,
        }
    }
}

/// Represents a single, scheduled course assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct AssignmentRecord {
    pub professor: String,
    pub course: String,
    pub timeslot: String,
}

/// The final output of the solver.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchedulingOutput {
    pub assignments: Vec<AssignmentRecord>,
    pub score: u32,
    pub steps: Vec<String>,
    pub strategy: StrategyKind,
}

impl SchedulingOutput {
    pub fn from_solution(dataset: &Dataset, solution: Solution) -> Self {
        let assignments = solution
            .schedule
            .iter()
            .map(|a| AssignmentRecord {
                professor: dataset.professor(a.professor).name.clone(),
                course: dataset.course(a.course).name.clone(),
                timeslot: dataset.timeslots.label(a.slot).to_string(),
            })
            .collect();

        Self {
            assignments,
            score: solution.score,
            steps: solution.trace.into_steps(),
            strategy: solution.strategy,
        }
    }
}

/// Body of the export endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub assignments: Vec<AssignmentRecord>,
}
