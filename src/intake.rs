//! Turns survey rows into the fixed-shape domain records the engine reads.

use crate::data::{ProfessorSurvey, SchedulingInput};
use crate::error::SchedulerError;
use crate::model::{
    Course, CourseId, Dataset, Duration, Professor, TimeslotCatalog, standard_courses,
};
use log::{info, warn};
use serde_json::Value;
use std::collections::HashMap;

const MAX_PREFERENCE: i64 = 5;

/// Blank, unparsable and out-of-range ratings all read as 0.
pub fn coerce_preference(raw: &Value) -> u8 {
    let parsed = match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if (0..=MAX_PREFERENCE).contains(&v) => v as u8,
        _ => 0,
    }
}

fn courses_from(input: &SchedulingInput) -> Result<Vec<Course>, SchedulerError> {
    let Some(specs) = &input.courses else {
        return Ok(standard_courses());
    };
    specs
        .iter()
        .map(|spec| {
            Duration::from_hours(spec.duration)
                .map(|d| Course::new(spec.name.clone(), d))
                .ok_or_else(|| SchedulerError::UnsupportedDuration {
                    course: spec.name.clone(),
                    hours: spec.duration,
                })
        })
        .collect()
}

fn timeslots_from(input: &SchedulingInput) -> Result<TimeslotCatalog, SchedulerError> {
    let Some(groups) = &input.timeslots else {
        return Ok(TimeslotCatalog::standard());
    };
    let mut catalog = TimeslotCatalog::new();
    for (key, labels) in groups {
        let duration = key
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Duration::from_hours)
            .ok_or_else(|| SchedulerError::UnsupportedSlotDuration(key.clone()))?;
        for label in labels {
            catalog = catalog.with_slot(duration, label.as_str());
        }
    }
    Ok(catalog)
}

fn professor_from(survey: &ProfessorSurvey, courses: &[Course], timeslots: &TimeslotCatalog) -> Professor {
    let mut professor = Professor::new(survey.name.clone(), courses.len());

    for (index, course) in courses.iter().enumerate() {
        if let Some(raw) = survey.preferences.get(&course.name) {
            professor = professor.with_preference(CourseId(index), coerce_preference(raw));
        }
    }

    for label in &survey.availability {
        let Some(slot) = timeslots.lookup(label) else {
            warn!(
                "Professor {} marked unknown timeslot '{}'; ignoring it",
                survey.name, label
            );
            continue;
        };
        for duration in Duration::ALL {
            if timeslots.contains(duration, slot) {
                professor = professor.with_availability(duration, slot);
            }
        }
    }
    professor
}

/// Builds the dataset for one invocation. A repeated professor name keeps its
/// first position but takes the later row's answers.
pub fn build_dataset(input: &SchedulingInput) -> Result<Dataset, SchedulerError> {
    let courses = courses_from(input)?;
    let timeslots = timeslots_from(input)?;

    let mut professors: Vec<Professor> = Vec::with_capacity(input.professors.len());
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for survey in &input.professors {
        let professor = professor_from(survey, &courses, &timeslots);
        match positions.get(survey.name.as_str()) {
            Some(&at) => {
                warn!("Duplicate professor '{}'; keeping the later row", survey.name);
                professors[at] = professor;
            }
            None => {
                positions.insert(survey.name.as_str(), professors.len());
                professors.push(professor);
            }
        }
    }

    info!("Parsed {} professors", professors.len());
    for professor in &professors {
        log::debug!(
            "Professor: {} preferences {:?} availability {:?}",
            professor.name,
            professor.preferences,
            professor.availability
        );
    }

    Ok(Dataset::new(professors, courses, timeslots))
}
