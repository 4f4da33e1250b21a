//! Legality of a candidate schedule.
//!
//! Caps are cumulative, so the check always walks the whole schedule with
//! running totals instead of judging assignments one at a time.

use crate::config::Limits;
use crate::error::ConstraintViolation;
use crate::model::{Assignment, Dataset, Schedule};
use std::collections::HashSet;

/// Running per-professor totals. Shared by the checker, the greedy assigner's
/// candidate filter and the incremental pruning of the exhaustive search.
#[derive(Debug, Clone)]
pub struct Workload {
    hours: Vec<u32>,
    // professor-major: counts[p * courses + c]
    counts: Vec<u32>,
    courses: usize,
}

impl Workload {
    pub fn new(dataset: &Dataset) -> Self {
        let courses = dataset.courses.len();
        Self {
            hours: vec![0; dataset.professors.len()],
            counts: vec![0; dataset.professors.len() * courses],
            courses,
        }
    }

    pub fn hours(&self, professor: usize) -> u32 {
        self.hours[professor]
    }

    pub fn count(&self, professor: usize, course: usize) -> u32 {
        self.counts[professor * self.courses + course]
    }

    /// Whether adding `hours` more of `course` keeps the professor within both caps.
    pub fn admits(&self, limits: &Limits, professor: usize, course: usize, hours: u32) -> bool {
        self.hours(professor) + hours <= limits.max_weekly_hours
            && self.count(professor, course) < limits.max_sessions_per_course
    }

    pub fn add(&mut self, professor: usize, course: usize, hours: u32) {
        self.hours[professor] += hours;
        self.counts[professor * self.courses + course] += 1;
    }

    pub fn remove(&mut self, professor: usize, course: usize, hours: u32) {
        self.hours[professor] -= hours;
        self.counts[professor * self.courses + course] -= 1;
    }
}

/// Returns the first rule the schedule breaks, if any.
pub fn check(
    dataset: &Dataset,
    limits: &Limits,
    schedule: &Schedule,
) -> Result<(), ConstraintViolation> {
    let mut workload = Workload::new(dataset);
    let mut held = HashSet::with_capacity(schedule.len());

    for (index, &Assignment { professor, course, slot }) in schedule.iter().enumerate() {
        let duration = dataset.course(course).duration;
        workload.add(professor.0, course.0, duration.hours() as u32);

        let hours = workload.hours(professor.0);
        if hours > limits.max_weekly_hours {
            return Err(ConstraintViolation::HoursExceeded {
                index,
                professor: professor.0,
                hours,
            });
        }
        let count = workload.count(professor.0, course.0);
        if count > limits.max_sessions_per_course {
            return Err(ConstraintViolation::CourseCapExceeded {
                index,
                professor: professor.0,
                course: course.0,
                count,
            });
        }
        if !dataset.professor(professor).is_available(duration, slot) {
            return Err(ConstraintViolation::Unavailable {
                index,
                professor: professor.0,
            });
        }
        if !held.insert((professor, slot)) {
            return Err(ConstraintViolation::DoubleBooked {
                index,
                professor: professor.0,
            });
        }
    }
    Ok(())
}

pub fn is_legal(dataset: &Dataset, limits: &Limits, schedule: &Schedule) -> bool {
    check(dataset, limits, schedule).is_ok()
}
