//! Preference-first greedy assigner.
//!
//! # Algorithm
//!
//! 1. Walk courses in catalog order, attempting a fixed number of sessions each.
//! 2. Candidates are professors still under both caps, ordered by descending
//!    preference for the course, ties broken by ascending name.
//! 3. The first candidate with a free slot for the course's duration gets the
//!    lexicographically smallest such label.
//! 4. An attempt nobody can take is logged and skipped. Nothing is undone.

use crate::config::Limits;
use crate::constraints::Workload;
use crate::model::{Assignment, CourseId, Dataset, ProfessorId, Schedule, SlotId, Trace};
use crate::solver::Strategy;
use itertools::Itertools;
use log::{trace, warn};
use std::cmp::Reverse;

#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyAssigner;

impl GreedyAssigner {
    pub fn new() -> Self {
        Self
    }

    /// Professors allowed to take one more session of `course`, in the order
    /// they are offered it.
    fn candidates(
        dataset: &Dataset,
        limits: &Limits,
        workload: &Workload,
        course: CourseId,
    ) -> Vec<ProfessorId> {
        let hours = dataset.course(course).duration.hours() as u32;
        dataset
            .professor_ids()
            .filter(|p| workload.admits(limits, p.0, course.0, hours))
            .sorted_by_key(|p| {
                let prof = dataset.professor(*p);
                (Reverse(prof.preference(course)), prof.name.as_str())
            })
            .collect()
    }

    /// Smallest label (by string order) the professor could still take for `course`.
    fn earliest_free_slot(
        dataset: &Dataset,
        schedule: &Schedule,
        professor: ProfessorId,
        course: CourseId,
    ) -> Option<SlotId> {
        let duration = dataset.course(course).duration;
        dataset
            .professor(professor)
            .available(duration)
            .iter()
            .copied()
            .filter(|slot| !schedule.holds(professor, *slot))
            .min_by(|a, b| dataset.timeslots.label(*a).cmp(dataset.timeslots.label(*b)))
    }
}

impl Strategy for GreedyAssigner {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn run(&self, dataset: &Dataset, limits: &Limits, steps: &mut Trace) -> Schedule {
        let mut schedule = Schedule::new();
        let mut workload = Workload::new(dataset);

        for course in dataset.course_ids() {
            let info = dataset.course(course);
            let hours = info.duration.hours() as u32;

            for attempt in 1..=limits.attempts_per_course {
                let pool = Self::candidates(dataset, limits, &workload, course);
                trace!(
                    "{} session {}: {} candidate professors",
                    info.name,
                    attempt,
                    pool.len()
                );

                let chosen = pool.into_iter().find_map(|professor| {
                    Self::earliest_free_slot(dataset, &schedule, professor, course)
                        .map(|slot| Assignment::new(professor, course, slot))
                });

                match chosen {
                    Some(assignment) => {
                        schedule.push(assignment);
                        workload.add(assignment.professor.0, course.0, hours);
                        steps.record(format!(
                            "Assigned {} to {} at {}",
                            dataset.professor(assignment.professor).name,
                            info.name,
                            dataset.timeslots.label(assignment.slot)
                        ));
                    }
                    None => {
                        warn!(
                            "No available professors for {}. Skipping this assignment.",
                            info.name
                        );
                        steps.record(format!(
                            "No available professor for {} (session {}); skipped",
                            info.name, attempt
                        ));
                    }
                }
            }
        }

        steps.record(format!(
            "Created schedule with {} assignments",
            schedule.len()
        ));
        schedule
    }
}
