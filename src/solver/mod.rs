//! Strategy selection and the engine entry point.

pub mod exhaustive;
pub mod greedy;

pub use exhaustive::{ExhaustiveSearch, SearchReport};
pub use greedy::GreedyAssigner;

use crate::config::{Limits, SearchOptions};
use crate::error::SchedulerError;
use crate::model::{Dataset, Duration, Schedule, Trace};
use crate::score::score;
use log::info;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// A schedule-producing algorithm. Implementations record their decisions in
/// `steps` but never read them back.
pub trait Strategy {
    fn name(&self) -> &'static str;

    fn run(&self, dataset: &Dataset, limits: &Limits, steps: &mut Trace) -> Schedule;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    #[default]
    Greedy,
    Exhaustive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub schedule: Schedule,
    pub score: u32,
    pub trace: Trace,
    pub strategy: StrategyKind,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    limits: Limits,
    search: SearchOptions,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_search_options(mut self, search: SearchOptions) -> Self {
        self.search = search;
        self
    }

    pub fn search_options(&self) -> &SearchOptions {
        &self.search
    }

    /// Runs `kind` over `dataset`. Fails on empty input, and when the strategy
    /// could not place a single assignment.
    pub fn solve(&self, dataset: &Dataset, kind: StrategyKind) -> Result<Solution, SchedulerError> {
        let start_time = Instant::now();
        info!(
            "Solving with {} professors, {} courses, {} + {} timeslots",
            dataset.professors.len(),
            dataset.courses.len(),
            dataset.timeslots.slots(Duration::Two).len(),
            dataset.timeslots.slots(Duration::Three).len(),
        );

        if dataset.professors.is_empty() {
            return Err(SchedulerError::EmptyInput("professors"));
        }
        if dataset.courses.is_empty() {
            return Err(SchedulerError::EmptyInput("courses"));
        }
        if dataset.timeslots.is_empty() {
            return Err(SchedulerError::EmptyInput("timeslots"));
        }

        let strategy: Box<dyn Strategy> = match kind {
            StrategyKind::Greedy => Box::new(GreedyAssigner::new()),
            StrategyKind::Exhaustive => Box::new(ExhaustiveSearch::new(self.search)),
        };

        let mut trace = Trace::new();
        let schedule = strategy.run(dataset, &self.limits, &mut trace);
        info!(
            "{} strategy produced {} assignments in {:.2?}",
            strategy.name(),
            schedule.len(),
            start_time.elapsed()
        );

        if schedule.is_empty() {
            return Err(SchedulerError::EmptySchedule {
                steps: trace.into_steps(),
            });
        }

        Ok(Solution {
            score: score(dataset, &schedule),
            schedule,
            trace,
            strategy: kind,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, CourseId, Professor, TimeslotCatalog, standard_courses};

    #[test]
    fn empty_professors_is_empty_input() {
        let data = Dataset::new(vec![], standard_courses(), TimeslotCatalog::standard());
        let err = Engine::new().solve(&data, StrategyKind::Greedy).unwrap_err();
        assert!(matches!(err, SchedulerError::EmptyInput("professors")));
    }

    #[test]
    fn empty_catalog_is_empty_input() {
        let data = Dataset::new(
            vec![Professor::new("Ada", 1)],
            vec![Course::new("Short", Duration::Two)],
            TimeslotCatalog::new(),
        );
        let err = Engine::new().solve(&data, StrategyKind::Greedy).unwrap_err();
        assert!(matches!(err, SchedulerError::EmptyInput("timeslots")));
    }

    #[test]
    fn nobody_available_is_empty_schedule() {
        let courses = standard_courses();
        let professors = vec![
            Professor::new("Ada", courses.len()).with_preference(CourseId(0), 5),
            Professor::new("Bob", courses.len()),
        ];
        let data = Dataset::new(professors, courses, TimeslotCatalog::standard());
        let err = Engine::new().solve(&data, StrategyKind::Greedy).unwrap_err();
        let SchedulerError::EmptySchedule { steps } = err else {
            panic!("expected EmptySchedule");
        };
        assert!(steps.iter().any(|s| s.starts_with("No available professor for")));
        assert_eq!(
            steps.last().map(String::as_str),
            Some("Created schedule with 0 assignments")
        );
    }

    #[test]
    fn exhaustive_failure_keeps_no_schedule_note() {
        let catalog = TimeslotCatalog::standard();
        let courses = standard_courses();
        let prof = Professor::new("Ada", courses.len())
            .with_availability(Duration::Two, catalog.slots(Duration::Two)[0]);
        let data = Dataset::new(vec![prof], courses, catalog);
        let limits = Limits {
            target_size: 2,
            ..Limits::default()
        };

        let err = Engine::new()
            .with_limits(limits)
            .solve(&data, StrategyKind::Exhaustive)
            .unwrap_err();
        let SchedulerError::EmptySchedule { steps } = err else {
            panic!("expected EmptySchedule");
        };
        assert_eq!(steps.last().map(String::as_str), Some("No valid schedule found"));
    }

    #[test]
    fn solution_carries_score_and_trace() {
        let catalog = TimeslotCatalog::standard();
        let slot = catalog.slots(Duration::Three)[0];
        let courses = standard_courses();
        let prof = Professor::new("Ada", courses.len())
            .with_preference(CourseId(0), 4)
            .with_availability(Duration::Three, slot);
        let data = Dataset::new(vec![prof], courses, catalog);

        let solution = Engine::new().solve(&data, StrategyKind::Greedy).unwrap();
        assert_eq!(solution.schedule.len(), 1);
        assert_eq!(solution.score, 4);
        assert_eq!(solution.strategy, StrategyKind::Greedy);
        assert!(!solution.trace.steps().is_empty());
    }
}
