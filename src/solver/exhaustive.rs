//! Exhaustive depth-first search with rollback.
//!
//! Every depth branches over all (professor, course, slot) triples whose slot
//! is in the professor's availability for the course's duration and not yet
//! held by that professor. Candidates are only judged once they reach the
//! target size; the best strictly-improving legal one is kept.
//!
//! One schedule buffer is reused for the whole search: each branch pushes an
//! assignment, recurses and pops it again.

use crate::config::{Limits, Pruning, SearchOptions};
use crate::constraints::{Workload, check};
use crate::model::{Assignment, Dataset, Schedule, Trace};
use crate::score::score;
use crate::solver::Strategy;
use log::{info, trace};

#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveSearch {
    options: SearchOptions,
}

impl ExhaustiveSearch {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    /// Runs the search and reports how it ended alongside the schedule.
    pub fn search(&self, dataset: &Dataset, limits: &Limits, steps: &mut Trace) -> SearchReport {
        let mut state = SearchState::new(dataset, limits, self.options);
        steps.record("Starting exhaustive search");
        trace!(
            "{} branch triples, target size {}",
            state.branches.len(),
            limits.target_size
        );

        state.descend(steps);

        let report = SearchReport {
            nodes: state.nodes,
            budget_exhausted: state.exhausted,
            best: state.best,
        };
        match &report.best {
            None if report.budget_exhausted => steps.record(format!(
                "Search budget exhausted after {} nodes; no valid schedule found",
                report.nodes
            )),
            None => steps.record("No valid schedule found"),
            Some((best, _)) if report.budget_exhausted => steps.record(format!(
                "Search budget exhausted after {} nodes; best schedule found has score {} (not proven optimal)",
                report.nodes, best
            )),
            Some((best, _)) => {
                steps.record(format!("Optimal solution found with score {}", best))
            }
        }
        info!("Exhaustive search visited {} nodes", report.nodes);
        report
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub nodes: u64,
    pub budget_exhausted: bool,
    pub best: Option<(u32, Schedule)>,
}

impl Strategy for ExhaustiveSearch {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn run(&self, dataset: &Dataset, limits: &Limits, steps: &mut Trace) -> Schedule {
        self.search(dataset, limits, steps)
            .best
            .map(|(_, schedule)| schedule)
            .unwrap_or_default()
    }
}

struct SearchState<'a> {
    dataset: &'a Dataset,
    limits: &'a Limits,
    options: SearchOptions,
    // Triples that pass the availability filter, in professor/course/catalog order.
    branches: Vec<Assignment>,
    schedule: Schedule,
    workload: Workload,
    best: Option<(u32, Schedule)>,
    nodes: u64,
    exhausted: bool,
}

impl<'a> SearchState<'a> {
    fn new(dataset: &'a Dataset, limits: &'a Limits, options: SearchOptions) -> Self {
        let mut branches = Vec::new();
        for professor in dataset.professor_ids() {
            let prof = dataset.professor(professor);
            for course in dataset.course_ids() {
                let duration = dataset.course(course).duration;
                for &slot in dataset.timeslots.slots(duration) {
                    if prof.is_available(duration, slot) {
                        branches.push(Assignment::new(professor, course, slot));
                    }
                }
            }
        }

        Self {
            dataset,
            limits,
            options,
            branches,
            schedule: Schedule::with_capacity(limits.target_size),
            workload: Workload::new(dataset),
            best: None,
            nodes: 0,
            exhausted: false,
        }
    }

    fn descend(&mut self, steps: &mut Trace) {
        if self.schedule.len() == self.limits.target_size {
            self.evaluate(steps);
            return;
        }

        for i in 0..self.branches.len() {
            let next = self.branches[i];
            if self.schedule.holds(next.professor, next.slot) {
                continue;
            }
            let hours = self.dataset.course(next.course).duration.hours() as u32;
            if self.options.pruning == Pruning::Incremental
                && !self
                    .workload
                    .admits(self.limits, next.professor.0, next.course.0, hours)
            {
                continue;
            }
            if self.options.node_budget.is_some_and(|b| self.nodes >= b) {
                self.exhausted = true;
                return;
            }
            self.nodes += 1;

            self.schedule.push(next);
            self.workload.add(next.professor.0, next.course.0, hours);
            self.descend(steps);
            self.workload.remove(next.professor.0, next.course.0, hours);
            self.schedule.pop();

            if self.exhausted {
                return;
            }
        }
    }

    fn evaluate(&mut self, steps: &mut Trace) {
        if let Err(violation) = check(self.dataset, self.limits, &self.schedule) {
            trace!("Discarding candidate: {}", violation);
            return;
        }
        let value = score(self.dataset, &self.schedule);
        if self.best.as_ref().is_none_or(|(best, _)| value > *best) {
            self.best = Some((value, self.schedule.clone()));
            steps.record(format!("New best schedule found with score {}", value));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Course, CourseId, Duration, Professor, SlotId, TimeslotCatalog};

    fn small() -> Dataset {
        let timeslots = TimeslotCatalog::new()
            .with_slot(Duration::Two, "A")
            .with_slot(Duration::Two, "B");
        let courses = vec![Course::new("Short", Duration::Two)];
        let professors = vec![
            Professor::new("Low", 1)
                .with_preference(CourseId(0), 1)
                .with_availability(Duration::Two, SlotId(0))
                .with_availability(Duration::Two, SlotId(1)),
            Professor::new("High", 1)
                .with_preference(CourseId(0), 4)
                .with_availability(Duration::Two, SlotId(1)),
        ];
        Dataset::new(professors, courses, timeslots)
    }

    fn limits(target_size: usize) -> Limits {
        Limits {
            target_size,
            ..Limits::default()
        }
    }

    #[test]
    fn finds_best_pair() {
        let data = small();
        let mut steps = Trace::new();
        let report = ExhaustiveSearch::default().search(&data, &limits(2), &mut steps);
        let (best, schedule) = report.best.unwrap();
        // High can take only B; Low then takes A or B.
        assert_eq!(best, 5);
        assert_eq!(schedule.len(), 2);
        assert_eq!(steps.last(), Some("Optimal solution found with score 5"));
        assert!(!report.budget_exhausted);
    }

    #[test]
    fn unreachable_target_yields_empty_schedule() {
        let data = small();
        let mut steps = Trace::new();
        let schedule = ExhaustiveSearch::default().run(&data, &limits(4), &mut steps);
        // Three distinct (professor, slot) pairs exist, so four is impossible.
        assert!(schedule.is_empty());
        assert_eq!(steps.last(), Some("No valid schedule found"));
    }

    #[test]
    fn incremental_pruning_gives_same_answer_with_fewer_nodes() {
        let data = small();
        let tight = Limits {
            target_size: 2,
            max_weekly_hours: 2,
            ..Limits::default()
        };
        let plain = ExhaustiveSearch::default().search(&data, &tight, &mut Trace::new());
        let pruned = ExhaustiveSearch::new(SearchOptions {
            pruning: Pruning::Incremental,
            node_budget: None,
        })
        .search(&data, &tight, &mut Trace::new());
        assert_eq!(plain.best, pruned.best);
        assert!(pruned.nodes < plain.nodes);
    }

    #[test]
    fn node_budget_keeps_best_found_so_far() {
        let data = small();
        let mut steps = Trace::new();
        // Low/A then Low/B is the first complete candidate, reached at node 2.
        let report = ExhaustiveSearch::new(SearchOptions {
            pruning: Pruning::None,
            node_budget: Some(2),
        })
        .search(&data, &limits(2), &mut steps);
        assert!(report.budget_exhausted);
        let (best, schedule) = report.best.unwrap();
        assert_eq!(best, 2);
        assert_eq!(schedule.len(), 2);
        assert!(steps.steps().contains(&"New best schedule found with score 2".to_string()));
        assert_eq!(
            steps.last(),
            Some(
                "Search budget exhausted after 2 nodes; best schedule found has score 2 (not proven optimal)"
            )
        );
    }

    #[test]
    fn node_budget_stops_the_search() {
        let data = small();
        let mut steps = Trace::new();
        let report = ExhaustiveSearch::new(SearchOptions {
            pruning: Pruning::None,
            node_budget: Some(1),
        })
        .search(&data, &limits(2), &mut steps);
        assert!(report.budget_exhausted);
        assert_eq!(report.nodes, 1);
        assert!(report.best.is_none());
        assert!(steps.last().unwrap().starts_with("Search budget exhausted after 1 nodes"));
    }
}
