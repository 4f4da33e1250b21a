use crate::model::{Assignment, Dataset, Schedule};

/// Sum of each assigned professor's preference for the assigned course.
pub fn score(dataset: &Dataset, schedule: &Schedule) -> u32 {
    schedule.iter().map(|a| contribution(dataset, a)).sum()
}

/// What a single assignment adds to the score.
pub fn contribution(dataset: &Dataset, assignment: &Assignment) -> u32 {
    dataset.professor(assignment.professor).preference(assignment.course) as u32
}
