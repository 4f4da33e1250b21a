#![allow(dead_code)]

//! Dataset builders shared across integration tests.

use faculty_scheduler::model::{
    Course, CourseId, Dataset, Duration, Professor, TimeslotCatalog, standard_courses,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Standard catalogs with `count` professors holding scattered ratings and availability.
pub fn random_dataset(seed: u64, count: usize) -> Dataset {
    let mut rng = SmallRng::seed_from_u64(seed);
    let courses = standard_courses();
    let timeslots = TimeslotCatalog::standard();
    let professors = (0..count)
        .map(|i| {
            let name = format!("Prof {:03}", rng.random_range(0..50) * count + i);
            let mut p = Professor::new(name, courses.len());
            for c in 0..courses.len() {
                p = p.with_preference(CourseId(c), rng.random_range(0..=5u8));
            }
            for d in Duration::ALL {
                for &slot in timeslots.slots(d) {
                    if rng.random_bool(1.0 / 3.0) {
                        p = p.with_availability(d, slot);
                    }
                }
            }
            p
        })
        .collect();
    Dataset::new(professors, courses, timeslots)
}

/// Three professors, two courses, three slots.
pub fn tiny_dataset() -> Dataset {
    let timeslots = TimeslotCatalog::new()
        .with_slot(Duration::Two, "A")
        .with_slot(Duration::Two, "B")
        .with_slot(Duration::Three, "C");
    let a = timeslots.lookup("A").unwrap();
    let b = timeslots.lookup("B").unwrap();
    let c = timeslots.lookup("C").unwrap();
    let courses = vec![
        Course::new("Short", Duration::Two),
        Course::new("Long", Duration::Three),
    ];
    let professors = vec![
        Professor::new("P0", 2)
            .with_preference(CourseId(0), 3)
            .with_preference(CourseId(1), 1)
            .with_availability(Duration::Two, a)
            .with_availability(Duration::Two, b)
            .with_availability(Duration::Three, c),
        Professor::new("P1", 2)
            .with_preference(CourseId(0), 1)
            .with_preference(CourseId(1), 5)
            .with_availability(Duration::Two, a)
            .with_availability(Duration::Three, c),
        Professor::new("P2", 2)
            .with_preference(CourseId(0), 2)
            .with_availability(Duration::Two, b),
    ];
    Dataset::new(professors, courses, timeslots)
}
