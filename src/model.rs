use std::collections::HashMap;
use std::fmt;

/// Session length admitted by the catalog. Used to key both the timeslot
/// catalog and each professor's availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Duration {
    Two,
    Three,
}

impl Duration {
    pub const ALL: [Duration; 2] = [Duration::Two, Duration::Three];

    pub fn from_hours(hours: u8) -> Option<Self> {
        match hours {
            2 => Some(Duration::Two),
            3 => Some(Duration::Three),
            _ => None,
        }
    }

    pub fn hours(self) -> u8 {
        match self {
            Duration::Two => 2,
            Duration::Three => 3,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.hours())
    }
}

// Positions into the dataset's vectors, fixed once intake is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProfessorId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(pub usize);

/// Interned timeslot label. Two durations listing the same label share one id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub name: String,
    pub duration: Duration,
}

impl Course {
    pub fn new(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

/// The closed course catalog used when a request does not bring its own.
pub fn standard_courses() -> Vec<Course> {
    vec![
        Course::new("Design and Analysis of Algorithms", Duration::Three),
        Course::new("Information Management", Duration::Two),
        Course::new("Operating Systems", Duration::Three),
        Course::new("Data Communications and Networking", Duration::Two),
        Course::new("Technical Documentations", Duration::Two),
    ]
}

/// Static mapping from duration class to an ordered list of slot labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeslotCatalog {
    labels: Vec<String>,
    ids: HashMap<String, SlotId>,
    by_duration: [Vec<SlotId>; 2],
}

impl TimeslotCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `label` to the list for `duration`, reusing the interned id when
    /// the label is already known. Listing a label twice under one duration is a no-op.
    pub fn with_slot(mut self, duration: Duration, label: impl Into<String>) -> Self {
        let label = label.into();
        let slots = &mut self.by_duration[duration.index()];
        match self.ids.get(&label).copied() {
            Some(id) => {
                if !slots.contains(&id) {
                    slots.push(id);
                }
            }
            None => {
                let id = SlotId(self.labels.len());
                self.ids.insert(label.clone(), id);
                self.labels.push(label);
                slots.push(id);
            }
        }
        self
    }

    pub fn standard() -> Self {
        let three = [
            "9:00 am - 12:00 pm",
            "12:00 pm - 3:00 pm",
            "3:00 pm - 6:00 pm",
            "6:00 pm - 9:00 pm",
            "7:00 am - 10:00 am",
        ];
        let two = [
            "9:00 am - 11:00 am",
            "11:00 am - 1:00 pm",
            "1:00 pm - 3:00 pm",
            "3:00 pm - 5:00 pm",
            "5:00 pm - 7:00 pm",
        ];
        let catalog = three
            .into_iter()
            .fold(Self::new(), |c, l| c.with_slot(Duration::Three, l));
        two.into_iter()
            .fold(catalog, |c, l| c.with_slot(Duration::Two, l))
    }

    pub fn lookup(&self, label: &str) -> Option<SlotId> {
        self.ids.get(label).copied()
    }

    pub fn label(&self, slot: SlotId) -> &str {
        &self.labels[slot.0]
    }

    pub fn slots(&self, duration: Duration) -> &[SlotId] {
        &self.by_duration[duration.index()]
    }

    pub fn contains(&self, duration: Duration, slot: SlotId) -> bool {
        self.slots(duration).contains(&slot)
    }

    pub fn is_empty(&self) -> bool {
        self.by_duration.iter().all(Vec::is_empty)
    }
}

/// A professor's fixed-shape record: one preference per course position, one
/// availability list per duration class. Missing entries are 0 and empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Professor {
    pub name: String,
    pub preferences: Vec<u8>,
    pub availability: [Vec<SlotId>; 2],
}

impl Professor {
    pub fn new(name: impl Into<String>, course_count: usize) -> Self {
        Self {
            name: name.into(),
            preferences: vec![0; course_count],
            availability: [Vec::new(), Vec::new()],
        }
    }

    pub fn with_preference(mut self, course: CourseId, score: u8) -> Self {
        self.preferences[course.0] = score;
        self
    }

    pub fn with_availability(mut self, duration: Duration, slot: SlotId) -> Self {
        let slots = &mut self.availability[duration.index()];
        if !slots.contains(&slot) {
            slots.push(slot);
        }
        self
    }

    pub fn preference(&self, course: CourseId) -> u8 {
        self.preferences.get(course.0).copied().unwrap_or(0)
    }

    pub fn available(&self, duration: Duration) -> &[SlotId] {
        &self.availability[duration.index()]
    }

    pub fn is_available(&self, duration: Duration, slot: SlotId) -> bool {
        self.available(duration).contains(&slot)
    }
}

/// Everything one engine invocation reads. Built once by intake and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub professors: Vec<Professor>,
    pub courses: Vec<Course>,
    pub timeslots: TimeslotCatalog,
}

impl Dataset {
    pub fn new(professors: Vec<Professor>, courses: Vec<Course>, timeslots: TimeslotCatalog) -> Self {
        Self {
            professors,
            courses,
            timeslots,
        }
    }

    pub fn professor(&self, id: ProfessorId) -> &Professor {
        &self.professors[id.0]
    }

    pub fn course(&self, id: CourseId) -> &Course {
        &self.courses[id.0]
    }

    pub fn professor_ids(&self) -> impl Iterator<Item = ProfessorId> + '_ {
        (0..self.professors.len()).map(ProfessorId)
    }

    pub fn course_ids(&self) -> impl Iterator<Item = CourseId> + '_ {
        (0..self.courses.len()).map(CourseId)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Assignment {
    pub professor: ProfessorId,
    pub course: CourseId,
    pub slot: SlotId,
}

impl Assignment {
    pub fn new(professor: ProfessorId, course: CourseId, slot: SlotId) -> Self {
        Self {
            professor,
            course,
            slot,
        }
    }
}

/// Ordered assignments. Grown and shrunk in place while a strategy runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    assignments: Vec<Assignment>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            assignments: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    pub fn pop(&mut self) -> Option<Assignment> {
        self.assignments.pop()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> + '_ {
        self.assignments.iter()
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Whether `professor` already holds a slot with this label, in any course.
    pub fn holds(&self, professor: ProfessorId, slot: SlotId) -> bool {
        self.assignments
            .iter()
            .any(|a| a.professor == professor && a.slot == slot)
    }
}

impl FromIterator<Assignment> for Schedule {
    fn from_iter<I: IntoIterator<Item = Assignment>>(iter: I) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}

/// Human-readable decision log. Never read back by the algorithms.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<String>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, step: impl Into<String>) {
        let step = step.into();
        log::debug!("{}", step);
        self.steps.push(step);
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn last(&self) -> Option<&str> {
        self.steps.last().map(String::as_str)
    }

    pub fn into_steps(self) -> Vec<String> {
        self.steps
    }
}
