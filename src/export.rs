//! Tabular export of a finished schedule: `Professor,Course,Timeslot`, one
//! row per assignment, in schedule order.

use crate::data::AssignmentRecord;
use crate::error::ExportError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct ExportRow {
    #[serde(rename = "Professor")]
    professor: String,
    #[serde(rename = "Course")]
    course: String,
    #[serde(rename = "Timeslot")]
    timeslot: String,
}

pub fn to_csv(records: &[AssignmentRecord]) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if records.is_empty() {
        writer.write_record(["Professor", "Course", "Timeslot"])?;
    }
    for record in records {
        writer.serialize(ExportRow {
            professor: record.professor.clone(),
            course: record.course.clone(),
            timeslot: record.timeslot.clone(),
        })?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Flush(e.to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

pub fn from_csv(text: &str) -> Result<Vec<AssignmentRecord>, ExportError> {
    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let mut records = Vec::new();
    for row in reader.deserialize::<ExportRow>() {
        let row = row?;
        records.push(AssignmentRecord {
            professor: row.professor,
            course: row.course,
            timeslot: row.timeslot,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(professor: &str, course: &str, timeslot: &str) -> AssignmentRecord {
        AssignmentRecord {
            professor: professor.to_string(),
            course: course.to_string(),
            timeslot: timeslot.to_string(),
        }
    }

    #[test]
    fn header_then_rows_in_order() {
        let text = to_csv(&[
            record("Zed", "Operating Systems", "9:00 am - 12:00 pm"),
            record("Ada", "Information Management", "1:00 pm - 3:00 pm"),
        ])
        .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Professor,Course,Timeslot");
        assert_eq!(lines[1], "Zed,Operating Systems,9:00 am - 12:00 pm");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn empty_schedule_still_has_header() {
        assert_eq!(to_csv(&[]).unwrap(), "Professor,Course,Timeslot\n");
    }

    #[test]
    fn names_with_commas_survive() {
        let records = vec![
            record("Fulgencio, Kevin G.", "Data Communications and Networking", "5:00 pm - 7:00 pm"),
            record("O\"Neil", "Technical Documentations", "3:00 pm - 5:00 pm"),
        ];
        let text = to_csv(&records).unwrap();
        assert_eq!(from_csv(&text).unwrap(), records);
    }
}
