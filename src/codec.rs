// 📝 Line Record Codec - comma-separated student records in, grade report out
//
// Input format, one record per line:
//   <id>,<name>,<score>
// Fields are trimmed, blank lines are skipped, and the first bad line fails
// the whole batch. Field splitting follows CSV quoting rules, so a quoted
// name may contain a comma.

use chrono::{DateTime, Local};
use csv::{ReaderBuilder, StringRecord, Terminator, Trim};
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::entities::{Grade, Student};
use crate::error::{Error, Result};

const FIELD_COUNT: usize = 3;

// ============================================================================
// PARSING
// ============================================================================

/// Parse line records into students, in file order.
///
/// Fails fast: the first invalid line aborts the batch and no records are
/// returned. Errors carry the 1-based line number and the line's content.
pub fn parse_records(input: &str) -> Result<Vec<Student>> {
    let mut students = Vec::new();

    for (idx, content) in input.lines().enumerate() {
        if content.trim().is_empty() {
            continue;
        }

        let line = idx + 1;
        let record = split_fields(content, line)?;
        students.push(parse_line(&record, line, content)?);
    }

    debug!(count = students.len(), "parsed line records");
    Ok(students)
}

/// Read a file and parse its line records
pub fn parse_records_from_file(path: &Path) -> Result<Vec<Student>> {
    let input = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_records(&input)
}

fn parse_line(record: &StringRecord, line: usize, content: &str) -> Result<Student> {
    if record.len() != FIELD_COUNT {
        return Err(Error::MissingField {
            line,
            content: content.to_string(),
            detail: format!("expected {} fields, found {}", FIELD_COUNT, record.len()),
        });
    }

    let fields = ["id", "name", "score"];
    for (idx, field) in fields.iter().enumerate() {
        if record[idx].is_empty() {
            return Err(Error::MissingField {
                line,
                content: content.to_string(),
                detail: format!("field `{}` is empty", field),
            });
        }
    }

    let id = record[0]
        .parse::<i64>()
        .ok()
        .and_then(|id| u32::try_from(id).ok())
        .filter(|id| *id > 0)
        .ok_or_else(|| Error::InvalidFormat {
            line,
            field: "id",
            value: record[0].to_string(),
        })?;

    let score = record[2].parse::<i64>().map_err(|_| Error::InvalidFormat {
        line,
        field: "score",
        value: record[2].to_string(),
    })?;

    Ok(Student {
        id,
        name: record[1].to_string(),
        score,
    })
}

/// Split one line into trimmed fields.
///
/// Only `\n` ends a record; a stray `\r` stays inside its field (and is
/// trimmed away at the edges), so one line is always one record.
fn split_fields(content: &str, line: usize) -> Result<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .terminator(Terminator::Any(b'\n'))
        .from_reader(content.as_bytes());

    let mut record = StringRecord::new();
    reader
        .read_record(&mut record)
        .map_err(|e| Error::InvalidFormat {
            line,
            field: "record",
            value: e.to_string(),
        })?;
    Ok(record)
}

// ============================================================================
// SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub total: usize,
    pub grade_counts: BTreeMap<Grade, usize>,
    pub average: f64,
    pub highest: i64,
    pub lowest: i64,
}

/// Statistics over the records; `None` when there are no records
pub fn summarize(records: &[Student]) -> Option<ReportSummary> {
    let highest = records.iter().map(|s| s.score).max()?;
    let lowest = records.iter().map(|s| s.score).min()?;

    let mut grade_counts = BTreeMap::new();
    for student in records {
        *grade_counts.entry(student.grade()).or_insert(0) += 1;
    }

    let total = records.len();
    let average = records.iter().map(|s| s.score as f64).sum::<f64>() / total as f64;

    Some(ReportSummary {
        total,
        grade_counts,
        average,
        highest,
        lowest,
    })
}

// ============================================================================
// REPORT
// ============================================================================

/// Render the human-readable grade report.
///
/// Not meant for re-parsing. With no records the report says so and skips
/// the statistics.
pub fn write_report(records: &[Student], generated_at: DateTime<Local>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "STUDENT GRADE REPORT");
    let _ = writeln!(out, "Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"));
    let _ = writeln!(out, "Total Students: {}", records.len());
    let _ = writeln!(out, "{}", "=".repeat(40));

    let Some(summary) = summarize(records) else {
        let _ = writeln!(out, "No students to report.");
        return out;
    };

    for student in records {
        let _ = writeln!(
            out,
            "{} (id: {}): Score = {}, Grade = {}",
            student.name,
            student.id,
            student.score,
            student.grade()
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "SUMMARY");
    let _ = writeln!(out, "{}", "-".repeat(40));
    for (grade, count) in &summary.grade_counts {
        let _ = writeln!(out, "Grade {}: {}", grade, count);
    }
    let _ = writeln!(out, "Average Score: {:.2}", summary.average);
    let _ = writeln!(out, "Highest Score: {}", summary.highest);
    let _ = writeln!(out, "Lowest Score: {}", summary.lowest);

    out
}

/// Write the report to a file, creating parent directories as needed
pub fn write_report_to_file(records: &[Student], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let report = write_report(records, Local::now());
    fs::write(path, report).map_err(|e| Error::io(path, e))?;

    info!(path = %path.display(), count = records.len(), "wrote grade report");
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 6, 1, 9, 30, 0).unwrap()
    }

    #[test]
    fn test_parse_single_record() {
        let students = parse_records("101,Alice Johnson,85").unwrap();

        assert_eq!(students.len(), 1);
        assert_eq!(students[0].id, 101);
        assert_eq!(students[0].name, "Alice Johnson");
        assert_eq!(students[0].score, 85);
        assert_eq!(students[0].grade(), Grade::A);
    }

    #[test]
    fn test_parse_trims_and_skips_blank_lines() {
        let input = "\n  101 ,  Alice Johnson , 85 \n\n   \n102,Bob Smith,72\n";
        let students = parse_records(input).unwrap();

        let names: Vec<&str> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alice Johnson", "Bob Smith"]);
        assert_eq!(students[1].grade(), Grade::B);
    }

    #[test]
    fn test_quoted_name_may_contain_comma() {
        let students = parse_records("5,\"Lee, Ann\",77").unwrap();
        assert_eq!(students[0].name, "Lee, Ann");
        assert_eq!(students[0].score, 77);
    }

    #[test]
    fn test_leading_quote_is_csv_quoting() {
        // Text after the closing quote joins the same field
        let students = parse_records("5,\"Bob\" Smith,70").unwrap();
        assert_eq!(students[0].name, "Bob Smith");
        assert_eq!(students[0].score, 70);
    }

    #[test]
    fn test_bare_carriage_return_does_not_split_line() {
        let err = parse_records("1,A,50\r2,B,60").unwrap_err();

        match err {
            Error::MissingField { line, detail, .. } => {
                assert_eq!(line, 1);
                assert!(detail.contains("found 5"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_carriage_return_inside_field_is_trimmed() {
        let students = parse_records("1,Ann\r,50").unwrap();

        assert_eq!(students.len(), 1);
        assert_eq!(students[0].name, "Ann");
        assert_eq!(students[0].score, 50);
    }

    #[test]
    fn test_crlf_line_endings() {
        let students = parse_records("1,Ann,50\r\n2,Ben,60\r\n").unwrap();
        let ids: Vec<u32> = students.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_two_fields_is_missing_field() {
        let err = parse_records("301,Mary Johnson").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.line(), Some(1));
        assert!(err.to_string().contains("301,Mary Johnson"));
    }

    #[test]
    fn test_too_many_fields_is_missing_field() {
        let err = parse_records("1,A,50,extra").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingField);
    }

    #[test]
    fn test_empty_field_is_missing_field() {
        let err = parse_records("101,   ,85").unwrap_err();

        match err {
            Error::MissingField { line, detail, .. } => {
                assert_eq!(line, 1);
                assert!(detail.contains("name"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_score_is_invalid_format() {
        let err = parse_records("201,John Doe,ABC").unwrap_err();

        match err {
            Error::InvalidFormat { line, field, value } => {
                assert_eq!(line, 1);
                assert_eq!(field, "score");
                assert_eq!(value, "ABC");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_non_numeric_or_non_positive_id_is_invalid_format() {
        for input in ["x1,John,50", "0,John,50", "-4,John,50"] {
            let err = parse_records(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFormat, "input: {}", input);
        }
    }

    #[test]
    fn test_failure_reports_later_line_number() {
        let input = "101,Alice,85\n\n102,Bob,72\n103,Carol";
        let err = parse_records(input).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingField);
        assert_eq!(err.line(), Some(4));
        assert!(err.to_string().contains("103,Carol"));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_records("").unwrap().is_empty());
        assert!(parse_records("\n \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_from_missing_file_is_io_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = parse_records_from_file(&dir.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IoFailure);
    }

    #[test]
    fn test_summarize() {
        let students = parse_records("1,A,90\n2,B,85\n3,C,62\n4,D,40").unwrap();
        let summary = summarize(&students).unwrap();

        assert_eq!(summary.total, 4);
        assert_eq!(summary.grade_counts.get(&Grade::A), Some(&2));
        assert_eq!(summary.grade_counts.get(&Grade::C), Some(&1));
        assert_eq!(summary.grade_counts.get(&Grade::F), Some(&1));
        assert_eq!(summary.grade_counts.get(&Grade::B), None);
        assert_eq!(summary.average, 69.25);
        assert_eq!(summary.highest, 90);
        assert_eq!(summary.lowest, 40);

        assert!(summarize(&[]).is_none());
    }

    #[test]
    fn test_report_lines() {
        let students = parse_records("101,Alice Johnson,85\n102,Bob Smith,72").unwrap();
        let report = write_report(&students, fixed_time());

        assert!(report.contains("Generated: 2026-06-01 09:30:00"));
        assert!(report.contains("Total Students: 2"));
        assert!(report.contains("Alice Johnson (id: 101): Score = 85, Grade = A"));
        assert!(report.contains("Bob Smith (id: 102): Score = 72, Grade = B"));
        assert!(report.contains("Average Score: 78.50"));
        assert!(report.contains("Highest Score: 85"));
        assert!(report.contains("Lowest Score: 72"));

        // Grade letters listed ascending
        let a = report.find("Grade A: 1").unwrap();
        let b = report.find("Grade B: 1").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_empty_report_skips_statistics() {
        let report = write_report(&[], fixed_time());

        assert!(report.contains("Total Students: 0"));
        assert!(report.contains("No students to report."));
        assert!(!report.contains("Average Score"));
        assert!(!report.contains("Highest Score"));
        assert!(!report.contains("Lowest Score"));
    }

    #[test]
    fn test_write_report_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("grades.txt");
        let students = parse_records("7,Dana,55").unwrap();

        write_report_to_file(&students, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Dana (id: 7): Score = 55, Grade = D"));
    }
}
