// 🎓 Student Entity - one graded line record

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{check_id, check_text, Entity};
use crate::error::Result;

// ============================================================================
// GRADE
// ============================================================================

/// Letter grade. Ordered A < B < ... < F so reports list letters ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map a score to its letter.
    ///
    /// Scores outside 0..=100 are not rejected: anything above 100 or below
    /// 50 is an F.
    pub fn from_score(score: i64) -> Grade {
        match score {
            80..=100 => Grade::A,
            70..=79 => Grade::B,
            60..=69 => Grade::C,
            50..=59 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    pub fn all() -> [Grade; 5] {
        [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F]
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// STUDENT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(alias = "Id")]
    pub id: u32,

    #[serde(alias = "FullName", alias = "Name")]
    pub name: String,

    #[serde(alias = "Score")]
    pub score: i64,
}

impl Student {
    pub fn new(id: i64, name: &str, score: i64) -> Result<Self> {
        let id = check_id(id)?;
        check_text("name", name)?;

        Ok(Student {
            id,
            name: name.trim().to_string(),
            score,
        })
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }
}

impl Entity for Student {
    fn id(&self) -> u32 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(80), Grade::A);
        assert_eq!(Grade::from_score(79), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::B);
        assert_eq!(Grade::from_score(69), Grade::C);
        assert_eq!(Grade::from_score(60), Grade::C);
        assert_eq!(Grade::from_score(59), Grade::D);
        assert_eq!(Grade::from_score(50), Grade::D);
        assert_eq!(Grade::from_score(49), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn test_out_of_range_scores_are_f() {
        assert_eq!(Grade::from_score(101), Grade::F);
        assert_eq!(Grade::from_score(-5), Grade::F);
        assert_eq!(Grade::from_score(i64::MAX), Grade::F);
    }

    #[test]
    fn test_grades_sort_ascending() {
        let mut grades = vec![Grade::F, Grade::B, Grade::A, Grade::D, Grade::C];
        grades.sort();
        assert_eq!(grades, Grade::all().to_vec());
        assert_eq!(Grade::C.to_string(), "C");
    }

    #[test]
    fn test_student_grade() {
        let student = Student::new(101, "Alice Johnson", 85).unwrap();
        assert_eq!(student.grade(), Grade::A);
        assert_eq!(student.label(), "Alice Johnson");
    }
}
