use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Exams covered by the syllabus catalog.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExamId {
    Gsi,
    Gate,
}

impl ExamId {
    /// All exams in display order.
    pub const ALL: [ExamId; 2] = [ExamId::Gsi, ExamId::Gate];

    /// Short code used in breadcrumbs and titles.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            ExamId::Gsi => "GSI",
            ExamId::Gate => "GATE",
        }
    }

    #[must_use]
    pub fn full_name(self) -> &'static str {
        match self {
            ExamId::Gsi => "Geological Survey of India",
            ExamId::Gate => "Graduate Aptitude Test in Engineering",
        }
    }
}

impl fmt::Debug for ExamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExamId({})", self.code())
    }
}

impl fmt::Display for ExamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown exam code: {0}")]
pub struct ParseExamIdError(String);

impl FromStr for ExamId {
    type Err = ParseExamIdError;

    /// Accepts the exam code in any letter case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim();
        ExamId::ALL
            .into_iter()
            .find(|exam| exam.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| ParseExamIdError(code.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_render_uppercase() {
        assert_eq!(ExamId::Gsi.to_string(), "GSI");
        assert_eq!(format!("{:?}", ExamId::Gate), "ExamId(GATE)");
    }

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("GSI".parse::<ExamId>().unwrap(), ExamId::Gsi);
        assert_eq!(" gate ".parse::<ExamId>().unwrap(), ExamId::Gate);
        assert!("UPSC".parse::<ExamId>().is_err());
    }
}
