//! Exam → subject → topic drill-down state.

use quiz_core::catalog::{Catalog, Subject};
use quiz_core::model::ExamId;

use crate::error::NavigationError;

/// Placeholder breadcrumb shown before an exam is chosen.
pub const NO_EXAM_LABEL: &str = "Select Exam Type";

/// Level to return to from a deeper screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackTarget {
    ToExams,
    ToSubjects,
    ToTopics,
}

/// Practice screen implied by the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Exams,
    Subjects,
    Topics,
    Session,
}

/// Trail of the current selection for the page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumbs {
    pub exam: String,
    pub subject: Option<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    catalog: Catalog,
    exam: Option<ExamId>,
    subject: Option<&'static Subject>,
    topic: Option<&'static str>,
}

impl Navigator {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    #[must_use]
    pub fn exam(&self) -> Option<ExamId> {
        self.exam
    }

    #[must_use]
    pub fn subject(&self) -> Option<&'static Subject> {
        self.subject
    }

    #[must_use]
    pub fn topic(&self) -> Option<&'static str> {
        self.topic
    }

    /// Choose an exam, clearing any deeper selection.
    pub fn select_exam(&mut self, exam: ExamId) {
        log::debug!("exam selected: {exam}");
        self.exam = Some(exam);
        self.subject = None;
        self.topic = None;
    }

    /// Choose a subject of the selected exam.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::NoExamSelected` before an exam is chosen and
    /// `NavigationError::UnknownSubject` if `key` is not a subject of that exam.
    pub fn select_subject(&mut self, key: &str) -> Result<&'static Subject, NavigationError> {
        let exam = self.exam.ok_or(NavigationError::NoExamSelected)?;
        let subject = self
            .catalog
            .subject(exam, key)
            .ok_or_else(|| NavigationError::UnknownSubject {
                exam,
                key: key.to_string(),
            })?;
        log::debug!("subject selected: {exam}/{}", subject.key());
        self.subject = Some(subject);
        self.topic = None;
        Ok(subject)
    }

    /// Choose a topic of the selected subject.
    ///
    /// # Errors
    ///
    /// Returns `NavigationError::NoSubjectSelected` before a subject is chosen and
    /// `NavigationError::UnknownTopic` if `topic` is not listed under it.
    pub fn select_topic(&mut self, topic: &str) -> Result<&'static str, NavigationError> {
        let subject = self.subject.ok_or(NavigationError::NoSubjectSelected)?;
        let topic = subject
            .topics()
            .iter()
            .copied()
            .find(|candidate| *candidate == topic)
            .ok_or_else(|| NavigationError::UnknownTopic {
                subject: subject.name().to_string(),
                topic: topic.to_string(),
            })?;
        self.topic = Some(topic);
        Ok(topic)
    }

    /// Step back to `target`, clearing the selection made at that level.
    pub fn back(&mut self, target: BackTarget) {
        log::debug!("navigating back: {target:?}");
        match target {
            BackTarget::ToExams => {
                self.exam = None;
                self.subject = None;
                self.topic = None;
            }
            BackTarget::ToSubjects => {
                self.subject = None;
                self.topic = None;
            }
            BackTarget::ToTopics => {
                self.topic = None;
            }
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        match (self.exam, self.subject, self.topic) {
            (None, _, _) => Screen::Exams,
            (Some(_), None, _) => Screen::Subjects,
            (Some(_), Some(_), None) => Screen::Topics,
            (Some(_), Some(_), Some(_)) => Screen::Session,
        }
    }

    /// Subjects of the selected exam; empty before one is chosen.
    #[must_use]
    pub fn subjects(&self) -> &'static [Subject] {
        self.exam
            .map(|exam| self.catalog.subjects(exam))
            .unwrap_or(&[])
    }

    /// Topics of the selected subject; empty before one is chosen.
    #[must_use]
    pub fn topics(&self) -> &'static [&'static str] {
        self.subject.map(Subject::topics).unwrap_or(&[])
    }

    #[must_use]
    pub fn breadcrumbs(&self) -> Breadcrumbs {
        Breadcrumbs {
            exam: self
                .exam
                .map_or_else(|| NO_EXAM_LABEL.to_string(), |exam| exam.code().to_string()),
            subject: self.subject.map(|subject| subject.name().to_string()),
            topic: self.topic.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drill_down_moves_through_screens() {
        let mut nav = Navigator::new(Catalog::new());
        assert_eq!(nav.screen(), Screen::Exams);
        assert_eq!(nav.breadcrumbs().exam, NO_EXAM_LABEL);

        nav.select_exam(ExamId::Gate);
        assert_eq!(nav.screen(), Screen::Subjects);
        assert_eq!(nav.subjects().len(), 3);

        let subject = nav.select_subject("common_section").unwrap();
        assert_eq!(subject.name(), "Common Section");
        assert_eq!(nav.screen(), Screen::Topics);

        nav.select_topic("Seismology").unwrap();
        assert_eq!(nav.screen(), Screen::Session);
        assert_eq!(
            nav.breadcrumbs(),
            Breadcrumbs {
                exam: "GATE".into(),
                subject: Some("Common Section".into()),
                topic: Some("Seismology".into()),
            }
        );
    }

    #[test]
    fn unknown_subject_and_topic_are_rejected() {
        let mut nav = Navigator::new(Catalog::new());
        assert_eq!(
            nav.select_subject("geology"),
            Err(NavigationError::NoExamSelected)
        );

        nav.select_exam(ExamId::Gsi);
        assert_eq!(
            nav.select_subject("geology"),
            Err(NavigationError::UnknownSubject {
                exam: ExamId::Gsi,
                key: "geology".into(),
            })
        );

        nav.select_subject("chemistry").unwrap();
        assert!(matches!(
            nav.select_topic("Seismology"),
            Err(NavigationError::UnknownTopic { .. })
        ));
        assert_eq!(nav.topic(), None);
    }

    #[test]
    fn back_clears_the_level_left() {
        let mut nav = Navigator::new(Catalog::new());
        nav.select_exam(ExamId::Gsi);
        nav.select_subject("geophysics").unwrap();
        nav.select_topic("Solid Earth Geophysics").unwrap();

        nav.back(BackTarget::ToTopics);
        assert_eq!(nav.screen(), Screen::Topics);
        assert_eq!(nav.topics().len(), 2);

        nav.back(BackTarget::ToSubjects);
        assert_eq!(nav.screen(), Screen::Subjects);
        assert!(nav.topics().is_empty());

        nav.back(BackTarget::ToExams);
        assert_eq!(nav.screen(), Screen::Exams);
        assert!(nav.subjects().is_empty());
        assert_eq!(nav.breadcrumbs().exam, "Select Exam Type");
    }

    #[test]
    fn reselecting_an_exam_resets_deeper_levels() {
        let mut nav = Navigator::new(Catalog::new());
        nav.select_exam(ExamId::Gsi);
        nav.select_subject("geophysics").unwrap();
        nav.select_exam(ExamId::Gate);
        assert_eq!(nav.subject(), None);
        assert_eq!(nav.screen(), Screen::Subjects);
    }
}
