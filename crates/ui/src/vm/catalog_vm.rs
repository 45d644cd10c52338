use quiz_core::catalog::{Catalog, Subject};
use quiz_core::model::ExamId;
use services::Breadcrumbs;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExamCardVm {
    pub exam: ExamId,
    pub code: &'static str,
    pub full_name: &'static str,
    pub subject_count_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectCardVm {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub topic_count_label: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub name: &'static str,
    pub description: String,
}

#[must_use]
pub fn map_exam_cards(catalog: Catalog) -> Vec<ExamCardVm> {
    catalog
        .exams()
        .iter()
        .map(|&exam| ExamCardVm {
            exam,
            code: exam.code(),
            full_name: exam.full_name(),
            subject_count_label: count_label(catalog.subjects(exam).len(), "subject"),
        })
        .collect()
}

#[must_use]
pub fn map_subject_cards(subjects: &[Subject]) -> Vec<SubjectCardVm> {
    subjects
        .iter()
        .map(|subject| SubjectCardVm {
            key: subject.key(),
            name: subject.name(),
            description: subject.description(),
            topic_count_label: count_label(subject.topics().len(), "topic"),
        })
        .collect()
}

#[must_use]
pub fn map_topic_cards(topics: &[&'static str]) -> Vec<TopicCardVm> {
    topics
        .iter()
        .map(|&name| TopicCardVm {
            name,
            description: format!("Practice questions related to {}", name.to_lowercase()),
        })
        .collect()
}

#[must_use]
pub fn subjects_title(exam: ExamId) -> String {
    format!("Select {} Subject", exam.code())
}

#[must_use]
pub fn topics_title(subject: &Subject) -> String {
    format!("{} Topics", subject.name())
}

/// Breadcrumb labels from the outermost selection inwards.
#[must_use]
pub fn breadcrumb_items(crumbs: &Breadcrumbs) -> Vec<String> {
    std::iter::once(crumbs.exam.clone())
        .chain(crumbs.subject.clone())
        .chain(crumbs.topic.clone())
        .collect()
}

fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
