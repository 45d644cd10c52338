//! Static syllabus: exam → subject → ordered topic names.

use crate::model::ExamId;

/// A subject within an exam syllabus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subject {
    key: &'static str,
    name: &'static str,
    description: &'static str,
    topics: &'static [&'static str],
}

impl Subject {
    const fn new(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        topics: &'static [&'static str],
    ) -> Self {
        Self {
            key,
            name,
            description,
            topics,
        }
    }

    /// Stable identifier, e.g. `geology_hydrogeology`.
    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    #[must_use]
    pub fn topics(&self) -> &'static [&'static str] {
        self.topics
    }

    #[must_use]
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.contains(&topic)
    }
}

static GSI_SUBJECTS: [Subject; 4] = [
    Subject::new(
        "general_studies",
        "General Studies",
        "Current affairs, history, geography, and general knowledge",
        &[
            "Current Events",
            "History of India",
            "Geography",
            "Polity & Governance",
            "Economic Development",
            "Environmental Ecology",
            "General Science",
        ],
    ),
    Subject::new(
        "geology_hydrogeology",
        "Geology/Hydrogeology",
        "Geological sciences and groundwater studies",
        &[
            "Physical Geology",
            "Structural Geology",
            "Mineralogy",
            "Igneous Petrology",
            "Metamorphic Petrology",
            "Sedimentology",
            "Paleontology",
            "Stratigraphy",
            "Economic Geology",
            "Hydrogeology",
        ],
    ),
    Subject::new(
        "geophysics",
        "Geophysics",
        "Applied geophysics and Earth physics",
        &["Solid Earth Geophysics", "Mathematical Methods in Geophysics"],
    ),
    Subject::new(
        "chemistry",
        "Chemistry",
        "General and analytical chemistry",
        &[
            "Atomic Structure",
            "Thermodynamics",
            "Solutions",
            "Electrochemistry",
            "Coordination Chemistry",
            "Organic Chemistry",
            "Analytical Chemistry",
            "Environmental Chemistry",
            "Geochemistry",
            "Instrumental Methods",
        ],
    ),
];

static GATE_SUBJECTS: [Subject; 3] = [
    Subject::new(
        "common_section",
        "Common Section",
        "Fundamental topics common to all GATE disciplines",
        &[
            "Earth and Planetary System",
            "Seismology",
            "Heat Flow",
            "Geomagnetism",
            "Plate Tectonics",
            "Weathering & Landforms",
            "Basic Structural Geology",
            "Crystallography",
            "Mineralogy",
            "Petrology Basics",
            "Geological Time Scale",
            "Stratigraphy",
            "Mineral Resources",
            "Remote Sensing",
            "Hydrogeology Elements",
            "Geophysical Prospecting",
        ],
    ),
    Subject::new(
        "geology",
        "Geology",
        "Comprehensive geological sciences",
        &[
            "Geomorphology",
            "Structural Geology",
            "Crystallography & Mineralogy",
            "Geochemistry",
            "Igneous Petrology",
            "Sedimentology",
            "Metamorphic Petrology",
            "Paleobiology",
            "Stratigraphy",
            "Resource Geology",
            "Global Tectonics",
            "Applied Geology",
            "Hydrogeology",
            "Remote Sensing",
        ],
    ),
    Subject::new(
        "geophysics",
        "Geophysics",
        "Physics applied to Earth sciences",
        &[
            "Solid-Earth Geophysics",
            "Geodesy",
            "Earthquake Seismology",
            "Potential Fields",
            "Gravity Methods",
            "Magnetic Methods",
            "Electrical Methods",
            "Electromagnetic Methods",
            "Seismic Methods",
            "Well Logging",
            "Radioactive Methods",
            "Geophysical Inversion",
        ],
    ),
];

/// Read-only view over the syllabus tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Catalog;

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn exams(&self) -> &'static [ExamId] {
        &ExamId::ALL
    }

    /// Subjects of `exam` in display order.
    #[must_use]
    pub fn subjects(&self, exam: ExamId) -> &'static [Subject] {
        match exam {
            ExamId::Gsi => &GSI_SUBJECTS,
            ExamId::Gate => &GATE_SUBJECTS,
        }
    }

    #[must_use]
    pub fn subject(&self, exam: ExamId, key: &str) -> Option<&'static Subject> {
        self.subjects(exam).iter().find(|subject| subject.key == key)
    }

    /// Topics for a subject; empty when the subject key is unknown.
    #[must_use]
    pub fn topics(&self, exam: ExamId, subject_key: &str) -> &'static [&'static str] {
        self.subject(exam, subject_key)
            .map(Subject::topics)
            .unwrap_or(&[])
    }
}

/// Topics whose name contains `query`, ignoring case. A blank query keeps everything.
#[must_use]
pub fn filter_topics(topics: &[&'static str], query: &str) -> Vec<&'static str> {
    let needle = query.trim().to_lowercase();
    topics
        .iter()
        .copied()
        .filter(|topic| needle.is_empty() || topic.to_lowercase().contains(&needle))
        .collect()
}
