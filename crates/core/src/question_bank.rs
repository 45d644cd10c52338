//! Authored questions per topic plus the generic templates used for every other topic.

use crate::model::{Difficulty, Question};
use crate::rng::RandomSource;

struct AuthoredQuestion {
    text: &'static str,
    options: &'static [&'static str],
    correct: usize,
    explanation: &'static str,
    difficulty: Difficulty,
}

impl AuthoredQuestion {
    fn to_question(&self, topic: &str) -> Question {
        Question::from_static(
            self.text.to_string(),
            self.options.iter().map(ToString::to_string).collect(),
            self.correct,
            self.explanation.to_string(),
            topic.to_string(),
            self.difficulty,
        )
    }
}

static AUTHORED: &[(&str, &[AuthoredQuestion])] = &[
    (
        "Physical Geology",
        &[AuthoredQuestion {
            text: "The principle of uniformitarianism states that:",
            options: &[
                "Past geological processes were different from present ones",
                "Present geological processes are the key to understanding past geological processes",
                "All geological processes occur at uniform rates",
                "Geological processes are uniform across all regions",
            ],
            correct: 1,
            explanation: "The principle of uniformitarianism, proposed by James Hutton, states that 'the present is the key to the past.' This means that the same geological processes operating today have operated throughout Earth's history, allowing us to interpret ancient rock formations and geological features by studying modern processes.",
            difficulty: Difficulty::Medium,
        }],
    ),
    (
        "Mineralogy",
        &[AuthoredQuestion {
            text: "Which of the following minerals belongs to the pyroxene group?",
            options: &["Hornblende", "Augite", "Muscovite", "Quartz"],
            correct: 1,
            explanation: "Augite is a clinopyroxene mineral with the general formula (Ca,Na)(Mg,Fe,Al,Ti)(Si,Al)2O6. Pyroxenes are characterized by single-chain silicate structures. Hornblende is an amphibole, muscovite is a mica, and quartz is a framework silicate.",
            difficulty: Difficulty::Easy,
        }],
    ),
    (
        "Seismology",
        &[AuthoredQuestion {
            text: "P-waves travel faster than S-waves because:",
            options: &[
                "P-waves have higher frequency",
                "P-waves are compressional waves while S-waves are shear waves",
                "P-waves travel through solid media only",
                "P-waves have lower amplitude",
            ],
            correct: 1,
            explanation: "P-waves (primary waves) are compressional waves that involve particle motion parallel to wave propagation. S-waves (secondary waves) are shear waves with particle motion perpendicular to wave propagation. Compressional waves travel faster because rocks resist compression less than they resist shearing. This is why P-waves arrive first at seismic stations.",
            difficulty: Difficulty::Medium,
        }],
    ),
];

struct GenericTemplate {
    question: fn(&str) -> String,
    options: &'static [&'static str],
    correct: usize,
    explanation: fn(&str) -> String,
}

fn structural_question(topic: &str) -> String {
    format!(
        "Which of the following is a primary characteristic of {}?",
        topic.to_lowercase()
    )
}

fn structural_explanation(topic: &str) -> String {
    format!(
        "{topic} involves the study of rock deformation and the processes that create geological structures. This includes understanding how forces acting on rocks create folds, faults, joints, and other structural features."
    )
}

fn default_question(topic: &str) -> String {
    format!("What is the most important concept to understand in {topic}?")
}

fn default_explanation(topic: &str) -> String {
    format!(
        "Understanding the fundamental principles of {topic} is crucial for building a strong foundation. This includes grasping the basic concepts, mechanisms, and relationships that govern the subject area."
    )
}

static STRUCTURAL_TEMPLATE: GenericTemplate = GenericTemplate {
    question: structural_question,
    options: &[
        "Formation of sedimentary layers",
        "Deformation of rock masses",
        "Chemical weathering processes",
        "Volcanic eruption patterns",
    ],
    correct: 1,
    explanation: structural_explanation,
};

static DEFAULT_TEMPLATE: GenericTemplate = GenericTemplate {
    question: default_question,
    options: &[
        "Basic principles and fundamentals",
        "Advanced mathematical calculations",
        "Historical development only",
        "Practical applications only",
    ],
    correct: 0,
    explanation: default_explanation,
};

static TOPIC_TEMPLATES: &[(&str, &GenericTemplate)] =
    &[("Structural Geology", &STRUCTURAL_TEMPLATE)];

/// Which source a generated question came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionSource {
    Authored,
    TopicTemplate,
    DefaultTemplate,
}

/// Question lookup with a template fallback. Never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestionBank;

impl QuestionBank {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Number of hand-written questions available for `topic`.
    #[must_use]
    pub fn authored_count(&self, topic: &str) -> usize {
        authored_for(topic).len()
    }

    /// Where a question for `topic` would come from.
    #[must_use]
    pub fn source_for(&self, topic: &str) -> QuestionSource {
        if !authored_for(topic).is_empty() {
            QuestionSource::Authored
        } else if template_for(topic).is_some() {
            QuestionSource::TopicTemplate
        } else {
            QuestionSource::DefaultTemplate
        }
    }

    /// Draws one question for `topic`.
    ///
    /// Authored questions are picked uniformly; otherwise a difficulty is drawn
    /// uniformly and the topic's template (or the default one) is filled in.
    pub fn generate_question(&self, topic: &str, random: &mut dyn RandomSource) -> Question {
        let authored = authored_for(topic);
        if !authored.is_empty() {
            let pick = random.next_in_range(authored.len()).min(authored.len() - 1);
            return authored[pick].to_question(topic);
        }

        let difficulty =
            Difficulty::ALL[random.next_in_range(Difficulty::ALL.len()) % Difficulty::ALL.len()];
        let template = template_for(topic).unwrap_or(&DEFAULT_TEMPLATE);
        Question::from_static(
            (template.question)(topic),
            template.options.iter().map(ToString::to_string).collect(),
            template.correct,
            (template.explanation)(topic),
            topic.to_string(),
            difficulty,
        )
    }
}

fn authored_for(topic: &str) -> &'static [AuthoredQuestion] {
    AUTHORED
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, questions)| *questions)
        .unwrap_or(&[])
}

fn template_for(topic: &str) -> Option<&'static GenericTemplate> {
    TOPIC_TEMPLATES
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, template)| *template)
}
