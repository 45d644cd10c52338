use quiz_core::model::{Difficulty, Question, option_letter};
use services::{SessionPhase, SessionService};

/// Badge tone for a difficulty.
#[must_use]
pub fn difficulty_tone(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "success",
        Difficulty::Medium => "info",
        Difficulty::Hard => "error",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Selected,
    Correct,
    Incorrect,
}

impl OptionState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            OptionState::Idle => "option",
            OptionState::Selected => "option selected",
            OptionState::Correct => "option correct",
            OptionState::Incorrect => "option incorrect",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub index: usize,
    pub label: String,
    pub state: OptionState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub is_correct: bool,
    pub result_label: &'static str,
    pub result_class: &'static str,
    pub explanation: String,
    /// Only filled for wrong answers.
    pub key_points: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub counter: String,
    pub topic: String,
    pub text: String,
    pub difficulty_label: &'static str,
    pub difficulty_tone: &'static str,
    pub options: Vec<OptionVm>,
    pub feedback: Option<FeedbackVm>,
    pub can_submit: bool,
    pub can_advance: bool,
    pub is_last: bool,
}

/// Maps the question on screen, with feedback once it is answered.
///
/// `selected` is the pending choice while the question awaits an answer.
#[must_use]
pub fn map_question(session: &SessionService, selected: Option<usize>) -> Option<QuestionVm> {
    let question = session.current_question()?;
    let phase = session.phase();
    let answered = session
        .current_answer()
        .map(|record| record.selected())
        .filter(|_| phase != SessionPhase::AwaitingAnswer);
    let progress = session.progress();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, text)| OptionVm {
            index,
            label: format!("{}. {text}", option_letter(index)),
            state: option_state(question, index, selected, answered),
        })
        .collect();

    Some(QuestionVm {
        counter: format!(
            "Question {} of {}",
            progress.display_position(),
            progress.total
        ),
        topic: question.topic().to_string(),
        text: question.text().to_string(),
        difficulty_label: question.difficulty().as_str(),
        difficulty_tone: difficulty_tone(question.difficulty()),
        options,
        feedback: answered.map(|chosen| map_feedback(question, chosen)),
        can_submit: phase == SessionPhase::AwaitingAnswer && selected.is_some(),
        can_advance: phase == SessionPhase::Answered,
        is_last: progress.position + 1 == progress.total,
    })
}

fn option_state(
    question: &Question,
    index: usize,
    selected: Option<usize>,
    answered: Option<usize>,
) -> OptionState {
    match answered {
        Some(_) if index == question.correct() => OptionState::Correct,
        Some(chosen) if index == chosen => OptionState::Incorrect,
        Some(_) => OptionState::Idle,
        None if selected == Some(index) => OptionState::Selected,
        None => OptionState::Idle,
    }
}

fn map_feedback(question: &Question, chosen: usize) -> FeedbackVm {
    let is_correct = question.is_correct(chosen);
    let key_points = if is_correct {
        Vec::new()
    } else {
        vec![
            format!(
                "The correct answer is: {}. {}",
                option_letter(question.correct()),
                question.correct_option()
            ),
            format!("Topic: {}", question.topic()),
            format!("Difficulty: {}", question.difficulty()),
        ]
    };

    FeedbackVm {
        is_correct,
        result_label: if is_correct { "Correct!" } else { "Incorrect" },
        result_class: if is_correct { "correct" } else { "incorrect" },
        explanation: question.explanation().to_string(),
        key_points,
    }
}
