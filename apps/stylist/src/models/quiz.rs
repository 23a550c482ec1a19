use crate::models::fashion::StyleLabel;

pub const QUIZ_QUESTIONS: [&str; 5] = [
    "What's your go-to outfit for a casual day?",
    "How would you describe your ideal evening wear?",
    "What's your favorite accessory?",
    "Which color palette do you prefer?",
    "How do you feel about following fashion trends?",
];

pub const QUESTION_COUNT: usize = QUIZ_QUESTIONS.len();

/// One slot per quiz question. Slots are independent of each other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizAnswers {
    slots: [Option<StyleLabel>; QUESTION_COUNT],
}

impl QuizAnswers {
    /// Stores `label` for question `index`. Indices past the last question are ignored.
    pub fn set(&mut self, index: usize, label: StyleLabel) -> bool {
        match self.slots.get_mut(index) {
            Some(slot) => {
                *slot = Some(label);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<StyleLabel> {
        self.slots.get(index).copied().flatten()
    }

    pub fn answered(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Wire form: one string per question, empty for unanswered slots.
    pub fn to_wire(&self) -> Vec<String> {
        self.slots
            .iter()
            .map(|s| s.map(|l| l.as_str().to_string()).unwrap_or_default())
            .collect()
    }
}

impl From<&[StyleLabel]> for QuizAnswers {
    fn from(labels: &[StyleLabel]) -> Self {
        let mut answers = QuizAnswers::default();
        for (i, label) in labels.iter().enumerate().take(QUESTION_COUNT) {
            answers.set(i, *label);
        }
        answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setting_one_slot_leaves_others_untouched() {
        for i in 0..QUESTION_COUNT {
            let mut answers = QuizAnswers::from(&[StyleLabel::Edgy; QUESTION_COUNT][..]);
            let before = answers.clone();
            answers.set(i, StyleLabel::Romantic);
            for j in (0..QUESTION_COUNT).filter(|&j| j != i) {
                assert_eq!(answers.get(j), before.get(j), "slot {j} changed when setting {i}");
            }
            assert_eq!(answers.get(i), Some(StyleLabel::Romantic));
        }
    }

    #[test]
    fn test_out_of_range_index_ignored() {
        let mut answers = QuizAnswers::default();
        assert!(!answers.set(QUESTION_COUNT, StyleLabel::Classic));
        assert_eq!(answers, QuizAnswers::default());
    }

    #[test]
    fn test_wire_form_keeps_empty_slots() {
        let mut answers = QuizAnswers::default();
        answers.set(1, StyleLabel::Preppy);
        assert_eq!(answers.to_wire(), vec!["", "preppy", "", "", ""]);
        assert_eq!(answers.answered(), 1);
    }

    #[test]
    fn test_from_slice_truncates_extra_labels() {
        let labels = [StyleLabel::Classic; 7];
        let answers = QuizAnswers::from(&labels[..]);
        assert_eq!(answers.answered(), QUESTION_COUNT);
    }
}
