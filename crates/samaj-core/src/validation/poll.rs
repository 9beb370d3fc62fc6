use std::collections::HashSet;

use super::FieldErrors;
use super::rules::is_blank;
use crate::entities::Poll;

const MIN_CHOICE_OPTIONS: usize = 2;

/// Validate the poll editor form.
///
/// Choice questions need at least two options with distinct, non-blank text;
/// text questions must not carry options.
///
/// # Errors
///
/// Returns [`FieldErrors`] keyed by `title`, `questions`, `schedule`,
/// `question-{i}-text`, `question-{i}-options`, and `question-{i}-option-{j}`.
pub fn validate_poll(poll: &Poll) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if is_blank(&poll.title) {
        errors.insert("title", "Poll title is required");
    }
    if let (Some(starts), Some(ends)) = (poll.starts_at, poll.ends_at)
        && ends <= starts
    {
        errors.insert("schedule", "End time must be after the start time");
    }
    if poll.questions.is_empty() {
        errors.insert("questions", "Add at least one question");
    }

    for (qi, question) in poll.questions.iter().enumerate() {
        if is_blank(&question.text) {
            errors.insert(format!("question-{qi}-text"), "Question text is required");
        }

        if !question.question_type.is_choice() {
            if !question.options.is_empty() {
                errors.insert(
                    format!("question-{qi}-options"),
                    "Text questions cannot have options",
                );
            }
            continue;
        }

        if question.options.len() < MIN_CHOICE_OPTIONS {
            errors.insert(
                format!("question-{qi}-options"),
                format!("Add at least {MIN_CHOICE_OPTIONS} options"),
            );
        }

        let mut seen = HashSet::new();
        for (oi, option) in question.options.iter().enumerate() {
            let key = format!("question-{qi}-option-{oi}");
            if is_blank(&option.text) {
                errors.insert(key, "Option text is required");
            } else if !seen.insert(option.text.trim().to_lowercase()) {
                errors.insert(key, "Duplicate option");
            }
        }
    }

    errors.into_result()
}
