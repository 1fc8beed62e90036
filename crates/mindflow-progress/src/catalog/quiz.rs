//! Quiz grading.

use super::types::QuizQuestion;

/// Grade a set of answers as a rounded percentage of correct responses.
///
/// `answers[i]` is the chosen option index for `questions[i]`; missing or
/// `None` answers count as wrong. A quiz without questions grades as 100.
pub fn grade(questions: &[QuizQuestion], answers: &[Option<usize>]) -> u32 {
    if questions.is_empty() {
        return 100;
    }

    let correct = questions
        .iter()
        .enumerate()
        .filter(|(i, q)| answers.get(*i).copied().flatten() == Some(q.correct_answer))
        .count();

    ((correct as f64 / questions.len() as f64) * 100.0).round() as u32
}
