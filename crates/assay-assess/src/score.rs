//! Aggregate score

use crate::grade::{AnswerStatus, Grade};

/// Status counts over a set of grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally {
    /// Correct answers
    pub correct: usize,
    /// Partial answers
    pub partial: usize,
    /// All graded answers
    pub total: usize,
}

impl Tally {
    /// Count statuses
    #[must_use]
    pub fn of<'a>(grades: impl IntoIterator<Item = &'a Grade>) -> Self {
        grades.into_iter().fold(Self::default(), |mut tally, grade| {
            match grade.status {
                AnswerStatus::Correct => tally.correct += 1,
                AnswerStatus::Partial => tally.partial += 1,
                AnswerStatus::Incorrect => {}
            }
            tally.total += 1;
            tally
        })
    }

    /// Score for this tally
    #[inline]
    #[must_use]
    pub fn score(&self) -> u8 {
        score(self.correct, self.partial, self.total)
    }
}

/// `round(((correct + 0.5 * partial) / total) * 100)`, 0 when `total` is 0
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn score(correct: usize, partial: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let earned = correct as f64 + 0.5 * partial as f64;
    ((earned / total as f64) * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_formula() {
        assert_eq!(score(3, 0, 3), 100);
        assert_eq!(score(0, 0, 3), 0);
        assert_eq!(score(1, 1, 3), 50);
        assert_eq!(score(1, 0, 3), 33);
        assert_eq!(score(2, 0, 3), 67);
        assert_eq!(score(0, 1, 4), 13);
    }

    #[test]
    fn score_empty() {
        assert_eq!(score(0, 0, 0), 0);
    }

    #[test]
    fn tally_counts() {
        let grades = vec![
            Grade::correct("ok"),
            Grade::partial("close"),
            Grade::incorrect("no"),
            Grade::correct("ok"),
        ];
        let tally = Tally::of(&grades);
        assert_eq!(tally, Tally { correct: 2, partial: 1, total: 4 });
        assert_eq!(tally.score(), 63);
    }
}
