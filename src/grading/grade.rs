use crate::error::{GraderError, Result};
use crate::grading::scheme::GradingScheme;
use crate::record::Record;
use crate::roster::Roster;

/// Σ score[i] × weight[i] over the scheme's components.
///
/// Extra scores beyond the scheme's components are ignored; callers that need
/// the count checked go through [`grade`].
pub fn weighted_sum(scores: &[u8], scheme: &GradingScheme) -> f64 {
    scores
        .iter()
        .zip(scheme.components())
        .map(|(score, component)| f64::from(*score) * component.weight)
        .sum()
}

/// Computes the letter grade for `record`, stores it on the record, and returns it.
///
/// # Errors
///
/// Returns [`GraderError::ScoreCountMismatch`] if the record does not carry
/// exactly one score per scheme component.
pub fn grade(record: &mut Record, scheme: &GradingScheme) -> Result<char> {
    let required = scheme.component_count();
    if record.scores().len() != required {
        return Err(GraderError::ScoreCountMismatch {
            name: record.name().to_string(),
            actual: record.scores().len(),
            required,
        });
    }

    let letter = scheme.letter_for(weighted_sum(record.scores(), scheme));
    record.set_grade(letter);
    Ok(letter)
}

/// Grades every record in current roster order, stopping at the first failure.
///
/// Records graded before the failing one keep their grade.
pub fn grade_all(roster: &mut Roster, scheme: &GradingScheme) -> Result<()> {
    for record in roster.iter_mut() {
        grade(record, scheme)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graded(scores: Vec<u8>) -> Result<char> {
        let mut record = Record::new("Student", scores);
        grade(&mut record, &GradingScheme::standard())
    }

    #[test]
    fn test_weighted_sum_honors_report_card() {
        let sum = weighted_sum(&[95, 92, 88, 90, 85, 91, 94], &GradingScheme::standard());
        assert!((sum - 90.65).abs() < 1e-9, "sum was {sum}");
    }

    #[test]
    fn test_grade_high_scores_is_a() {
        assert_eq!(graded(vec![95, 92, 88, 90, 85, 91, 94]), Ok('A'));
    }

    #[test]
    fn test_grade_all_sixty_is_d() {
        let sum = weighted_sum(&[60; 7], &GradingScheme::standard());
        assert!((sum - 60.0).abs() < 1e-9);
        assert_eq!(graded(vec![60; 7]), Ok('D'));
    }

    #[test]
    fn test_grade_all_zero_is_f() {
        assert_eq!(weighted_sum(&[0; 7], &GradingScheme::standard()), 0.0);
        assert_eq!(graded(vec![0; 7]), Ok('F'));
    }

    #[test]
    fn test_grade_all_hundred_is_a() {
        assert_eq!(graded(vec![100; 7]), Ok('A'));
    }

    #[test]
    fn test_grade_sets_record_grade() {
        let mut record = Record::new("Ann", vec![80; 7]);
        let letter = grade(&mut record, &GradingScheme::standard()).unwrap();
        assert_eq!(letter, 'B');
        assert_eq!(record.grade(), Some('B'));
    }

    #[test]
    fn test_grade_wrong_score_count() {
        assert_eq!(
            graded(vec![90; 6]),
            Err(GraderError::ScoreCountMismatch {
                name: "Student".to_string(),
                actual: 6,
                required: 7,
            })
        );
        assert!(matches!(
            graded(vec![90; 8]),
            Err(GraderError::ScoreCountMismatch { actual: 8, .. })
        ));
    }

    #[test]
    fn test_mixed_scores_on_exact_boundary_keep_the_letter() {
        // Each row's weighted sum is exactly 90.00 or 80.00.
        assert_eq!(graded(vec![94, 95, 59, 83, 89, 99, 97]), Ok('A'));
        assert_eq!(graded(vec![69, 100, 99, 98, 69, 94, 62]), Ok('B'));
        assert_eq!(graded(vec![95, 94, 89, 83, 84, 84, 58]), Ok('B'));
    }

    #[test]
    fn test_grade_matches_integer_arithmetic() {
        // Standard weights in hundredths, thresholds in hundredths of a point.
        const WEIGHTS: [u32; 7] = [10, 10, 10, 10, 20, 15, 25];
        const CUTOFFS: [(u32, char); 5] =
            [(9000, 'A'), (8000, 'B'), (7000, 'C'), (6000, 'D'), (0, 'F')];

        let mut state: u64 = 0x2545_f491_4f6c_dd1d;
        let mut boundary_rows = 0;
        for _ in 0..200_000 {
            let scores: Vec<u8> = (0..7)
                .map(|_| {
                    state = state
                        .wrapping_mul(6_364_136_223_846_793_005)
                        .wrapping_add(1_442_695_040_888_963_407);
                    55 + ((state >> 33) % 46) as u8
                })
                .collect();

            let exact: u32 = scores
                .iter()
                .zip(WEIGHTS)
                .map(|(s, w)| u32::from(*s) * w)
                .sum();
            if CUTOFFS.iter().any(|(c, _)| *c == exact) {
                boundary_rows += 1;
            }
            let expected = CUTOFFS.iter().find(|(c, _)| *c <= exact).unwrap().1;

            assert_eq!(graded(scores.clone()), Ok(expected), "scores {scores:?}");
        }
        assert!(boundary_rows > 0);
    }

    #[test]
    fn test_grade_is_deterministic() {
        let scores = vec![71, 64, 88, 90, 55, 79, 83];
        let first = graded(scores.clone()).unwrap();
        for _ in 0..10 {
            assert_eq!(graded(scores.clone()).unwrap(), first);
        }
    }

    #[test]
    fn test_raising_a_score_never_lowers_the_grade() {
        let scheme = GradingScheme::standard();
        let base = [55u8, 62, 71, 68, 74, 59, 66];
        let letter_rank = |c: char| {
            scheme
                .thresholds()
                .iter()
                .position(|t| t.letter == c)
                .unwrap()
        };

        for index in 0..base.len() {
            let mut previous_sum = f64::MIN;
            let mut previous_rank = usize::MAX;
            for value in (base[index]..=100).step_by(3) {
                let mut scores = base.to_vec();
                scores[index] = value;
                let sum = weighted_sum(&scores, &scheme);
                let rank = letter_rank(graded(scores).unwrap());
                assert!(sum >= previous_sum);
                assert!(rank <= previous_rank);
                previous_sum = sum;
                previous_rank = rank;
            }
        }
    }

    #[test]
    fn test_alternate_scheme() {
        use crate::grading::scheme::{Component, Threshold};

        let scheme = GradingScheme::new(
            vec![
                Component {
                    name: "Lab".to_string(),
                    weight: 0.5,
                },
                Component {
                    name: "Exam".to_string(),
                    weight: 0.5,
                },
            ],
            vec![
                Threshold {
                    min: 50.0,
                    letter: 'P',
                },
                Threshold {
                    min: 0.0,
                    letter: 'N',
                },
            ],
        )
        .unwrap();

        let mut pass = Record::new("Pat", vec![40, 60]);
        let mut fail = Record::new("Sam", vec![40, 59]);
        assert_eq!(grade(&mut pass, &scheme), Ok('P'));
        assert_eq!(grade(&mut fail, &scheme), Ok('N'));
    }

    #[test]
    fn test_grade_all_stops_at_first_failure() {
        let mut roster = Roster::new();
        roster.append(Record::new("First", vec![90; 7])).unwrap();
        roster.append(Record::new("Broken", vec![90; 3])).unwrap();
        roster.append(Record::new("Last", vec![90; 7])).unwrap();

        let err = grade_all(&mut roster, &GradingScheme::standard()).unwrap_err();
        assert!(matches!(err, GraderError::ScoreCountMismatch { ref name, .. } if name == "Broken"));

        let grades: Vec<_> = roster.iter().map(Record::grade).collect();
        assert_eq!(grades, vec![Some('A'), None, None]);
    }

    #[test]
    fn test_grade_all_grades_everyone() {
        let mut roster = Roster::new();
        roster.append(Record::new("A", vec![95; 7])).unwrap();
        roster.append(Record::new("B", vec![65; 7])).unwrap();

        grade_all(&mut roster, &GradingScheme::standard()).unwrap();
        let grades: Vec<_> = roster.iter().map(Record::grade).collect();
        assert_eq!(grades, vec![Some('A'), Some('D')]);
    }
}
