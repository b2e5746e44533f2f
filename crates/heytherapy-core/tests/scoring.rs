use heytherapy_core::questions::{QUESTION_COUNT, QUESTIONS, catalogue, to_structured_input};
use heytherapy_core::safety::{emergency_notice, mentions_self_harm};
use heytherapy_core::scoring::{RiskBand, ValidationError, validate_responses, wellness_score};

#[test]
fn score_is_rounded_mean() {
    let mut responses = vec![3u8; QUESTION_COUNT];
    for r in responses.iter_mut().take(5) {
        *r = 4;
    }
    // 65 / 20
    assert_eq!(wellness_score(&responses), Some(3.25));
    assert_eq!(wellness_score(&[1, 2, 2]), Some(1.67));
}

#[test]
fn score_stays_within_slider_range() {
    for low in 1..=5u8 {
        for high in low..=5u8 {
            let mut responses = vec![low; QUESTION_COUNT];
            for r in responses.iter_mut().step_by(3) {
                *r = high;
            }
            let score = wellness_score(&responses).expect("non-empty");
            assert!((1.0..=5.0).contains(&score), "score {score} out of range");
            assert_eq!(wellness_score(&responses), Some(score));
        }
    }
}

#[test]
fn empty_responses_have_no_score() {
    assert_eq!(wellness_score(&[]), None);
}

#[test]
fn risk_band_thresholds() {
    assert_eq!(RiskBand::from_score(1.0), RiskBand::High);
    assert_eq!(RiskBand::from_score(2.0), RiskBand::High);
    assert_eq!(RiskBand::from_score(2.01), RiskBand::Moderate);
    assert_eq!(RiskBand::from_score(3.5), RiskBand::Moderate);
    assert_eq!(RiskBand::from_score(3.51), RiskBand::Low);
    assert_eq!(RiskBand::from_score(5.0), RiskBand::Low);
}

#[test]
fn risk_bands_order_by_severity() {
    assert!(RiskBand::High > RiskBand::Moderate);
    assert!(RiskBand::Moderate > RiskBand::Low);
    assert_eq!(RiskBand::High.label(), "High risk");
}

#[test]
fn validation_reports_count_and_range() {
    assert!(validate_responses(&[3; QUESTION_COUNT]).is_empty());

    let errors = validate_responses(&[3; 19]);
    assert_eq!(
        errors,
        vec![ValidationError::WrongCount {
            expected: 20,
            actual: 19
        }]
    );

    let mut responses = vec![3u8; QUESTION_COUNT];
    responses[10] = 0;
    responses[19] = 6;
    let errors = validate_responses(&responses);
    assert_eq!(errors.len(), 2);
    assert!(errors[0].to_string().starts_with("Sleep quality"));
    assert!(errors[1].to_string().starts_with("Overall well-being"));
}

#[test]
fn self_harm_check_is_case_insensitive() {
    assert!(mentions_self_harm("I keep thinking about Suicide lately"));
    assert!(mentions_self_harm("SUICIDE"));
    assert!(!mentions_self_harm("rough week, slept badly"));
    assert!(emergency_notice("").is_none());
    assert!(emergency_notice("suicidal thoughts").is_none());
    assert!(emergency_notice("thoughts of suicide").is_some());
}

#[test]
fn catalogue_matches_question_order() {
    let questions = catalogue();
    assert_eq!(questions.len(), QUESTION_COUNT);
    assert_eq!(questions[0].label, "Mood stability");
    assert_eq!(questions[19].label, "Overall well-being");
    assert!(questions.iter().enumerate().all(|(i, q)| q.index == i));
}

#[test]
fn structured_input_labels_each_response() {
    let responses: Vec<u8> = (0..QUESTION_COUNT).map(|i| (i % 5) as u8 + 1).collect();
    let text = to_structured_input(&responses);
    assert_eq!(text.lines().count(), QUESTION_COUNT);
    assert!(text.starts_with("- Mood stability: 1\n"));
    assert!(text.contains(&format!("- {}: 5\n", QUESTIONS[19])));
}
