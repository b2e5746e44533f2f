use heytherapy_bedrock::prompt::{NARRATIVE_PLACEHOLDER, ReportRequest};
use heytherapy_core::models::check_in::CheckIn;
use heytherapy_core::models::patient::PatientRecord;
use jiff::civil::date;

fn record_with(narrative: &str) -> PatientRecord {
    let mut record = PatientRecord::new(
        "p-7",
        CheckIn::record(date(2026, 2, 1), vec![4; 20], "").unwrap(),
    );
    let mut responses = vec![2u8; 20];
    responses[0] = 1;
    record.append(CheckIn::record(date(2026, 2, 2), responses, narrative).unwrap());
    record
}

#[test]
fn request_carries_latest_check_in_and_history() {
    let request = ReportRequest::from_record(&record_with("slept badly"));
    assert_eq!(request.patient_id, "p-7");
    assert_eq!(request.latest_score, 1.95);
    assert_eq!(request.historical_scores, vec![4.0, 1.95]);
    assert_eq!(request.responses.len(), 20);
    assert_eq!(request.responses[0], 1);
    assert_eq!(request.narrative, "slept badly");
}

#[test]
fn user_message_includes_every_part() {
    let message = ReportRequest::from_record(&record_with("slept badly")).to_user_message();
    assert!(message.contains("Latest wellness score: 1.95"));
    assert!(message.contains("Score history (oldest first): 4.00, 1.95"));
    assert!(message.contains("- Mood stability: 1\n"));
    assert!(message.contains("- Overall well-being: 2\n"));
    assert!(message.contains("slept badly"));
    assert!(!message.contains(NARRATIVE_PLACEHOLDER));
}

#[test]
fn empty_narrative_uses_placeholder() {
    let message = ReportRequest::from_record(&record_with("")).to_user_message();
    assert!(message.ends_with(&format!("{NARRATIVE_PLACEHOLDER}\n")));
}
