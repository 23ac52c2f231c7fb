use chrono::{Duration, Local, NaiveDate};
use leetanki_core::{next_easiness, Problem, EF_DEFAULT, EF_MIN, QUALITY_FAIL};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn fresh() -> Problem {
    Problem::new("Two Sum", "Find two indices summing to target.", "return []")
}

#[test]
fn first_two_reviews_fix_interval() {
    let today = day("2024-03-01");
    let mut p = fresh();

    p.mark_reviewed_on(today, false, "Hard");
    assert_eq!(p.review_count, 1);
    assert_eq!(p.success_count, 0);
    assert_eq!(p.interval, 1);
    assert_eq!(p.next_review, Some(day("2024-03-02")));

    p.mark_reviewed_on(today, true, "Medium");
    assert_eq!(p.review_count, 2);
    assert_eq!(p.success_count, 1);
    assert_eq!(p.interval, 6);
    assert_eq!(p.next_review, Some(day("2024-03-07")));
}

#[test]
fn third_success_grows_from_updated_ef() {
    let today = day("2024-03-01");
    let mut p = fresh();
    p.ef = 2.5;
    p.interval = 6;
    p.review_count = 2;
    p.success_count = 2;

    let out = p.mark_reviewed_on(today, true, "Easy");
    assert!((p.ef - 2.6).abs() < 1e-9);
    assert_eq!(p.interval, 15);
    assert_eq!(p.next_review, Some(today + Duration::days(15)));
    assert_eq!(out.interval, 15);
    assert_eq!(out.next_review, today + Duration::days(15));
    assert_eq!(p.last_reviewed, Some(today));
}

#[test]
fn failure_costs_point_three_two() {
    let mut p = fresh();
    p.mark_reviewed_on(day("2024-03-01"), false, "Hard");
    assert!((p.ef - 2.18).abs() < 1e-9);
    assert!((next_easiness(EF_DEFAULT, QUALITY_FAIL) - 2.18).abs() < 1e-9);
}

#[test]
fn ef_never_drops_below_floor() {
    let today = day("2024-03-01");
    let mut p = fresh();
    for _ in 0..10 {
        p.mark_reviewed_on(today, false, "Hard");
    }
    assert_eq!(p.ef, EF_MIN);
    assert!(p.interval >= 1);
}

#[test]
fn counters_stay_consistent() {
    let mut today = day("2024-01-01");
    let mut p = fresh();
    for i in 0..25 {
        let success = i % 3 != 0;
        p.mark_reviewed_on(today, success, "Medium");
        assert!(p.success_count <= p.review_count);
        assert!(p.ef >= EF_MIN);
        assert!(p.interval >= 1);
        assert_eq!(
            p.next_review,
            Some(p.last_reviewed.unwrap() + Duration::days(i64::from(p.interval)))
        );
        today += Duration::days(1);
    }
    assert_eq!(p.review_count, 25);
}

#[test]
fn reported_difficulty_replaces_stored() {
    let mut p = fresh();
    p.difficulty = "Easy".into();
    p.mark_reviewed_on(day("2024-03-01"), true, "Hard");
    assert_eq!(p.difficulty, "Hard");
    p.mark_reviewed_on(day("2024-03-02"), true, "whatever");
    assert_eq!(p.difficulty, "whatever");
}

#[test]
fn mark_reviewed_uses_local_date() {
    let mut p = fresh();
    p.mark_reviewed(true, "Easy");
    let today = Local::now().date_naive();
    assert_eq!(p.last_reviewed, Some(today));
    assert_eq!(p.next_review, Some(today + Duration::days(1)));
}

#[test]
fn due_boundaries() {
    let today = day("2024-03-10");
    let mut p = fresh();
    assert!(p.is_due(today));

    p.next_review = Some(day("2024-03-09"));
    assert!(p.is_due(today));
    p.next_review = Some(today);
    assert!(p.is_due(today));
    p.next_review = Some(day("2024-03-11"));
    assert!(!p.is_due(today));
}

#[test]
fn record_round_trips_with_iso_dates() {
    let mut p = fresh();
    p.tags = vec!["array".into(), "hash map".into()];
    p.mark_reviewed_on(day("2024-03-01"), true, "Easy");

    let json = serde_json::to_value(&p).unwrap();
    assert_eq!(json["last_reviewed"], "2024-03-01");
    assert_eq!(json["next_review"], "2024-03-02");
    assert_eq!(json["skip_recall"], false);

    let back: Problem = serde_json::from_value(json).unwrap();
    assert_eq!(back, p);
}

#[test]
fn zero_interval_record_still_moves_forward() {
    let raw = r#"{"title":"x","statement":"0123456789","solution":"",
                  "review_count":2,"success_count":2,"interval":0}"#;
    let mut p: Problem = serde_json::from_str(raw).unwrap();
    assert!(p.check_state().is_err());

    let today = day("2024-01-01");
    p.mark_reviewed_on(today, true, "Easy");
    assert!(p.interval >= 1);
    assert_eq!(p.interval, 2);
    assert!(p.next_review.unwrap() > today);
}

#[test]
fn malformed_date_is_rejected() {
    let raw = r#"{"title":"x","statement":"0123456789","solution":"","next_review":"March 3"}"#;
    assert!(serde_json::from_str::<Problem>(raw).is_err());
}
