use chrono::{NaiveDate, NaiveTime};
use rabsen::core::{RecapProjector, ZoneClock};
use rabsen::core::recap::project;
use rabsen::models::{AttendanceRecord, RecapStatus, Student};
use rabsen::store::SEED_ROSTER;
use std::sync::Arc;

mod common;
use common::{
    SteppingClock, ZONE_OFFSET_HOURS, service_at, temp_store, temp_store_with, utc_of_zone,
    zone_at,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn time(h: u32, m: u32, s: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, s).expect("valid time")
}

#[test]
fn test_recap_without_check_ins_is_all_absent_in_roster_order() {
    let (_dir, store) = temp_store();
    let projector = RecapProjector::new(Arc::clone(&store), zone_at((2025, 3, 3), 9, 0, 0));

    let recap = projector.build_recap().expect("build recap");

    assert_eq!(recap.len(), SEED_ROSTER.len());
    for (i, entry) in recap.iter().enumerate() {
        assert_eq!(entry.id, i as u32 + 1);
        assert_eq!(entry.name, SEED_ROSTER[i]);
        assert_eq!(entry.status, RecapStatus::Absent);
        assert_eq!(entry.time, None);
        assert_eq!(entry.time_str(), "-");
    }
}

#[test]
fn test_recap_marks_present_students_with_their_time() {
    let (_dir, store) = temp_store_with(&["Ana", "Bayu", "Cici"]);
    service_at(&store, zone_at((2025, 3, 3), 6, 20, 5))
        .check_in(2)
        .expect("check-in accepted");

    let recap = service_at(&store, zone_at((2025, 3, 3), 10, 0, 0))
        .recap()
        .expect("build recap");

    let statuses: Vec<RecapStatus> = recap.iter().map(|e| e.status).collect();
    assert_eq!(
        statuses,
        [RecapStatus::Absent, RecapStatus::Present, RecapStatus::Absent]
    );
    assert_eq!(recap[1].time, Some(time(6, 20, 5)));
}

#[test]
fn test_recap_ignores_other_days() {
    let (_dir, store) = temp_store_with(&["Ana", "Bayu"]);
    service_at(&store, zone_at((2025, 3, 3), 6, 20, 0))
        .check_in(1)
        .expect("check-in accepted");

    let recap = service_at(&store, zone_at((2025, 3, 4), 6, 0, 0))
        .recap()
        .expect("build recap");

    assert!(recap.iter().all(|e| e.status == RecapStatus::Absent));
}

#[test]
fn test_projection_tolerates_orphaned_records() {
    let students = vec![Student::new(1, "Ana"), Student::new(2, "Bayu")];
    let ghost = Student::new(42, "Nobody");
    let attendance = vec![
        AttendanceRecord::present(1, &ghost, date(2025, 3, 3), time(6, 1, 0)),
        AttendanceRecord::present(2, &students[0], date(2025, 3, 3), time(6, 2, 0)),
    ];

    let recap = project(&students, &attendance, date(2025, 3, 3));

    assert_eq!(recap.len(), 2);
    assert_eq!(recap[0].status, RecapStatus::Present);
    assert_eq!(recap[0].time, Some(time(6, 2, 0)));
    assert_eq!(recap[1].status, RecapStatus::Absent);
}

#[test]
fn test_recap_serializes_status_and_sentinel() {
    let students = vec![Student::new(1, "Ana"), Student::new(2, "Bayu")];
    let attendance = vec![AttendanceRecord::present(
        1,
        &students[1],
        date(2025, 3, 3),
        time(7, 1, 30),
    )];

    let recap = project(&students, &attendance, date(2025, 3, 3));
    let json = serde_json::to_value(&recap).expect("serialize recap");

    assert_eq!(
        json,
        serde_json::json!([
            {"id": 1, "name": "Ana", "status": "Absen", "time": "-"},
            {"id": 2, "name": "Bayu", "status": "Hadir", "time": "07:01:30"},
        ])
    );
}

#[test]
fn test_recap_does_not_touch_the_store() {
    let (_dir, store) = temp_store();
    let before = std::fs::read_to_string(store.path_of(rabsen::store::Collection::Attendance))
        .expect("read attendance");

    service_at(&store, zone_at((2025, 3, 3), 6, 30, 0))
        .recap()
        .expect("build recap");

    let after = std::fs::read_to_string(store.path_of(rabsen::store::Collection::Attendance))
        .expect("read attendance");
    assert_eq!(before, after);
}

#[test]
fn test_dated_recap_uses_one_reading_of_the_clock() {
    let (_dir, store) = temp_store_with(&["Ana", "Bayu"]);
    service_at(&store, zone_at((2025, 3, 3), 6, 45, 0))
        .check_in(1)
        .expect("check-in accepted");

    // Midnight passes between the first and second reading.
    let clock = SteppingClock::new(vec![
        utc_of_zone((2025, 3, 3), 23, 59, 59),
        utc_of_zone((2025, 3, 4), 0, 0, 1),
    ]);
    let zone = ZoneClock::with_offset_hours(Arc::new(clock), ZONE_OFFSET_HOURS)
        .expect("valid offset");

    let (day, recap) = service_at(&store, zone)
        .dated_recap()
        .expect("build recap");

    assert_eq!(day, date(2025, 3, 3));
    assert_eq!(recap[0].status, RecapStatus::Present);
    assert_eq!(recap[1].status, RecapStatus::Absent);
}
