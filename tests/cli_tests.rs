use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

mod common;
use common::rab;

/// 06:30 on 2025-03-03 in UTC+7.
const OPEN: &str = "2025-03-02T23:30:00Z";
/// 08:00 on 2025-03-03 in UTC+7.
const CLOSED: &str = "2025-03-03T01:00:00Z";

fn data_dir(tmp: &TempDir) -> String {
    tmp.path().join("data").to_string_lossy().to_string()
}

#[test]
fn test_init_creates_both_collections() {
    let tmp = TempDir::new().expect("create temp dir");
    let dir = data_dir(&tmp);

    rab()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("33 students, 0 attendance records"));

    assert!(tmp.path().join("data/students.json").exists());
    assert!(tmp.path().join("data/attendance.json").exists());
}

#[test]
fn test_students_json_lists_seed_roster() {
    let tmp = TempDir::new().expect("create temp dir");
    let dir = data_dir(&tmp);

    let output = rab()
        .args(["--data-dir", &dir, "students", "--json"])
        .output()
        .expect("run students");
    assert!(output.status.success());

    let students: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json output");
    let list = students.as_array().expect("array");
    assert_eq!(list.len(), 33);
    assert_eq!(list[0]["name"], "Adi Prasetyo");
    assert_eq!(list[32]["name"], "Hana Lestari");
    assert_eq!(list[32]["id"], 33);
}

#[test]
fn test_checkin_then_duplicate_fails() {
    let tmp = TempDir::new().expect("create temp dir");
    let dir = data_dir(&tmp);

    rab()
        .args(["--data-dir", &dir, "--now", OPEN, "checkin", "1"])
        .assert()
        .success()
        .stdout(contains("Attendance recorded"))
        .stdout(contains("Adi Prasetyo"))
        .stdout(contains("06:30:00"));

    rab()
        .args(["--data-dir", &dir, "--now", OPEN, "checkin", "1"])
        .assert()
        .failure()
        .stderr(contains("already checked in on 2025-03-03"));

    let raw = fs::read_to_string(tmp.path().join("data/attendance.json")).expect("read log");
    let log: serde_json::Value = serde_json::from_str(&raw).expect("json log");
    assert_eq!(log.as_array().map(Vec::len), Some(1));
}

#[test]
fn test_checkin_json_response() {
    let tmp = TempDir::new().expect("create temp dir");
    let dir = data_dir(&tmp);

    let output = rab()
        .args(["--data-dir", &dir, "--now", OPEN, "checkin", "2", "--json"])
        .output()
        .expect("run checkin");
    assert!(output.status.success());

    let body: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["studentId"], 2);
    assert_eq!(body["data"]["studentName"], "Budi Santoso");
    assert_eq!(body["data"]["date"], "2025-03-03");
    assert_eq!(body["data"]["time"], "06:30:00");
    assert_eq!(body["data"]["status"], "Hadir");
}

#[test]
fn test_checkin_outside_window_fails() {
    let tmp = TempDir::new().expect("create temp dir");
    let dir = data_dir(&tmp);

    rab()
        .args(["--data-dir", &dir, "--now", CLOSED, "checkin", "1"])
        .assert()
        .failure()
        .stderr(contains("between 06:00 and 07:15"));
}

#[test]
fn test_checkin_unknown_student_fails() {
    let tmp = TempDir::new().expect("create temp dir");
    let dir = data_dir(&tmp);

    rab()
        .args(["--data-dir", &dir, "--now", OPEN, "checkin", "9999"])
        .assert()
        .failure()
        .stderr(contains("Student 9999 not found"));
}

#[test]
fn test_recap_json_after_checkin() {
    let tmp = TempDir::new().expect("create temp dir");
    let dir = data_dir(&tmp);

    rab()
        .args(["--data-dir", &dir, "--now", OPEN, "checkin", "1"])
        .assert()
        .success();

    let output = rab()
        .args(["--data-dir", &dir, "--now", CLOSED, "recap", "--json"])
        .output()
        .expect("run recap");
    assert!(output.status.success());

    let recap: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(recap[0]["status"], "Hadir");
    assert_eq!(recap[0]["time"], "06:30:00");
    assert_eq!(recap[1]["status"], "Absen");
    assert_eq!(recap[1]["time"], "-");
}

#[test]
fn test_recap_table_counts() {
    let tmp = TempDir::new().expect("create temp dir");
    let dir = data_dir(&tmp);

    rab()
        .args(["--data-dir", &dir, "--now", OPEN, "checkin", "3"])
        .assert()
        .success();

    rab()
        .args(["--data-dir", &dir, "--now", OPEN, "recap"])
        .assert()
        .success()
        .stdout(contains("Recap 2025-03-03"))
        .stdout(contains("Citra Dewi"))
        .stdout(contains("Present: 1 | Absent: 32"));
}

#[test]
fn test_status_json() {
    let tmp = TempDir::new().expect("create temp dir");
    let dir = data_dir(&tmp);

    let output = rab()
        .args(["--data-dir", &dir, "--now", OPEN, "status", "--json"])
        .output()
        .expect("run status");
    assert!(output.status.success());

    let status: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(status["withinTime"], true);
    assert_eq!(status["currentTime"], "06.30.00");

    rab()
        .args(["--data-dir", &dir, "--now", CLOSED, "status"])
        .assert()
        .success()
        .stdout(contains("Check-in is closed"));
}

#[test]
fn test_export_csv() {
    let tmp = TempDir::new().expect("create temp dir");
    let dir = data_dir(&tmp);
    let out = tmp.path().join("recap.csv");
    let out_str = out.to_string_lossy().to_string();

    rab()
        .args(["--data-dir", &dir, "--now", OPEN, "checkin", "1"])
        .assert()
        .success();

    rab()
        .args([
            "--data-dir",
            &dir,
            "--now",
            OPEN,
            "export",
            "--format",
            "csv",
            "--file",
            &out_str,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let csv = fs::read_to_string(&out).expect("read export");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("date,id,name,status,time"));
    assert_eq!(lines.next(), Some("2025-03-03,1,Adi Prasetyo,Hadir,06:30:00"));
    assert_eq!(lines.next(), Some("2025-03-03,2,Budi Santoso,Absen,-"));
}

#[test]
fn test_export_rejects_relative_path() {
    let tmp = TempDir::new().expect("create temp dir");
    let dir = data_dir(&tmp);

    rab()
        .args(["--data-dir", &dir, "export", "--format", "json", "--file", "recap.json"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_qr_refresh_writes_data_urls() {
    let tmp = TempDir::new().expect("create temp dir");
    let dir = data_dir(&tmp);

    rab()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success();

    rab()
        .args(["--data-dir", &dir, "qr", "--refresh"])
        .assert()
        .success()
        .stdout(contains("QR codes refreshed for 33 students"));

    rab()
        .args(["--data-dir", &dir, "qr", "--show", "5"])
        .assert()
        .success()
        .stdout(contains("data:image/svg+xml;base64,"));
}

#[test]
fn test_corrupted_store_is_repaired_by_any_command() {
    let tmp = TempDir::new().expect("create temp dir");
    let dir = data_dir(&tmp);

    rab()
        .args(["--data-dir", &dir, "--test", "init"])
        .assert()
        .success();
    fs::write(tmp.path().join("data/students.json"), "{ broken").expect("corrupt store");

    rab()
        .args(["--data-dir", &dir, "students"])
        .assert()
        .success()
        .stdout(contains("33 students"));
}

#[test]
fn test_export_keeps_existing_file_unless_confirmed() {
    let tmp = TempDir::new().expect("create temp dir");
    let dir = data_dir(&tmp);
    let out = tmp.path().join("recap.json");
    let out_str = out.to_string_lossy().to_string();
    fs::write(&out, "previous").expect("write existing export");

    let export = |answer: &str| {
        rab()
            .args(["--data-dir", &dir, "--now", OPEN, "export", "--format", "json", "--file", &out_str])
            .write_stdin(answer)
            .assert()
    };

    export("n\n").failure().stderr(contains("Export cancelled"));
    assert_eq!(fs::read_to_string(&out).expect("read export"), "previous");

    export("").failure().stderr(contains("Export cancelled"));
    assert_eq!(fs::read_to_string(&out).expect("read export"), "previous");

    export("yes\n").success().stdout(contains("JSON export completed"));
    let rows: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read export")).expect("json export");
    assert_eq!(rows.as_array().map(Vec::len), Some(33));
    assert_eq!(rows[0]["date"], "2025-03-03");
}

#[test]
fn test_export_refuses_directory_target() {
    let tmp = TempDir::new().expect("create temp dir");
    let dir = data_dir(&tmp);
    let target = tmp.path().to_string_lossy().to_string();

    rab()
        .args(["--data-dir", &dir, "export", "--file", &target, "--force"])
        .assert()
        .failure()
        .stderr(contains("is a directory"));
}
