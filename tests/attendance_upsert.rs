//! 考勤 upsert 语义的集成测试（内存 SQLite）

mod common;

use campus_attendance::models::attendance::entities::{AttendanceStatus, LogAction};
use campus_attendance::models::attendance::requests::MarkAttendanceRequest;
use campus_attendance::storage::Storage;
use chrono::NaiveDate;

fn mark_request(
    student_id: i64,
    schedule_id: i64,
    status: AttendanceStatus,
    marked_by: Option<i64>,
) -> MarkAttendanceRequest {
    MarkAttendanceRequest {
        student_id,
        class_schedule_id: schedule_id,
        date: NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(),
        status,
        notes: None,
        marked_by,
    }
}

#[tokio::test]
async fn mark_twice_with_same_key_keeps_one_record() {
    let fixture = common::setup(1).await;
    let student_id = fixture.student_ids[0];

    let (first, created_first) = fixture
        .storage
        .mark_attendance(mark_request(
            student_id,
            fixture.schedule_id,
            AttendanceStatus::Present,
            Some(fixture.teacher_user_id),
        ))
        .await
        .expect("first mark");
    assert!(created_first);
    assert_eq!(first.status, AttendanceStatus::Present);

    let (second, created_second) = fixture
        .storage
        .mark_attendance(mark_request(
            student_id,
            fixture.schedule_id,
            AttendanceStatus::Present,
            Some(fixture.teacher_user_id),
        ))
        .await
        .expect("second mark");
    assert!(!created_second);
    // 记录没有翻倍，id 也没有变化
    assert_eq!(second.id, first.id);

    let records = fixture
        .storage
        .list_attendance_by_student(student_id)
        .await
        .expect("list attendance");
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn mark_with_different_status_overwrites() {
    let fixture = common::setup(1).await;
    let student_id = fixture.student_ids[0];

    let (first, _) = fixture
        .storage
        .mark_attendance(mark_request(
            student_id,
            fixture.schedule_id,
            AttendanceStatus::Absent,
            None,
        ))
        .await
        .expect("first mark");

    let (second, created) = fixture
        .storage
        .mark_attendance(mark_request(
            student_id,
            fixture.schedule_id,
            AttendanceStatus::Late,
            None,
        ))
        .await
        .expect("overwrite mark");

    assert!(!created);
    assert_eq!(second.id, first.id);
    assert_eq!(second.status, AttendanceStatus::Late);

    let stored = fixture
        .storage
        .get_attendance_by_key(
            student_id,
            fixture.schedule_id,
            NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(),
        )
        .await
        .expect("get by key")
        .expect("record exists");
    assert_eq!(stored.status, AttendanceStatus::Late);
}

#[tokio::test]
async fn marks_on_different_dates_create_separate_records() {
    let fixture = common::setup(1).await;
    let student_id = fixture.student_ids[0];

    for day in [8, 9, 10] {
        let (_, created) = fixture
            .storage
            .mark_attendance(MarkAttendanceRequest {
                student_id,
                class_schedule_id: fixture.schedule_id,
                date: NaiveDate::from_ymd_opt(2025, 9, day).unwrap(),
                status: AttendanceStatus::Present,
                notes: None,
                marked_by: None,
            })
            .await
            .expect("mark");
        assert!(created);
    }

    let records = fixture
        .storage
        .list_attendance_by_student(student_id)
        .await
        .expect("list attendance");
    assert_eq!(records.len(), 3);
}

#[tokio::test]
async fn every_upsert_appends_an_audit_log() {
    let fixture = common::setup(1).await;
    let student_id = fixture.student_ids[0];

    let (record, _) = fixture
        .storage
        .mark_attendance(mark_request(
            student_id,
            fixture.schedule_id,
            AttendanceStatus::Present,
            Some(fixture.teacher_user_id),
        ))
        .await
        .expect("create mark");

    fixture
        .storage
        .mark_attendance(mark_request(
            student_id,
            fixture.schedule_id,
            AttendanceStatus::Excused,
            Some(fixture.teacher_user_id),
        ))
        .await
        .expect("update mark");

    let logs = fixture
        .storage
        .list_attendance_logs(record.id)
        .await
        .expect("list logs");
    assert_eq!(logs.len(), 2);

    // 按时间倒序返回，更新在前
    let update_log = logs
        .iter()
        .find(|l| l.action == LogAction::Update)
        .expect("update log present");
    assert_eq!(update_log.old_status, Some(AttendanceStatus::Present));
    assert_eq!(update_log.new_status, AttendanceStatus::Excused);
    assert_eq!(update_log.changed_by, Some(fixture.teacher_user_id));

    let create_log = logs
        .iter()
        .find(|l| l.action == LogAction::Create)
        .expect("create log present");
    assert_eq!(create_log.old_status, None);
    assert_eq!(create_log.new_status, AttendanceStatus::Present);
}

#[tokio::test]
async fn department_listing_pairs_students_with_accounts() {
    let fixture = common::setup(2).await;

    let students = fixture
        .storage
        .list_students_by_department(fixture.department_id, true)
        .await
        .expect("list students by department");

    assert_eq!(students.len(), 2);
    // 账号与学生一一对应，邮箱来自创建时的账号
    let (student, user) = &students[0];
    assert_eq!(student.student_code, "S0001");
    assert_eq!(user.email, "student0@example.edu");
}

#[tokio::test]
async fn student_history_aggregates_correctly() {
    let fixture = common::setup(1).await;
    let student_id = fixture.student_ids[0];

    let statuses = [
        AttendanceStatus::Present,
        AttendanceStatus::Present,
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
    ];
    for (i, status) in statuses.iter().enumerate() {
        fixture
            .storage
            .mark_attendance(MarkAttendanceRequest {
                student_id,
                class_schedule_id: fixture.schedule_id,
                date: NaiveDate::from_ymd_opt(2025, 9, 8 + i as u32).unwrap(),
                status: *status,
                notes: None,
                marked_by: None,
            })
            .await
            .expect("mark");
    }

    let records = fixture
        .storage
        .list_attendance_by_student(student_id)
        .await
        .expect("list attendance");
    let summary = campus_attendance::services::attendance::summarize(&records);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.present, 3);
    assert_eq!(summary.absent, 1);
    assert_eq!(summary.present_percentage, 75.0);
}
