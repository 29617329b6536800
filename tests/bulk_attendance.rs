//! 批量考勤的存储层行为（逐条 upsert 的合成结果）

mod common;

use campus_attendance::models::attendance::entities::AttendanceStatus;
use campus_attendance::models::attendance::requests::{AttendanceListQuery, MarkAttendanceRequest};
use campus_attendance::storage::Storage;
use chrono::NaiveDate;

fn mark(
    student_id: i64,
    schedule_id: i64,
    status: AttendanceStatus,
) -> MarkAttendanceRequest {
    MarkAttendanceRequest {
        student_id,
        class_schedule_id: schedule_id,
        date: NaiveDate::from_ymd_opt(2025, 9, 8).unwrap(),
        status,
        notes: None,
        marked_by: None,
    }
}

#[tokio::test]
async fn first_run_creates_all_second_run_updates_all() {
    let fixture = common::setup(5).await;

    // 第一轮：5 个学生全部新建
    let mut created_count = 0;
    for &student_id in &fixture.student_ids {
        let (_, created) = fixture
            .storage
            .mark_attendance(mark(
                student_id,
                fixture.schedule_id,
                AttendanceStatus::Present,
            ))
            .await
            .expect("first run mark");
        if created {
            created_count += 1;
        }
    }
    assert_eq!(created_count, 5);

    // 第二轮：改掉其中两个状态，全部命中已有记录
    let mut created_count = 0;
    let mut updated_count = 0;
    for (i, &student_id) in fixture.student_ids.iter().enumerate() {
        let status = if i < 2 {
            AttendanceStatus::Absent
        } else {
            AttendanceStatus::Present
        };
        let (_, created) = fixture
            .storage
            .mark_attendance(mark(student_id, fixture.schedule_id, status))
            .await
            .expect("second run mark");
        if created {
            created_count += 1;
        } else {
            updated_count += 1;
        }
    }
    assert_eq!(created_count, 0);
    assert_eq!(updated_count, 5);

    // 总行数仍然是 5，且状态被覆盖
    let listed = fixture
        .storage
        .list_attendance_with_pagination(AttendanceListQuery {
            page: Some(1),
            size: Some(100),
            student_id: None,
            class_schedule_id: Some(fixture.schedule_id),
            course_id: None,
            status: None,
            date_from: Some(NaiveDate::from_ymd_opt(2025, 9, 8).unwrap()),
            date_to: Some(NaiveDate::from_ymd_opt(2025, 9, 8).unwrap()),
        })
        .await
        .expect("list attendance");
    assert_eq!(listed.pagination.total, 5);

    let absent = listed
        .items
        .iter()
        .filter(|a| a.status == AttendanceStatus::Absent)
        .count();
    assert_eq!(absent, 2);
}

#[tokio::test]
async fn status_filter_narrows_listing() {
    let fixture = common::setup(3).await;

    let statuses = [
        AttendanceStatus::Present,
        AttendanceStatus::Late,
        AttendanceStatus::Present,
    ];
    for (&student_id, &status) in fixture.student_ids.iter().zip(statuses.iter()) {
        fixture
            .storage
            .mark_attendance(mark(student_id, fixture.schedule_id, status))
            .await
            .expect("mark");
    }

    let listed = fixture
        .storage
        .list_attendance_with_pagination(AttendanceListQuery {
            page: Some(1),
            size: Some(100),
            student_id: None,
            class_schedule_id: Some(fixture.schedule_id),
            course_id: Some(fixture.course_id),
            status: Some(AttendanceStatus::Present),
            date_from: Some(NaiveDate::from_ymd_opt(2025, 9, 8).unwrap()),
            date_to: Some(NaiveDate::from_ymd_opt(2025, 9, 8).unwrap()),
        })
        .await
        .expect("list attendance");

    assert_eq!(listed.pagination.total, 2);
    assert!(
        listed
            .items
            .iter()
            .all(|a| a.status == AttendanceStatus::Present)
    );
}
