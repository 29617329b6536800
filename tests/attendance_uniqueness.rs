//! 存储层唯一约束测试：绕过 upsert 直接插入重复键必须被拒绝

mod common;

use campus_attendance::entity::attendances;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, Set};
use uuid::Uuid;

fn raw_row(student_id: i64, schedule_id: i64, date: NaiveDate) -> attendances::ActiveModel {
    attendances::ActiveModel {
        id: Set(Uuid::new_v4()),
        student_id: Set(student_id),
        class_schedule_id: Set(schedule_id),
        date: Set(date),
        status: Set("present".to_string()),
        notes: Set(None),
        marked_by: Set(None),
        created_at: Set(0),
        updated_at: Set(0),
    }
}

#[tokio::test]
async fn duplicate_key_insert_is_rejected_by_unique_index() {
    let fixture = common::setup(1).await;
    let student_id = fixture.student_ids[0];
    let date = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();

    let db = fixture.storage.connection();

    raw_row(student_id, fixture.schedule_id, date)
        .insert(db)
        .await
        .expect("first insert succeeds");

    let duplicate = raw_row(student_id, fixture.schedule_id, date).insert(db).await;
    assert!(duplicate.is_err(), "second insert with same key must fail");
}

#[tokio::test]
async fn same_student_different_schedule_is_allowed() {
    let fixture = common::setup(1).await;
    let student_id = fixture.student_ids[0];
    let date = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();

    let db = fixture.storage.connection();

    raw_row(student_id, fixture.schedule_id, date)
        .insert(db)
        .await
        .expect("insert for schedule");

    // 另一个课程安排，同一学生同一天
    let second_schedule = {
        use campus_attendance::models::schedules::requests::CreateScheduleRequest;
        use campus_attendance::storage::Storage;
        use chrono::NaiveTime;

        fixture
            .storage
            .create_class_schedule(CreateScheduleRequest {
                course_id: fixture.course_id,
                teacher_id: 1,
                semester_id: 1,
                day_of_week: 3,
                start_time: NaiveTime::from_hms_opt(14, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(15, 30, 0).unwrap(),
                room: None,
            })
            .await
            .expect("create second schedule")
    };

    raw_row(student_id, second_schedule.id, date)
        .insert(db)
        .await
        .expect("insert for second schedule succeeds");
}
