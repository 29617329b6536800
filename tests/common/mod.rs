//! 集成测试公共脚手架：内存 SQLite + 基础数据

use campus_attendance::models::courses::requests::CreateCourseRequest;
use campus_attendance::models::departments::requests::CreateDepartmentRequest;
use campus_attendance::models::schedules::requests::CreateScheduleRequest;
use campus_attendance::models::semesters::requests::CreateSemesterRequest;
use campus_attendance::models::students::requests::CreateStudentRequest;
use campus_attendance::models::teachers::requests::CreateTeacherRequest;
use campus_attendance::storage::Storage;
use campus_attendance::storage::sea_orm_storage::SeaOrmStorage;
use chrono::{NaiveDate, NaiveTime};

pub struct Fixture {
    pub storage: SeaOrmStorage,
    pub department_id: i64,
    pub course_id: i64,
    pub schedule_id: i64,
    pub teacher_user_id: i64,
    pub student_ids: Vec<i64>,
}

/// 建一个内存库并铺好院系/课程/教师/学期/课程安排和 n 个学生
pub async fn setup(num_students: usize) -> Fixture {
    let storage = SeaOrmStorage::connect(":memory:", 1, 5)
        .await
        .expect("connect in-memory sqlite");

    let department = storage
        .create_department(CreateDepartmentRequest {
            name: "Computer Science".to_string(),
            code: "CS".to_string(),
            description: None,
        })
        .await
        .expect("create department");

    let course = storage
        .create_course(CreateCourseRequest {
            name: "Data Structures".to_string(),
            code: "CS201".to_string(),
            department_id: department.id,
            credits: 4,
            description: None,
        })
        .await
        .expect("create course");

    let teacher = storage
        .create_teacher(CreateTeacherRequest {
            username: "prof.zhang".to_string(),
            email: "zhang@example.edu".to_string(),
            display_name: Some("Prof. Zhang".to_string()),
            teacher_code: "T001".to_string(),
            department_id: department.id,
            phone: None,
            specialization: None,
            office_location: None,
        })
        .await
        .expect("create teacher");

    let semester = storage
        .create_semester(CreateSemesterRequest {
            name: "Fall 2025".to_string(),
            code: "2025F".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            is_current: true,
        })
        .await
        .expect("create semester");

    let schedule = storage
        .create_class_schedule(CreateScheduleRequest {
            course_id: course.id,
            teacher_id: teacher.id,
            semester_id: semester.id,
            day_of_week: 1,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            room: Some("A101".to_string()),
        })
        .await
        .expect("create class schedule");

    let mut student_ids = Vec::with_capacity(num_students);
    for i in 0..num_students {
        let student = storage
            .create_student(CreateStudentRequest {
                username: format!("student{i}"),
                email: format!("student{i}@example.edu"),
                display_name: None,
                student_code: format!("S{:04}", i + 1),
                department_id: department.id,
                enrollment_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
                phone: None,
            })
            .await
            .expect("create student");
        student_ids.push(student.id);
    }

    Fixture {
        storage,
        department_id: department.id,
        course_id: course.id,
        schedule_id: schedule.id,
        teacher_user_id: teacher.user_id,
        student_ids,
    }
}
