//! 考勤聚合
//!
//! 对已经过滤好的记录集合做纯计算，过滤交给调用方。

use crate::models::attendance::entities::{Attendance, AttendanceStatus};
use crate::models::attendance::responses::AttendanceSummary;

/// 汇总一组考勤记录
///
/// 出勤率 = present / total * 100，保留一位小数；
/// total 为 0 时出勤率为 0，避免除零。
pub fn summarize(records: &[Attendance]) -> AttendanceSummary {
    let mut present = 0i64;
    let mut absent = 0i64;
    let mut late = 0i64;
    let mut excused = 0i64;

    for record in records {
        match record.status {
            AttendanceStatus::Present => present += 1,
            AttendanceStatus::Absent => absent += 1,
            AttendanceStatus::Late => late += 1,
            AttendanceStatus::Excused => excused += 1,
        }
    }

    let total = records.len() as i64;
    let present_percentage = if total > 0 {
        (present as f64 / total as f64 * 100.0 * 10.0).round() / 10.0
    } else {
        0.0
    };

    AttendanceSummary {
        total,
        present,
        absent,
        late,
        excused,
        present_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn record(status: AttendanceStatus) -> Attendance {
        Attendance {
            id: Uuid::new_v4(),
            student_id: 1,
            class_schedule_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
            status,
            notes: None,
            marked_by: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0);
        assert_eq!(summary.present, 0);
        assert_eq!(summary.present_percentage, 0.0);
    }

    #[test]
    fn test_summarize_three_present_one_absent() {
        let records = vec![
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Absent),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.present, 3);
        assert_eq!(summary.absent, 1);
        assert_eq!(summary.present_percentage, 75.0);
    }

    #[test]
    fn test_summarize_counts_all_statuses() {
        let records = vec![
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Late),
            record(AttendanceStatus::Excused),
            record(AttendanceStatus::Absent),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.present, 1);
        assert_eq!(summary.late, 1);
        assert_eq!(summary.excused, 1);
        assert_eq!(summary.absent, 1);
        assert_eq!(summary.present_percentage, 25.0);
    }

    #[test]
    fn test_summarize_rounds_to_one_decimal() {
        let records = vec![
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Absent),
            record(AttendanceStatus::Absent),
        ];
        let summary = summarize(&records);
        assert_eq!(summary.present_percentage, 33.3);
    }
}
