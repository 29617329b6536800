use serde::{Deserialize, Serialize};
use uuid::Uuid;

// 考勤状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present, // 出勤
    Absent,  // 缺勤
    Late,    // 迟到
    Excused, // 请假
}

impl AttendanceStatus {
    pub const PRESENT: &'static str = "present";
    pub const ABSENT: &'static str = "absent";
    pub const LATE: &'static str = "late";
    pub const EXCUSED: &'static str = "excused";
}

impl<'de> Deserialize<'de> for AttendanceStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            AttendanceStatus::PRESENT => Ok(AttendanceStatus::Present),
            AttendanceStatus::ABSENT => Ok(AttendanceStatus::Absent),
            AttendanceStatus::LATE => Ok(AttendanceStatus::Late),
            AttendanceStatus::EXCUSED => Ok(AttendanceStatus::Excused),
            _ => Err(serde::de::Error::custom(format!(
                "无效的考勤状态: '{s}'. 支持的状态: present, absent, late, excused"
            ))),
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "{}", AttendanceStatus::PRESENT),
            AttendanceStatus::Absent => write!(f, "{}", AttendanceStatus::ABSENT),
            AttendanceStatus::Late => write!(f, "{}", AttendanceStatus::LATE),
            AttendanceStatus::Excused => write!(f, "{}", AttendanceStatus::EXCUSED),
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            "late" => Ok(AttendanceStatus::Late),
            "excused" => Ok(AttendanceStatus::Excused),
            _ => Err(format!("Invalid attendance status: {s}")),
        }
    }
}

// 考勤记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendance {
    pub id: Uuid,
    pub student_id: i64,
    pub class_schedule_id: i64,
    pub date: chrono::NaiveDate,
    pub status: AttendanceStatus,
    pub notes: Option<String>,
    pub marked_by: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 日志动作
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogAction {
    Create,
    Update,
}

impl std::fmt::Display for LogAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogAction::Create => write!(f, "create"),
            LogAction::Update => write!(f, "update"),
        }
    }
}

impl std::str::FromStr for LogAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create" => Ok(LogAction::Create),
            "update" => Ok(LogAction::Update),
            _ => Err(format!("Invalid log action: {s}")),
        }
    }
}

// 考勤变更日志
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceLog {
    pub id: i64,
    pub attendance_id: Uuid,
    pub action: LogAction,
    pub old_status: Option<AttendanceStatus>,
    pub new_status: AttendanceStatus,
    pub changed_by: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for status in [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
            AttendanceStatus::Excused,
        ] {
            let parsed: AttendanceStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!("half-present".parse::<AttendanceStatus>().is_err());
        assert!(serde_json::from_str::<AttendanceStatus>("\"P\"").is_err());
    }
}
