//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_attendance_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum AttendanceError {
            $($variant(String),)*
        }

        impl AttendanceError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(AttendanceError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(AttendanceError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(AttendanceError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl AttendanceError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        AttendanceError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_attendance_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Serialization("E006", "Serialization Error"),
    DateParse("E007", "Date Parse Error"),
}

impl AttendanceError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for AttendanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for AttendanceError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for AttendanceError {
    fn from(err: sea_orm::DbErr) -> Self {
        AttendanceError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for AttendanceError {
    fn from(err: serde_json::Error) -> Self {
        AttendanceError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for AttendanceError {
    fn from(err: chrono::ParseError) -> Self {
        AttendanceError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AttendanceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AttendanceError::database_config("test").code(), "E001");
        assert_eq!(AttendanceError::validation("test").code(), "E004");
        assert_eq!(AttendanceError::not_found("test").code(), "E005");
        assert_eq!(AttendanceError::date_parse("test").code(), "E007");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            AttendanceError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            AttendanceError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = AttendanceError::validation("Invalid status");
        assert_eq!(err.message(), "Invalid status");
    }

    #[test]
    fn test_format_simple() {
        let err = AttendanceError::date_parse("bad date");
        let formatted = err.format_simple();
        assert!(formatted.contains("Date Parse Error"));
        assert!(formatted.contains("bad date"));
    }

    #[test]
    fn test_from_chrono_parse_error() {
        let parse_err = "not-a-date".parse::<chrono::NaiveDate>().unwrap_err();
        let err: AttendanceError = parse_err.into();
        assert_eq!(err.code(), "E007");
    }
}
