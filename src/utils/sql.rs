//! SQL 相关工具

/// 转义 LIKE 模式中的通配符
///
/// 用户输入直接拼进 contains 查询前必须先转义，
/// 否则 % 和 _ 会被当作通配符。
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_percent_and_underscore() {
        assert_eq!(escape_like_pattern("50%"), "50\\%");
        assert_eq!(escape_like_pattern("a_b"), "a\\_b");
    }

    #[test]
    fn test_escape_backslash_first() {
        assert_eq!(escape_like_pattern("\\%"), "\\\\\\%");
    }

    #[test]
    fn test_plain_input_unchanged() {
        assert_eq!(escape_like_pattern("CS101"), "CS101");
    }
}
