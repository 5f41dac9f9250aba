//! 组卷参数
//!
//! 由调用方每次传入，核心不保存任何状态

use std::fmt;

/// 题目数量限制
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuestionLimit {
    /// 保留全部题目
    #[default]
    All,
    /// 只取前 N 道
    Count(usize),
}

impl QuestionLimit {
    /// 宽松解析数量限制
    ///
    /// - `"all"`（不区分大小写）→ `All`
    /// - 正整数 → `Count(n)`
    /// - 其他任何值（`"0"`、负数、`"banana"`、空串）→ `All`，不报错
    pub fn parse_lenient(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("all") {
            return QuestionLimit::All;
        }

        match raw.parse::<usize>() {
            Ok(n) if n > 0 => QuestionLimit::Count(n),
            _ => QuestionLimit::All,
        }
    }

    /// 对长度为 `available` 的序列，实际保留的题目数
    pub fn resolve(self, available: usize) -> usize {
        match self {
            QuestionLimit::All => available,
            QuestionLimit::Count(n) => n.min(available),
        }
    }
}

impl From<&str> for QuestionLimit {
    fn from(raw: &str) -> Self {
        Self::parse_lenient(raw)
    }
}

impl fmt::Display for QuestionLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionLimit::All => f.write_str("all"),
            QuestionLimit::Count(n) => write!(f, "{}", n),
        }
    }
}

/// 组卷参数：是否打乱 + 数量限制
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AssemblyOptions {
    pub limit: QuestionLimit,
    pub shuffle: bool,
}

impl AssemblyOptions {
    pub fn new(limit: impl Into<QuestionLimit>, shuffle: bool) -> Self {
        Self {
            limit: limit.into(),
            shuffle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_sentinel() {
        assert_eq!(QuestionLimit::parse_lenient("all"), QuestionLimit::All);
        assert_eq!(QuestionLimit::parse_lenient(" ALL "), QuestionLimit::All);
    }

    #[test]
    fn test_parse_positive_integer() {
        assert_eq!(QuestionLimit::parse_lenient("5"), QuestionLimit::Count(5));
        assert_eq!(QuestionLimit::parse_lenient(" 12\n"), QuestionLimit::Count(12));
    }

    #[test]
    fn test_invalid_values_fall_back_to_all() {
        for raw in ["banana", "", "0", "-3", "2.5", "five"] {
            assert_eq!(QuestionLimit::parse_lenient(raw), QuestionLimit::All, "输入: {:?}", raw);
        }
    }

    #[test]
    fn test_resolve_never_exceeds_available() {
        assert_eq!(QuestionLimit::All.resolve(4), 4);
        assert_eq!(QuestionLimit::Count(2).resolve(4), 2);
        assert_eq!(QuestionLimit::Count(10).resolve(4), 4);
        assert_eq!(QuestionLimit::Count(0).resolve(4), 0);
    }
}
