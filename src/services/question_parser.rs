//! 题目解析服务 - 业务能力层
//!
//! 把提取好的纯文本扫描成结构化的单选题列表。
//!
//! 识别的格式（每个字段只占一行）：
//!
//! ```text
//! 1. 题干
//! a) 选项A
//! b) 选项B
//! c) 选项C
//! d) 选项D
//! Answer: b
//! ```
//!
//! 答案关键字接受 `Answer` / `Ans` / `nswer`（不区分大小写），分隔符为 `:` 或 `-`。
//! 选项标记 `a) b) c) d)` 只认小写。
//!
//! 这是尽力而为的提取器：不完整的候选直接跳过，不会报错，也不会影响后面的题目。

use crate::error::InputError;
use crate::models::question::{AnswerLabel, Question};
use regex::{Captures, Regex};
use std::sync::OnceLock;

const QUESTION_PATTERN: &str = concat!(
    r"(?P<number>[0-9]+)\.(?P<question>[^\n]*)\n",
    r"[ \t]*a\)(?P<a>[^\n]*)\n",
    r"[ \t]*b\)(?P<b>[^\n]*)\n",
    r"[ \t]*c\)(?P<c>[^\n]*)\n",
    r"[ \t]*d\)(?P<d>[^\n]*)\n",
    r"[ \t]*(?i:answer|ans|nswer)[ \t]*[:\-][ \t]*(?P<ans>[a-dA-D])",
);

fn question_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(QUESTION_PATTERN).expect("题目正则表达式无效"))
}

/// 把字节解码为文本
///
/// 这是核心唯一的失败点：内容不是合法 UTF-8 时返回 [`InputError::NotText`]。
/// 开头的 BOM 会被忽略。
pub fn decode_text(bytes: &[u8]) -> Result<&str, InputError> {
    let text = std::str::from_utf8(bytes).map_err(|source| InputError::NotText {
        valid_up_to: source.valid_up_to(),
        source,
    })?;
    Ok(text.strip_prefix('\u{feff}').unwrap_or(text))
}

/// 题目解析器
///
/// 无状态，可以在多个任务间共享。
#[derive(Debug, Clone, Copy)]
pub struct QuestionParser {
    pattern: &'static Regex,
}

impl QuestionParser {
    pub fn new() -> Self {
        Self {
            pattern: question_pattern(),
        }
    }

    /// 从文本中提取所有格式完整的题目
    ///
    /// 从左到右扫描，匹配互不重叠，输出顺序就是题目在原文中出现的顺序（不按题号排序）。
    ///
    /// 重新同步规则：
    /// - 候选有效：收下，从匹配结尾继续扫描
    /// - 结构完整但无效（题干为空、题号超出 `u64`）：从题号那一行的下一行继续扫描
    /// - 结构不完整：正则本身不会匹配，自动前进到下一个可能的起点
    pub fn parse(&self, text: &str) -> Vec<Question> {
        let mut questions = Vec::new();
        let mut pos = 0;

        while pos < text.len() {
            let Some(caps) = self.pattern.captures_at(text, pos) else {
                break;
            };

            match Self::candidate(&caps) {
                Some(question) => {
                    questions.push(question);
                    pos = caps.get(0).map_or(text.len(), |m| m.end());
                }
                None => {
                    // 题干组后面紧跟换行符，跳到下一行
                    pos = caps.name("question").map_or(text.len(), |m| m.end() + 1);
                }
            }
        }

        questions
    }

    /// 从字节中提取题目，字节不是文本时返回错误
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<Question>, InputError> {
        let text = decode_text(bytes)?;
        Ok(self.parse(text))
    }

    /// 把一次匹配转换成题目，候选无效时返回 `None`
    fn candidate(caps: &Captures<'_>) -> Option<Question> {
        let number = caps.name("number")?.as_str().parse::<u64>().ok()?;
        let prompt = caps.name("question")?.as_str();
        let options = [
            caps.name("a")?.as_str(),
            caps.name("b")?.as_str(),
            caps.name("c")?.as_str(),
            caps.name("d")?.as_str(),
        ];
        let label = caps
            .name("ans")?
            .as_str()
            .chars()
            .next()
            .and_then(AnswerLabel::from_letter)?;

        Question::new(number, prompt, options, label)
    }
}

impl Default for QuestionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// 便捷函数：用默认解析器解析文本
pub fn parse_questions(text: &str) -> Vec<Question> {
    QuestionParser::new().parse(text)
}
