use serde::{Deserialize, Serialize};
use std::fmt;

/// 选项标签，只允许 A/B/C/D 四个值
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnswerLabel {
    A,
    B,
    C,
    D,
}

impl AnswerLabel {
    /// 按顺序排列的全部标签
    pub const ALL: [AnswerLabel; 4] = [
        AnswerLabel::A,
        AnswerLabel::B,
        AnswerLabel::C,
        AnswerLabel::D,
    ];

    /// 从字母解析标签（大小写不敏感）
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(AnswerLabel::A),
            'B' => Some(AnswerLabel::B),
            'C' => Some(AnswerLabel::C),
            'D' => Some(AnswerLabel::D),
            _ => None,
        }
    }

    /// 标签在选项数组中的位置
    pub fn index(self) -> usize {
        match self {
            AnswerLabel::A => 0,
            AnswerLabel::B => 1,
            AnswerLabel::C => 2,
            AnswerLabel::D => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnswerLabel::A => "A",
            AnswerLabel::B => "B",
            AnswerLabel::C => "C",
            AnswerLabel::D => "D",
        }
    }
}

impl fmt::Display for AnswerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一道单选题
///
/// 只由解析器构造，构造后不可变。序列化格式与前端约定一致：
/// `{"number": 1, "question": "...", "options": [..4..], "answer": "B"}`
///
/// 反序列化同样经过 [`Question::new`]，题干为空的数据会被拒绝。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    /// 原文中的题号，仅作标签（可重复、可不连续）
    ///
    /// 超出 `u64` 的题号不被接受，对应的题目会被解析器跳过。
    number: u64,
    /// 题干
    #[serde(rename = "question")]
    prompt: String,
    /// 依次对应 A/B/C/D
    options: [String; 4],
    /// 正确答案
    #[serde(rename = "answer")]
    correct_label: AnswerLabel,
}

impl Question {
    /// 创建题目
    ///
    /// 题干去掉首尾空白后为空时返回 `None`，这样的候选不算一道题。
    pub fn new(
        number: u64,
        prompt: &str,
        options: [&str; 4],
        correct_label: AnswerLabel,
    ) -> Option<Self> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return None;
        }

        Some(Self {
            number,
            prompt: prompt.to_string(),
            options: options.map(|o| o.trim().to_string()),
            correct_label,
        })
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String; 4] {
        &self.options
    }

    pub fn correct_label(&self) -> AnswerLabel {
        self.correct_label
    }

    /// 正确选项的文本
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_label.index()]
    }
}

/// 反序列化的中间形态，校验后才转换成 [`Question`]
#[derive(Deserialize)]
struct RawQuestion {
    number: u64,
    question: String,
    options: [String; 4],
    answer: AnswerLabel,
}

impl TryFrom<RawQuestion> for Question {
    type Error = &'static str;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let [a, b, c, d] = &raw.options;
        Question::new(
            raw.number,
            &raw.question,
            [a.as_str(), b.as_str(), c.as_str(), d.as_str()],
            raw.answer,
        )
        .ok_or("题干不能为空")
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 截断题干以便显示（最多80个字符）
        let preview = crate::utils::logging::truncate_text(&self.prompt, 80);
        write!(f, "{}. {} [答案: {}]", self.number, preview, self.correct_label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_letter_is_case_insensitive() {
        assert_eq!(AnswerLabel::from_letter('b'), Some(AnswerLabel::B));
        assert_eq!(AnswerLabel::from_letter('B'), Some(AnswerLabel::B));
        assert_eq!(AnswerLabel::from_letter('e'), None);
    }

    #[test]
    fn test_new_trims_fields() {
        let q = Question::new(7, "  What?  ", [" a ", "b", "", "d\r"], AnswerLabel::C).unwrap();

        assert_eq!(q.prompt(), "What?");
        assert_eq!(q.options(), &["a".to_string(), "b".into(), "".into(), "d".into()]);
        assert_eq!(q.correct_option(), "");
    }

    #[test]
    fn test_empty_prompt_is_not_a_question() {
        assert!(Question::new(1, "   ", ["a", "b", "c", "d"], AnswerLabel::A).is_none());
    }

    #[test]
    fn test_serialize_shape() {
        let q = Question::new(1, "What is 2+2?", ["3", "4", "5", "6"], AnswerLabel::B).unwrap();
        let value = serde_json::to_value(&q).unwrap();

        assert_eq!(
            value,
            json!({
                "number": 1,
                "question": "What is 2+2?",
                "options": ["3", "4", "5", "6"],
                "answer": "B"
            })
        );
    }

    #[test]
    fn test_deserialize_goes_through_validation() {
        let raw = r#"{"number":1,"question":"   ","options":["","","",""],"answer":"A"}"#;
        let err = serde_json::from_str::<Question>(raw).unwrap_err();
        assert!(err.to_string().contains("题干不能为空"));

        let raw = r#"{"number":4,"question":" Q ","options":[" a","b","c","d"],"answer":"D"}"#;
        let q = serde_json::from_str::<Question>(raw).unwrap();
        assert_eq!(q, Question::new(4, "Q", ["a", "b", "c", "d"], AnswerLabel::D).unwrap());
    }

    #[test]
    fn test_deserialize_rejects_malformed_shape() {
        let raw = r#"{"number":1,"question":"q","options":["a","b","c"],"answer":"A"}"#;
        assert!(serde_json::from_str::<Question>(raw).is_err());

        let raw = r#"{"number":1,"question":"q","options":["a","b","c","d"],"answer":"E"}"#;
        assert!(serde_json::from_str::<Question>(raw).is_err());
    }
}
