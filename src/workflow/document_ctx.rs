//! 文档处理上下文
//!
//! 封装"我正在处理第几个文档、叫什么名字"这一信息

use std::fmt::Display;

/// 文档处理上下文
#[derive(Debug, Clone)]
pub struct DocumentCtx {
    /// 文档索引（从1开始，仅用于日志显示）
    pub document_index: usize,

    /// 文档名（用作输出文件名）
    pub document_name: String,
}

impl DocumentCtx {
    pub fn new(document_index: usize, document_name: impl Into<String>) -> Self {
        Self {
            document_index,
            document_name: document_name.into(),
        }
    }
}

impl Display for DocumentCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[文档 #{} {}]", self.document_index, self.document_name)
    }
}
