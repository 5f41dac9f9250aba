//! 题目输出服务 - 业务能力层
//!
//! 只负责"把题目列表写成 JSON"，不关心流程

use crate::error::{AppError, AppResult};
use crate::models::question::Question;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// 把题目列表序列化成前端约定的 JSON 数组
pub fn to_json(questions: &[Question]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(questions)?)
}

/// 题目输出服务
#[derive(Debug, Clone)]
pub struct QuizWriter {
    output_folder: PathBuf,
}

impl QuizWriter {
    /// 使用输出目录创建
    pub fn new(output_folder: impl Into<PathBuf>) -> Self {
        Self {
            output_folder: output_folder.into(),
        }
    }

    /// 某个文档对应的输出路径
    pub fn output_path(&self, document_name: &str) -> PathBuf {
        self.output_folder.join(format!("{}.json", document_name))
    }

    /// 写入一个文档的题目
    ///
    /// # 返回
    /// 返回实际写入的文件路径
    pub async fn write(&self, document_name: &str, questions: &[Question]) -> AppResult<PathBuf> {
        let payload = to_json(questions)?;
        let path = self.output_path(document_name);

        debug!(
            "写入题目: 文档 {} | 题目数 {} | {} 字节",
            document_name,
            questions.len(),
            payload.len()
        );

        ensure_dir(&self.output_folder).await?;
        fs::write(&path, payload)
            .await
            .map_err(|e| AppError::file_write_failed(path.display().to_string(), e))?;

        Ok(path)
    }
}

async fn ensure_dir(dir: &Path) -> AppResult<()> {
    fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::file_write_failed(dir.display().to_string(), e))
}
