use crate::error::{AppError, AppResult, FileError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// 已提取好的文档文本（原始字节，尚未解码）
///
/// 解码放在流程层做，这样"不是文本"的错误只在一个地方产生。
#[derive(Debug, Clone)]
pub struct TextDocument {
    /// 文档名（文件名去掉扩展名），用作输出文件名
    pub name: String,
    pub content: Vec<u8>,
    pub file_path: PathBuf,
}

/// 加载单个文本文件
pub async fn load_text_document(path: &Path) -> AppResult<TextDocument> {
    let content = fs::read(path)
        .await
        .map_err(|e| io_error(path.display().to_string(), e))?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "document".to_string());

    Ok(TextDocument {
        name,
        content,
        file_path: path.to_path_buf(),
    })
}

/// 加载输入路径下的所有文档
///
/// - 路径是文件：只加载该文件
/// - 路径是文件夹：加载其中所有 `.txt` 文件（按文件名排序），单个文件失败只记警告
pub async fn load_all_text_documents(input_path: &str) -> AppResult<Vec<TextDocument>> {
    let path = PathBuf::from(input_path);

    let metadata = fs::metadata(&path)
        .await
        .map_err(|e| io_error(input_path, e))?;

    if metadata.is_file() {
        return Ok(vec![load_text_document(&path).await?]);
    }

    let mut text_files = Vec::new();
    let mut entries = fs::read_dir(&path)
        .await
        .map_err(|e| AppError::file_read_failed(input_path, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::file_read_failed(input_path, e))?
    {
        let entry_path = entry.path();
        if entry_path.extension().and_then(|s| s.to_str()) == Some("txt") {
            text_files.push(entry_path);
        }
    }
    text_files.sort();

    if text_files.is_empty() {
        tracing::warn!("在文件夹 {} 中没有找到 TXT 文件", input_path);
    }

    let mut documents = Vec::with_capacity(text_files.len());
    for file in text_files {
        tracing::info!(
            "正在加载: {}",
            file.file_name().unwrap_or_default().to_string_lossy()
        );

        match load_text_document(&file).await {
            Ok(document) => {
                tracing::info!("成功加载 {} 字节", document.content.len());
                documents.push(document);
            }
            Err(e) => {
                tracing::warn!("加载文件失败 {}: {}", file.display(), e);
            }
        }
    }

    Ok(documents)
}

/// 只有"不存在"才算 NotFound，权限等其他 I/O 错误保留原因
fn io_error(path: impl Into<String>, source: std::io::Error) -> AppError {
    match source.kind() {
        ErrorKind::NotFound => FileError::NotFound { path: path.into() }.into(),
        _ => AppError::file_read_failed(path, source),
    }
}
