use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 输入不是文本
    #[error("输入错误: {0}")]
    Input(#[from] InputError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 输出序列化错误
    #[error("输出错误: {0}")]
    Output(#[from] OutputError),
}

/// 输入边界错误
///
/// 核心只有这一种失败：传入的内容根本无法当作文本扫描。
/// 格式不对的题目会被跳过，不会走到这里。
#[derive(Debug, Error)]
pub enum InputError {
    /// 字节序列不是合法的 UTF-8 文本
    #[error("输入不是有效的文本 (第 {valid_up_to} 字节处解码失败)")]
    NotText {
        valid_up_to: usize,
        #[source]
        source: std::str::Utf8Error,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 并发数必须大于 0
    #[error("并发数必须大于 0 (当前: {value})")]
    InvalidConcurrency { value: usize },
    /// 输入路径为空
    #[error("输入路径不能为空")]
    EmptyInputPath,
}

/// 输出序列化错误
#[derive(Debug, Error)]
pub enum OutputError {
    /// JSON 序列化失败
    #[error("JSON序列化失败: {0}")]
    JsonSerializeFailed(#[from] serde_json::Error),
}

// ========== 从常见错误类型转换 ==========

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Output(OutputError::JsonSerializeFailed(err))
    }
}

impl From<std::str::Utf8Error> for AppError {
    fn from(err: std::str::Utf8Error) -> Self {
        AppError::Input(InputError::NotText {
            valid_up_to: err.valid_up_to(),
            source: err,
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }

    /// 创建 TOML 解析错误
    pub fn toml_parse_failed(path: impl Into<String>, source: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: path.into(),
            source,
        })
    }

    /// 是否为"输入不是文本"错误
    pub fn is_not_text(&self) -> bool {
        matches!(self, AppError::Input(InputError::NotText { .. }))
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_error_becomes_input_error() {
        let bytes = [0x66, 0x6f, 0xff, 0x6f];
        let err = std::str::from_utf8(&bytes).unwrap_err();
        let app_err: AppError = err.into();

        assert!(app_err.is_not_text());
        assert!(app_err.to_string().contains("第 2 字节"));
    }

    #[test]
    fn test_io_error_is_not_input_error() {
        let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let app_err = AppError::file_write_failed("out.json", err);

        assert!(!app_err.is_not_text());
        assert!(app_err.to_string().contains("out.json"));
    }
}
