use crate::error::{AppError, AppResult, ConfigError};
use crate::models::assembly::{AssemblyOptions, QuestionLimit};
use serde::Deserialize;
use std::path::Path;

/// 默认配置文件路径
pub const DEFAULT_CONFIG_FILE: &str = "quiz.toml";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 输入路径：单个 .txt 文件或包含 .txt 文件的文件夹
    pub input_path: String,
    /// JSON 输出目录
    pub output_folder: String,
    /// 题目数量："all" 或正整数，其他值视为 "all"
    pub question_limit: String,
    /// 是否打乱题目顺序
    pub shuffle: bool,
    /// 打乱用的随机种子（不设置则每次不同）
    pub shuffle_seed: Option<u64>,
    /// 同时处理的文档数量
    pub max_concurrent_documents: usize,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: "input_text".to_string(),
            output_folder: "output_json".to_string(),
            question_limit: "all".to_string(),
            shuffle: false,
            shuffle_seed: None,
            max_concurrent_documents: 4,
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
        }
    }
}

impl Config {
    /// 从环境变量读取配置，未设置或无法解析的项使用默认值
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 从 TOML 文件读取配置，文件中缺少的项使用默认值
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file_read_failed(path.display().to_string(), e))?;
        Self::from_toml_str(&content)
            .map_err(|e| AppError::toml_parse_failed(path.display().to_string(), e))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// 加载配置
    ///
    /// 读取 `QUIZ_CONFIG` 指定的文件（默认 `quiz.toml`）并用环境变量覆盖；
    /// 文件不存在时直接使用 [`Config::from_env`]
    pub fn load() -> AppResult<Self> {
        let config_file =
            std::env::var("QUIZ_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        let path = Path::new(&config_file);

        let config = if path.exists() {
            Self::from_toml_file(path)?.with_env_overrides()
        } else {
            Self::from_env()
        };

        config.validate()?;
        Ok(config)
    }

    /// 用环境变量覆盖当前配置，未设置或无法解析的项保持原值
    pub fn with_env_overrides(self) -> Self {
        Self {
            input_path: env_string("INPUT_PATH").unwrap_or(self.input_path),
            output_folder: env_string("OUTPUT_FOLDER").unwrap_or(self.output_folder),
            question_limit: env_string("QUESTION_LIMIT").unwrap_or(self.question_limit),
            shuffle: env_string("SHUFFLE")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(self.shuffle),
            shuffle_seed: env_string("SHUFFLE_SEED")
                .and_then(|v| v.parse().ok())
                .or(self.shuffle_seed),
            max_concurrent_documents: env_string("MAX_CONCURRENT_DOCUMENTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.max_concurrent_documents),
            verbose_logging: env_string("VERBOSE_LOGGING")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(self.verbose_logging),
            output_log_file: env_string("OUTPUT_LOG_FILE").unwrap_or(self.output_log_file),
        }
    }

    /// 检查配置是否可用
    pub fn validate(&self) -> AppResult<()> {
        if self.max_concurrent_documents == 0 {
            return Err(ConfigError::InvalidConcurrency {
                value: self.max_concurrent_documents,
            }
            .into());
        }
        if self.input_path.trim().is_empty() {
            return Err(ConfigError::EmptyInputPath.into());
        }
        Ok(())
    }

    /// 组卷参数
    pub fn assembly_options(&self) -> AssemblyOptions {
        AssemblyOptions {
            limit: QuestionLimit::parse_lenient(&self.question_limit),
            shuffle: self.shuffle,
        }
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// 解析开关值，兼容表单里的 "on"
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
