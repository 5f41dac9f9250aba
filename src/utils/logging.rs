//! 日志工具模块
//!
//! 提供日志初始化、格式化和输出的辅助函数

use crate::models::AssemblyOptions;
use anyhow::Result;
use std::fs::{self, OpenOptions};
use std::io::Write;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// 优先使用 `RUST_LOG`，否则根据 `verbose` 选择 `debug` 或 `info`。
/// 重复调用不会报错（测试中会多次初始化）。
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// 创建日志文件并写入文件头
pub fn init_log_file(log_file_path: &str) -> Result<()> {
    fs::write(log_file_path, format!("组卷日志 - {}\n", now()))?;
    Ok(())
}

/// 向日志文件追加一行
pub fn append_log_line(log_file_path: &str, line: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(log_file_path)?;
    writeln!(file, "{}", line)?;
    Ok(())
}

/// 记录本次组卷的参数
pub fn log_run_start(input_path: &str, options: &AssemblyOptions, seed: Option<u64>) {
    let seed = seed.map_or_else(|| "随机".to_string(), |s| s.to_string());
    info!(
        "🚀 开始组卷: 输入 {} | 数量 {} | 打乱 {} | 种子 {}",
        input_path, options.limit, options.shuffle, seed
    );
}

/// 记录一批文档的范围（文档编号从 1 开始）
pub fn log_batch(batch_num: usize, total_batches: usize, first: usize, last: usize) {
    info!("📦 第 {}/{} 批: 文档 {}-{}", batch_num, total_batches, first, last);
}

/// 汇总一次运行的结果，同时写入日志文件
///
/// 日志文件写不进去只记警告，不影响已经写出的试卷。
pub fn log_summary(
    log_file_path: &str,
    written: usize,
    skipped: usize,
    failed: usize,
    questions: usize,
) {
    let line = format!(
        "[{}] 写出 {} 份试卷（共 {} 题），{} 份没有题目，{} 份失败",
        now(), written, questions, skipped, failed
    );

    if failed > 0 {
        warn!("📊 {}", line);
    } else {
        info!("📊 {}", line);
    }

    if let Err(e) = append_log_line(log_file_path, &line) {
        warn!("无法写入日志文件 {}: {}", log_file_path, e);
    }
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度（按字符计）
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
