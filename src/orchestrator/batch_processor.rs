//! 批量文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量文档的处理和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：校验配置、写日志文件头、构造 `QuizFlow` 和 `QuizWriter`
//! 2. **批量加载**：扫描并加载所有待处理的文档（`Vec<TextDocument>`）
//! 3. **并发控制**：使用 Semaphore 限制并发数量
//! 4. **分批处理**：每批完成后再开始下一批
//! 5. **全局统计**：汇总所有文档的处理结果
//!
//! 每个任务拿到的是 `QuizFlow` 的一份拷贝，没有共享的可变状态。

use crate::config::Config;
use crate::models::TextDocument;
use crate::orchestrator::document_processor::{self, DocumentOutcome};
use crate::services::QuizWriter;
use crate::utils::logging;
use crate::workflow::QuizFlow;
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    flow: QuizFlow,
    writer: QuizWriter,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        config.validate().context("配置无效")?;

        // 初始化日志文件
        logging::init_log_file(&config.output_log_file)
            .with_context(|| format!("无法创建日志文件: {}", config.output_log_file))?;

        let flow = QuizFlow::new(&config);
        logging::log_run_start(&config.input_path, flow.options(), config.shuffle_seed);

        let writer = QuizWriter::new(&config.output_folder);

        Ok(Self {
            config,
            flow,
            writer,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<ProcessingStats> {
        // 加载所有待处理的文档
        let documents = self.load_documents().await?;

        if documents.is_empty() {
            warn!("⚠️ 没有找到待处理的文本文件，程序结束");
            return Ok(ProcessingStats::default());
        }

        info!(
            "✓ 找到 {} 个文档，每批最多 {} 个",
            documents.len(),
            self.config.max_concurrent_documents
        );

        // 处理所有文档
        let stats = self.process_all_documents(documents).await?;

        logging::log_summary(
            &self.config.output_log_file,
            stats.success,
            stats.skipped,
            stats.failed,
            stats.questions_written,
        );

        Ok(stats)
    }

    /// 加载文档
    async fn load_documents(&self) -> Result<Vec<TextDocument>> {
        info!("📁 正在扫描待处理的文档...");
        crate::models::load_all_text_documents(&self.config.input_path)
            .await
            .with_context(|| format!("无法加载输入: {}", self.config.input_path))
    }

    /// 处理所有文档
    async fn process_all_documents(
        &self,
        documents: Vec<TextDocument>,
    ) -> Result<ProcessingStats> {
        let batch_size = self.config.max_concurrent_documents;
        let semaphore = Arc::new(Semaphore::new(batch_size));
        let total = documents.len();
        let total_batches = total.div_ceil(batch_size);
        let mut stats = ProcessingStats {
            total,
            ..Default::default()
        };

        let mut remaining = documents.into_iter();
        for batch_num in 1..=total_batches {
            let batch_start = (batch_num - 1) * batch_size;
            let batch: Vec<TextDocument> = remaining.by_ref().take(batch_size).collect();
            let batch_end = batch_start + batch.len();

            logging::log_batch(batch_num, total_batches, batch_start + 1, batch_end);

            // 处理本批
            let batch_stats = self
                .process_batch(batch, batch_start, semaphore.clone())
                .await?;

            stats.merge(&batch_stats);
        }

        Ok(stats)
    }

    /// 处理单个批次
    async fn process_batch(
        &self,
        batch: Vec<TextDocument>,
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> Result<ProcessingStats> {
        let mut handles = Vec::with_capacity(batch.len());

        // 为本批创建并发任务
        for (idx, document) in batch.into_iter().enumerate() {
            let document_index = batch_start + idx + 1;
            let permit = semaphore.clone().acquire_owned().await?;
            let flow = self.flow.clone();
            let writer = self.writer.clone();
            let seed = self.config.shuffle_seed;

            let handle = tokio::spawn(async move {
                let _permit = permit;
                let result = document_processor::process_document(
                    &flow,
                    &writer,
                    document,
                    document_index,
                    seed,
                )
                .await;
                if let Err(e) = &result {
                    error!("[文档 {}] ❌ 处理过程中发生错误: {:#}", document_index, e);
                }
                result
            });
            handles.push((document_index, handle));
        }

        // 等待本批所有任务完成
        let mut stats = ProcessingStats::default();

        for (document_index, handle) in handles {
            stats.total += 1;
            match handle.await {
                Ok(Ok(DocumentOutcome::Written { question_count, .. })) => {
                    stats.success += 1;
                    stats.questions_written += question_count;
                }
                Ok(Ok(DocumentOutcome::NoQuestions)) => stats.skipped += 1,
                Ok(Err(_)) => stats.failed += 1,
                Err(e) => {
                    error!("[文档 {}] 任务执行失败: {}", document_index, e);
                    stats.failed += 1;
                }
            }
        }

        Ok(stats)
    }
}

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    /// 写出了 JSON 的文档
    pub success: usize,
    /// 没有找到题目的文档
    pub skipped: usize,
    /// 读取、解码或写出失败的文档
    pub failed: usize,
    pub total: usize,
    /// 所有写出的试卷中的题目总数
    pub questions_written: usize,
}

impl ProcessingStats {
    fn merge(&mut self, other: &ProcessingStats) {
        self.success += other.success;
        self.skipped += other.skipped;
        self.failed += other.failed;
        self.questions_written += other.questions_written;
    }
}
