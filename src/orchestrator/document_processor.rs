//! 单个文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责处理单个文档，是文档级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **随机源**：为本文档创建独立的随机数生成器（有种子时可复现）
//! 2. **流程调度**：委托 `QuizFlow` 完成 解码 → 解析 → 组卷
//! 3. **结果输出**：委托 `QuizWriter` 写出 JSON
//! 4. **统计输出**：记录本文档的处理结果

use crate::models::TextDocument;
use crate::services::QuizWriter;
use crate::workflow::{DocumentCtx, FlowResult, QuizFlow};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{info, warn};

/// 单个文档的处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    /// 已写出 JSON
    Written { path: PathBuf, question_count: usize },
    /// 没有找到题目，未写出文件
    NoQuestions,
}

/// 为某个文档创建随机数生成器
///
/// 配置了种子时，每个文档使用 `seed + 文档索引`，同样的输入总能得到同样的顺序。
pub fn document_rng(seed: Option<u64>, document_index: usize) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(document_index as u64)),
        None => StdRng::from_entropy(),
    }
}

/// 处理单个文档
///
/// # 参数
/// - `flow`: 组卷流程
/// - `writer`: 输出服务
/// - `document`: 文档内容
/// - `document_index`: 文档索引（用于日志）
/// - `seed`: 随机种子
pub async fn process_document(
    flow: &QuizFlow,
    writer: &QuizWriter,
    document: TextDocument,
    document_index: usize,
    seed: Option<u64>,
) -> Result<DocumentOutcome> {
    let ctx = DocumentCtx::new(document_index, document.name.as_str());
    log_document_start(&ctx, &document);

    let mut rng = document_rng(seed, document_index);
    let result = flow
        .run(&document.content, &ctx, &mut rng)
        .with_context(|| format!("无法处理文档: {}", document.file_path.display()))?;

    let questions = match result {
        FlowResult::Built(questions) => questions,
        FlowResult::NoQuestions => {
            warn!("[文档 {}] ⚠️ 未写出 JSON: 没有可用的题目", document_index);
            return Ok(DocumentOutcome::NoQuestions);
        }
    };

    let path = writer
        .write(&ctx.document_name, &questions)
        .await
        .with_context(|| format!("无法写出文档 {} 的题目", ctx.document_name))?;

    info!(
        "[文档 {}] ✅ 已写出 {} 道题目: {}",
        document_index,
        questions.len(),
        path.display()
    );

    Ok(DocumentOutcome::Written {
        path,
        question_count: questions.len(),
    })
}

fn log_document_start(ctx: &DocumentCtx, document: &TextDocument) {
    info!("[文档 {}] 开始处理", ctx.document_index);
    info!("[文档 {}] 名称: {}", ctx.document_index, ctx.document_name);
    info!(
        "[文档 {}] 路径: {}",
        ctx.document_index,
        document.file_path.display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_rng_is_reproducible_per_document() {
        let a: u64 = document_rng(Some(5), 1).gen();
        let b: u64 = document_rng(Some(5), 1).gen();
        let c: u64 = document_rng(Some(5), 2).gen();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
