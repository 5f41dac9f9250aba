//! 组卷流程 - 流程层
//!
//! 核心职责：定义"一份文档"从文本到最终题目列表的完整流程
//!
//! 流程顺序：
//! 1. 解码（唯一可能失败的步骤：内容不是文本）
//! 2. 解析题目（不完整的题目直接跳过）
//! 3. 组卷（打乱 / 截断）

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::models::assembly::AssemblyOptions;
use crate::models::question::Question;
use crate::services::{decode_text, QuestionParser, QuizAssembler};
use crate::utils::logging::truncate_text;
use crate::workflow::document_ctx::DocumentCtx;

/// 流程结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowResult {
    /// 组卷成功
    Built(Vec<Question>),
    /// 文本中没有找到任何题目（不是错误，由调用方决定如何提示）
    NoQuestions,
}

/// 组卷流程
///
/// - 显式构造的服务对象，每个任务持有自己的一份，没有全局状态
/// - 组卷参数在构造时确定
/// - 随机源由调用方按次传入
#[derive(Debug, Clone)]
pub struct QuizFlow {
    parser: QuestionParser,
    assembler: QuizAssembler,
    options: AssemblyOptions,
    verbose_logging: bool,
}

impl QuizFlow {
    /// 根据配置创建流程
    pub fn new(config: &Config) -> Self {
        Self {
            verbose_logging: config.verbose_logging,
            ..Self::with_options(config.assembly_options())
        }
    }

    /// 使用指定的组卷参数创建流程
    pub fn with_options(options: AssemblyOptions) -> Self {
        Self {
            parser: QuestionParser::new(),
            assembler: QuizAssembler::new(),
            options,
            verbose_logging: false,
        }
    }

    pub fn options(&self) -> &AssemblyOptions {
        &self.options
    }

    /// 文本 → 题目列表（纯函数，不写日志）
    pub fn build<R: Rng + ?Sized>(&self, text: &str, rng: &mut R) -> Vec<Question> {
        let questions = self.parser.parse(text);
        self.assembler.assemble(questions, &self.options, rng)
    }

    /// 字节 → 题目列表
    ///
    /// 内容不是文本时返回 `AppError::Input`，其余情况都不会失败。
    pub fn run<R: Rng + ?Sized>(
        &self,
        content: &[u8],
        ctx: &DocumentCtx,
        rng: &mut R,
    ) -> AppResult<FlowResult> {
        let text = decode_text(content)?;
        debug!("{} 文本长度: {} 字符", ctx, text.chars().count());

        // ========== 步骤 1: 解析 ==========
        let parsed = self.parser.parse(text);
        if parsed.is_empty() {
            warn!("[文档 {}] ⚠️ 未找到题目，请检查文档格式", ctx.document_index);
            return Ok(FlowResult::NoQuestions);
        }
        info!(
            "[文档 {}] ✓ 解析完成，找到 {} 道题目",
            ctx.document_index,
            parsed.len()
        );

        // ========== 步骤 2: 组卷 ==========
        let total = parsed.len();
        let questions = self.assembler.assemble(parsed, &self.options, rng);
        info!(
            "[文档 {}] ✓ 组卷完成: {}/{} 道 (打乱: {}, 数量: {})",
            ctx.document_index,
            questions.len(),
            total,
            if self.options.shuffle { "是" } else { "否" },
            self.options.limit
        );

        // 详细日志（如果启用）
        if self.verbose_logging {
            self.log_questions(ctx.document_index, &questions);
        }

        Ok(FlowResult::Built(questions))
    }

    fn log_questions(&self, document_index: usize, questions: &[Question]) {
        for (i, q) in questions.iter().enumerate() {
            info!(
                "[文档 {}]   {}. 题号 {} | {} | 答案 {}",
                document_index,
                i + 1,
                q.number(),
                truncate_text(q.prompt(), 40),
                q.correct_label()
            );
        }
    }
}
