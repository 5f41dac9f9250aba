//! # MCQ Quiz
//!
//! 把已提取好的纯文本中的单选题解析成结构化题目列表，并按参数组卷
//! （可选打乱顺序，可选只取前 N 道）。
//!
//! ## 架构设计
//!
//! ### ① 数据层（Models）
//! - `models/` - `Question`、`AnswerLabel`、`AssemblyOptions`、`QuestionLimit`，以及文本加载
//!
//! ### ② 业务能力层（Services）
//! - `QuestionParser` - 文本 → 题目列表（尽力而为，不完整的题目跳过）
//! - `QuizAssembler` - 打乱 + 截断，随机源由调用方传入
//! - `QuizWriter` - 写出 JSON
//!
//! ### ③ 流程层（Workflow）
//! - `QuizFlow` - 一份文档的完整流程（解码 → 解析 → 组卷）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量文档处理器，管理并发和统计
//! - `orchestrator/document_processor` - 单个文档处理器
//!
//! ## 示例
//!
//! ```rust
//! use mcq_quiz::{AnswerLabel, AssemblyOptions, QuizFlow};
//! use rand::SeedableRng;
//!
//! let text = "1. What is 2+2?\na) 3\nb) 4\nc) 5\nd) 6\nAnswer: b\n";
//! let flow = QuizFlow::with_options(AssemblyOptions::new("all", false));
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//!
//! let questions = flow.build(text, &mut rng);
//! assert_eq!(questions.len(), 1);
//! assert_eq!(questions[0].correct_label(), AnswerLabel::B);
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, InputError};
pub use models::{AnswerLabel, AssemblyOptions, Question, QuestionLimit, TextDocument};
pub use orchestrator::{App, ProcessingStats};
pub use services::{parse_questions, QuestionParser, QuizAssembler, QuizWriter};
pub use workflow::{DocumentCtx, FlowResult, QuizFlow};
