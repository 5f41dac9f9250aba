//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责批量处理和流程调度，相当于核心外面那层很薄的"外壳"：
//! 读入已提取好的文本，调用核心，把结果写成 JSON。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量文档处理器
//! - 校验配置、初始化日志文件
//! - 批量加载文档（Vec<TextDocument>）
//! - 控制并发数量（Semaphore）
//! - 输出全局统计信息
//!
//! ### `document_processor` - 单个文档处理器
//! - 为文档创建随机源
//! - 委托 QuizFlow 组卷
//! - 写出 JSON
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<TextDocument>)
//!     ↓
//! document_processor (处理单个文档)
//!     ↓
//! workflow::QuizFlow (文本 → 题目列表)
//!     ↓
//! services (能力层：parser / assembler / writer)
//! ```

pub mod batch_processor;
pub mod document_processor;

// 重新导出主要类型
pub use batch_processor::{App, ProcessingStats};
pub use document_processor::{process_document, DocumentOutcome};
