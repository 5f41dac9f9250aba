pub mod document_ctx;
pub mod quiz_flow;

pub use document_ctx::DocumentCtx;
pub use quiz_flow::{FlowResult, QuizFlow};
