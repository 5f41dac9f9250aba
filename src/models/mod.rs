pub mod assembly;
pub mod loaders;
pub mod question;

pub use assembly::{AssemblyOptions, QuestionLimit};
pub use loaders::{load_all_text_documents, load_text_document, TextDocument};
pub use question::{AnswerLabel, Question};
