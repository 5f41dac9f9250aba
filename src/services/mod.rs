pub mod question_parser;
pub mod quiz_assembler;
pub mod quiz_writer;

pub use question_parser::{decode_text, parse_questions, QuestionParser};
pub use quiz_assembler::QuizAssembler;
pub use quiz_writer::QuizWriter;
