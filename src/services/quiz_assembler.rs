//! 组卷服务 - 业务能力层
//!
//! 只做两件事，顺序固定：先（可选）打乱，再（可选）截断。
//! 没有日志，没有 I/O，随机源由调用方传入。

use crate::models::assembly::AssemblyOptions;
use crate::models::question::Question;
use rand::seq::SliceRandom;
use rand::Rng;

/// 组卷器
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizAssembler;

impl QuizAssembler {
    pub fn new() -> Self {
        Self
    }

    /// 按组卷参数生成最终题目列表
    ///
    /// 1. `shuffle` 为真时对全部题目做均匀随机排列
    /// 2. 数量限制为 `All` 时保留全部
    /// 3. 否则保留前 `min(N, len)` 道，不够时不报错也不补齐
    pub fn assemble<R: Rng + ?Sized>(
        &self,
        mut questions: Vec<Question>,
        options: &AssemblyOptions,
        rng: &mut R,
    ) -> Vec<Question> {
        if options.shuffle {
            questions.shuffle(rng);
        }

        let keep = options.limit.resolve(questions.len());
        questions.truncate(keep);
        questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assembly::QuestionLimit;
    use crate::models::question::AnswerLabel;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_questions(count: u64) -> Vec<Question> {
        (1..=count)
            .map(|n| {
                Question::new(n, &format!("Question {}", n), ["a", "b", "c", "d"], AnswerLabel::A)
                    .unwrap()
            })
            .collect()
    }

    fn numbers(questions: &[Question]) -> Vec<u64> {
        questions.iter().map(|q| q.number()).collect()
    }

    #[test]
    fn test_no_shuffle_all_preserves_order() {
        let questions = sample_questions(6);
        let mut rng = StdRng::seed_from_u64(1);

        let result = QuizAssembler::new().assemble(
            questions.clone(),
            &AssemblyOptions::new(QuestionLimit::All, false),
            &mut rng,
        );

        assert_eq!(result, questions);
    }

    #[test]
    fn test_limit_takes_prefix() {
        let assembler = QuizAssembler::new();
        let mut rng = StdRng::seed_from_u64(1);

        for len in 0..5u64 {
            for n in 0..7usize {
                let questions = sample_questions(len);
                let result = assembler.assemble(
                    questions.clone(),
                    &AssemblyOptions::new(QuestionLimit::Count(n), false),
                    &mut rng,
                );

                let expected = n.min(len as usize);
                assert_eq!(result.len(), expected, "N={} L={}", n, len);
                assert_eq!(result[..], questions[..expected]);
            }
        }
    }

    #[test]
    fn test_invalid_limit_keeps_everything() {
        let questions = sample_questions(4);
        let mut rng = StdRng::seed_from_u64(1);

        let result = QuizAssembler::new().assemble(
            questions.clone(),
            &AssemblyOptions::new("banana", false),
            &mut rng,
        );

        assert_eq!(result, questions);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let questions = sample_questions(20);
        let mut rng = StdRng::seed_from_u64(42);

        let result = QuizAssembler::new().assemble(
            questions.clone(),
            &AssemblyOptions::new("all", true),
            &mut rng,
        );

        let mut sorted = numbers(&result);
        sorted.sort_unstable();
        assert_eq!(sorted, numbers(&questions));
    }

    #[test]
    fn test_seeded_shuffle_is_reproducible() {
        let questions = sample_questions(10);
        let options = AssemblyOptions::new("all", true);
        let assembler = QuizAssembler::new();

        let first = assembler.assemble(questions.clone(), &options, &mut StdRng::seed_from_u64(7));
        let second = assembler.assemble(questions, &options, &mut StdRng::seed_from_u64(7));

        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_then_limit() {
        let questions = sample_questions(10);
        let assembler = QuizAssembler::new();

        let shuffled = assembler.assemble(
            questions.clone(),
            &AssemblyOptions::new("all", true),
            &mut StdRng::seed_from_u64(3),
        );
        let limited = assembler.assemble(
            questions,
            &AssemblyOptions::new("3", true),
            &mut StdRng::seed_from_u64(3),
        );

        assert_eq!(limited[..], shuffled[..3]);
    }

    #[test]
    fn test_empty_input() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = QuizAssembler::new().assemble(
            Vec::new(),
            &AssemblyOptions::new("5", true),
            &mut rng,
        );

        assert!(result.is_empty());
    }
}
