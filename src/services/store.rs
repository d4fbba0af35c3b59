// 问题存储服务
// 会话内存中的问题集合，新问题插入到最前面

use crate::error::{BoardError, BoardResult, ValidationError};
use crate::models::{Category, Difficulty, NewQuestion, Question, QuestionId, Status};

/// 问题存储
#[derive(Debug, Clone)]
pub struct QuestionStore {
    questions: Vec<Question>,
    next_id: u64,
}

impl Default for QuestionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl QuestionStore {
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            next_id: 1,
        }
    }

    /// 使用内置示例问题初始化
    pub fn seeded() -> Self {
        Self::from_records(mock_questions())
    }

    /// 从已有记录初始化
    ///
    /// `status` 按 `solution` 是否存在重新计算，编号计数器从最大编号之后开始。
    pub fn from_records(records: Vec<Question>) -> Self {
        let next_id = records.iter().map(|q| q.id.0).max().unwrap_or(0) + 1;
        let questions = records
            .into_iter()
            .map(|mut q| {
                q.status = status_for(q.solution.as_deref());
                if q.status == Status::Open {
                    q.solution = None;
                }
                q
            })
            .collect();

        Self { questions, next_id }
    }

    /// 所有问题，最新的在前
    pub fn list(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 添加新问题，分配编号后插入到最前面
    pub fn add(&mut self, new: NewQuestion) -> Question {
        let id = QuestionId(self.next_id);
        self.next_id = id.0 + 1;

        let question = Question {
            id,
            title: new.title,
            description: new.description,
            category: new.category,
            difficulty: new.difficulty,
            status: Status::Open,
            solution: None,
            created_at: new.created_at,
            author: new.author,
        };

        log::debug!("Added question {} ({})", question.id, question.category);
        self.questions.insert(0, question.clone());
        question
    }

    /// 设置解决方案并将问题标记为已解决
    pub fn set_solution(&mut self, id: QuestionId, solution: &str) -> BoardResult<Question> {
        if solution.trim().is_empty() {
            return Err(ValidationError::single("solution", "请输入解决方案").into());
        }

        let slot = self
            .questions
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(BoardError::NotFound { id })?;

        let updated = slot.with_solution(solution);
        *slot = updated.clone();

        log::debug!("Question {} resolved", id);
        Ok(updated)
    }
}

fn status_for(solution: Option<&str>) -> Status {
    match solution {
        Some(s) if !s.trim().is_empty() => Status::Resolved,
        _ => Status::Open,
    }
}

/// 启动时载入的示例问题
pub fn mock_questions() -> Vec<Question> {
    vec![
        Question {
            id: QuestionId(1),
            title: "如何将AI工具融入课堂教学？".to_string(),
            description: "我是一名高中数学老师，想了解如何有效地将AI辅助教学工具融入到日常教学中，尤其是在解题指导方面。".to_string(),
            category: Category::TeachingMethod,
            difficulty: Difficulty::default(),
            status: Status::Open,
            solution: None,
            created_at: "2023-10-01 14:30".to_string(),
            author: "张老师".to_string(),
        },
        Question {
            id: QuestionId(2),
            title: "AI教育软件的选择标准是什么？".to_string(),
            description: "学校计划采购一批AI教育软件，但不知道应该从哪些方面进行评估和选择。希望得到一些专业建议。".to_string(),
            category: Category::ToolSelection,
            difficulty: Difficulty::new(2).unwrap_or_default(),
            status: Status::Resolved,
            solution: Some("评估AI教育软件时，应考虑以下几个方面：1) 教学效果评估；2) 数据隐私保护；3) 教师培训支持；4) 成本效益分析；5) 与现有教学系统的兼容性。".to_string()),
            created_at: "2023-09-28 09:15".to_string(),
            author: "李校长".to_string(),
        },
        Question {
            id: QuestionId(3),
            title: "如何应对学生使用AI撰写作业的问题？".to_string(),
            description: "最近发现有些学生使用AI工具完成论文和作业，这对传统的作业评估方式带来了挑战。应该如何应对这种情况？".to_string(),
            category: Category::Ethics,
            difficulty: Difficulty::new(4).unwrap_or_default(),
            status: Status::Open,
            solution: None,
            created_at: "2023-09-25 16:45".to_string(),
            author: "王教授".to_string(),
        },
    ]
}
