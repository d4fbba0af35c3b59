//! 提交表单与解决方案表单
//!
//! 表单只负责校验和构造数据，写入存储由 [`QuestionBoard`](super::board::QuestionBoard) 完成。

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::error::ValidationError;
use crate::models::{Category, Difficulty, NewQuestion};
use crate::utils::now_timestamp;

/// 提交新问题的表单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SubmissionForm {
    pub title: String,
    pub description: String,
    pub category: Option<Category>,
    /// 前端可能传入任意数字，范围和整数检查放在 `validate` 中
    pub difficulty: Option<Number>,
    pub author: Option<String>,
}

impl Default for SubmissionForm {
    fn default() -> Self {
        Self::with_difficulty(Difficulty::default())
    }
}

impl SubmissionForm {
    /// 表单初始值
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: None,
            difficulty: Some(difficulty.value().into()),
            author: None,
        }
    }

    pub fn validate(&self) -> Result<(Category, Difficulty), ValidationError> {
        let mut errors = ValidationError::default();

        if self.title.trim().is_empty() {
            errors.push("title", "请输入问题标题");
        }
        if self.description.trim().is_empty() {
            errors.push("description", "请输入问题描述");
        }
        if self.category.is_none() {
            errors.push("category", "请选择问题类别");
        }
        let difficulty = match &self.difficulty {
            None => {
                errors.push("difficulty", "请选择问题难度");
                None
            }
            Some(value) => {
                let difficulty = value
                    .as_u64()
                    .and_then(|v| u8::try_from(v).ok())
                    .and_then(Difficulty::new);
                if difficulty.is_none() {
                    let message = format!(
                        "难度必须是 {} 到 {} 之间的整数",
                        Difficulty::MIN,
                        Difficulty::MAX
                    );
                    errors.push("difficulty", message);
                }
                difficulty
            }
        };

        errors.into_result()?;
        match (self.category, difficulty) {
            (Some(category), Some(difficulty)) => Ok((category, difficulty)),
            _ => Err(ValidationError::single("category", "请选择问题类别")),
        }
    }

    /// 校验并生成新问题，`author` 为空时使用 `anonymous_author`
    pub fn to_new_question(
        &self,
        anonymous_author: &str,
    ) -> Result<NewQuestion, ValidationError> {
        let (category, difficulty) = self.validate()?;

        let author = self
            .author
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(anonymous_author)
            .to_string();

        Ok(NewQuestion {
            title: self.title.clone(),
            description: self.description.clone(),
            category,
            difficulty,
            author,
            created_at: now_timestamp(),
        })
    }

    /// 清空表单，恢复初始值
    pub fn reset(&mut self, difficulty: Difficulty) {
        *self = Self::with_difficulty(difficulty);
    }
}

/// 解决方案表单
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SolutionForm {
    #[serde(default)]
    pub solution: String,
}

impl SolutionForm {
    pub fn new(solution: impl Into<String>) -> Self {
        Self {
            solution: solution.into(),
        }
    }

    pub fn validate(&self) -> Result<&str, ValidationError> {
        if self.solution.trim().is_empty() {
            return Err(ValidationError::single("solution", "请输入解决方案"));
        }
        Ok(&self.solution)
    }
}

/// 操作成功后的提示
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    QuestionSubmitted { id: u64 },
    SolutionSubmitted { id: u64 },
}

impl Notification {
    pub fn message(&self) -> &'static str {
        match self {
            Self::QuestionSubmitted { .. } => "问题提交成功！",
            Self::SolutionSubmitted { .. } => "解决方案提交成功！",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SubmissionForm {
        SubmissionForm {
            title: "A".to_string(),
            description: "B".to_string(),
            category: Some(Category::TeachingMethod),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults_to_difficulty_three() {
        assert_eq!(SubmissionForm::default().difficulty, Some(Number::from(3u8)));
    }

    #[test]
    fn test_missing_fields_reported() {
        let form = SubmissionForm {
            difficulty: None,
            ..Default::default()
        };
        let err = form.validate().unwrap_err();
        let fields: Vec<&str> = err.fields.iter().map(|f| f.field).collect();
        assert_eq!(fields, vec!["title", "description", "category", "difficulty"]);
    }

    #[test]
    fn test_blank_title_rejected() {
        let form = SubmissionForm {
            title: "   ".to_string(),
            ..filled()
        };
        let err = form.validate().unwrap_err();
        assert!(err.has_field("title"));
        assert_eq!(err.fields.len(), 1);
    }

    #[test]
    fn test_out_of_range_difficulty() {
        let form = SubmissionForm {
            difficulty: Some(Number::from(7u8)),
            ..filled()
        };
        assert!(form.validate().unwrap_err().has_field("difficulty"));
    }

    #[test]
    fn test_any_json_number_reaches_validation() {
        for difficulty in ["0", "6", "256", "-1", "2.5", "1e3"] {
            let json = format!(
                r#"{{"title":"A","description":"B","category":"ethics","difficulty":{difficulty}}}"#
            );
            let form: SubmissionForm = serde_json::from_str(&json).unwrap();
            let err = form.validate().unwrap_err();
            assert!(err.has_field("difficulty"), "difficulty {difficulty}");
            assert_eq!(err.fields.len(), 1);
        }

        let form: SubmissionForm = serde_json::from_str(
            r#"{"title":"A","description":"B","category":"ethics","difficulty":5}"#,
        )
        .unwrap();
        assert_eq!(form.validate().unwrap().1.value(), 5);
    }

    #[test]
    fn test_null_difficulty_is_missing() {
        let form: SubmissionForm = serde_json::from_str(
            r#"{"title":"A","description":"B","category":"ethics","difficulty":null}"#,
        )
        .unwrap();
        assert!(form.validate().unwrap_err().has_field("difficulty"));
    }

    #[test]
    fn test_author_defaults_to_anonymous() {
        let new = filled().to_new_question("anonymous").unwrap();
        assert_eq!(new.author, "anonymous");

        let form = SubmissionForm {
            author: Some("  ".to_string()),
            ..filled()
        };
        assert_eq!(form.to_new_question("匿名用户").unwrap().author, "匿名用户");

        let form = SubmissionForm {
            author: Some("赵老师".to_string()),
            ..filled()
        };
        assert_eq!(form.to_new_question("anonymous").unwrap().author, "赵老师");
    }

    #[test]
    fn test_reset() {
        let mut form = filled();
        form.reset(Difficulty::new(4).unwrap());
        assert!(form.title.is_empty());
        assert!(form.category.is_none());
        assert_eq!(form.difficulty, Some(Number::from(4u8)));
    }

    #[test]
    fn test_solution_form() {
        assert!(SolutionForm::default().validate().is_err());
        assert!(SolutionForm::new(" \n").validate().is_err());
        assert_eq!(SolutionForm::new("Fix it").validate().unwrap(), "Fix it");
    }

    #[test]
    fn test_notification_messages() {
        let submitted = Notification::QuestionSubmitted { id: 1 };
        assert_eq!(submitted.message(), "问题提交成功！");
        let resolved = Notification::SolutionSubmitted { id: 1 };
        assert_eq!(resolved.message(), "解决方案提交成功！");
    }
}
