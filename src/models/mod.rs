// 数据模型模块
// 问题记录及其枚举字段

use serde::{Deserialize, Serialize};
use std::fmt;

/// 问题编号（会话内唯一）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u64);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 问题类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    TeachingMethod,
    ToolSelection,
    Ethics,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::TeachingMethod,
        Category::ToolSelection,
        Category::Ethics,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TeachingMethod => "teaching-method",
            Self::ToolSelection => "tool-selection",
            Self::Ethics => "ethics",
        }
    }

    /// 界面显示名称
    pub const fn label(self) -> &'static str {
        match self {
            Self::TeachingMethod => "教学方法",
            Self::ToolSelection => "工具选择",
            Self::Ethics => "伦理问题",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 问题状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Open,
    Resolved,
}

impl Status {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Resolved => "resolved",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "待解决",
            Self::Resolved => "已解决",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 难度（1-5 星）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| {
            format!(
                "difficulty must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )
        })
    }
}

impl From<Difficulty> for u8 {
    fn from(d: Difficulty) -> Self {
        d.0
    }
}

/// 问题记录
///
/// 只有 `solution`/`status` 这一对字段会在创建之后改变，
/// 并且总是整体替换。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    pub created_at: String,
    pub author: String,
}

impl Question {
    pub fn is_resolved(&self) -> bool {
        self.status == Status::Resolved
    }

    /// 返回设置了解决方案的新记录
    pub fn with_solution(&self, solution: impl Into<String>) -> Self {
        Self {
            solution: Some(solution.into()),
            status: Status::Resolved,
            ..self.clone()
        }
    }
}

/// 通过表单校验、尚未分配编号的新问题
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub author: String,
    pub created_at: String,
}
