// 问题板服务
// 会话状态：问题存储、配置与详情弹窗的当前选择

use serde::Serialize;

use crate::config::BoardConfig;
use crate::error::{BoardError, BoardResult};
use crate::models::{Question, QuestionId, Status};
use crate::services::forms::{Notification, SolutionForm, SubmissionForm};
use crate::services::markdown::render_markdown;
use crate::services::store::QuestionStore;
use crate::services::table::{self, TableQuery, TableView};

/// 问题详情（弹窗内容）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionDetail {
    pub question: Question,
    pub category_label: &'static str,
    pub status_label: &'static str,
    pub description_html: String,
    pub solution_html: Option<String>,
    /// 解决方案输入框的初始内容
    pub solution_draft: String,
    /// 已解决的问题不再显示解决方案表单
    pub can_submit_solution: bool,
}

impl QuestionDetail {
    fn from_question(question: &Question) -> Self {
        Self {
            question: question.clone(),
            category_label: question.category.label(),
            status_label: question.status.label(),
            description_html: render_markdown(&question.description),
            solution_html: question.solution.as_deref().map(render_markdown),
            solution_draft: question.solution.clone().unwrap_or_default(),
            can_submit_solution: question.status == Status::Open,
        }
    }
}

/// 成功提交后的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submitted {
    pub question: Question,
    pub notification: Notification,
}

/// 问题板
#[derive(Debug, Clone)]
pub struct QuestionBoard {
    store: QuestionStore,
    config: BoardConfig,
    selected: Option<QuestionId>,
}

impl Default for QuestionBoard {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl QuestionBoard {
    pub fn new(config: BoardConfig) -> Self {
        let store = if config.seed_mock_data {
            QuestionStore::seeded()
        } else {
            QuestionStore::new()
        };
        log::info!("Question board ready with {} questions", store.len());

        Self {
            store,
            config,
            selected: None,
        }
    }

    pub fn with_store(store: QuestionStore, config: BoardConfig) -> Self {
        Self {
            store,
            config,
            selected: None,
        }
    }

    pub fn store(&self) -> &QuestionStore {
        &self.store
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: BoardConfig) {
        log::info!("Board config updated: page size {}", config.page_size);
        self.config = config;
    }

    /// 新的空白提交表单
    pub fn blank_form(&self) -> SubmissionForm {
        SubmissionForm::with_difficulty(self.config.default_difficulty())
    }

    pub fn question(&self, id: QuestionId) -> BoardResult<&Question> {
        self.store.get(id).ok_or(BoardError::NotFound { id })
    }

    /// 根据查询条件重新计算表格视图
    pub fn view(&self, query: &TableQuery) -> TableView {
        table::build_view(self.store.list(), query, self.config.page_size)
    }

    /// 提交新问题，成功后清空表单
    pub fn submit_question(&mut self, form: &mut SubmissionForm) -> BoardResult<Submitted> {
        let new = form.to_new_question(&self.config.anonymous_author).map_err(|e| {
            log::debug!("Question form rejected: {}", e);
            e
        })?;

        let question = self.store.add(new);
        form.reset(self.config.default_difficulty());
        log::info!("Question {} submitted by {}", question.id, question.author);

        Ok(Submitted {
            notification: Notification::QuestionSubmitted { id: question.id.0 },
            question,
        })
    }

    /// 打开问题详情
    pub fn open_detail(&mut self, id: QuestionId) -> BoardResult<QuestionDetail> {
        let detail = QuestionDetail::from_question(self.question(id)?);
        self.selected = Some(id);
        Ok(detail)
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// 当前打开详情的问题
    pub fn selected(&self) -> Option<QuestionId> {
        self.selected
    }

    /// 为问题提交解决方案，成功后关闭详情弹窗
    ///
    /// 已解决的问题也可以再次提交，新方案覆盖旧方案。
    pub fn submit_solution(
        &mut self,
        target: QuestionId,
        form: &SolutionForm,
    ) -> BoardResult<Submitted> {
        let solution = form.validate()?;
        let question = self.store.set_solution(target, solution)?;

        if self.selected == Some(target) {
            self.selected = None;
        }
        log::info!("Solution submitted for question {}", target);

        Ok(Submitted {
            notification: Notification::SolutionSubmitted { id: target.0 },
            question,
        })
    }
}
