// 问题板命令模块
// 提供供前端调用的问题提交、列表与解决方案命令

use serde::Serialize;
use std::sync::Mutex;
use tauri::State;

use crate::config::BoardConfig;
use crate::error::{BoardError, FieldError};
use crate::models::{Question, QuestionId};
use crate::services::{
    self, QuestionBoard, QuestionDetail, SolutionForm, SubmissionForm, Submitted, TableQuery,
    TableView,
};

/// 问题板应用状态
pub struct BoardState(pub Mutex<QuestionBoard>);

impl BoardState {
    pub fn new(config: BoardConfig) -> Self {
        Self(Mutex::new(QuestionBoard::new(config)))
    }
}

/// 表单提交结果
///
/// 校验失败不作为命令错误返回，而是放在 `errors` 中，方便前端在字段旁提示。
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResultDto {
    pub success: bool,
    pub question: Option<Question>,
    pub message: Option<String>,
    pub errors: Vec<FieldError>,
    /// 提交成功后重置的表单
    pub form: Option<SubmissionForm>,
}

impl SubmitResultDto {
    fn from_outcome(
        outcome: Result<Submitted, BoardError>,
        form: Option<SubmissionForm>,
    ) -> Result<Self, String> {
        match outcome {
            Ok(submitted) => Ok(Self {
                success: true,
                message: Some(submitted.notification.message().to_string()),
                question: Some(submitted.question),
                errors: Vec::new(),
                form,
            }),
            Err(BoardError::Validation(v)) => Ok(Self {
                success: false,
                question: None,
                message: None,
                errors: v.fields,
                form,
            }),
            Err(e) => Err(e.to_string()),
        }
    }
}

/// 获取问题列表（搜索、筛选、排序、分页）
#[tauri::command]
pub async fn list_questions(
    query: Option<TableQuery>,
    state: State<'_, BoardState>,
) -> Result<TableView, String> {
    let board = state.0.lock().map_err(|e| e.to_string())?;

    Ok(board.view(&query.unwrap_or_default()))
}

/// 获取单个问题
#[tauri::command]
pub async fn get_question(id: u64, state: State<'_, BoardState>) -> Result<Question, String> {
    let board = state.0.lock().map_err(|e| e.to_string())?;

    board
        .question(QuestionId(id))
        .cloned()
        .map_err(|e| e.to_string())
}

/// 获取空白提交表单（含默认难度）
#[tauri::command]
pub async fn get_blank_form(state: State<'_, BoardState>) -> Result<SubmissionForm, String> {
    let board = state.0.lock().map_err(|e| e.to_string())?;

    Ok(board.blank_form())
}

/// 提交新问题
#[tauri::command]
pub async fn submit_question(
    form: SubmissionForm,
    state: State<'_, BoardState>,
) -> Result<SubmitResultDto, String> {
    let mut board = state.0.lock().map_err(|e| e.to_string())?;

    let mut form = form;
    let outcome = board.submit_question(&mut form);
    SubmitResultDto::from_outcome(outcome, Some(form))
}

/// 打开问题详情
#[tauri::command]
pub async fn open_question_detail(
    id: u64,
    state: State<'_, BoardState>,
) -> Result<QuestionDetail, String> {
    let mut board = state.0.lock().map_err(|e| e.to_string())?;

    board.open_detail(QuestionId(id)).map_err(|e| e.to_string())
}

/// 关闭问题详情
#[tauri::command]
pub async fn close_question_detail(state: State<'_, BoardState>) -> Result<(), String> {
    let mut board = state.0.lock().map_err(|e| e.to_string())?;

    board.close_detail();
    Ok(())
}

/// 提交解决方案
#[tauri::command]
pub async fn submit_solution(
    id: u64,
    solution: String,
    state: State<'_, BoardState>,
) -> Result<SubmitResultDto, String> {
    let mut board = state.0.lock().map_err(|e| e.to_string())?;

    let outcome = board.submit_solution(QuestionId(id), &SolutionForm::new(solution));
    SubmitResultDto::from_outcome(outcome, None)
}

/// 渲染 Markdown
#[tauri::command]
pub async fn render_markdown(content: String) -> Result<String, String> {
    Ok(services::render_markdown(&content))
}

/// 获取配置
#[tauri::command]
pub async fn get_board_config(state: State<'_, BoardState>) -> Result<BoardConfig, String> {
    let board = state.0.lock().map_err(|e| e.to_string())?;

    Ok(board.config().clone())
}

/// 更新配置
#[tauri::command]
pub async fn update_board_config(
    state: State<'_, BoardState>,
    page_size: Option<usize>,
    default_difficulty: Option<u8>,
    anonymous_author: Option<String>,
) -> Result<BoardConfig, String> {
    let mut board = state.0.lock().map_err(|e| e.to_string())?;

    let mut config = board.config().clone();
    if let Some(v) = page_size {
        config.page_size = v;
    }
    if let Some(v) = default_difficulty {
        config.default_difficulty = v;
    }
    if let Some(v) = anonymous_author {
        config.anonymous_author = v;
    }
    config.validate().map_err(|e| e.to_string())?;

    board.set_config(config.clone());
    Ok(config)
}
