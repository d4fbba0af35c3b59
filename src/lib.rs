//! AI 教育应用问题收集平台
//!
//! 问题存储、搜索过滤、表单校验与表格视图都在本 crate 中实现，
//! 桌面外壳（`desktop` 特性）通过 Tauri 命令把它们暴露给前端。

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

#[cfg(feature = "desktop")]
pub mod commands;

pub use config::BoardConfig;
pub use error::{BoardError, BoardResult, FieldError, ValidationError};
pub use models::{Category, Difficulty, NewQuestion, Question, QuestionId, Status};
pub use services::QuestionBoard;

#[cfg(feature = "desktop")]
pub fn run() {
    use commands::{app, board, BoardState};
    use config::CONFIG_FILE_NAME;
    use tauri::Manager;

    tauri::Builder::default()
        .setup(|app| {
            let config_path = app.path().app_config_dir()?.join(CONFIG_FILE_NAME);

            // 配置无效时使用默认配置启动，日志初始化后再报告
            let (config, load_error) = match BoardConfig::load(&config_path) {
                Ok(config) => (config, None),
                Err(e) => (BoardConfig::default(), Some(e)),
            };

            let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
            if let Err(e) = utils::init_logging(level) {
                eprintln!("Failed to initialize logging: {}", e);
            }
            if let Some(e) = load_error {
                log::warn!("Ignoring board config: {:#}", e);
            }

            log::info!(
                "问题收集平台 v{} 启动 ({})",
                env!("CARGO_PKG_VERSION"),
                utils::get_platform()
            );
            app.manage(BoardState::new(config));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            app::get_app_version,
            app::get_platform,
            // 问题板命令
            board::list_questions,
            board::get_question,
            board::get_blank_form,
            board::submit_question,
            board::open_question_detail,
            board::close_question_detail,
            board::submit_solution,
            board::render_markdown,
            board::get_board_config,
            board::update_board_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
