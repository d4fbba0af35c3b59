// Tauri 命令模块
// 提供供前端调用的命令接口

pub mod app;
pub mod board;

pub use board::{BoardState, SubmitResultDto};
