//! 问题板配置
//! 所有字段都有默认值，配置文件只需覆盖需要修改的部分

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::Difficulty;

/// 配置文件名（位于应用配置目录下）
pub const CONFIG_FILE_NAME: &str = "board.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// 表格每页条数
    pub page_size: usize,
    /// 提交表单的默认难度
    pub default_difficulty: u8,
    /// 未填写称呼时使用的提问者名称
    pub anonymous_author: String,
    /// 启动时是否载入示例问题
    pub seed_mock_data: bool,
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            page_size: 10,
            default_difficulty: 3,
            anonymous_author: "anonymous".to_string(),
            seed_mock_data: true,
            log_level: "info".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(content).context("Failed to parse board config")?;
        config.validate()?;
        Ok(config)
    }

    /// 读取配置文件，文件不存在时使用默认配置
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            bail!("pageSize must be greater than 0");
        }
        if Difficulty::new(self.default_difficulty).is_none() {
            bail!(
                "defaultDifficulty must be between {} and {}, got {}",
                Difficulty::MIN,
                Difficulty::MAX,
                self.default_difficulty
            );
        }
        if self.anonymous_author.trim().is_empty() {
            bail!("anonymousAuthor must not be blank");
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.log_level
            .parse()
            .map_err(|_| anyhow!("Unknown log level: {}", self.log_level))
    }

    /// 默认难度（已校验，越界时退回 3）
    pub fn default_difficulty(&self) -> Difficulty {
        Difficulty::new(self.default_difficulty).unwrap_or_default()
    }
}
