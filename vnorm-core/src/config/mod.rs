//! V-Norm 配置模块
//!
//! 统一的配置管理，从 ~/.config/vnorm/config.toml 加载

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{VNormError, VNormResult};

/// 正则化模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NormalizeMode {
    /// 完整分类与转换
    #[default]
    Auto,
    /// 只改写含数字的记号（跳过普通词替换和 "#" 规则）
    NumbersOnly,
    /// 原样透传
    Raw,
}

/// V-Norm 完整配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VNormConfig {
    /// 正则化模式
    pub mode: NormalizeMode,
    /// 附加货币表（覆盖内置条目）
    pub currency_file: Option<PathBuf>,
    /// 附加普通词替换表（.toml 或 .txt）
    pub plain_file: Option<PathBuf>,
    /// 网址读法是否转为大写
    pub upper_case_electronic: bool,
}

impl Default for VNormConfig {
    fn default() -> Self {
        Self {
            mode: NormalizeMode::Auto,
            currency_file: None,
            plain_file: None,
            upper_case_electronic: true,
        }
    }
}

impl VNormConfig {
    /// 加载配置文件，文件不存在时使用默认配置
    pub fn load() -> VNormResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", config_path);
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// 从指定路径加载
    pub fn load_from(path: &Path) -> VNormResult<Self> {
        if !path.exists() {
            return Err(VNormError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&path.display().to_string(), &content)?;

        tracing::info!("📋 加载配置成功: {:?}", path);
        tracing::info!(
            "📊 模式: {:?}, 货币表: {:?}, 替换词表: {:?}",
            config.mode,
            config.currency_file,
            config.plain_file
        );
        Ok(config)
    }

    /// 解析内存中的 TOML 文档
    pub fn from_toml_str(content: &str) -> VNormResult<Self> {
        Self::parse("<memory>", content)
    }

    /// 保存配置文件
    pub fn save(&self) -> VNormResult<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// 保存到指定路径
    pub fn save_to(&self, path: &Path) -> VNormResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| VNormError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 获取配置文件路径
    pub fn config_path() -> VNormResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(VNormError::ConfigDirUnavailable)?;

        Ok(config_dir.join("vnorm").join("config.toml"))
    }

    fn parse(path: &str, content: &str) -> VNormResult<Self> {
        toml::from_str(content).map_err(|e| VNormError::ConfigParse {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}
