//! 配置文件定位与加载
//!
//! 查找顺序：
//! 1. `--config <FILE>`（必须存在）
//! 2. 当前目录 `eat_check.toml`
//! 3. 用户配置目录 `eat-check/config.toml`
//!    - Linux: `~/.config/eat-check/config.toml`
//!    - macOS: `~/Library/Application Support/eat-check/config.toml`
//! 4. 内置缺省值

use anyhow::{Context, Result};
use eat_check_driver::DriverSettings;
use std::path::{Path, PathBuf};

/// 当前目录下的配置文件名
pub const LOCAL_CONFIG: &str = "eat_check.toml";

/// 用户配置文件路径
pub fn user_config_file() -> Option<PathBuf> {
    let mut path = dirs::config_dir()?;
    path.push("eat-check");
    path.push("config.toml");
    Some(path)
}

/// 确定要加载的配置文件，没有则返回 `None`
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(LOCAL_CONFIG);
    if local.is_file() {
        return Some(local);
    }

    user_config_file().filter(|path| path.is_file())
}

/// 已加载的配置及其来源
#[derive(Debug, Clone)]
pub struct LoadedSettings {
    pub settings: DriverSettings,
    pub source: Option<PathBuf>,
}

/// 加载配置
pub fn load_settings(explicit: Option<&Path>) -> Result<LoadedSettings> {
    match resolve_config_path(explicit) {
        Some(path) => {
            let settings = DriverSettings::load(&path)
                .with_context(|| format!("加载配置文件失败: {}", path.display()))?;
            tracing::debug!("Loaded settings from {}", path.display());
            Ok(LoadedSettings {
                settings,
                source: Some(path),
            })
        },
        None => Ok(LoadedSettings {
            settings: DriverSettings::default(),
            source: None,
        }),
    }
}
