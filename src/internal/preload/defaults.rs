//! 进程级默认配置，只能初始化一次。
//!
//! 由应用的组合根在启动时调用 [`init_preload_defaults`]；之后通过
//! [`PreloadConfig::from_defaults`](crate::preload::PreloadConfig::from_defaults) 或
//! [`AssetPreloader::with_defaults`](crate::preload::AssetPreloader::with_defaults) 使用。

use std::sync::OnceLock;

use tracing::{debug, info};

use crate::internal::preload::structs::preload_config::PreloadConfig;

static PRELOAD_DEFAULTS: OnceLock<PreloadConfig> = OnceLock::new();

/// 安装进程级默认配置。首次调用返回 `true`，之后的调用不生效并返回 `false`。
pub fn init_preload_defaults(config: PreloadConfig) -> bool {
    match PRELOAD_DEFAULTS.set(config) {
        Ok(()) => {
            info!("预加载默认配置已初始化");
            true
        }
        Err(_) => {
            debug!("预加载默认配置已存在，忽略重复初始化");
            false
        }
    }
}

/// 已安装的默认配置。
pub fn preload_defaults() -> Option<&'static PreloadConfig> {
    PRELOAD_DEFAULTS.get()
}
