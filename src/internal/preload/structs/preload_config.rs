use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::preload_error::PreloadError;
use super::preload_weights::PreloadWeights;
use super::video_mode::VideoMode;
use crate::internal::preload::defaults::preload_defaults;

/// 默认单资源超时（毫秒）
pub const DEFAULT_TIMEOUT_MS: u64 = 20_000;

/// 默认二次扫描延迟（毫秒），0 表示不做二次扫描
pub const DEFAULT_RESCAN_DELAY_MS: u64 = 0;

/// 默认是否在加载期间锁定页面滚动
pub const DEFAULT_LOCK_SCROLL: bool = true;

/// 扫描范围。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanRoot {
    /// 整个文档
    #[default]
    Document,
    /// 某个子树，由选择器定位，具体解析交给扫描器
    Selector(String),
}

/// 一次预加载运行的配置。
///
/// 可从 JSON 读取，缺省字段取默认值：
/// `{"videoMode": "canplaythrough", "weights": {"fonts": 1}, "timeoutMs": 5000}`
/// 表示只等字体，图片与视频都不参与。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreloadConfig {
    pub root: ScanRoot,
    pub video_mode: VideoMode,
    /// 缺省时取 [`PreloadWeights::default`]；给出时未列出的类别权重为 0
    #[serde(default = "PreloadWeights::default")]
    pub weights: PreloadWeights,
    /// 单资源超时（毫秒）；0 表示不设超时
    pub timeout_ms: u64,
    /// 二次扫描延迟（毫秒）；0 表示不做二次扫描
    pub rescan_delay_ms: u64,
    pub lock_scroll: bool,
}

impl Default for PreloadConfig {
    fn default() -> Self {
        Self {
            root: ScanRoot::Document,
            video_mode: VideoMode::default(),
            weights: PreloadWeights::default(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            rescan_delay_ms: DEFAULT_RESCAN_DELAY_MS,
            lock_scroll: DEFAULT_LOCK_SCROLL,
        }
    }
}

impl PreloadConfig {
    /// 取进程级默认配置（见 [`init_preload_defaults`](crate::init_preload_defaults)），
    /// 未初始化时等同于 `PreloadConfig::default()`。
    pub fn from_defaults() -> Self {
        preload_defaults().cloned().unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Result<Self, PreloadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }

    pub fn rescan_delay(&self) -> Option<Duration> {
        (self.rescan_delay_ms > 0).then(|| Duration::from_millis(self.rescan_delay_ms))
    }
}
