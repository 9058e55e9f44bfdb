//! 宿主环境能力接口：扫描器、图片 / 视频元素、字体集、滚动锁目标。
//!
//! 预加载器只依赖这些 trait，不直接接触任何渲染环境；测试里用假实现替换。

use std::fmt;

use async_trait::async_trait;

use crate::internal::preload::structs::preload_config::ScanRoot;
use crate::internal::preload::structs::scan::{ScanRequest, ScanResult};
use crate::internal::preload::structs::video_mode::{PreloadHint, VideoEvent};

/// 被发现元素的稳定标识，二次扫描据此去重。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(String);

impl ResourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 平台报告的单个资源失败（error 事件、解码失败、字体 ready 被拒绝）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceFailure(pub String);

impl fmt::Display for ResourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ResourceFailure {}

/// 图片元素。
#[async_trait]
pub trait ImageResource: Send + Sync {
    fn id(&self) -> ResourceId;

    /// 对应 `img.complete`。
    fn is_complete(&self) -> bool;

    /// 对应 `img.naturalWidth`，0 表示尚无可用像素。
    fn natural_width(&self) -> u32;

    /// 等待 load 或 error 事件，error 时返回 `Err`。
    async fn wait_load(&self) -> Result<(), ResourceFailure>;

    /// 显式解码；尽力而为，失败不影响探测结果。
    async fn decode(&self) -> Result<(), ResourceFailure> {
        Ok(())
    }
}

/// 视频元素。
#[async_trait]
pub trait VideoResource: Send + Sync {
    fn id(&self) -> ResourceId;

    /// 对应 `video.readyState`（0～4）。
    fn ready_state(&self) -> u8;

    fn preload_hint(&self) -> PreloadHint;

    fn set_preload_hint(&self, hint: PreloadHint);

    /// 对应 `video.load()`，重新开始拉取。
    fn load(&self);

    /// 等待 `event` 或 error 事件，error 时返回 `Err`。
    ///
    /// 需按电平触发实现：调用前条件已满足的事件也要立即返回，
    /// 因为探测会先调用 [`load`](Self::load) 再开始等待。
    async fn wait_event(&self, event: VideoEvent) -> Result<(), ResourceFailure>;
}

/// 字体集：只有一个“全部字体就绪”的信号。
#[async_trait]
pub trait FontSet: Send + Sync {
    async fn ready(&self) -> Result<(), ResourceFailure>;
}

/// 资源扫描器：在给定范围内查找图片与视频元素。
pub trait ResourceScanner: Send + Sync {
    fn scan(&self, root: &ScanRoot, request: &ScanRequest) -> ScanResult;
}

/// 滚动锁作用的两个元素。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollElement {
    /// `document.documentElement`
    DocumentElement,
    /// `document.body`
    Body,
}

/// 滚动锁目标：读写两个元素的 overflow 样式。
pub trait ScrollLockTarget: Send + Sync {
    fn overflow(&self, element: ScrollElement) -> String;

    fn set_overflow(&self, element: ScrollElement, value: &str);
}
