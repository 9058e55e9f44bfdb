//! 预加载相关错误类型。
//!
//! 除 [`PreloadError::Cancelled`] 与 [`PreloadError::ConfigParse`] 外，其余错误都不会让运行失败：
//! 对应资源照常计为完成，错误只保留第一个，写进快照的 `error` 字段。

use thiserror::Error;

use super::resource_category::ResourceCategory;
use crate::internal::preload::traits::resource::ResourceId;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PreloadError {
    #[error("{category} timed out after {timeout_ms}ms")]
    ResourceTimeout {
        category: ResourceCategory,
        timeout_ms: u64,
    },

    #[error("{category} 加载失败 [{resource}]: {message}")]
    ResourceLoadError {
        category: ResourceCategory,
        resource: ResourceId,
        message: String,
    },

    #[error("字体加载失败: {0}")]
    FontLoadError(String),

    /// 探测任务异常退出（panic），该资源按完成计。
    #[error("探测任务异常: {0}")]
    ProbeTask(String),

    /// 仅由 `PreloadHandle::wait` 返回。
    #[error("预加载被取消")]
    Cancelled,

    #[error("预加载配置解析失败: {0}")]
    ConfigParse(String),
}

impl PreloadError {
    /// 错误所属的资源类别；与具体资源无关的错误返回 `None`。
    pub fn category(&self) -> Option<ResourceCategory> {
        match self {
            PreloadError::ResourceTimeout { category, .. }
            | PreloadError::ResourceLoadError { category, .. } => Some(*category),
            PreloadError::FontLoadError(_) => Some(ResourceCategory::Fonts),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, PreloadError::ResourceTimeout { .. })
    }
}

impl From<serde_json::Error> for PreloadError {
    fn from(e: serde_json::Error) -> Self {
        PreloadError::ConfigParse(e.to_string())
    }
}
