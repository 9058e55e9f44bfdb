use std::fmt;
use std::sync::Arc;

use crate::internal::preload::traits::resource::{ImageResource, VideoResource};

/// 一次扫描要找哪些资源；权重为 0 的类别不扫描。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanRequest {
    pub images: bool,
    pub videos: bool,
}

impl ScanRequest {
    pub fn is_empty(&self) -> bool {
        !self.images && !self.videos
    }
}

/// 扫描器返回的资源句柄。
#[derive(Default, Clone)]
pub struct ScanResult {
    pub images: Vec<Arc<dyn ImageResource>>,
    pub videos: Vec<Arc<dyn VideoResource>>,
}

impl fmt::Debug for ScanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanResult")
            .field("images", &self.images.len())
            .field("videos", &self.videos.len())
            .finish()
    }
}
