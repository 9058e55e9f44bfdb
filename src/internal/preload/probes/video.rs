use std::sync::Arc;

use crate::internal::preload::structs::preload_error::PreloadError;
use crate::internal::preload::structs::resource_category::ResourceCategory;
use crate::internal::preload::structs::video_mode::{PreloadHint, VideoMode};
use crate::internal::preload::traits::resource::VideoResource;

/// 按模式等待单个视频就绪；未就绪时强制 `preload = auto` 并重新 load。
pub(crate) async fn wait_for_video(
    video: Arc<dyn VideoResource>,
    mode: VideoMode,
) -> Result<(), PreloadError> {
    if video.ready_state() >= mode.required_ready_state() {
        return Ok(());
    }

    if video.preload_hint() != PreloadHint::Auto {
        video.set_preload_hint(PreloadHint::Auto);
    }
    video.load();

    video
        .wait_event(mode.ready_event())
        .await
        .map_err(|failure| PreloadError::ResourceLoadError {
            category: ResourceCategory::Videos,
            resource: video.id(),
            message: failure.0,
        })
}
