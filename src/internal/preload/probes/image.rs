use std::sync::Arc;

use tracing::trace;

use crate::internal::preload::structs::preload_error::PreloadError;
use crate::internal::preload::structs::resource_category::ResourceCategory;
use crate::internal::preload::traits::resource::ImageResource;

/// 等待单张图片可用。
///
/// 已加载且有像素时只做一次尽力解码；否则等 load / error，再尽力解码。
pub(crate) async fn wait_for_image(image: Arc<dyn ImageResource>) -> Result<(), PreloadError> {
    if image.is_complete() && image.natural_width() > 0 {
        decode_best_effort(image.as_ref()).await;
        return Ok(());
    }

    let loaded = image.wait_load().await;
    decode_best_effort(image.as_ref()).await;

    loaded.map_err(|failure| PreloadError::ResourceLoadError {
        category: ResourceCategory::Images,
        resource: image.id(),
        message: failure.0,
    })
}

async fn decode_best_effort(image: &dyn ImageResource) {
    if let Err(e) = image.decode().await {
        trace!(resource = %image.id(), "图片解码失败，忽略: {}", e);
    }
}
