use std::sync::Arc;

use crate::internal::preload::structs::preload_error::PreloadError;
use crate::internal::preload::traits::resource::FontSet;

/// 等待字体集就绪。
pub(crate) async fn wait_for_fonts(fonts: Arc<dyn FontSet>) -> Result<(), PreloadError> {
    fonts
        .ready()
        .await
        .map_err(|failure| PreloadError::FontLoadError(failure.0))
}
