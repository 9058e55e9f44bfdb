use std::future::Future;
use std::time::Duration;

use crate::internal::preload::structs::preload_error::PreloadError;
use crate::internal::preload::structs::resource_category::ResourceCategory;

/// 给探测套上超时；`timeout` 为 `None` 时原样等待。
pub(crate) async fn with_timeout<F>(
    probe: F,
    timeout: Option<Duration>,
    category: ResourceCategory,
) -> Result<(), PreloadError>
where
    F: Future<Output = Result<(), PreloadError>>,
{
    let Some(limit) = timeout else {
        return probe.await;
    };
    match tokio::time::timeout(limit, probe).await {
        Ok(outcome) => outcome,
        Err(_) => Err(PreloadError::ResourceTimeout {
            category,
            timeout_ms: limit.as_millis() as u64,
        }),
    }
}
