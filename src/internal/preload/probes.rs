//! 探测：每个资源一个 tokio 任务，落定后把结果推进运行任务的队列。

pub mod font;
pub mod image;
pub mod timeout;
pub mod video;

use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use tracing::warn;

use crate::internal::preload::structs::preload_error::PreloadError;
use crate::internal::preload::structs::probe_settled::ProbeSettled;
use crate::internal::preload::structs::resource_category::ResourceCategory;
use crate::internal::preload::traits::resource::ResourceId;
use crate::internal::states::queue_reactive::QueueReactiveProperty;

use self::timeout::with_timeout;

/// 一个待执行的探测。
pub(crate) struct Probe {
    pub(crate) category: ResourceCategory,
    pub(crate) resource: Option<ResourceId>,
    pub(crate) future: BoxFuture<'static, Result<(), PreloadError>>,
}

/// spawn 一个探测任务：套上单资源超时，落定后发送 [`ProbeSettled`]。
///
/// 运行已取消或结束时队列已关闭，发送失败直接丢弃结果。
pub(crate) fn spawn_probe(
    probe: Probe,
    timeout: Option<Duration>,
    queue: QueueReactiveProperty<ProbeSettled>,
) {
    tokio::spawn(async move {
        let Probe {
            category,
            resource,
            future,
        } = probe;

        let outcome = match AssertUnwindSafe(with_timeout(future, timeout, category))
            .catch_unwind()
            .await
        {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(%category, ?resource, "探测任务 panic，按完成计");
                Err(PreloadError::ProbeTask(format!(
                    "{} probe panicked",
                    category.label()
                )))
            }
        };

        let _ = queue.send(ProbeSettled {
            category,
            resource,
            outcome,
        });
    });
}
