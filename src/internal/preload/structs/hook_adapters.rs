//! 单阶段钩子适配器：将闭包包装成 [`PreloadHook`]，供 `with_xx_hook` 使用。

use std::future::Future;

use async_trait::async_trait;

use crate::internal::preload::structs::preload_error::PreloadError;
use crate::internal::preload::structs::preload_snapshot::PreloadSnapshot;
use crate::internal::preload::traits::preload_hook::PreloadHook;

/// 仅实现「开始前」的钩子适配器。
pub(crate) struct BeforeStartHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F, Fut> PreloadHook for BeforeStartHookAdapter<F>
where
    F: FnMut() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn before_start(&mut self) {
        (self.0)().await
    }
}

/// 仅实现「进度」的钩子适配器。
pub(crate) struct OnProgressHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> PreloadHook for OnProgressHookAdapter<F>
where
    F: FnMut(f64) + Send + Sync + 'static,
{
    fn on_progress(&mut self, progress: f64) {
        (self.0)(progress);
    }
}

/// 仅实现「首个错误」的钩子适配器。
pub(crate) struct OnErrorHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F> PreloadHook for OnErrorHookAdapter<F>
where
    F: FnMut(&PreloadError) + Send + Sync + 'static,
{
    fn on_error(&mut self, error: &PreloadError) {
        (self.0)(error);
    }
}

/// 仅实现「完成后」的钩子适配器，闭包拿到最终快照的克隆。
pub(crate) struct AfterCompleteHookAdapter<F>(pub(crate) F);

#[async_trait]
impl<F, Fut> PreloadHook for AfterCompleteHookAdapter<F>
where
    F: FnMut(PreloadSnapshot) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    async fn after_complete(&mut self, snapshot: &PreloadSnapshot) {
        (self.0)(snapshot.clone()).await
    }
}
