use std::sync::Arc;

use crate::internal::states::reactive_core::PropertyWatcher;
use crate::internal::states::unlock_reactive::UnlockReactiveProperty;

use super::preload_controller::PreloadRunShared;
use super::preload_error::PreloadError;
use super::preload_snapshot::PreloadSnapshot;
use super::preload_status::PreloadStatus;

/// 一次预加载运行的句柄。
///
/// 持有者相当于“挂载中的视图”：句柄被 drop 即视为卸载，运行会被取消、滚动锁被释放。
/// 不实现 Clone，需要多处观察时用 [`state`](Self::state) 或 [`watch`](Self::watch)。
#[derive(Debug)]
pub struct PreloadHandle {
    shared: Arc<PreloadRunShared>,
}

impl PreloadHandle {
    pub(crate) fn new(shared: Arc<PreloadRunShared>) -> Self {
        Self { shared }
    }

    /// 实时快照属性，可 clone 后交给其他任务读取或监听。
    pub fn state(&self) -> UnlockReactiveProperty<PreloadSnapshot> {
        self.shared.snapshot.clone()
    }

    pub fn snapshot(&self) -> PreloadSnapshot {
        self.shared.snapshot.get_current().unwrap_or_default()
    }

    pub fn progress(&self) -> f64 {
        self.shared.snapshot.map(|s| s.progress).unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.shared.snapshot.map(|s| s.is_loading).unwrap_or(true)
    }

    pub fn error(&self) -> Option<PreloadError> {
        self.shared.snapshot.map(|s| s.error.clone()).flatten()
    }

    pub fn watch(&self) -> PropertyWatcher<PreloadSnapshot> {
        self.shared.snapshot.watch()
    }

    pub fn status(&self) -> PreloadStatus {
        self.shared
            .status
            .get_current()
            .unwrap_or(PreloadStatus::Cancelled)
    }

    /// 当前是否仍持有滚动锁。
    pub fn is_scroll_locked(&self) -> bool {
        self.shared.is_scroll_locked()
    }

    /// 取消运行；已结束或已取消时返回 `false`。
    pub fn cancel(&self) -> bool {
        self.shared.cancel()
    }

    /// 等待运行结束，返回最终快照；被取消时返回 [`PreloadError::Cancelled`]。
    pub async fn wait(&self) -> Result<PreloadSnapshot, PreloadError> {
        let mut watcher = self.shared.status.watch();
        let status = watcher
            .wait_for(|s| *s != PreloadStatus::Running)
            .await
            .map_err(|_| PreloadError::Cancelled)?;
        match status {
            PreloadStatus::Finished => Ok(self.snapshot()),
            _ => Err(PreloadError::Cancelled),
        }
    }
}

impl Drop for PreloadHandle {
    fn drop(&mut self) {
        self.shared.cancel();
    }
}
