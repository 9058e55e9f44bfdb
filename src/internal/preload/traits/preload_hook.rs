//! 预加载钩子接口。
//!
//! 钩子在运行任务内、唯一的状态修改点上调用，所以 `on_progress` 收到的进度序列是精确的，
//! 不会像 watch 那样合并中间值。

use async_trait::async_trait;

use crate::internal::preload::structs::preload_error::PreloadError;
use crate::internal::preload::structs::preload_snapshot::PreloadSnapshot;

/// 预加载流程钩子：在「开始前 / 进度变化 / 首个错误 / 完成后」插入自定义逻辑。
///
/// 使用方式二选一（可混用）：
/// - **单阶段**：用 `with_before_start_hook` / `with_on_progress_hook` / `with_on_error_hook` / `with_after_complete_hook` 传入闭包；
/// - **完整钩子**：实现本 trait，通过 `with_hook` 注册。
#[async_trait]
pub trait PreloadHook: Send + Sync {
    /// 扫描开始前调用。
    async fn before_start(&mut self) {}

    /// 发布的进度发生变化时调用（首次发布也会调用）。
    ///
    /// 与取消互斥执行：不要在这里（以及 `on_error` 里）取消或 drop 本次运行的句柄。
    fn on_progress(&mut self, _progress: f64) {}

    /// 记录到本次运行的第一个错误时调用，之后的错误不会再通知。
    fn on_error(&mut self, _error: &PreloadError) {}

    /// 运行正常结束后调用（被取消时不调用）。
    async fn after_complete(&mut self, _snapshot: &PreloadSnapshot) {}
}
