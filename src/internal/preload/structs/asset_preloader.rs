use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex as TokioMutex;
use tracing::warn;

use crate::internal::preload::traits::preload_hook::PreloadHook;
use crate::internal::preload::traits::resource::{FontSet, ResourceScanner, ScrollLockTarget};
use crate::internal::states::queue_reactive::QueueReactiveProperty;

use super::hook_adapters::{
    AfterCompleteHookAdapter, BeforeStartHookAdapter, OnErrorHookAdapter, OnProgressHookAdapter,
};
use super::preload_config::{PreloadConfig, ScanRoot};
use super::preload_controller::{PreloadController, PreloadRunShared};
use super::preload_error::PreloadError;
use super::preload_handle::PreloadHandle;
use super::preload_hooks_container::PreloadHooksContainer;
use super::preload_snapshot::PreloadSnapshot;
use super::preload_weights::PreloadWeights;
use super::scroll_lock_guard::ScrollLockGuard;
use super::video_mode::VideoMode;

/// 资源预加载器：配置 + 宿主能力，`start()` 开始一次运行。
///
/// 使用方式：`AssetPreloader::new(scanner).with_fonts(fonts).timeout_ms(5000).start()`
///
/// 可以多次 `start()`，每次都是状态全新的独立运行；注册的钩子在各次运行间共享。
pub struct AssetPreloader {
    scanner: Arc<dyn ResourceScanner>,
    fonts: Option<Arc<dyn FontSet>>,
    scroll_target: Option<Arc<dyn ScrollLockTarget>>,
    config: PreloadConfig,
    hooks: Arc<TokioMutex<PreloadHooksContainer>>,
}

impl AssetPreloader {
    /// 使用 `PreloadConfig::default()` 创建。
    pub fn new(scanner: Arc<dyn ResourceScanner>) -> Self {
        Self {
            scanner,
            fonts: None,
            scroll_target: None,
            config: PreloadConfig::default(),
            hooks: Arc::new(TokioMutex::new(PreloadHooksContainer::default())),
        }
    }

    /// 使用进程级默认配置创建，未初始化时同 [`new`](Self::new)。
    pub fn with_defaults(scanner: Arc<dyn ResourceScanner>) -> Self {
        Self::new(scanner).with_config(PreloadConfig::from_defaults())
    }

    /// 字体就绪信号；不设置时字体类别视为已就绪。
    pub fn with_fonts(mut self, fonts: Arc<dyn FontSet>) -> Self {
        self.fonts = Some(fonts);
        self
    }

    /// 滚动锁目标；不设置时 `lock_scroll` 无效。
    pub fn with_scroll_lock_target(mut self, target: Arc<dyn ScrollLockTarget>) -> Self {
        self.scroll_target = Some(target);
        self
    }

    /// 整体替换配置。
    pub fn with_config(mut self, config: PreloadConfig) -> Self {
        self.config = config;
        self
    }

    /// 从 JSON 读取配置并整体替换。
    pub fn with_json_config(self, json: &str) -> Result<Self, PreloadError> {
        Ok(self.with_config(PreloadConfig::from_json(json)?))
    }

    pub fn root(mut self, root: ScanRoot) -> Self {
        self.config.root = root;
        self
    }

    pub fn video_mode(mut self, video_mode: VideoMode) -> Self {
        self.config.video_mode = video_mode;
        self
    }

    pub fn weights(mut self, weights: PreloadWeights) -> Self {
        self.config.weights = weights;
        self
    }

    /// 单资源超时（毫秒），0 表示不设超时。
    pub fn timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.timeout_ms = timeout_ms;
        self
    }

    /// 二次扫描延迟（毫秒），0 表示不做二次扫描。
    pub fn rescan_delay_ms(mut self, rescan_delay_ms: u64) -> Self {
        self.config.rescan_delay_ms = rescan_delay_ms;
        self
    }

    pub fn lock_scroll(mut self, lock_scroll: bool) -> Self {
        self.config.lock_scroll = lock_scroll;
        self
    }

    pub fn config(&self) -> &PreloadConfig {
        &self.config
    }

    /// 注册一个完整钩子。
    pub fn with_hook(mut self, hook: impl PreloadHook + 'static) -> Self {
        self.add_hook(hook);
        self
    }

    /// 注册「开始前」钩子。
    pub fn with_before_start_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.add_hook(BeforeStartHookAdapter(f));
        self
    }

    /// 注册「进度」钩子，进度值每变化一次调用一次。
    pub fn with_on_progress_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(f64) + Send + Sync + 'static,
    {
        self.add_hook(OnProgressHookAdapter(f));
        self
    }

    /// 注册「首个错误」钩子。
    pub fn with_on_error_hook<F>(mut self, f: F) -> Self
    where
        F: FnMut(&PreloadError) + Send + Sync + 'static,
    {
        self.add_hook(OnErrorHookAdapter(f));
        self
    }

    /// 注册「完成后」钩子。
    pub fn with_after_complete_hook<F, Fut>(mut self, f: F) -> Self
    where
        F: FnMut(PreloadSnapshot) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.add_hook(AfterCompleteHookAdapter(f));
        self
    }

    fn add_hook(&mut self, hook: impl PreloadHook + 'static) {
        match self.hooks.try_lock() {
            Ok(mut hooks) => hooks.add(hook),
            Err(_) => warn!("钩子容器正被运行中的预加载占用，本次注册被忽略"),
        }
    }

    /// 开始一次预加载运行，必须在 tokio 运行时内调用。
    ///
    /// 配置了 `lock_scroll` 与滚动锁目标时，返回前即已锁定滚动。
    pub fn start(&self) -> PreloadHandle {
        let scroll_lock = if self.config.lock_scroll {
            self.scroll_target
                .as_ref()
                .map(|target| ScrollLockGuard::acquire(Arc::clone(target)))
        } else {
            None
        };

        let shared = Arc::new(PreloadRunShared::new(scroll_lock));
        let (queue, consumer) = QueueReactiveProperty::new();

        let controller = PreloadController {
            scanner: Arc::clone(&self.scanner),
            fonts: self.fonts.clone(),
            config: self.config.clone(),
            hooks: Arc::clone(&self.hooks),
            shared: Arc::clone(&shared),
            queue,
        };
        tokio::spawn(controller.run(consumer));

        PreloadHandle::new(shared)
    }
}

impl std::fmt::Debug for AssetPreloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetPreloader")
            .field("config", &self.config)
            .field("has_fonts", &self.fonts.is_some())
            .field("has_scroll_target", &self.scroll_target.is_some())
            .finish()
    }
}
