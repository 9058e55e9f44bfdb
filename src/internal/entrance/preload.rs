use std::sync::Arc;

use crate::preload::{
    AssetPreloader, FontSet, PreloadConfig, PreloadHandle, ResourceScanner, ScrollLockTarget,
};

/// 宿主环境提供给预加载器的能力。
#[derive(Clone)]
pub struct PreloadHost {
    pub scanner: Arc<dyn ResourceScanner>,
    pub fonts: Option<Arc<dyn FontSet>>,
    pub scroll_target: Option<Arc<dyn ScrollLockTarget>>,
}

impl PreloadHost {
    pub fn new(scanner: Arc<dyn ResourceScanner>) -> Self {
        Self {
            scanner,
            fonts: None,
            scroll_target: None,
        }
    }
}

/// 按配置开始一次资源预加载，返回实时 (进度, 是否加载中, 错误) 句柄。
///
/// 句柄被 drop 即取消运行并释放滚动锁，所以应在视图存续期间一直持有它。
///
/// example:
/// ```rust,no_run
/// use std::sync::Arc;
/// use asset_preload::preload_assets;
/// use asset_preload::entrance::PreloadHost;
/// use asset_preload::preload::PreloadConfig;
///
/// # async fn example(scanner: Arc<dyn asset_preload::preload::ResourceScanner>) {
/// let handle = preload_assets(PreloadHost::new(scanner), PreloadConfig::default());
/// let snapshot = handle.wait().await.unwrap();
/// assert_eq!(snapshot.progress, 1.0);
/// # }
/// ```
pub fn preload_assets(host: PreloadHost, config: PreloadConfig) -> PreloadHandle {
    let mut preloader = AssetPreloader::new(host.scanner).with_config(config);
    if let Some(fonts) = host.fonts {
        preloader = preloader.with_fonts(fonts);
    }
    if let Some(target) = host.scroll_target {
        preloader = preloader.with_scroll_lock_target(target);
    }
    preloader.start()
}
