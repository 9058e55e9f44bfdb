pub mod asset_preloader;
pub(crate) mod hook_adapters;
pub mod preload_config;
pub(crate) mod preload_controller;
pub mod preload_error;
pub mod preload_handle;
pub mod preload_hooks_container;
pub mod preload_snapshot;
pub mod preload_status;
pub mod preload_weights;
pub mod probe_settled;
pub mod progress_state;
pub mod resource_category;
pub mod scan;
pub mod scroll_lock_guard;
pub mod video_mode;

// 重导出公共类型
pub use asset_preloader::AssetPreloader;
pub use preload_config::{
    DEFAULT_LOCK_SCROLL, DEFAULT_RESCAN_DELAY_MS, DEFAULT_TIMEOUT_MS, PreloadConfig, ScanRoot,
};
pub use preload_error::PreloadError;
pub use preload_handle::PreloadHandle;
pub use preload_hooks_container::PreloadHooksContainer;
pub use preload_snapshot::PreloadSnapshot;
pub use preload_status::PreloadStatus;
pub use preload_weights::{
    DEFAULT_FONTS_WEIGHT, DEFAULT_IMAGES_WEIGHT, DEFAULT_VIDEOS_WEIGHT, NormalizedWeights,
    PreloadWeights,
};
pub use probe_settled::ProbeSettled;
pub use progress_state::ProgressState;
pub use resource_category::ResourceCategory;
pub use scan::{ScanRequest, ScanResult};
pub use scroll_lock_guard::ScrollLockGuard;
pub use video_mode::{PreloadHint, VideoEvent, VideoMode};
