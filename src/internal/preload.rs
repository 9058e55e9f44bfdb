//! 预加载领域模块：扫描资源、并发探测、按权重汇总进度。
//!
//! 使用方式：`AssetPreloader::new(scanner).with_fonts(fonts).start()`，拿到 [`structs::PreloadHandle`]
//! 后读取或监听快照。对外导出以 [`crate::preload`] 为准，此处仅做模块划分。

pub mod defaults;
pub(crate) mod probes;
pub mod structs;
pub mod traits;
