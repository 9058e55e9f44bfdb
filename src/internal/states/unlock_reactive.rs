//! # UnlockReactiveProperty
//!
//! 轻量级响应式属性容器，基于 [`tokio::sync::watch`]，读写都不阻塞。
//! 预加载快照就是用它对外发布的：运行任务写，任意多个观察者读或 watch。
//!
//! ## 使用示例
//! ```rust,no_run
//! use asset_preload::states::unlock_reactive::UnlockReactiveProperty;
//!
//! let prop = UnlockReactiveProperty::new(0.0f64);
//! prop.update(0.5).unwrap();
//! prop.update(1.0).unwrap();
//! ```

pub use super::reactive_core::{PropertyWatcher, ReactivePropertyError as UnlockReactivePropertyError};

/// 轻量级响应式属性容器。
///
/// 纯通知机制，适合进度条这类高频更新；中间值可能被合并，最新值一定可见。
pub type UnlockReactiveProperty<T> = super::reactive_core::ReactiveProperty<T>;
