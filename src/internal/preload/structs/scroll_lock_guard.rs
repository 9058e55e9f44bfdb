use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::internal::preload::traits::resource::{ScrollElement, ScrollLockTarget};

const LOCKED_OVERFLOW: &str = "hidden";

/// 滚动锁：创建时把两个元素的 overflow 设为 hidden 并记住原值，
/// [`release`](Self::release) 恢复原值，且只恢复一次；Drop 时兜底释放。
pub struct ScrollLockGuard {
    target: Arc<dyn ScrollLockTarget>,
    previous: Mutex<Option<(String, String)>>,
}

impl ScrollLockGuard {
    pub fn acquire(target: Arc<dyn ScrollLockTarget>) -> Self {
        let prev_html = target.overflow(ScrollElement::DocumentElement);
        let prev_body = target.overflow(ScrollElement::Body);
        target.set_overflow(ScrollElement::DocumentElement, LOCKED_OVERFLOW);
        target.set_overflow(ScrollElement::Body, LOCKED_OVERFLOW);
        debug!("页面滚动已锁定");

        Self {
            target,
            previous: Mutex::new(Some((prev_html, prev_body))),
        }
    }

    /// 恢复原 overflow；本次确实执行了恢复时返回 `true`。
    pub fn release(&self) -> bool {
        let previous = match self.previous.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        let Some((prev_html, prev_body)) = previous else {
            return false;
        };
        self.target
            .set_overflow(ScrollElement::DocumentElement, &prev_html);
        self.target.set_overflow(ScrollElement::Body, &prev_body);
        debug!("页面滚动已恢复");
        true
    }

    pub fn is_locked(&self) -> bool {
        match self.previous.lock() {
            Ok(guard) => guard.is_some(),
            Err(poisoned) => poisoned.into_inner().is_some(),
        }
    }
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for ScrollLockGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrollLockGuard")
            .field("locked", &self.is_locked())
            .finish()
    }
}
