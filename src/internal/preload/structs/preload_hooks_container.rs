use crate::internal::preload::structs::preload_error::PreloadError;
use crate::internal::preload::structs::preload_snapshot::PreloadSnapshot;
use crate::internal::preload::traits::preload_hook::PreloadHook;

/// 钩子容器：按注册顺序依次执行。
#[derive(Default)]
pub struct PreloadHooksContainer {
    hooks: Vec<Box<dyn PreloadHook>>,
}

impl PreloadHooksContainer {
    /// 添加一个钩子；可多次调用。
    pub fn add(&mut self, hook: impl PreloadHook + 'static) {
        self.hooks.push(Box::new(hook));
    }

    pub async fn run_before_start(&mut self) {
        for h in self.hooks.iter_mut() {
            h.before_start().await;
        }
    }

    pub fn run_on_progress(&mut self, progress: f64) {
        for h in self.hooks.iter_mut() {
            h.on_progress(progress);
        }
    }

    pub fn run_on_error(&mut self, error: &PreloadError) {
        for h in self.hooks.iter_mut() {
            h.on_error(error);
        }
    }

    pub async fn run_after_complete(&mut self, snapshot: &PreloadSnapshot) {
        for h in self.hooks.iter_mut() {
            h.after_complete(snapshot).await;
        }
    }
}
