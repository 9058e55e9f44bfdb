use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use std::sync::atomic::{AtomicU8, Ordering};

use futures_util::FutureExt;
use tokio::sync::Mutex as TokioMutex;
use tokio::sync::Notify;
use tracing::{debug, info, warn};

use crate::internal::preload::probes::font::wait_for_fonts;
use crate::internal::preload::probes::image::wait_for_image;
use crate::internal::preload::probes::video::wait_for_video;
use crate::internal::preload::probes::{Probe, spawn_probe};
use crate::internal::preload::traits::resource::{FontSet, ResourceId, ResourceScanner};
use crate::internal::states::queue_reactive::{QueueReactiveConsumer, QueueReactiveProperty};
use crate::internal::states::unlock_reactive::UnlockReactiveProperty;

use super::preload_config::PreloadConfig;
use super::preload_hooks_container::PreloadHooksContainer;
use super::preload_snapshot::PreloadSnapshot;
use super::preload_status::PreloadStatus;
use super::probe_settled::ProbeSettled;
use super::progress_state::ProgressState;
use super::resource_category::ResourceCategory;
use super::scan::ScanRequest;
use super::scroll_lock_guard::ScrollLockGuard;

const PHASE_RUNNING: u8 = 0;
const PHASE_FINISHED: u8 = 1;
const PHASE_CANCELLED: u8 = 2;

/// 运行任务与 [`PreloadHandle`](super::PreloadHandle) 共享的状态。
///
/// 结束与取消都通过 `phase` 的 CAS 完成，二者只有一个能成功。
/// 取消与每次对外可见的修改（快照、进度 / 错误钩子）通过 `gate` 互斥。
#[derive(Debug)]
pub(crate) struct PreloadRunShared {
    pub(crate) snapshot: UnlockReactiveProperty<PreloadSnapshot>,
    pub(crate) status: UnlockReactiveProperty<PreloadStatus>,
    phase: AtomicU8,
    gate: Mutex<()>,
    cancel_notifier: Notify,
    scroll_lock: Option<ScrollLockGuard>,
}

impl PreloadRunShared {
    pub(crate) fn new(scroll_lock: Option<ScrollLockGuard>) -> Self {
        Self {
            snapshot: UnlockReactiveProperty::new(PreloadSnapshot::default()),
            status: UnlockReactiveProperty::new(PreloadStatus::Running),
            phase: AtomicU8::new(PHASE_RUNNING),
            gate: Mutex::new(()),
            cancel_notifier: Notify::new(),
            scroll_lock,
        }
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.phase.load(Ordering::SeqCst) == PHASE_CANCELLED
    }

    pub(crate) fn is_scroll_locked(&self) -> bool {
        self.scroll_lock.as_ref().is_some_and(|l| l.is_locked())
    }

    /// 取消运行：之后不再修改任何进度状态，滚动锁立即释放。
    ///
    /// 运行已结束或已取消时返回 `false`。
    ///
    /// 返回时，正在进行的修改已经完成，之后的修改都不会再落地。
    pub(crate) fn cancel(&self) -> bool {
        {
            let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
            if self
                .phase
                .compare_exchange(PHASE_RUNNING, PHASE_CANCELLED, Ordering::SeqCst, Ordering::SeqCst)
                .is_err()
            {
                return false;
            }
        }
        self.release_scroll_lock();
        let _ = self.status.update(PreloadStatus::Cancelled);
        // notify_one 会保留许可，运行任务稍后进入 select 也能收到
        self.cancel_notifier.notify_one();
        debug!("预加载已取消");
        true
    }

    /// 运行未被取消时执行 `f` 并返回 `Some`；与 [`cancel`](Self::cancel) 互斥。
    ///
    /// `f` 内不能取消本次运行，否则会死锁。
    pub(crate) fn while_running<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);
        if self.is_cancelled() {
            return None;
        }
        Some(f())
    }

    fn try_finish(&self) -> bool {
        self.phase
            .compare_exchange(PHASE_RUNNING, PHASE_FINISHED, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }

    fn release_scroll_lock(&self) {
        if let Some(lock) = &self.scroll_lock {
            lock.release();
        }
    }
}

/// 单次运行的账本，只在运行任务内使用。
struct RunLedger {
    progress: ProgressState,
    seen: HashSet<(ResourceCategory, ResourceId)>,
    /// 已 spawn 但尚未落定的探测数
    pending: usize,
    last_emitted: Option<f64>,
}

/// 预加载控制器：扫描、spawn 探测、消费落定队列，是唯一修改进度状态的地方。
pub(crate) struct PreloadController {
    pub(crate) scanner: Arc<dyn ResourceScanner>,
    pub(crate) fonts: Option<Arc<dyn FontSet>>,
    pub(crate) config: PreloadConfig,
    pub(crate) hooks: Arc<TokioMutex<PreloadHooksContainer>>,
    pub(crate) shared: Arc<PreloadRunShared>,
    pub(crate) queue: QueueReactiveProperty<ProbeSettled>,
}

impl PreloadController {
    #[tracing::instrument(
        name = "preload_run",
        skip_all,
        fields(
            timeout_ms = self.config.timeout_ms,
            rescan_delay_ms = self.config.rescan_delay_ms,
        )
    )]
    pub(crate) async fn run(self, mut consumer: QueueReactiveConsumer<ProbeSettled>) {
        self.hooks.lock().await.run_before_start().await;
        if self.shared.is_cancelled() {
            consumer.close();
            return;
        }

        let weights = self.config.weights.normalized();
        info!(?weights, video_mode = ?self.config.video_mode, "预加载开始");

        let mut ledger = RunLedger {
            progress: ProgressState::new(weights),
            seen: HashSet::new(),
            pending: 0,
            last_emitted: None,
        };

        if weights.is_enabled(ResourceCategory::Fonts) {
            match &self.fonts {
                Some(fonts) => {
                    let probe = Probe {
                        category: ResourceCategory::Fonts,
                        resource: None,
                        future: wait_for_fonts(Arc::clone(fonts)).boxed(),
                    };
                    spawn_probe(probe, self.config.timeout(), self.queue.clone());
                    ledger.pending += 1;
                }
                None => {
                    debug!("宿主未提供字体集，字体视为已就绪");
                    ledger.progress.mark_settled(ResourceCategory::Fonts);
                }
            }
        }

        self.scan_and_queue(&mut ledger);
        {
            let mut hooks = self.hooks.lock().await;
            self.publish(&mut ledger, &mut hooks);
        }

        let rescan_delay = self.config.rescan_delay();
        let mut rescan_due = rescan_delay.is_some();
        let rescan_timer = tokio::time::sleep(rescan_delay.unwrap_or_default());
        tokio::pin!(rescan_timer);

        while ledger.pending > 0 || rescan_due {
            tokio::select! {
                biased;

                _ = self.shared.cancel_notifier.notified() => {
                    break;
                }

                _ = &mut rescan_timer, if rescan_due => {
                    rescan_due = false;
                    if self.shared.is_cancelled() {
                        break;
                    }
                    debug!("二次扫描");
                    self.scan_and_queue(&mut ledger);
                    let mut hooks = self.hooks.lock().await;
                    self.publish(&mut ledger, &mut hooks);
                }

                settled = consumer.recv() => {
                    // 控制器自身持有一个生产者，队列不会因生产者耗尽而关闭
                    let Some(settled) = settled else { break };
                    self.apply(&mut ledger, settled).await;
                }
            }
        }

        consumer.close();
        if self.shared.is_cancelled() {
            info!(
                progress = ledger.progress.progress(),
                pending = ledger.pending,
                "预加载在完成前被取消"
            );
            return;
        }
        self.finish(&mut ledger).await;
    }

    /// 在配置的范围内扫描一次，只为新发现的元素排队探测。
    fn scan_and_queue(&self, ledger: &mut RunLedger) {
        if self.shared.is_cancelled() {
            return;
        }

        let weights = *ledger.progress.weights();
        let request = ScanRequest {
            images: weights.is_enabled(ResourceCategory::Images),
            videos: weights.is_enabled(ResourceCategory::Videos),
        };
        if request.is_empty() {
            return;
        }

        let found = self.scanner.scan(&self.config.root, &request);
        let timeout = self.config.timeout();
        let mut new_images = 0usize;
        let mut new_videos = 0usize;

        if request.images {
            for image in found.images {
                let id = image.id();
                if !ledger.seen.insert((ResourceCategory::Images, id.clone())) {
                    continue;
                }
                new_images += 1;
                let probe = Probe {
                    category: ResourceCategory::Images,
                    resource: Some(id),
                    future: wait_for_image(image).boxed(),
                };
                spawn_probe(probe, timeout, self.queue.clone());
            }
        }

        if request.videos {
            let mode = self.config.video_mode;
            for video in found.videos {
                let id = video.id();
                if !ledger.seen.insert((ResourceCategory::Videos, id.clone())) {
                    continue;
                }
                new_videos += 1;
                let probe = Probe {
                    category: ResourceCategory::Videos,
                    resource: Some(id),
                    future: wait_for_video(video, mode).boxed(),
                };
                spawn_probe(probe, timeout, self.queue.clone());
            }
        }

        ledger
            .progress
            .add_discovered(ResourceCategory::Images, new_images);
        ledger
            .progress
            .add_discovered(ResourceCategory::Videos, new_videos);
        ledger.pending += new_images + new_videos;

        debug!(
            images = new_images,
            videos = new_videos,
            pending = ledger.pending,
            "扫描完成"
        );
    }

    /// 处理一个落定事件：计数、记录首个错误、发布进度。
    async fn apply(&self, ledger: &mut RunLedger, settled: ProbeSettled) {
        if self.shared.is_cancelled() {
            return;
        }

        ledger.pending = ledger.pending.saturating_sub(1);
        ledger.progress.mark_settled(settled.category);

        let mut hooks = self.hooks.lock().await;
        if let Err(error) = settled.outcome {
            warn!(
                category = %settled.category,
                resource = ?settled.resource,
                "资源未就绪，按完成计: {}",
                error
            );
            if ledger.progress.record_error(error.clone()) {
                self.shared.while_running(|| hooks.run_on_error(&error));
            }
        }
        self.publish(ledger, &mut hooks);
    }

    /// 重新计算进度并写入快照；进度变化时通知钩子。
    fn publish(&self, ledger: &mut RunLedger, hooks: &mut PreloadHooksContainer) {
        let progress = ledger.progress.advance();
        let error = ledger.progress.error().cloned();
        let emit = ledger.last_emitted != Some(progress);

        let published = self.shared.while_running(|| {
            let _ = self.shared.snapshot.update_field(|s| {
                s.progress = progress;
                s.error = error;
            });
            if emit {
                hooks.run_on_progress(progress);
            }
        });

        if published.is_some() && emit {
            ledger.last_emitted = Some(progress);
        }
    }

    async fn finish(&self, ledger: &mut RunLedger) {
        if !self.shared.try_finish() {
            return;
        }
        // 先解锁滚动，再发布结束状态与执行完成钩子
        self.shared.release_scroll_lock();

        let progress = ledger.progress.finish();
        let snapshot = PreloadSnapshot {
            progress,
            is_loading: false,
            error: ledger.progress.error().cloned(),
        };
        let _ = self.shared.snapshot.update(snapshot.clone());

        {
            let mut hooks = self.hooks.lock().await;
            if ledger.last_emitted != Some(progress) {
                ledger.last_emitted = Some(progress);
                hooks.run_on_progress(progress);
            }
            hooks.run_after_complete(&snapshot).await;
        }

        let _ = self.shared.status.update(PreloadStatus::Finished);

        info!(
            images = ledger.progress.total(ResourceCategory::Images),
            videos = ledger.progress.total(ResourceCategory::Videos),
            error = ?snapshot.error,
            "预加载完成"
        );
    }
}
