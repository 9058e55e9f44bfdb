//! 单资源探测测试：图片 / 视频 / 字体的就绪判定与超时组合子。

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::FutureExt;

use crate::internal::preload::probes::font::wait_for_fonts;
use crate::internal::preload::probes::image::wait_for_image;
use crate::internal::preload::probes::timeout::with_timeout;
use crate::internal::preload::probes::video::wait_for_video;
use crate::internal::preload::probes::{Probe, spawn_probe};
use crate::internal::states::queue_reactive::QueueReactiveProperty;
use crate::preload::{
    ImageResource, PreloadError, PreloadHint, ResourceCategory, ResourceFailure, ResourceId,
    VideoEvent, VideoMode,
};
use crate::tests::{FakeFontSet, FakeImage, FakeLoad, FakeVideo};

// ═══════════════════════════ 图片 ═══════════════════════════

#[tokio::test]
async fn loaded_image_resolves_without_waiting() {
    let image = FakeImage::loaded("hero.png");
    wait_for_image(image.clone()).await.unwrap();
    assert_eq!(image.wait_calls.load(Ordering::SeqCst), 0);
    assert_eq!(image.decode_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn decode_failure_does_not_fail_probe() {
    let image = FakeImage::loaded_with_bad_decode("broken-decode.png");
    wait_for_image(image.clone()).await.unwrap();
    assert_eq!(image.decode_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn pending_image_waits_for_load_then_decodes() {
    let image = FakeImage::pending("panel.png", FakeLoad::ms(30));
    wait_for_image(image.clone()).await.unwrap();
    assert_eq!(image.wait_calls.load(Ordering::SeqCst), 1);
    assert_eq!(image.decode_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test(start_paused = true)]
async fn image_error_event_is_a_load_error() {
    let image = FakeImage::pending("missing.png", FakeLoad::fail_ms(10));
    let err = wait_for_image(image).await.unwrap_err();
    match err {
        PreloadError::ResourceLoadError {
            category, resource, ..
        } => {
            assert_eq!(category, ResourceCategory::Images);
            assert_eq!(resource, ResourceId::new("missing.png"));
        }
        other => panic!("预期 ResourceLoadError，得到 {other:?}"),
    }
}

// ═══════════════════════════ 视频 ═══════════════════════════

#[tokio::test]
async fn ready_video_resolves_without_loading() {
    let video = FakeVideo::new("intro.mp4", 1, PreloadHint::Metadata, FakeLoad::Never);
    wait_for_video(video.clone(), VideoMode::Metadata)
        .await
        .unwrap();
    assert_eq!(video.load_calls.load(Ordering::SeqCst), 0);
    assert_eq!(video.preload_writes.load(Ordering::SeqCst), 0);
}

#[tokio::test(start_paused = true)]
async fn metadata_state_is_not_enough_for_can_play_through() {
    let video = FakeVideo::new("intro.mp4", 1, PreloadHint::Metadata, FakeLoad::ms(40));
    wait_for_video(video.clone(), VideoMode::CanPlayThrough)
        .await
        .unwrap();

    assert_eq!(video.current_preload(), PreloadHint::Auto);
    assert_eq!(video.load_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        *video.waited_events.lock().unwrap(),
        vec![VideoEvent::CanPlayThrough]
    );
}

#[tokio::test(start_paused = true)]
async fn auto_preload_is_not_rewritten() {
    let video = FakeVideo::new("loop.mp4", 0, PreloadHint::Auto, FakeLoad::ms(5));
    wait_for_video(video.clone(), VideoMode::Metadata)
        .await
        .unwrap();
    assert_eq!(video.preload_writes.load(Ordering::SeqCst), 0);
    assert_eq!(video.load_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        *video.waited_events.lock().unwrap(),
        vec![VideoEvent::LoadedMetadata]
    );
}

#[tokio::test(start_paused = true)]
async fn video_error_event_is_a_load_error() {
    let video = FakeVideo::pending("gone.mp4", FakeLoad::fail_ms(5));
    let err = wait_for_video(video, VideoMode::Metadata)
        .await
        .unwrap_err();
    assert_eq!(err.category(), Some(ResourceCategory::Videos));
    assert!(!err.is_timeout());
}

// ═══════════════════════════ 字体 ═══════════════════════════

#[tokio::test(start_paused = true)]
async fn font_rejection_is_a_font_error() {
    let err = wait_for_fonts(FakeFontSet::new(FakeLoad::fail_ms(5)))
        .await
        .unwrap_err();
    assert!(matches!(err, PreloadError::FontLoadError(_)));

    wait_for_fonts(FakeFontSet::new(FakeLoad::ms(5)))
        .await
        .unwrap();
}

// ═══════════════════════════ 超时 ═══════════════════════════

#[tokio::test(start_paused = true)]
async fn timeout_turns_a_stuck_probe_into_an_error() {
    let image = FakeImage::pending("stuck.png", FakeLoad::Never);
    let started = tokio::time::Instant::now();
    let err = with_timeout(
        wait_for_image(image),
        Some(Duration::from_millis(1000)),
        ResourceCategory::Images,
    )
    .await
    .unwrap_err();

    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_millis(1000) && elapsed < Duration::from_millis(1002));
    assert_eq!(
        err,
        PreloadError::ResourceTimeout {
            category: ResourceCategory::Images,
            timeout_ms: 1000,
        }
    );
}

#[tokio::test(start_paused = true)]
async fn no_timeout_waits_as_long_as_needed() {
    let image = FakeImage::pending("slow.png", FakeLoad::ms(60_000));
    with_timeout(wait_for_image(image), None, ResourceCategory::Images)
        .await
        .unwrap();
}

// ═══════════════════════════ spawn_probe ═══════════════════════════

struct PanickingImage;

#[async_trait]
impl ImageResource for PanickingImage {
    fn id(&self) -> ResourceId {
        ResourceId::new("panic.png")
    }

    fn is_complete(&self) -> bool {
        false
    }

    fn natural_width(&self) -> u32 {
        0
    }

    async fn wait_load(&self) -> Result<(), ResourceFailure> {
        panic!("宿主实现出错")
    }
}

#[tokio::test]
async fn panicking_probe_still_settles() {
    let (queue, mut consumer) = QueueReactiveProperty::new();
    let probe = Probe {
        category: ResourceCategory::Images,
        resource: Some(ResourceId::new("panic.png")),
        future: wait_for_image(Arc::new(PanickingImage)).boxed(),
    };
    spawn_probe(probe, None, queue);

    let settled = consumer.recv().await.unwrap();
    assert_eq!(settled.category, ResourceCategory::Images);
    assert!(matches!(settled.outcome, Err(PreloadError::ProbeTask(_))));
}

#[tokio::test]
async fn settled_result_is_dropped_when_queue_closed() {
    let (queue, mut consumer) = QueueReactiveProperty::new();
    consumer.close();

    let probe = Probe {
        category: ResourceCategory::Images,
        resource: None,
        future: wait_for_image(FakeImage::loaded("late.png")).boxed(),
    };
    spawn_probe(probe, None, queue);
    tokio::task::yield_now().await;

    assert!(consumer.recv().await.is_none());
}
