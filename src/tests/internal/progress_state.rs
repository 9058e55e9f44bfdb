//! 进度计算测试：权重归一化、单类比例、单调性、首个错误。

use crate::preload::{
    PreloadError, PreloadWeights, ProgressState, ResourceCategory, ResourceId,
};
use crate::tests::{assert_close, assert_non_decreasing};

fn state(fonts: f64, images: f64, videos: f64) -> ProgressState {
    ProgressState::new(PreloadWeights::new(fonts, images, videos).normalized())
}

// ═══════════════════════════ 权重 ═══════════════════════════

#[test]
fn default_weights_normalize_to_one() {
    let w = PreloadWeights::default().normalized();
    assert_close(w.fonts + w.images + w.videos, 1.0);
    assert_close(w.fonts, 10.0 / 110.0);
    assert_close(w.images, 60.0 / 110.0);
    assert_close(w.videos, 40.0 / 110.0);
}

#[test]
fn negative_and_non_finite_weights_count_as_zero() {
    let w = PreloadWeights::new(-5.0, f64::NAN, 2.0).normalized();
    assert_eq!(w.fonts, 0.0);
    assert_eq!(w.images, 0.0);
    assert_close(w.videos, 1.0);
    assert!(!w.is_enabled(ResourceCategory::Fonts));
    assert!(!w.is_enabled(ResourceCategory::Images));

    let w = PreloadWeights::new(f64::INFINITY, 1.0, 1.0).normalized();
    assert_eq!(w.fonts, 0.0);
    assert_close(w.images, 0.5);
}

#[test]
fn all_zero_weights_disable_everything() {
    let w = PreloadWeights::new(0.0, 0.0, 0.0).normalized();
    for c in ResourceCategory::ALL {
        assert!(!w.is_enabled(c));
    }
    // 没有任何类别参与时，计算进度为 0，只有结束时才变为 1
    let mut s = ProgressState::new(w);
    assert_eq!(s.advance(), 0.0);
    assert_eq!(s.finish(), 1.0);
}

// ═══════════════════════════ 比例 ═══════════════════════════

#[test]
fn zero_weight_category_has_ratio_one() {
    let mut s = state(0.0, 1.0, 0.0);
    s.add_discovered(ResourceCategory::Videos, 5);
    assert_eq!(s.ratio(ResourceCategory::Fonts), 1.0);
    assert_eq!(s.ratio(ResourceCategory::Videos), 1.0);

    s.add_discovered(ResourceCategory::Images, 2);
    assert_eq!(s.computed_progress(), 0.0);
    s.mark_settled(ResourceCategory::Images);
    assert_close(s.computed_progress(), 0.5);
}

#[test]
fn empty_category_counts_as_complete() {
    let s = state(1.0, 1.0, 1.0);
    // 字体未就绪，图片与视频都没有 → 2/3
    assert_close(s.computed_progress(), 2.0 / 3.0);
}

#[test]
fn fonts_are_all_or_nothing() {
    let mut s = state(1.0, 0.0, 0.0);
    assert_eq!(s.ratio(ResourceCategory::Fonts), 0.0);
    s.mark_settled(ResourceCategory::Fonts);
    assert_eq!(s.ratio(ResourceCategory::Fonts), 1.0);
    assert_eq!(s.done(ResourceCategory::Fonts), 1);
}

#[test]
fn done_never_exceeds_total() {
    let mut s = state(0.0, 1.0, 0.0);
    s.add_discovered(ResourceCategory::Images, 1);
    s.mark_settled(ResourceCategory::Images);
    s.mark_settled(ResourceCategory::Images);
    assert_eq!(s.done(ResourceCategory::Images), 1);
    assert_eq!(s.computed_progress(), 1.0);
}

#[test]
fn weighted_mix_of_categories() {
    let mut s = state(10.0, 60.0, 40.0);
    s.add_discovered(ResourceCategory::Images, 2);
    s.add_discovered(ResourceCategory::Videos, 1);
    assert_eq!(s.advance(), 0.0);

    s.mark_settled(ResourceCategory::Fonts);
    assert_close(s.advance(), 10.0 / 110.0);
    s.mark_settled(ResourceCategory::Images);
    assert_close(s.advance(), 40.0 / 110.0);
    s.mark_settled(ResourceCategory::Videos);
    assert_close(s.advance(), 80.0 / 110.0);
    s.mark_settled(ResourceCategory::Images);
    assert_close(s.advance(), 1.0);
}

// ═══════════════════════════ 单调性 ═══════════════════════════

#[test]
fn reported_progress_holds_when_total_grows() {
    let mut s = state(0.0, 1.0, 0.0);
    s.add_discovered(ResourceCategory::Images, 1);
    s.mark_settled(ResourceCategory::Images);
    let mut seen = vec![s.advance()];

    // 二次扫描发现新图片：计算值回落到 0.5，发布值保持 1
    s.add_discovered(ResourceCategory::Images, 1);
    assert_close(s.computed_progress(), 0.5);
    seen.push(s.advance());
    s.mark_settled(ResourceCategory::Images);
    seen.push(s.advance());

    assert_non_decreasing(&seen);
    assert_eq!(s.progress(), 1.0);
}

// ═══════════════════════════ 错误 ═══════════════════════════

#[test]
fn only_first_error_is_kept() {
    let mut s = state(1.0, 1.0, 1.0);
    let first = PreloadError::ResourceTimeout {
        category: ResourceCategory::Images,
        timeout_ms: 1000,
    };
    let second = PreloadError::ResourceLoadError {
        category: ResourceCategory::Videos,
        resource: ResourceId::new("v1"),
        message: "error event".into(),
    };

    assert!(s.record_error(first.clone()));
    assert!(!s.record_error(second));
    assert_eq!(s.error(), Some(&first));
}

#[test]
fn error_messages_and_categories() {
    let timeout = PreloadError::ResourceTimeout {
        category: ResourceCategory::Images,
        timeout_ms: 1000,
    };
    assert_eq!(timeout.to_string(), "Image timed out after 1000ms");
    assert!(timeout.is_timeout());
    assert_eq!(timeout.category(), Some(ResourceCategory::Images));

    let fonts = PreloadError::FontLoadError("rejected".into());
    assert_eq!(fonts.category(), Some(ResourceCategory::Fonts));
    assert_eq!(PreloadError::Cancelled.category(), None);
}
