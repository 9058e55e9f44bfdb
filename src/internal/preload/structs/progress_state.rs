use super::preload_error::PreloadError;
use super::preload_weights::NormalizedWeights;
use super::resource_category::ResourceCategory;

/// 单次运行的进度计数器，只由运行任务持有和修改。
#[derive(Debug, Clone)]
pub struct ProgressState {
    weights: NormalizedWeights,
    fonts_ready: bool,
    images_total: usize,
    images_done: usize,
    videos_total: usize,
    videos_done: usize,
    error: Option<PreloadError>,
    /// 已发布的最大进度；总数在二次扫描后可能变大，发布值取历史最大以保证单调
    reported: f64,
}

impl ProgressState {
    pub fn new(weights: NormalizedWeights) -> Self {
        Self {
            weights,
            // 字体权重为 0 时视为已完成
            fonts_ready: !weights.is_enabled(ResourceCategory::Fonts),
            images_total: 0,
            images_done: 0,
            videos_total: 0,
            videos_done: 0,
            error: None,
            reported: 0.0,
        }
    }

    pub fn weights(&self) -> &NormalizedWeights {
        &self.weights
    }

    /// 记录新发现的资源数量。字体不可枚举，忽略。
    pub fn add_discovered(&mut self, category: ResourceCategory, count: usize) {
        match category {
            ResourceCategory::Fonts => {}
            ResourceCategory::Images => self.images_total += count,
            ResourceCategory::Videos => self.videos_total += count,
        }
    }

    /// 某个探测落定（成功、失败或超时都算）。完成数不会超过总数。
    pub fn mark_settled(&mut self, category: ResourceCategory) {
        match category {
            ResourceCategory::Fonts => self.fonts_ready = true,
            ResourceCategory::Images => {
                self.images_done = (self.images_done + 1).min(self.images_total)
            }
            ResourceCategory::Videos => {
                self.videos_done = (self.videos_done + 1).min(self.videos_total)
            }
        }
    }

    /// 记录错误；只保留第一个，是第一个时返回 `true`。
    pub fn record_error(&mut self, error: PreloadError) -> bool {
        if self.error.is_some() {
            return false;
        }
        self.error = Some(error);
        true
    }

    pub fn error(&self) -> Option<&PreloadError> {
        self.error.as_ref()
    }

    pub fn total(&self, category: ResourceCategory) -> usize {
        match category {
            ResourceCategory::Fonts => 1,
            ResourceCategory::Images => self.images_total,
            ResourceCategory::Videos => self.videos_total,
        }
    }

    pub fn done(&self, category: ResourceCategory) -> usize {
        match category {
            ResourceCategory::Fonts => usize::from(self.fonts_ready),
            ResourceCategory::Images => self.images_done,
            ResourceCategory::Videos => self.videos_done,
        }
    }

    /// 单类完成比例；权重为 0 或没有资源时为 1。
    pub fn ratio(&self, category: ResourceCategory) -> f64 {
        if !self.weights.is_enabled(category) {
            return 1.0;
        }
        match category {
            ResourceCategory::Fonts => {
                if self.fonts_ready {
                    1.0
                } else {
                    0.0
                }
            }
            _ => {
                let total = self.total(category);
                if total == 0 {
                    1.0
                } else {
                    self.done(category) as f64 / total as f64
                }
            }
        }
    }

    /// 按当前计数计算的加权进度，夹在 [0, 1]。
    pub fn computed_progress(&self) -> f64 {
        // 全部落定时直接给 1，避免浮点累加得到 0.999…；没有任何类别参与时按加权和（0）计
        let any_enabled = ResourceCategory::ALL
            .iter()
            .any(|c| self.weights.is_enabled(*c));
        if any_enabled && ResourceCategory::ALL.iter().all(|c| self.ratio(*c) >= 1.0) {
            return 1.0;
        }
        let sum: f64 = ResourceCategory::ALL
            .iter()
            .map(|c| self.weights.weight(*c) * self.ratio(*c))
            .sum();
        sum.clamp(0.0, 1.0)
    }

    /// 重新计算并返回可发布的进度（单调不减）。
    pub fn advance(&mut self) -> f64 {
        self.reported = self.reported.max(self.computed_progress());
        self.reported
    }

    /// 运行结束：进度恰好为 1。
    pub fn finish(&mut self) -> f64 {
        self.reported = 1.0;
        self.reported
    }

    pub fn progress(&self) -> f64 {
        self.reported
    }
}
