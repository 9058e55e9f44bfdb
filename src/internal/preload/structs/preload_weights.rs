use serde::{Deserialize, Serialize};

use super::resource_category::ResourceCategory;

/// 默认字体权重
pub const DEFAULT_FONTS_WEIGHT: f64 = 10.0;

/// 默认图片权重
pub const DEFAULT_IMAGES_WEIGHT: f64 = 60.0;

/// 默认视频权重
pub const DEFAULT_VIDEOS_WEIGHT: f64 = 40.0;

/// 三类资源的相对权重。负数、NaN 与无穷大按 0 处理；权重为 0 的类别既不扫描也不参与进度。
///
/// 反序列化时未给出的类别按 0 处理（即不参与）；整个 `weights` 缺省时才取默认的 10/60/40。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreloadWeights {
    #[serde(default)]
    pub fonts: f64,
    #[serde(default)]
    pub images: f64,
    #[serde(default)]
    pub videos: f64,
}

impl Default for PreloadWeights {
    fn default() -> Self {
        Self {
            fonts: DEFAULT_FONTS_WEIGHT,
            images: DEFAULT_IMAGES_WEIGHT,
            videos: DEFAULT_VIDEOS_WEIGHT,
        }
    }
}

impl PreloadWeights {
    pub fn new(fonts: f64, images: f64, videos: f64) -> Self {
        Self {
            fonts,
            images,
            videos,
        }
    }

    /// 归一化：总和为 0 时按 1 相除，此时三项都是 0。
    pub fn normalized(&self) -> NormalizedWeights {
        let fonts = sanitize(self.fonts);
        let images = sanitize(self.images);
        let videos = sanitize(self.videos);
        let sum = fonts + images + videos;
        let sum = if sum > 0.0 { sum } else { 1.0 };

        NormalizedWeights {
            fonts: fonts / sum,
            images: images / sum,
            videos: videos / sum,
        }
    }
}

fn sanitize(weight: f64) -> f64 {
    if weight.is_finite() && weight > 0.0 { weight } else { 0.0 }
}

/// 归一化后的权重，非零项之和为 1。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedWeights {
    pub fonts: f64,
    pub images: f64,
    pub videos: f64,
}

impl NormalizedWeights {
    pub fn weight(&self, category: ResourceCategory) -> f64 {
        match category {
            ResourceCategory::Fonts => self.fonts,
            ResourceCategory::Images => self.images,
            ResourceCategory::Videos => self.videos,
        }
    }

    /// 该类别是否参与扫描与进度计算。
    pub fn is_enabled(&self, category: ResourceCategory) -> bool {
        self.weight(category) > 0.0
    }
}
