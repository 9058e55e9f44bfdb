use serde::{Deserialize, Serialize};

/// 视频就绪判定模式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoMode {
    /// 元数据（尺寸、时长）已加载，readyState >= 1
    #[default]
    Metadata,
    /// 缓冲足够、可不卡顿播放到结尾，readyState >= 4
    CanPlayThrough,
}

impl VideoMode {
    /// 满足该模式所需的最小 readyState。
    pub fn required_ready_state(&self) -> u8 {
        match self {
            VideoMode::Metadata => 1,
            VideoMode::CanPlayThrough => 4,
        }
    }

    /// 该模式对应的就绪事件。
    pub fn ready_event(&self) -> VideoEvent {
        match self {
            VideoMode::Metadata => VideoEvent::LoadedMetadata,
            VideoMode::CanPlayThrough => VideoEvent::CanPlayThrough,
        }
    }
}

/// 视频就绪事件。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoEvent {
    LoadedMetadata,
    CanPlayThrough,
}

/// 视频元素的 preload 提示。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreloadHint {
    None,
    #[default]
    Metadata,
    Auto,
}
