use super::preload_error::PreloadError;

/// 对外发布的实时快照：(进度, 是否加载中, 首个错误)。
///
/// 通过 [`PreloadHandle::state`](super::PreloadHandle::state) 读取或 watch。
#[derive(Debug, Clone, PartialEq)]
pub struct PreloadSnapshot {
    /// 加权进度，0～1，单次运行内单调不减
    pub progress: f64,
    /// 所有探测落定（或运行结束）前为 `true`
    pub is_loading: bool,
    /// 本次运行观察到的第一个错误，之后的错误被丢弃
    pub error: Option<PreloadError>,
}

impl Default for PreloadSnapshot {
    fn default() -> Self {
        Self {
            progress: 0.0,
            is_loading: true,
            error: None,
        }
    }
}
