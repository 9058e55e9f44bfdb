/// 预加载运行状态（由运行任务内部维护，外部只读监听）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloadStatus {
    Running,
    Finished,
    Cancelled,
}
