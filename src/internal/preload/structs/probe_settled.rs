use super::preload_error::PreloadError;
use super::resource_category::ResourceCategory;
use crate::internal::preload::traits::resource::ResourceId;

/// 探测落定事件（通过 QueueReactiveProperty 传给运行任务，FIFO）
#[derive(Debug, Clone)]
pub struct ProbeSettled {
    pub category: ResourceCategory,
    /// 字体探测没有对应元素，为 `None`
    pub resource: Option<ResourceId>,
    pub outcome: Result<(), PreloadError>,
}
