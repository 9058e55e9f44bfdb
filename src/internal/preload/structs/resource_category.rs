use std::fmt;

use serde::{Deserialize, Serialize};

/// 资源类别：字体、图片、视频三类各自统计完成比例，再按权重合成总进度。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Fonts,
    Images,
    Videos,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 3] = [
        ResourceCategory::Fonts,
        ResourceCategory::Images,
        ResourceCategory::Videos,
    ];

    /// 出现在错误信息里的名称，例如 "Image timed out after 1000ms"。
    pub fn label(&self) -> &'static str {
        match self {
            ResourceCategory::Fonts => "Fonts",
            ResourceCategory::Images => "Image",
            ResourceCategory::Videos => "Video",
        }
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
