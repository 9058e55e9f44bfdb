/// 内部实现模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口函数
pub use internal::entrance::preload::preload_assets;
pub use internal::preload::defaults::{init_preload_defaults, preload_defaults};

pub mod entrance {
    pub use crate::internal::entrance::preload::PreloadHost;
}

/// 预加载器、配置、快照与宿主能力接口
pub mod preload {
    use crate::internal;
    // 结构体模型
    pub use internal::preload::structs::*;
    // 宿主能力与钩子
    pub use internal::preload::traits::preload_hook::PreloadHook;
    pub use internal::preload::traits::resource::*;
}

pub mod states {
    pub mod unlock_reactive {
        use crate::internal;
        pub use internal::states::unlock_reactive::*;
    }

    pub mod reactive_core {
        use crate::internal;
        pub use internal::states::reactive_core::{PropertyWatcher, ReactiveProperty, ReactivePropertyError};
    }
}
