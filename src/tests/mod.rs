//! 测试模块入口：公共假实现在 `lib` 子模块，各项测试在 `internal`。

#[cfg(test)]
pub use lib::*;
