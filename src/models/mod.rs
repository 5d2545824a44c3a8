//! # 数据模型模块
//!
//! 定义晶胞与衍射反射的数据模型。
//!
//! ## 依赖关系
//! - 被 `ub/` 和 `commands/` 使用
//! - 子模块: cell, reflection

pub mod cell;
pub mod reflection;

pub use cell::{ReciprocalCell, UnitCell};
pub use reflection::{AngularPosition, HklIndex, Reflection};
