//! # 解析器模块
//!
//! 提供角度位置列表与 UB 矩阵文件的解析器。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: positions, ubmatrix

pub mod positions;
pub mod ubmatrix;

pub use positions::parse_positions_file;
pub use ubmatrix::parse_ub_file;
