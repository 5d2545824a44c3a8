//! # 并行批量处理模块
//!
//! 对大批角度位置做并行标定。所有输入都是不可变值，
//! 各任务之间无共享可变状态，可安全并行。
//!
//! ## 依赖关系
//! - 被 `commands/index.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod runner;

pub use runner::BatchRunner;
