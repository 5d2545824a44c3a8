//! # cell 子命令 CLI 定义
//!
//! 正晶胞参数，同时被 `orient` 子命令以 flatten 方式复用。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 和 `cli/orient.rs` 使用
//! - 参数传递给 `commands/cell.rs`

use clap::Args;

/// 正晶胞参数 (长度 Å，角度：度)
#[derive(Args, Debug)]
pub struct CellArgs {
    /// Cell length a (Angstrom)
    #[arg(short = 'a', long)]
    pub a: f64,

    /// Cell length b (Angstrom)
    #[arg(short = 'b', long)]
    pub b: f64,

    /// Cell length c (Angstrom)
    #[arg(short = 'c', long)]
    pub c: f64,

    /// Cell angle alpha between b and c (degrees)
    #[arg(long, default_value_t = 90.0)]
    pub alpha: f64,

    /// Cell angle beta between a and c (degrees)
    #[arg(long, default_value_t = 90.0)]
    pub beta: f64,

    /// Cell angle gamma between a and b (degrees)
    #[arg(long, default_value_t = 90.0)]
    pub gamma: f64,
}
