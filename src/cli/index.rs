//! # index 子命令 CLI 定义
//!
//! 使用已保存的 UB 矩阵为角度位置标定 HKL。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/index.rs`

use clap::Args;
use std::path::PathBuf;

/// index 子命令参数
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Path to the UB matrix CSV file produced by `ubcalc orient`
    #[arg(long)]
    pub ub: PathBuf,

    /// Wavelength: radiation source name (cu-ka, mo-ka, ...) or value in Angstrom
    #[arg(short = 'w', long, default_value = "cu-ka")]
    pub wavelength: String,

    /// Inline angular position "two_theta,theta,chi,phi" in degrees (repeatable)
    #[arg(short = 'p', long = "position")]
    pub positions: Vec<String>,

    /// CSV file of angular positions (header: two_theta,theta,chi,phi)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write indexing results to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also print the nearest integer HKL and its maximum deviation
    #[arg(long, default_value_t = false)]
    pub snap: bool,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
