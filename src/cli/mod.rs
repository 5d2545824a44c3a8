//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `cell`: 倒易晶胞与 B 矩阵计算
//! - `orient`: 双反射法确定 U、UB 矩阵
//! - `index`: 角度位置批量标定 HKL
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: cell, orient, index

pub mod cell;
pub mod index;
pub mod orient;

use clap::{Parser, Subcommand};

/// ubcalc - 四圆衍射仪 UB 矩阵工具箱
#[derive(Parser)]
#[command(name = "ubcalc")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A Busing-Levy UB matrix toolkit for four-circle diffractometry", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Derive the reciprocal unit cell and B matrix from direct cell parameters
    Cell(cell::CellArgs),

    /// Determine the orientation matrix U and UB from two assigned reflections
    Orient(orient::OrientArgs),

    /// Index goniometer angular positions to HKL using a stored UB matrix
    Index(index::IndexArgs),
}
