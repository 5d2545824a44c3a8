//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `models/`, `ub/`, `utils/`
//! - 子模块: cell, orient, index

pub mod cell;
pub mod index;
pub mod orient;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Cell(args) => cell::execute(args),
        Commands::Orient(args) => orient::execute(args),
        Commands::Index(args) => index::execute(args),
    }
}
