//! # ubcalc - 四圆衍射仪 UB 矩阵工具箱
//!
//! 实现 Busing-Levy 取向矩阵算法：由两个已标定的衍射反射确定晶体取向，
//! 并在测角仪角度位置与倒易空间 (HKL) 指数之间相互转换。
//!
//! ## 子命令
//! - `cell`   - 由正晶胞参数计算倒易晶胞与 B 矩阵
//! - `orient` - 由两个标定反射确定 U、UB 矩阵
//! - `index`  - 使用已保存的 UB 矩阵为任意角度位置标定 HKL
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (输入文件解析器)
//!   │     ├── models/    (数据模型)
//!   │     └── ub/        (Busing-Levy 核心算法)
//!   ├── batch/      (并行批量处理)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod ub;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
