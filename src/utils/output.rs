//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被所有 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 打印 3x3 矩阵
pub fn print_matrix(name: &str, matrix: &[[f64; 3]; 3]) {
    println!("  {}", name.bold());
    for row in matrix {
        println!("    [{:>12.6}  {:>12.6}  {:>12.6}]", row[0], row[1], row[2]);
    }
    println!();
}
