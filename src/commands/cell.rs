//! # cell 子命令实现
//!
//! 由正晶胞参数计算倒易晶胞并打印 B 矩阵。
//!
//! ## 依赖关系
//! - 使用 `cli/cell.rs` 定义的 CellArgs
//! - 使用 `models/cell.rs` 与 `ub/bmatrix.rs`
//! - 使用 `utils/output.rs` 打印

use crate::cli::cell::CellArgs;
use crate::error::Result;
use crate::models::UnitCell;
use crate::ub::b_matrix;
use crate::utils::output;

/// 执行倒易晶胞计算
pub fn execute(args: CellArgs) -> Result<()> {
    output::print_header("Reciprocal Unit Cell");

    let cell = UnitCell::new(args.a, args.b, args.c, args.alpha, args.beta, args.gamma)?;

    print_cell_table(&cell);
    output::print_info(&format!("Cell volume: {:.4} Å³", cell.volume()));
    println!();

    let b = b_matrix(&cell);
    output::print_matrix("B matrix (reciprocal -> Cartesian, 2π convention)", &b);

    Ok(())
}

/// 打印正/倒易晶胞参数对照表
fn print_cell_table(cell: &UnitCell) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct CellRow {
        #[tabled(rename = "Parameter")]
        name: String,
        #[tabled(rename = "Direct")]
        direct: String,
        #[tabled(rename = "Reciprocal (2π/Å, °)")]
        reciprocal: String,
    }

    let r = cell.reciprocal();
    let rows = vec![
        CellRow {
            name: "a".to_string(),
            direct: format!("{:.4}", cell.a()),
            reciprocal: format!("{:.6}", r.a_star),
        },
        CellRow {
            name: "b".to_string(),
            direct: format!("{:.4}", cell.b()),
            reciprocal: format!("{:.6}", r.b_star),
        },
        CellRow {
            name: "c".to_string(),
            direct: format!("{:.4}", cell.c()),
            reciprocal: format!("{:.6}", r.c_star),
        },
        CellRow {
            name: "alpha".to_string(),
            direct: format!("{:.4}", cell.alpha()),
            reciprocal: format!("{:.4}", r.alpha_star),
        },
        CellRow {
            name: "beta".to_string(),
            direct: format!("{:.4}", cell.beta()),
            reciprocal: format!("{:.4}", r.beta_star),
        },
        CellRow {
            name: "gamma".to_string(),
            direct: format!("{:.4}", cell.gamma()),
            reciprocal: format!("{:.4}", r.gamma_star),
        },
    ];

    let table = Table::new(&rows);
    println!("{}", table);
}
