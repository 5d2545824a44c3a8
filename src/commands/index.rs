//! # index 子命令实现
//!
//! 使用已保存的 UB 矩阵为任意角度位置标定 HKL。
//!
//! ## 功能
//! - 支持命令行内联位置与 CSV 位置文件
//! - 并行批量标定（rayon）
//! - 可选最近整数指数与偏差显示
//! - 结果导出 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/index.rs` 定义的 IndexArgs
//! - 使用 `cli/orient.rs` 的波长解析
//! - 使用 `parsers/` 读取 UB 矩阵与位置文件
//! - 使用 `batch/` 模块进行并行处理
//! - 使用 `ub/indexer.rs` 进行计算

use crate::batch::BatchRunner;
use crate::cli::index::IndexArgs;
use crate::cli::orient::parse_wavelength;
use crate::error::{Result, UbcalcError};
use crate::models::{AngularPosition, HklIndex};
use crate::parsers;
use crate::ub::linalg::invert;
use crate::ub::{export, indexer};
use crate::utils::output;

/// 标定结果表打印上限
const TABLE_LIMIT: usize = 20;

/// 执行 HKL 标定
pub fn execute(args: IndexArgs) -> Result<()> {
    output::print_header("HKL Indexing");

    let ub = parsers::parse_ub_file(&args.ub)?;
    let ub_inv = invert(&ub).ok_or(UbcalcError::SingularMatrix { matrix: ub })?;
    output::print_info(&format!("Loaded UB matrix from '{}'", args.ub.display()));

    let wavelength = parse_wavelength(&args.wavelength).map_err(UbcalcError::InvalidArgument)?;
    output::print_info(&format!("Using wavelength: {:.4} Å", wavelength));

    let positions = collect_positions(&args)?;
    output::print_info(&format!("Indexing {} angular positions", positions.len()));

    let runner = BatchRunner::new(args.jobs);
    let results = runner.run(&positions, "Indexing", |pos| {
        indexer::index(pos, &ub_inv, wavelength)
    });

    let mut rows: Vec<(AngularPosition, HklIndex)> = Vec::with_capacity(positions.len());
    for (pos, result) in positions.iter().zip(results) {
        rows.push((*pos, result?));
    }

    print_result_table(&rows, args.snap);

    if let Some(path) = &args.output {
        export::results_to_csv(&rows, path)?;
        output::print_success(&format!("Results saved to '{}'", path.display()));
    }

    Ok(())
}

/// 汇总内联位置与位置文件
fn collect_positions(args: &IndexArgs) -> Result<Vec<AngularPosition>> {
    let mut positions = Vec::new();

    for spec in &args.positions {
        positions.push(parse_position(spec)?);
    }

    if let Some(path) = &args.input {
        positions.extend(parsers::parse_positions_file(path)?);
    }

    if positions.is_empty() {
        return Err(UbcalcError::InvalidArgument(
            "no angular positions given; use --position or --input".to_string(),
        ));
    }

    Ok(positions)
}

/// 解析内联位置 "two_theta,theta,chi,phi"
fn parse_position(spec: &str) -> Result<AngularPosition> {
    let parse_error = |reason: &str| UbcalcError::ParseError {
        what: "angular position".to_string(),
        value: spec.to_string(),
        reason: reason.to_string(),
    };

    let fields: Option<Vec<f64>> = spec
        .split(',')
        .map(|s| s.trim().parse::<f64>().ok())
        .collect();
    let fields = fields.ok_or_else(|| parse_error("expected 'two_theta,theta,chi,phi'"))?;
    if fields.len() != 4 {
        return Err(parse_error("expected four comma-separated numbers"));
    }

    let position = AngularPosition::new(fields[0], fields[1], fields[2], fields[3]);
    if !position.is_finite() {
        return Err(parse_error("angles must be finite"));
    }

    Ok(position)
}

/// 打印标定结果表格
fn print_result_table(rows: &[(AngularPosition, HklIndex)], snap: bool) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct IndexRow {
        #[tabled(rename = "2θ (°)")]
        two_theta: String,
        #[tabled(rename = "θ (°)")]
        theta: String,
        #[tabled(rename = "χ (°)")]
        chi: String,
        #[tabled(rename = "φ (°)")]
        phi: String,
        #[tabled(rename = "(h k l)")]
        hkl: String,
        #[tabled(rename = "Nearest")]
        nearest: String,
        #[tabled(rename = "Max dev")]
        deviation: String,
    }

    let table_rows: Vec<IndexRow> = rows
        .iter()
        .take(TABLE_LIMIT)
        .map(|(pos, hkl)| {
            let (nearest, deviation) = if snap {
                let (h, k, l) = hkl.nearest();
                (
                    format!("({} {} {})", h, k, l),
                    format!("{:.4}", hkl.max_deviation()),
                )
            } else {
                ("-".to_string(), "-".to_string())
            };
            IndexRow {
                two_theta: format!("{:.4}", pos.two_theta),
                theta: format!("{:.4}", pos.theta),
                chi: format!("{:.4}", pos.chi),
                phi: format!("{:.4}", pos.phi),
                hkl: format!("({:.4} {:.4} {:.4})", hkl.h, hkl.k, hkl.l),
                nearest,
                deviation,
            }
        })
        .collect();

    println!("{}", Table::new(&table_rows));

    if rows.len() > TABLE_LIMIT {
        output::print_warning(&format!(
            "... and {} more rows (use --output to export all)",
            rows.len() - TABLE_LIMIT
        ));
    }
}
