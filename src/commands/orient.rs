//! # orient 子命令实现
//!
//! 由两个标定反射确定 U、UB 矩阵并验证。
//!
//! ## 流程
//! 1. 构造晶胞与 B 矩阵
//! 2. 解析两个反射规格 "2θ,θ,χ,φ/h,k,l"
//! 3. 双反射法求解 U、UB、UB⁻¹
//! 4. 用 Indexer 反推定义反射做自洽验证
//! 5. 可选导出 UB 矩阵到 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/orient.rs` 定义的 OrientArgs 与波长解析
//! - 使用 `ub/` 模块进行计算
//! - 使用 `utils/output.rs` 打印

use crate::cli::orient::{parse_wavelength, OrientArgs};
use crate::error::{Result, UbcalcError};
use crate::models::{AngularPosition, HklIndex, Reflection, UnitCell};
use crate::ub::{b_matrix, export, indexer, Orientation};
use crate::utils::output;

/// 执行取向确定
pub fn execute(args: OrientArgs) -> Result<()> {
    output::print_header("UB Matrix Determination (two reflections)");

    let cell = UnitCell::new(
        args.cell.a,
        args.cell.b,
        args.cell.c,
        args.cell.alpha,
        args.cell.beta,
        args.cell.gamma,
    )?;

    let wavelength = parse_wavelength(&args.wavelength).map_err(UbcalcError::InvalidArgument)?;
    output::print_info(&format!("Using wavelength: {:.4} Å", wavelength));

    let r1 = parse_reflection(&args.r1)?;
    let r2 = parse_reflection(&args.r2)?;
    output::print_info(&format!(
        "Reflection 1: ({:.0} {:.0} {:.0}) at 2θ = {:.4}°",
        r1.hkl.h, r1.hkl.k, r1.hkl.l, r1.position.two_theta
    ));
    output::print_info(&format!(
        "Reflection 2: ({:.0} {:.0} {:.0}) at 2θ = {:.4}°",
        r2.hkl.h, r2.hkl.k, r2.hkl.l, r2.position.two_theta
    ));
    println!();

    let b = b_matrix(&cell);
    let orientation = Orientation::solve(&r1, &r2, &b, wavelength)?;

    output::print_matrix("U (orientation matrix)", &orientation.u);
    output::print_matrix("UB = U · B", &orientation.ub);
    output::print_matrix("UB⁻¹ (Cartesian -> HKL)", &orientation.ub_inv);

    output::print_separator();
    print_verification(&orientation, &r1, &r2, wavelength)?;

    if let Some(path) = &args.output {
        export::ub_to_csv(&orientation.ub, path)?;
        output::print_success(&format!("UB matrix saved to '{}'", path.display()));
    }

    Ok(())
}

/// 反推定义反射做自洽验证
///
/// 第一反射由构造精确复现；第二反射的残差反映实测与指派
/// 夹角的差异，属正常现象。
fn print_verification(
    orientation: &Orientation,
    r1: &Reflection,
    r2: &Reflection,
    wavelength: f64,
) -> Result<()> {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct VerifyRow {
        #[tabled(rename = "Reflection")]
        name: String,
        #[tabled(rename = "Assigned (hkl)")]
        assigned: String,
        #[tabled(rename = "Re-indexed (hkl)")]
        indexed: String,
        #[tabled(rename = "Max dev")]
        deviation: String,
    }

    let mut rows = Vec::new();
    for (name, r) in [("1", r1), ("2", r2)] {
        let hkl = indexer::index(&r.position, &orientation.ub_inv, wavelength)?;
        let dh = (hkl.h - r.hkl.h).abs();
        let dk = (hkl.k - r.hkl.k).abs();
        let dl = (hkl.l - r.hkl.l).abs();
        rows.push(VerifyRow {
            name: name.to_string(),
            assigned: format!("({:.0} {:.0} {:.0})", r.hkl.h, r.hkl.k, r.hkl.l),
            indexed: format!("({:.5} {:.5} {:.5})", hkl.h, hkl.k, hkl.l),
            deviation: format!("{:.2e}", dh.max(dk).max(dl)),
        });
    }

    println!("{}", Table::new(&rows));
    Ok(())
}

/// 解析反射规格 "two_theta,theta,chi,phi/h,k,l"
fn parse_reflection(spec: &str) -> Result<Reflection> {
    let parse_error = |reason: &str| UbcalcError::ParseError {
        what: "reflection".to_string(),
        value: spec.to_string(),
        reason: reason.to_string(),
    };

    let (angles, hkl) = spec
        .split_once('/')
        .ok_or_else(|| parse_error("expected 'two_theta,theta,chi,phi/h,k,l'"))?;

    let angles = parse_numbers(angles)
        .ok_or_else(|| parse_error("angular position must be four numbers"))?;
    if angles.len() != 4 {
        return Err(parse_error("angular position must be four numbers"));
    }

    let indices =
        parse_numbers(hkl).ok_or_else(|| parse_error("hkl must be three numbers"))?;
    if indices.len() != 3 {
        return Err(parse_error("hkl must be three numbers"));
    }

    let position = AngularPosition::new(angles[0], angles[1], angles[2], angles[3]);
    if !position.is_finite() {
        return Err(parse_error("angles must be finite"));
    }

    Ok(Reflection::new(
        position,
        HklIndex::new(indices[0], indices[1], indices[2]),
    ))
}

/// 解析逗号分隔的数值列表
fn parse_numbers(input: &str) -> Option<Vec<f64>> {
    input
        .split(',')
        .map(|s| s.trim().parse::<f64>().ok())
        .collect()
}
