//! # UB 矩阵与标定结果导出
//!
//! 导出 UB 矩阵和 HKL 标定结果到 CSV 文件。
//!
//! ## 支持格式
//! - UB 矩阵: 3 行 3 列，无表头，全精度（可由 `parsers/ubmatrix.rs` 读回）
//! - 标定结果: two_theta, theta, chi, phi, h, k, l
//!
//! ## 依赖关系
//! - 被 `commands/orient.rs` 和 `commands/index.rs` 调用
//! - 使用 `csv` 库写入 CSV 文件

use crate::error::{Result, UbcalcError};
use crate::models::{AngularPosition, HklIndex};
use crate::ub::linalg::Mat3;

use std::path::Path;

/// 导出 UB 矩阵为无表头 CSV
///
/// 使用最短往返十进制表示，读回不损失精度。
pub fn ub_to_csv(ub: &Mat3, output_path: &Path) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)?;

    for row in ub {
        wtr.write_record(row.iter().map(|v| v.to_string()))?;
    }

    wtr.flush().map_err(|e| UbcalcError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 导出标定结果为 CSV（表头 two_theta,theta,chi,phi,h,k,l）
pub fn results_to_csv(
    rows: &[(AngularPosition, HklIndex)],
    output_path: &Path,
) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(["two_theta", "theta", "chi", "phi", "h", "k", "l"])?;

    for (pos, hkl) in rows {
        wtr.write_record(&[
            format!("{:.4}", pos.two_theta),
            format!("{:.4}", pos.theta),
            format!("{:.4}", pos.chi),
            format!("{:.4}", pos.phi),
            format!("{:.5}", hkl.h),
            format!("{:.5}", hkl.k),
            format!("{:.5}", hkl.l),
        ])?;
    }

    wtr.flush().map_err(|e| UbcalcError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
