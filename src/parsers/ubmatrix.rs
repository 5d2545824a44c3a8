//! # UB 矩阵文件解析器
//!
//! 读取 `ubcalc orient` 导出的 3x3 UB 矩阵 CSV（无表头）。
//!
//! ## 依赖关系
//! - 被 `commands/index.rs` 调用
//! - 使用 `csv` 库

use crate::error::{Result, UbcalcError};
use crate::ub::linalg::Mat3;

use std::path::Path;

/// 解析 UB 矩阵 CSV 文件
pub fn parse_ub_file(path: &Path) -> Result<Mat3> {
    if !path.is_file() {
        return Err(UbcalcError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let parse_error = |reason: String| UbcalcError::ParseError {
        what: "UB matrix".to_string(),
        value: path.display().to_string(),
        reason,
    };

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    let mut matrix = [[0.0; 3]; 3];
    let mut rows = 0;

    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        if i >= 3 {
            return Err(parse_error("expected exactly 3 rows".to_string()));
        }
        if record.len() != 3 {
            return Err(parse_error(format!(
                "row {} has {} columns, expected 3",
                i + 1,
                record.len()
            )));
        }

        for (j, field) in record.iter().enumerate() {
            matrix[i][j] = field.trim().parse::<f64>().map_err(|_| {
                parse_error(format!("invalid number '{}' at row {}", field, i + 1))
            })?;
        }
        rows += 1;
    }

    if rows != 3 {
        return Err(parse_error(format!("found {} rows, expected 3", rows)));
    }

    Ok(matrix)
}
