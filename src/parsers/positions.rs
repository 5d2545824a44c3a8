//! # 角度位置文件解析器
//!
//! 解析 CSV 格式的测角仪角度位置列表。
//!
//! ## 文件格式
//! 表头 `two_theta,theta,chi,phi`，每行一个位姿，角度单位：度。
//!
//! ## 依赖关系
//! - 被 `commands/index.rs` 调用
//! - 使用 `models/reflection.rs` 的 AngularPosition
//! - 使用 `csv` 与 `serde` 反序列化

use crate::error::{Result, UbcalcError};
use crate::models::AngularPosition;

use std::path::Path;

/// 解析角度位置 CSV 文件
pub fn parse_positions_file(path: &Path) -> Result<Vec<AngularPosition>> {
    if !path.is_file() {
        return Err(UbcalcError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let mut rdr = csv::Reader::from_path(path)?;
    let mut positions = Vec::new();

    for (line, record) in rdr.deserialize().enumerate() {
        let position: AngularPosition = record.map_err(|e| UbcalcError::ParseError {
            what: "angular position".to_string(),
            value: format!("{} (data row {})", path.display(), line + 1),
            reason: e.to_string(),
        })?;

        if !position.is_finite() {
            return Err(UbcalcError::ParseError {
                what: "angular position".to_string(),
                value: format!("{} (data row {})", path.display(), line + 1),
                reason: "angles must be finite".to_string(),
            });
        }

        positions.push(position);
    }

    if positions.is_empty() {
        return Err(UbcalcError::ParseError {
            what: "angular position".to_string(),
            value: path.display().to_string(),
            reason: "file contains no data rows".to_string(),
        });
    }

    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_positions() {
        let path = std::env::temp_dir().join("ubcalc_test_positions.csv");
        fs::write(
            &path,
            "two_theta,theta,chi,phi\n44.7580,22.3790,90.0,0.0\n55.8185,14.7355,90.0,0.0\n",
        )
        .unwrap();

        let positions = parse_positions_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(positions.len(), 2);
        assert!((positions[0].two_theta - 44.7580).abs() < 1e-12);
        assert!((positions[1].theta - 14.7355).abs() < 1e-12);
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("ubcalc_test_no_such_file.csv");
        let result = parse_positions_file(&path);
        assert!(matches!(result, Err(UbcalcError::FileNotFound { .. })));
    }

    #[test]
    fn test_empty_file_rejected() {
        let path = std::env::temp_dir().join("ubcalc_test_positions_empty.csv");
        fs::write(&path, "two_theta,theta,chi,phi\n").unwrap();

        let result = parse_positions_file(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(UbcalcError::ParseError { .. })));
    }

    #[test]
    fn test_malformed_row_rejected() {
        let path = std::env::temp_dir().join("ubcalc_test_positions_bad.csv");
        fs::write(&path, "two_theta,theta,chi,phi\n44.7580,abc,90.0,0.0\n").unwrap();

        let result = parse_positions_file(&path);
        fs::remove_file(&path).ok();

        assert!(matches!(result, Err(UbcalcError::ParseError { .. })));
    }
}
