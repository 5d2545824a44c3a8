//! # orient 子命令 CLI 定义
//!
//! 双反射取向确定的参数：晶胞、波长与两个标定反射。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 复用 `cli/cell.rs` 的晶胞参数
//! - 参数传递给 `commands/orient.rs`

use crate::cli::cell::CellArgs;

use clap::Args;
use std::path::PathBuf;

/// 预定义辐射源波长 (Å)
pub fn get_predefined_wavelength(name: &str) -> Option<f64> {
    match name.to_lowercase().as_str() {
        "cu-ka" | "cuka" => Some(1.5418),
        "cu-ka1" | "cuka1" => Some(1.5406),
        "cu-ka2" | "cuka2" => Some(1.5444),
        "cu-kb1" | "cukb1" => Some(1.3922),
        "mo-ka" | "moka" => Some(0.7107),
        "mo-ka1" | "moka1" => Some(0.7093),
        "co-ka" | "coka" => Some(1.7903),
        "fe-ka" | "feka" => Some(1.9373),
        "cr-ka" | "crka" => Some(2.2910),
        "ag-ka" | "agka" => Some(0.5609),
        _ => None,
    }
}

/// 解析波长输入（辐射源名称或数值）
pub fn parse_wavelength(input: &str) -> Result<f64, String> {
    // 先尝试解析为预定义辐射源
    if let Some(wl) = get_predefined_wavelength(input) {
        return Ok(wl);
    }
    // 再尝试解析为数值
    input.parse::<f64>().map_err(|_| {
        format!(
            "Invalid wavelength '{}'. Use a number in Angstrom (e.g., 1.2398) or a name: cu-ka, mo-ka, co-ka, fe-ka, cr-ka, ag-ka",
            input
        )
    })
}

/// orient 子命令参数
#[derive(Args, Debug)]
pub struct OrientArgs {
    #[command(flatten)]
    pub cell: CellArgs,

    /// Wavelength: radiation source name (cu-ka, mo-ka, ...) or value in Angstrom
    #[arg(short = 'w', long, default_value = "cu-ka")]
    pub wavelength: String,

    /// First reflection: "two_theta,theta,chi,phi/h,k,l" (degrees / Miller indices)
    #[arg(long)]
    pub r1: String,

    /// Second reflection, same format, not parallel to the first
    #[arg(long)]
    pub r2: String,

    /// Write the UB matrix to a CSV file (3 rows x 3 columns, no header)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predefined_wavelength() {
        assert_eq!(get_predefined_wavelength("cu-ka"), Some(1.5418));
        assert_eq!(get_predefined_wavelength("MoKa"), Some(0.7107));
        assert_eq!(get_predefined_wavelength("unknown"), None);
    }

    #[test]
    fn test_parse_wavelength() {
        assert_eq!(parse_wavelength("cu-ka1").unwrap(), 1.5406);
        assert!((parse_wavelength("1.2398").unwrap() - 1.2398).abs() < 1e-12);
        assert!(parse_wavelength("not-a-source").is_err());
    }
}
