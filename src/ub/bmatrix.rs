//! # B 矩阵构造
//!
//! 由倒易晶胞常数构造上三角的倒易空间到笛卡尔坐标变换矩阵。
//!
//! ## 约定
//! ```text
//! B = [ a*   b*·cos(γ*)   c*·cos(β*)          ]
//!     [ 0    b*·sin(γ*)  -c*·sin(β*)·cos(α)   ]
//!     [ 0    0            2π/c                ]
//! ```
//!
//! 注意右下角使用正空间 c 而非 c*，[1][2] 使用正空间 α：
//! 这是 Busing-Levy 约定在 2π 归一化下的写法，与运动学中 4π/λ
//! 因子保持一致，不是可以"修正"的笔误。
//!
//! ## 依赖关系
//! - 被 `ub/orientation.rs` 和 `commands/` 调用
//! - 使用 `models/cell.rs` 的 UnitCell

use crate::models::UnitCell;
use crate::ub::linalg::Mat3;

use std::f64::consts::PI;

/// 构造 B 矩阵（倒易矢量 -> 笛卡尔矢量）
pub fn b_matrix(cell: &UnitCell) -> Mat3 {
    let r = cell.reciprocal();
    let cos_alpha = cell.alpha().to_radians().cos();
    let (sin_beta_star, cos_beta_star) = r.beta_star.to_radians().sin_cos();
    let (sin_gamma_star, cos_gamma_star) = r.gamma_star.to_radians().sin_cos();

    [
        [
            r.a_star,
            r.b_star * cos_gamma_star,
            r.c_star * cos_beta_star,
        ],
        [
            0.0,
            r.b_star * sin_gamma_star,
            -r.c_star * sin_beta_star * cos_alpha,
        ],
        [0.0, 0.0, 2.0 * PI / cell.c()],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_b_is_diagonal() {
        let cell = UnitCell::new(5.0, 5.0, 5.0, 90.0, 90.0, 90.0).unwrap();
        let b = b_matrix(&cell);
        let expected = 2.0 * PI / 5.0;

        for i in 0..3 {
            for j in 0..3 {
                if i == j {
                    assert!((b[i][j] - expected).abs() < 1e-10);
                } else {
                    assert!(b[i][j].abs() < 1e-10);
                }
            }
        }
    }

    #[test]
    fn test_monoclinic_b_entries() {
        let cell = UnitCell::new(5.811, 10.07, 6.628, 90.0, 100.7, 90.0).unwrap();
        let b = b_matrix(&cell);

        assert!((b[0][0] - 1.100390).abs() < 1e-5);
        assert!((b[0][2] - 0.179122).abs() < 1e-5);
        assert!((b[1][1] - 0.623951).abs() < 1e-5);
        // α = 90° 时 [1][2] 为零
        assert!(b[1][2].abs() < 1e-10);
        // 右下角是 2π/c，不是 c*
        assert!((b[2][2] - 2.0 * PI / 6.628).abs() < 1e-10);
        assert!((b[2][2] - 0.947976).abs() < 1e-5);

        // 上三角
        assert_eq!(b[1][0], 0.0);
        assert_eq!(b[2][0], 0.0);
        assert_eq!(b[2][1], 0.0);
    }
}
