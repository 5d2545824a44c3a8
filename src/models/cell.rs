//! # 晶胞数据模型
//!
//! 由正晶胞参数 (a, b, c, α, β, γ) 通过度规张量推导倒易晶胞常数与角度。
//!
//! ## 算法概述
//! 1. 构造正空间度规张量 M（M[0][1] 对应 γ，M[0][2] 对应 β，M[1][2] 对应 α）
//! 2. 检查 M 正定（Sylvester 判据，顺序主子式均为正）
//! 3. 求逆并乘以 (2π)²，物理学约定 |a*| = 2π/a
//! 4. 对角线开方得倒易长度，归一化非对角元经 arccos 得倒易角度
//!
//! ## 依赖关系
//! - 被 `ub/` 和 `commands/` 使用
//! - 使用 `ub/linalg.rs` 的矩阵求逆

use crate::error::{Result, UbcalcError};
use crate::ub::linalg::{self, Mat3};

use serde::Serialize;
use std::f64::consts::PI;

/// 倒易晶胞常数与角度
///
/// 长度单位 Å⁻¹（含 2π 因子），角度单位：度。
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReciprocalCell {
    pub a_star: f64,
    pub b_star: f64,
    pub c_star: f64,
    pub alpha_star: f64,
    pub beta_star: f64,
    pub gamma_star: f64,
}

/// 正晶胞参数与一次性推导出的倒易晶胞
///
/// 构造后不可变；倒易常数在 `new` 中由度规张量计算一次。
/// 长度单位 Å，角度单位：度。
#[derive(Debug, Clone, Serialize)]
pub struct UnitCell {
    a: f64,
    b: f64,
    c: f64,
    alpha: f64,
    beta: f64,
    gamma: f64,
    reciprocal: ReciprocalCell,
}

impl UnitCell {
    /// 从晶胞参数创建，角度单位：度
    ///
    /// 度规张量非正定或数值不自洽时返回 `DegenerateCell`。
    pub fn new(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Result<Self> {
        let degenerate = |reason: &str| UbcalcError::DegenerateCell {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
            reason: reason.to_string(),
        };

        if ![a, b, c].iter().all(|v| v.is_finite() && *v > 0.0) {
            return Err(degenerate("cell lengths must be finite and positive"));
        }
        if ![alpha, beta, gamma]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0 && *v < 180.0)
        {
            return Err(degenerate("cell angles must lie in (0, 180) degrees"));
        }

        let m = metric_tensor(a, b, c, alpha, beta, gamma);

        // Sylvester 判据：顺序主子式均为正
        let minor1 = m[0][0];
        let minor2 = m[0][0] * m[1][1] - m[0][1] * m[0][1];
        let minor3 = linalg::det(&m);
        if minor1 <= 0.0 || minor2 <= 0.0 || minor3 <= 0.0 {
            return Err(degenerate("metric tensor is not positive definite"));
        }

        // 倒易度规张量 G* = (2π)² M⁻¹
        let m_inv = linalg::invert(&m).ok_or_else(|| degenerate("metric tensor is singular"))?;
        let scale = (2.0 * PI) * (2.0 * PI);
        let g = [
            [m_inv[0][0] * scale, m_inv[0][1] * scale, m_inv[0][2] * scale],
            [m_inv[1][0] * scale, m_inv[1][1] * scale, m_inv[1][2] * scale],
            [m_inv[2][0] * scale, m_inv[2][1] * scale, m_inv[2][2] * scale],
        ];

        let a_star = g[0][0].sqrt();
        let b_star = g[1][1].sqrt();
        let c_star = g[2][2].sqrt();

        // 与正空间相同的指标约定：[0][1] 对应 γ*，[0][2] 对应 β*，[1][2] 对应 α*
        let gamma_star = recip_angle(g[0][1], a_star, b_star)
            .ok_or_else(|| degenerate("reciprocal angle cosine out of [-1, 1]"))?;
        let beta_star = recip_angle(g[0][2], a_star, c_star)
            .ok_or_else(|| degenerate("reciprocal angle cosine out of [-1, 1]"))?;
        let alpha_star = recip_angle(g[1][2], b_star, c_star)
            .ok_or_else(|| degenerate("reciprocal angle cosine out of [-1, 1]"))?;

        Ok(UnitCell {
            a,
            b,
            c,
            alpha,
            beta,
            gamma,
            reciprocal: ReciprocalCell {
                a_star,
                b_star,
                c_star,
                alpha_star,
                beta_star,
                gamma_star,
            },
        })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// 推导出的倒易晶胞
    pub fn reciprocal(&self) -> &ReciprocalCell {
        &self.reciprocal
    }

    /// 晶胞体积 V = √det(M) (Å³)
    pub fn volume(&self) -> f64 {
        let m = metric_tensor(self.a, self.b, self.c, self.alpha, self.beta, self.gamma);
        linalg::det(&m).sqrt()
    }
}

/// 构造正空间度规张量
fn metric_tensor(a: f64, b: f64, c: f64, alpha: f64, beta: f64, gamma: f64) -> Mat3 {
    let cos_alpha = alpha.to_radians().cos();
    let cos_beta = beta.to_radians().cos();
    let cos_gamma = gamma.to_radians().cos();

    [
        [a * a, a * b * cos_gamma, a * c * cos_beta],
        [a * b * cos_gamma, b * b, b * c * cos_alpha],
        [a * c * cos_beta, b * c * cos_alpha, c * c],
    ]
}

/// 由倒易度规张量非对角元计算倒易角度（度），arccos 定义域检查
fn recip_angle(g_off: f64, len_i: f64, len_j: f64) -> Option<f64> {
    let cos_angle = g_off / (len_i * len_j);
    if !(-1.0..=1.0).contains(&cos_angle) {
        return None;
    }
    Some(cos_angle.acos().to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_reciprocal() {
        let cell = UnitCell::new(5.0, 5.0, 5.0, 90.0, 90.0, 90.0).unwrap();
        let r = cell.reciprocal();

        // |a*| = 2π/a
        assert!((r.a_star - 2.0 * PI / 5.0).abs() < 1e-10);
        assert!((r.b_star - 2.0 * PI / 5.0).abs() < 1e-10);
        assert!((r.c_star - 2.0 * PI / 5.0).abs() < 1e-10);
        assert!((r.alpha_star - 90.0).abs() < 1e-10);
        assert!((r.beta_star - 90.0).abs() < 1e-10);
        assert!((r.gamma_star - 90.0).abs() < 1e-10);
    }

    #[test]
    fn test_monoclinic_reciprocal() {
        // 单斜晶胞，来自实测数据
        let cell = UnitCell::new(5.811, 10.07, 6.628, 90.0, 100.7, 90.0).unwrap();
        let r = cell.reciprocal();

        assert!((r.a_star - 1.100390).abs() < 1e-5);
        assert!((r.b_star - 0.623951).abs() < 1e-5);
        assert!((r.c_star - 0.964750).abs() < 1e-5);
        assert!((r.alpha_star - 90.0).abs() < 1e-6);
        assert!((r.beta_star - 79.3).abs() < 1e-6);
        assert!((r.gamma_star - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_reciprocal_of_reciprocal_round_trip() {
        let cell = UnitCell::new(5.811, 10.07, 6.628, 90.0, 100.7, 90.0).unwrap();
        let r = *cell.reciprocal();

        // 把倒易晶胞当作正晶胞再求倒易，应回到原晶胞
        let back = UnitCell::new(
            r.a_star,
            r.b_star,
            r.c_star,
            r.alpha_star,
            r.beta_star,
            r.gamma_star,
        )
        .unwrap();
        let rr = back.reciprocal();

        assert!((rr.a_star - 5.811).abs() < 1e-9);
        assert!((rr.b_star - 10.07).abs() < 1e-9);
        assert!((rr.c_star - 6.628).abs() < 1e-9);
        assert!((rr.alpha_star - 90.0).abs() < 1e-9);
        assert!((rr.beta_star - 100.7).abs() < 1e-9);
        assert!((rr.gamma_star - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_hexagonal_reciprocal_gamma() {
        let cell = UnitCell::new(3.0, 3.0, 5.0, 90.0, 90.0, 120.0).unwrap();
        let r = cell.reciprocal();

        // 六方晶系 γ* = 60°
        assert!((r.gamma_star - 60.0).abs() < 1e-9);
        assert!((r.c_star - 2.0 * PI / 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_zero_angles_rejected() {
        let result = UnitCell::new(5.0, 5.0, 5.0, 0.0, 0.0, 0.0);
        assert!(matches!(result, Err(UbcalcError::DegenerateCell { .. })));
    }

    #[test]
    fn test_negative_length_rejected() {
        let result = UnitCell::new(-5.0, 5.0, 5.0, 90.0, 90.0, 90.0);
        assert!(matches!(result, Err(UbcalcError::DegenerateCell { .. })));
    }

    #[test]
    fn test_flat_cell_rejected() {
        // γ > α + β 时三个晶格矢量无法张成平行六面体
        let result = UnitCell::new(5.0, 5.0, 5.0, 10.0, 20.0, 150.0);
        assert!(matches!(result, Err(UbcalcError::DegenerateCell { .. })));
    }

    #[test]
    fn test_volume_cubic() {
        let cell = UnitCell::new(5.0, 5.0, 5.0, 90.0, 90.0, 90.0).unwrap();
        assert!((cell.volume() - 125.0).abs() < 1e-9);
    }
}
