//! # 测角仪运动学
//!
//! 由四圆角度位置与波长计算笛卡尔坐标系下的散射矢量 Q。
//!
//! ## 算法
//! ω = θ - 2θ/2，旋转按 φ 最内、χ 居中、ω 最外的嵌套顺序复合
//! （顺序承载物理意义，不可更改）：
//!
//! ```text
//! unit = [ cos(ω)cos(χ)cos(φ) - sin(ω)sin(φ),
//!          cos(ω)cos(χ)sin(φ) + sin(ω)cos(φ),
//!          cos(ω)sin(χ) ]
//! Q = 4π sin(2θ/2) · unit / λ
//! ```
//!
//! unit 由构造保证为单位矢量，故 |Q| = 4π sin(θ)/λ 恒成立。
//!
//! ## 依赖关系
//! - 被 `ub/orientation.rs` 和 `ub/indexer.rs` 调用
//! - 使用 `models/reflection.rs` 的 AngularPosition

use crate::error::{Result, UbcalcError};
use crate::models::AngularPosition;
use crate::ub::linalg::Vec3;

use std::f64::consts::PI;

/// 计算散射矢量 Q (Å⁻¹，物理学 2π 约定)
///
/// 角度单位：度；波长单位：Å。波长为零或非有限时返回 `InvalidWavelength`。
pub fn scattering_vector(position: &AngularPosition, wavelength: f64) -> Result<Vec3> {
    if !wavelength.is_finite() || wavelength == 0.0 {
        return Err(UbcalcError::InvalidWavelength { wavelength });
    }

    let omega = position.theta - position.two_theta / 2.0;
    let (sin_omega, cos_omega) = omega.to_radians().sin_cos();
    let (sin_chi, cos_chi) = position.chi.to_radians().sin_cos();
    let (sin_phi, cos_phi) = position.phi.to_radians().sin_cos();

    let unit = [
        cos_omega * cos_chi * cos_phi - sin_omega * sin_phi,
        cos_omega * cos_chi * sin_phi + sin_omega * cos_phi,
        cos_omega * sin_chi,
    ];

    let magnitude = 4.0 * PI * (position.two_theta / 2.0).to_radians().sin() / wavelength;

    Ok([
        magnitude * unit[0],
        magnitude * unit[1],
        magnitude * unit[2],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ub::linalg::norm;

    #[test]
    fn test_magnitude_independent_of_orientation_angles() {
        // |Q| = 4π sin(θ)/λ，与 θ/χ/φ 无关
        let lam = 1.5418;
        let poses = [
            AngularPosition::new(30.0, 15.0, 0.0, 0.0),
            AngularPosition::new(30.0, 40.0, 35.0, 120.0),
            AngularPosition::new(30.0, -10.0, 90.0, -45.0),
            AngularPosition::new(30.0, 3.0, 170.0, 300.0),
        ];
        let expected = 4.0 * PI * 15.0_f64.to_radians().sin() / lam;

        for pos in &poses {
            let q = scattering_vector(pos, lam).unwrap();
            assert!((norm(&q) - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_chi_90_points_along_z() {
        // ω = 0 且 χ = 90° 时 Q 沿 +z
        let pos = AngularPosition::new(44.7580, 22.3790, 90.0, 0.0);
        let q = scattering_vector(&pos, 1.2398).unwrap();

        assert!(q[0].abs() < 1e-12);
        assert!(q[1].abs() < 1e-12);
        assert!((q[2] - 3.859020).abs() < 1e-5);
    }

    #[test]
    fn test_zero_wavelength_rejected() {
        let pos = AngularPosition::new(30.0, 15.0, 0.0, 0.0);
        let result = scattering_vector(&pos, 0.0);
        assert!(matches!(
            result,
            Err(UbcalcError::InvalidWavelength { .. })
        ));
    }

    #[test]
    fn test_nan_wavelength_rejected() {
        let pos = AngularPosition::new(30.0, 15.0, 0.0, 0.0);
        assert!(scattering_vector(&pos, f64::NAN).is_err());
    }

    #[test]
    fn test_zero_two_theta_gives_zero_vector() {
        let pos = AngularPosition::new(0.0, 10.0, 20.0, 30.0);
        let q = scattering_vector(&pos, 1.0).unwrap();
        assert!(norm(&q) < 1e-15);
    }
}
