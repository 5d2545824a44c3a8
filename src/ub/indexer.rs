//! # HKL 标定
//!
//! 由 UB 逆矩阵与运动学正向映射反推任意角度位置的 HKL 指数。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `ub/kinematics.rs` 和 `ub/linalg.rs`

use crate::error::Result;
use crate::models::{AngularPosition, HklIndex};
use crate::ub::kinematics;
use crate::ub::linalg::{mat_vec, Mat3};

/// HKL = UB⁻¹ · Q(position, λ)
///
/// 输出为实数指数，取整策略由调用方决定。
pub fn index(position: &AngularPosition, ub_inv: &Mat3, wavelength: f64) -> Result<HklIndex> {
    let q = kinematics::scattering_vector(position, wavelength)?;
    let hkl = mat_vec(ub_inv, &q);
    Ok(HklIndex::new(hkl[0], hkl[1], hkl[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

    #[test]
    fn test_identity_ub_returns_scattering_vector() {
        let pos = AngularPosition::new(60.0, 30.0, 90.0, 0.0);
        let lam = 1.0;

        let q = kinematics::scattering_vector(&pos, lam).unwrap();
        let hkl = index(&pos, &IDENTITY, lam).unwrap();

        assert!((hkl.h - q[0]).abs() < 1e-12);
        assert!((hkl.k - q[1]).abs() < 1e-12);
        assert!((hkl.l - q[2]).abs() < 1e-12);
    }

    #[test]
    fn test_wavelength_error_propagates() {
        let pos = AngularPosition::new(60.0, 30.0, 90.0, 0.0);
        assert!(index(&pos, &IDENTITY, f64::INFINITY).is_err());
    }
}
