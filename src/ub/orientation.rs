//! # 取向矩阵求解 (双反射法)
//!
//! 实现 Busing-Levy 双反射取向确定算法。
//!
//! ## 算法概述
//! 1. 由两个反射的角度位置计算实测散射矢量 q1, q2，构造 T_pos
//! 2. 由两个反射的指派 HKL 经 B 矩阵计算理论矢量 c1, c2，构造 T_ass
//! 3. U = T_pos · T_assᵀ
//! 4. UB = U · B，并求逆
//!
//! U 将 c1 精确旋转到 q1 方向（第一反射强制精确），第二反射仅固定
//! 方位角自由度：只有当实测与指派的两反射夹角一致时第二反射方向才被
//! 精确复现。实测数据上第二反射存在残差属于预期行为。
//!
//! ## 依赖关系
//! - 被 `commands/orient.rs` 调用
//! - 使用 `ub/kinematics.rs`, `ub/triad.rs`, `ub/linalg.rs`
//! - 使用 `models/reflection.rs` 的 Reflection

use crate::error::{Result, UbcalcError};
use crate::models::Reflection;
use crate::ub::linalg::{self, Mat3};
use crate::ub::{kinematics, triad};

/// 取向确定结果：U、UB 及 UB 的逆
///
/// 一次确定后不可变，可供任意多次标定复用。
#[derive(Debug, Clone)]
pub struct Orientation {
    /// 取向矩阵 U（正规旋转，det = +1）
    pub u: Mat3,
    /// UB = U · B
    pub ub: Mat3,
    /// UB⁻¹，笛卡尔矢量 -> HKL
    pub ub_inv: Mat3,
}

impl Orientation {
    /// 由两个非平行的标定反射求解取向
    ///
    /// 任一反射对在其空间中平行时返回 `ParallelVectors`；
    /// UB 不可逆时返回 `SingularMatrix`（B 非奇异时不应出现）。
    pub fn solve(
        r1: &Reflection,
        r2: &Reflection,
        b: &Mat3,
        wavelength: f64,
    ) -> Result<Orientation> {
        // 实测矢量
        let q1 = kinematics::scattering_vector(&r1.position, wavelength)?;
        let q2 = kinematics::scattering_vector(&r2.position, wavelength)?;
        let t_pos = triad::triad(&q1, &q2)?;

        // 指派矢量
        let c1 = linalg::mat_vec(b, &r1.hkl.to_array());
        let c2 = linalg::mat_vec(b, &r2.hkl.to_array());
        let t_ass = triad::triad(&c1, &c2)?;

        let u = linalg::mat_mul(&t_pos, &linalg::transpose(&t_ass));
        let ub = linalg::mat_mul(&u, b);
        let ub_inv =
            linalg::invert(&ub).ok_or(UbcalcError::SingularMatrix { matrix: ub })?;

        Ok(Orientation { u, ub, ub_inv })
    }
}
