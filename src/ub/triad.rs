//! # 正交归一基构造 (T 矩阵)
//!
//! 由两个不平行矢量构造右手正交归一基：
//! t1 = v1/|v1|，t3 = (v1 x v2)/|v1 x v2|，t2 = t3 x t1。
//! 三列互相正交且为单位矢量，行列式为 +1。
//!
//! ## 依赖关系
//! - 被 `ub/orientation.rs` 调用
//! - 使用 `ub/linalg.rs`

use crate::error::{Result, UbcalcError};
use crate::ub::linalg::{cross, norm, scale, Mat3, Vec3};

/// 默认平行判据：|v1 x v2| <= tol · |v1|·|v2| 视为平行
pub const DEFAULT_PARALLEL_TOL: f64 = 1e-8;

/// 以默认容差构造 T 矩阵
pub fn triad(v1: &Vec3, v2: &Vec3) -> Result<Mat3> {
    triad_with_tolerance(v1, v2, DEFAULT_PARALLEL_TOL)
}

/// 以指定相对容差构造 T 矩阵
///
/// 任一输入为零矢量、或叉积模长相对 |v1|·|v2| 小于容差时
/// 返回 `ParallelVectors`。
pub fn triad_with_tolerance(v1: &Vec3, v2: &Vec3, tolerance: f64) -> Result<Mat3> {
    let n1 = norm(v1);
    let n2 = norm(v2);
    let c = cross(v1, v2);
    let nc = norm(&c);

    if n1 == 0.0 || n2 == 0.0 || nc <= tolerance * n1 * n2 {
        return Err(UbcalcError::ParallelVectors { v1: *v1, v2: *v2 });
    }

    let t1 = scale(v1, 1.0 / n1);
    let t3 = scale(&c, 1.0 / nc);
    let t2 = cross(&t3, &t1);

    // 列向量为 t1, t2, t3
    Ok([
        [t1[0], t2[0], t3[0]],
        [t1[1], t2[1], t3[1]],
        [t1[2], t2[2], t3[2]],
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ub::linalg::{det, mat_mul, transpose};

    #[test]
    fn test_orthonormal_columns() {
        let t = triad(&[1.0, 2.0, 0.5], &[-0.3, 1.0, 2.0]).unwrap();
        let prod = mat_mul(&transpose(&t), &t);

        // Tᵗ·T = I
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((prod[i][j] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_proper_rotation() {
        let t = triad(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]).unwrap();
        assert!((det(&t) - 1.0).abs() < 1e-12);

        let t = triad(&[3.0, -1.0, 2.0], &[0.5, 4.0, -2.5]).unwrap();
        assert!((det(&t) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_first_column_along_v1() {
        let t = triad(&[0.0, 0.0, 5.0], &[1.0, 0.0, 1.0]).unwrap();
        assert!((t[2][0] - 1.0).abs() < 1e-12);
        assert!(t[0][0].abs() < 1e-12);
        assert!(t[1][0].abs() < 1e-12);
    }

    #[test]
    fn test_parallel_vectors_rejected() {
        let result = triad(&[1.0, 1.0, 0.0], &[2.0, 2.0, 0.0]);
        assert!(matches!(result, Err(UbcalcError::ParallelVectors { .. })));
    }

    #[test]
    fn test_antiparallel_vectors_rejected() {
        let result = triad(&[1.0, 0.0, 0.0], &[-3.0, 0.0, 0.0]);
        assert!(matches!(result, Err(UbcalcError::ParallelVectors { .. })));
    }

    #[test]
    fn test_zero_vector_rejected() {
        let result = triad(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0]);
        assert!(matches!(result, Err(UbcalcError::ParallelVectors { .. })));
    }

    #[test]
    fn test_custom_tolerance() {
        // 夹角约 1e-6 rad：默认容差通过，更严的容差拒绝
        let v1 = [1.0, 0.0, 0.0];
        let v2 = [1.0, 1e-6, 0.0];
        assert!(triad(&v1, &v2).is_ok());
        assert!(triad_with_tolerance(&v1, &v2, 1e-3).is_err());
    }
}
