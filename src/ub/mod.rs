//! # Busing-Levy 核心算法模块
//!
//! 实现四圆衍射仪的取向矩阵计算。
//!
//! ## 子模块
//! - `linalg`: 3x3 矩阵与三维向量基础运算
//! - `kinematics`: 角度位置到笛卡尔散射矢量的正向映射
//! - `bmatrix`: 倒易空间到笛卡尔坐标的 B 矩阵
//! - `triad`: 由两个矢量构造正交归一基 (T 矩阵)
//! - `orientation`: 双反射法求解 U、UB 矩阵
//! - `indexer`: 由 UB 逆矩阵反推 HKL 指数
//! - `export`: UB 矩阵与标定结果的 CSV 导出
//!
//! ## 参考
//! - W. R. Busing and H. A. Levy, Acta Cryst. (1967). 22, 457-464
//!
//! ## 依赖关系
//! - 被 `commands/` 使用
//! - 使用 `models/` 数据模型

pub mod bmatrix;
pub mod export;
pub mod indexer;
pub mod kinematics;
pub mod linalg;
pub mod orientation;
pub mod triad;

pub use bmatrix::b_matrix;
pub use indexer::index;
pub use kinematics::scattering_vector;
pub use orientation::Orientation;
pub use triad::{triad, triad_with_tolerance, DEFAULT_PARALLEL_TOL};
