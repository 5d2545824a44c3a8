//! # 衍射反射数据模型
//!
//! 定义测角仪角度位置、HKL 指数与标定反射。
//!
//! ## 依赖关系
//! - 被 `ub/`、`parsers/` 和 `commands/` 使用
//! - 无外部模块依赖

use serde::{Deserialize, Serialize};

/// 四圆测角仪角度位置 (2θ, θ, χ, φ)，角度单位：度
///
/// 除有限性外不强制取值范围；物理上通常 2θ ≥ 0，但算法不作要求。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AngularPosition {
    pub two_theta: f64,
    pub theta: f64,
    pub chi: f64,
    pub phi: f64,
}

impl AngularPosition {
    pub fn new(two_theta: f64, theta: f64, chi: f64, phi: f64) -> Self {
        AngularPosition {
            two_theta,
            theta,
            chi,
            phi,
        }
    }

    /// 四个角度均为有限实数
    pub fn is_finite(&self) -> bool {
        self.two_theta.is_finite()
            && self.theta.is_finite()
            && self.chi.is_finite()
            && self.phi.is_finite()
    }
}

/// Miller 指数三元组 (h, k, l)
///
/// 标定反射的指数为整数；Indexer 的计算输出为实数，取整策略由调用方决定。
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HklIndex {
    pub h: f64,
    pub k: f64,
    pub l: f64,
}

impl HklIndex {
    pub fn new(h: f64, k: f64, l: f64) -> Self {
        HklIndex { h, k, l }
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.h, self.k, self.l]
    }

    /// 最近整数指数
    pub fn nearest(&self) -> (i32, i32, i32) {
        (
            self.h.round() as i32,
            self.k.round() as i32,
            self.l.round() as i32,
        )
    }

    /// 与最近整数指数的最大偏差
    pub fn max_deviation(&self) -> f64 {
        let dh = (self.h - self.h.round()).abs();
        let dk = (self.k - self.k.round()).abs();
        let dl = (self.l - self.l.round()).abs();
        dh.max(dk).max(dl)
    }
}

/// 标定反射：角度位置与指派的 HKL 指数
#[derive(Debug, Clone, Copy)]
pub struct Reflection {
    pub position: AngularPosition,
    pub hkl: HklIndex,
}

impl Reflection {
    pub fn new(position: AngularPosition, hkl: HklIndex) -> Self {
        Reflection { position, hkl }
    }
}
