//! # 统一错误处理模块
//!
//! 定义 ubcalc 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// ubcalc 统一错误类型
#[derive(Error, Debug)]
pub enum UbcalcError {
    // ─────────────────────────────────────────────────────────────
    // 晶体学计算错误
    // ─────────────────────────────────────────────────────────────
    #[error("Degenerate unit cell (a={a}, b={b}, c={c}, alpha={alpha}, beta={beta}, gamma={gamma}): {reason}")]
    DegenerateCell {
        a: f64,
        b: f64,
        c: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
        reason: String,
    },

    #[error("Invalid wavelength: {wavelength} (must be finite and nonzero)")]
    InvalidWavelength { wavelength: f64 },

    #[error("Parallel or zero vectors, no orthonormal triad exists: {v1:?} and {v2:?}")]
    ParallelVectors { v1: [f64; 3], v2: [f64; 3] },

    #[error("Singular matrix, cannot invert: {matrix:?}")]
    SingularMatrix { matrix: [[f64; 3]; 3] },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {what}: '{value}'\nReason: {reason}")]
    ParseError {
        what: String,
        value: String,
        reason: String,
    },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, UbcalcError>;
