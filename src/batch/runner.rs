//! # 批量执行器
//!
//! 并行执行批量计算任务，保持输入顺序。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代
//! - 进度条显示
//! - `jobs = 0` 时自动取 CPU 核数
//!
//! ## 依赖关系
//! - 被 `commands/index.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::utils::progress;

use rayon::prelude::*;

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行映射任务列表，返回结果与输入顺序一致
    pub fn run<T, R, F>(&self, items: &[T], message: &str, worker: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        let pb = progress::create_progress_bar(items.len() as u64, message);

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .unwrap();

        let results: Vec<R> = pool.install(|| {
            items
                .par_iter()
                .map(|item| {
                    let result = worker(item);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();

        results
    }
}
