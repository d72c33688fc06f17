// 解探索結果の定義

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// 1本の方程式の判定結果
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EquationOutcome {
    pub target: u64,
    pub operands: Vec<u64>,
    pub satisfiable: bool,
}

/// 解探索サマリー
#[derive(Clone, Debug)]
pub struct SolveSummary {
    pub equations_total: u64,
    pub satisfied_count: u64,
    pub total_sum: BigUint,
    pub nodes_searched: u64,
    pub elapsed_seconds: f64,
    pub nodes_per_second: f64,
}

impl SolveSummary {
    pub fn new() -> Self {
        Self {
            equations_total: 0,
            satisfied_count: 0,
            total_sum: BigUint::zero(),
            nodes_searched: 0,
            elapsed_seconds: 0.0,
            nodes_per_second: 0.0,
        }
    }
}

impl Default for SolveSummary {
    fn default() -> Self {
        Self::new()
    }
}
