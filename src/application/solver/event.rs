// バッチ解法のイベント定義（ホスト層に依存しない）

use num_bigint::BigUint;
use num_traits::Zero;

/// 統計の増分（探索エンジン内部で使用）
#[derive(Clone, Copy, Default, Debug)]
pub struct StatDelta {
    pub equations: u64,
    pub satisfied: u64,
    pub nodes: u64,
    pub leaves: u64,
    pub pruned: u64,
    pub memo_hits: u64,
    pub memo_misses: u64,
    /// 充足した方程式の target（増分）
    pub sum: u64,
}

/// 解探索進捗の統計情報
#[derive(Clone, Debug)]
pub struct SolveProgress {
    pub solving: bool,
    pub equations_done: u64,
    pub total_equations: u64,
    pub satisfied_count: u64,
    pub nodes_searched: u64,
    pub leaves_visited: u64,
    pub pruned_count: u64,
    pub memo_hit: u64,
    pub memo_miss: u64,
    /// 枝刈りなしの場合の厳密な総分岐数 Σ |ops|^(n-1)
    pub total_combinations: BigUint,
    pub partial_sum: BigUint,
    pub search_rate: f64,
}

impl Default for SolveProgress {
    fn default() -> Self {
        Self {
            solving: false,
            equations_done: 0,
            total_equations: 0,
            satisfied_count: 0,
            nodes_searched: 0,
            leaves_visited: 0,
            pruned_count: 0,
            memo_hit: 0,
            memo_miss: 0,
            total_combinations: BigUint::zero(),
            partial_sum: BigUint::zero(),
            search_rate: 0.0,
        }
    }
}

/// 探索エンジンからのイベント
#[derive(Clone, Debug)]
pub enum SolveEvent {
    /// ログメッセージ
    Log(String),
    /// 進捗更新
    Progress(SolveProgress),
    /// 解探索完了
    Finished(SolveProgress),
    /// エラー発生
    Error(String),
}
