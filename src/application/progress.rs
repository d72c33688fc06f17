// 進捗管理

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 進捗統計
#[derive(Clone, Debug, Default)]
pub struct ProgressStats {
    pub equations_done: u64,
    pub nodes_searched: u64,
    pub satisfied_found: u64,
}

/// 進捗マネージャー
pub struct ProgressManager {
    abort_flag: Arc<AtomicBool>,
    equations_done: Arc<AtomicU64>,
    nodes_searched: Arc<AtomicU64>,
    satisfied_found: Arc<AtomicU64>,
    start_time: Instant,
}

impl ProgressManager {
    pub fn new() -> Self {
        Self {
            abort_flag: Arc::new(AtomicBool::new(false)),
            equations_done: Arc::new(AtomicU64::new(0)),
            nodes_searched: Arc::new(AtomicU64::new(0)),
            satisfied_found: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    /// 中断フラグを取得
    pub fn abort_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.abort_flag)
    }

    /// 解探索を中断
    pub fn abort(&self) {
        self.abort_flag.store(true, Ordering::Relaxed);
    }

    /// 中断されたかチェック
    pub fn is_aborted(&self) -> bool {
        self.abort_flag.load(Ordering::Relaxed)
    }

    /// 評価し終えた方程式数を追加
    pub fn add_equations(&self, count: u64) {
        self.equations_done.fetch_add(count, Ordering::Relaxed);
    }

    /// 展開節点数を追加
    pub fn add_nodes(&self, count: u64) {
        self.nodes_searched.fetch_add(count, Ordering::Relaxed);
    }

    /// 充足した方程式数を追加
    pub fn add_satisfied(&self, count: u64) {
        self.satisfied_found.fetch_add(count, Ordering::Relaxed);
    }

    /// 現在の統計を取得
    pub fn get_stats(&self) -> ProgressStats {
        ProgressStats {
            equations_done: self.equations_done.load(Ordering::Relaxed),
            nodes_searched: self.nodes_searched.load(Ordering::Relaxed),
            satisfied_found: self.satisfied_found.load(Ordering::Relaxed),
        }
    }

    /// 経過時間を取得
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 探索速度（節点/秒）を取得
    pub fn nodes_per_second(&self) -> f64 {
        let nodes = self.nodes_searched.load(Ordering::Relaxed) as f64;
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            nodes / elapsed
        } else {
            0.0
        }
    }

    /// リセット
    pub fn reset(&mut self) {
        self.abort_flag.store(false, Ordering::Relaxed);
        self.equations_done.store(0, Ordering::Relaxed);
        self.nodes_searched.store(0, Ordering::Relaxed);
        self.satisfied_found.store(0, Ordering::Relaxed);
        self.start_time = Instant::now();
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_manager_starts_clean() {
        let mgr = ProgressManager::new();
        assert!(!mgr.is_aborted());
        assert_eq!(mgr.get_stats().nodes_searched, 0);
        assert_eq!(mgr.get_stats().satisfied_found, 0);
    }

    #[test]
    fn can_abort() {
        let mgr = ProgressManager::new();
        assert!(!mgr.is_aborted());
        mgr.abort();
        assert!(mgr.is_aborted());
    }

    #[test]
    fn can_track_counters() {
        let mgr = ProgressManager::new();
        mgr.add_nodes(100);
        mgr.add_nodes(50);
        mgr.add_equations(2);
        mgr.add_satisfied(1);

        let stats = mgr.get_stats();
        assert_eq!(stats.nodes_searched, 150);
        assert_eq!(stats.equations_done, 2);
        assert_eq!(stats.satisfied_found, 1);
    }

    #[test]
    fn reset_clears_state() {
        let mut mgr = ProgressManager::new();
        mgr.add_nodes(100);
        mgr.abort();

        mgr.reset();
        assert!(!mgr.is_aborted());
        assert_eq!(mgr.get_stats().nodes_searched, 0);
    }

    #[test]
    fn nodes_per_second_calculation() {
        let mgr = ProgressManager::new();
        mgr.add_nodes(1000);
        std::thread::sleep(Duration::from_millis(100));

        let nps = mgr.nodes_per_second();
        assert!(nps > 0.0);
    }
}
