// バッチ解法サービス

use anyhow::{anyhow, Context, Result};
use std::path::Path;
use std::sync::Arc;

use crate::application::progress::{ProgressManager, ProgressStats};
use crate::application::solver::event::SolveProgress;
use crate::domain::equation::Equation;
use crate::domain::solve::{SolveConfig, SolveSummary};

/// 解探索ハンドル
pub struct SolveHandle {
    pub progress: Arc<ProgressManager>,
}

impl SolveHandle {
    /// 解探索を中断
    pub fn abort(&self) {
        self.progress.abort();
    }

    /// 中断されたかチェック
    pub fn is_aborted(&self) -> bool {
        self.progress.is_aborted()
    }

    /// 進捗統計を取得
    pub fn get_progress(&self) -> ProgressStats {
        self.progress.get_stats()
    }
}

/// バッチ解法を管理するサービス
pub struct SolverService {
    progress: Arc<ProgressManager>,
}

impl SolverService {
    pub fn new() -> Self {
        Self {
            progress: Arc::new(ProgressManager::new()),
        }
    }

    /// 入力の検証
    fn validate_inputs(
        &self,
        config: &SolveConfig,
        output_path: Option<&Path>,
    ) -> Result<()> {
        // 設定の妥当性チェック
        config.validate().context("解探索設定が不正です")?;

        // 出力パスのディレクトリが存在するかチェック
        if let Some(path) = output_path {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(anyhow!(
                        "出力ディレクトリが存在しません: {}",
                        parent.display()
                    ));
                }
            }
        }

        Ok(())
    }

    /// 解探索を開始（メインユースケース）。
    /// 空のバッチも合計 0 として妥当なので拒否しない。
    pub fn start_solve(
        &mut self,
        _equations: &[Equation],
        config: &SolveConfig,
        output_path: Option<&Path>,
    ) -> Result<SolveHandle> {
        // 1. 事前検証
        self.validate_inputs(config, output_path)
            .context("入力の検証に失敗しました")?;

        // 2. 進捗マネージャーをリセット
        Arc::get_mut(&mut self.progress)
            .ok_or_else(|| anyhow!("進捗マネージャーが使用中です"))?
            .reset();

        // 3. ハンドルを返す
        Ok(SolveHandle {
            progress: Arc::clone(&self.progress),
        })
    }

    /// エンジンへ渡す進捗マネージャーを取得
    pub fn progress(&self) -> Arc<ProgressManager> {
        Arc::clone(&self.progress)
    }

    /// 最終進捗からサマリーを作成
    pub fn create_summary(&self, final_progress: &SolveProgress) -> SolveSummary {
        SolveSummary {
            equations_total: final_progress.total_equations,
            satisfied_count: final_progress.satisfied_count,
            total_sum: final_progress.partial_sum.clone(),
            nodes_searched: final_progress.nodes_searched,
            elapsed_seconds: self.progress.elapsed().as_secs_f64(),
            nodes_per_second: self.progress.nodes_per_second(),
        }
    }
}

impl Default for SolverService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;
    use std::path::PathBuf;

    #[test]
    fn validate_accepts_config_without_output() {
        let service = SolverService::new();
        assert!(service
            .validate_inputs(&SolveConfig::default(), None)
            .is_ok());
    }

    #[test]
    fn validate_rejects_missing_output_dir() {
        let service = SolverService::new();
        let path = PathBuf::from("no_such_dir/results.jsonl");
        assert!(service
            .validate_inputs(&SolveConfig::default(), Some(&path))
            .is_err());
    }

    #[test]
    fn validate_accepts_bare_output_filename() {
        let service = SolverService::new();
        let path = PathBuf::from("results.jsonl");
        assert!(service
            .validate_inputs(&SolveConfig::default(), Some(&path))
            .is_ok());
    }

    #[test]
    fn start_solve_accepts_empty_batch() {
        let mut service = SolverService::new();
        let handle = service
            .start_solve(&[], &SolveConfig::default(), None)
            .unwrap();
        assert!(!handle.is_aborted());
    }

    #[test]
    fn solve_handle_can_abort() {
        let progress = Arc::new(ProgressManager::new());
        let handle = SolveHandle {
            progress: Arc::clone(&progress),
        };

        assert!(!handle.is_aborted());
        handle.abort();
        assert!(handle.is_aborted());
    }

    #[test]
    fn create_summary_includes_stats() {
        let service = SolverService::new();
        service.progress.add_nodes(1000);

        let final_progress = SolveProgress {
            total_equations: 9,
            satisfied_count: 3,
            nodes_searched: 1000,
            partial_sum: BigUint::from(3749u32),
            ..Default::default()
        };
        let summary = service.create_summary(&final_progress);
        assert_eq!(summary.equations_total, 9);
        assert_eq!(summary.satisfied_count, 3);
        assert_eq!(summary.total_sum, BigUint::from(3749u32));
        assert!(summary.nodes_per_second >= 0.0);
    }
}
