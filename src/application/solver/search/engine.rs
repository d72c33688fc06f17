// 探索エンジン（バッチ解法）

use anyhow::{anyhow, Result};
use crossbeam_channel::Sender;
use num_bigint::BigUint;
use num_traits::Zero;
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use crate::application::progress::ProgressManager;
use crate::application::solver::event::SolveEvent;
use crate::application::solver::search::aggregator::spawn_aggregator_thread;
use crate::application::solver::search::dfs::{evaluate, evaluate_with_stats};
use crate::application::solver::search::writer::spawn_writer_thread;
use crate::domain::equation::{Equation, OperatorSet};
use crate::domain::solve::{EquationOutcome, SolveConfig};
use crate::vlog;

/// 充足した方程式の target の合計（純粋な並列フォールド）。
/// 空のバッチは 0。方程式間に共有状態はなく、縮約は結合的な加算のみ。
pub fn solve_batch(equations: &[Equation], set: &OperatorSet) -> BigUint {
    equations
        .par_iter()
        .map(|equation| {
            if evaluate(equation, set) {
                BigUint::from(equation.target())
            } else {
                BigUint::zero()
            }
        })
        .reduce(BigUint::zero, |a, b| a + b)
}

/// イベント付きのバッチ解法。方程式ごとに並列で評価し、
/// 統計を集約スレッドへ、充足した方程式をライタースレッドへ流す。
pub fn run_solve(
    equations: Vec<Equation>,
    config: &SolveConfig,
    outfile: Option<PathBuf>,
    tx: Sender<SolveEvent>,
    progress: Arc<ProgressManager>,
) -> Result<BigUint> {
    let set = config.mode.operator_set();
    let memo_limit = config.memo_limit.get();
    let abort = progress.abort_flag();

    // 枝刈りなしの場合の厳密な総分岐数
    let mut total_branches = BigUint::zero();
    for equation in &equations {
        total_branches += equation.combination_count(set.len());
    }
    let _ = tx.send(SolveEvent::Log(format!(
        "方程式={} / 演算子={} / 厳密な総分岐数={} / スレッド={}",
        equations.len(),
        set.operators()
            .iter()
            .map(|op| op.name())
            .collect::<Vec<_>>()
            .join("+"),
        total_branches,
        rayon::current_num_threads().max(1),
    )));

    // ライタースレッドを起動（出力先が指定された場合のみ）
    let (wtx, writer_handle) = match outfile {
        Some(path) => {
            let (wtx, handle) = spawn_writer_thread(path, tx.clone())?;
            (Some(wtx), Some(handle))
        }
        None => (None, None),
    };

    // 集約スレッドを起動
    let (stx, agg_handle) =
        spawn_aggregator_thread(equations.len() as u64, total_branches, tx.clone());

    // 並列探索
    let sum = equations
        .par_iter()
        .map(|equation| {
            if abort.load(Ordering::Relaxed) {
                return BigUint::zero();
            }
            let (satisfiable, mut stats) =
                evaluate_with_stats(equation, &set, memo_limit, &abort);
            stats.equations = 1;
            progress.add_equations(1);
            progress.add_nodes(stats.nodes);

            let contribution = if satisfiable && !abort.load(Ordering::Relaxed) {
                stats.satisfied = 1;
                stats.sum = equation.target();
                progress.add_satisfied(1);
                vlog!("充足: {}: {:?}", equation.target(), equation.operands());
                if let Some(wtx) = &wtx {
                    let _ = wtx.send(vec![EquationOutcome {
                        target: equation.target(),
                        operands: equation.operands().to_vec(),
                        satisfiable: true,
                    }]);
                }
                BigUint::from(equation.target())
            } else {
                BigUint::zero()
            };
            let _ = stx.send(stats);
            contribution
        })
        .reduce(BigUint::zero, |a, b| a + b);

    drop(stx);
    drop(wtx);
    if let Some(handle) = writer_handle {
        let writer_result = handle.join().map_err(|_| anyhow!("writer join error"))?;
        writer_result?;
    }
    agg_handle.join().map_err(|_| anyhow!("agg join error"))?;

    if abort.load(Ordering::Relaxed) {
        return Err(anyhow!("中断されました（合計は未確定）"));
    }

    Ok(sum)
}
