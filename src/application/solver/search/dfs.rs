// DFS探索ロジック

use std::sync::atomic::{AtomicBool, Ordering};

use crate::application::solver::event::StatDelta;
use crate::domain::equation::{Equation, OperatorSet};
use crate::infrastructure::cache::lru::{pack_state, StateMemo};

/// evaluate() が使う既定のメモ上限
const EVAL_MEMO_STATES: usize = 100_000;

/// 演算子割当ての深さ優先探索。
/// 状態は `(depth, acc)`。初期状態は `(1, operands[0])` で、
/// depth 番目のオペランドを各演算子で結合しながら右へ進む。
/// 全演算子が acc について単調非減少なので、終端前に acc が target を
/// 超えた枝はどう延ばしても target に戻れず、その場で刈れる。
#[allow(clippy::too_many_arguments)]
pub fn dfs_operators(
    equation: &Equation,
    set: &OperatorSet,
    depth: usize,
    acc: u64,
    memo: &mut StateMemo,
    stats: &mut StatDelta,
    abort: &AtomicBool,
) -> bool {
    if abort.load(Ordering::Relaxed) {
        return false;
    }
    stats.nodes += 1;

    let operands = equation.operands();

    // 葉処理
    if depth == operands.len() {
        stats.leaves += 1;
        return acc == equation.target();
    }

    // 超過枝刈り
    if acc > equation.target() {
        stats.pruned += 1;
        return false;
    }

    // 既知の充足不能状態か
    let key = pack_state(depth, acc);
    if let Some(k) = key {
        if memo.contains(k) {
            stats.memo_hits += 1;
            return false;
        }
        stats.memo_misses += 1;
    }

    let operand = operands[depth];
    for &op in set.operators() {
        match op.apply(acc, operand) {
            Some(next) => {
                if dfs_operators(equation, set, depth + 1, next, memo, stats, abort) {
                    return true;
                }
            }
            None => {
                // u64 を超えた時点で target 超過が確定
                stats.pruned += 1;
            }
        }
    }

    // 中断で打ち切られた部分探索は記録しない
    if abort.load(Ordering::Relaxed) {
        return false;
    }
    if let Some(k) = key {
        memo.insert(k);
    }
    false
}

/// 1本の方程式を評価し、統計の増分を返す
pub fn evaluate_with_stats(
    equation: &Equation,
    set: &OperatorSet,
    memo_limit: usize,
    abort: &AtomicBool,
) -> (bool, StatDelta) {
    let mut memo = StateMemo::new(memo_limit);
    let mut stats = StatDelta::default();
    let satisfiable = dfs_operators(
        equation,
        set,
        1,
        equation.operands()[0],
        &mut memo,
        &mut stats,
        abort,
    );
    (satisfiable, stats)
}

/// target を再現する演算子割当てが存在するか判定する純粋関数
pub fn evaluate(equation: &Equation, set: &OperatorSet) -> bool {
    let abort = AtomicBool::new(false);
    let (satisfiable, _) = evaluate_with_stats(equation, set, EVAL_MEMO_STATES, &abort);
    satisfiable
}
