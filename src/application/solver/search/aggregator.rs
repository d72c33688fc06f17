// 進捗集約スレッド

use crossbeam_channel::{unbounded, Receiver, Sender};
use num_bigint::BigUint;
use num_traits::Zero;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::application::solver::event::{SolveEvent, SolveProgress, StatDelta};

/// 進捗集約スレッドを起動
pub fn spawn_aggregator_thread(
    total_equations: u64,
    total_combinations: BigUint,
    event_tx: Sender<SolveEvent>,
) -> (Sender<StatDelta>, JoinHandle<()>) {
    let (stx, srx) = unbounded::<StatDelta>();

    let handle = thread::spawn(move || {
        aggregator_thread_main(srx, total_equations, total_combinations, event_tx)
    });

    (stx, handle)
}

/// 集約スレッドのメイン処理
fn aggregator_thread_main(
    srx: Receiver<StatDelta>,
    total_equations: u64,
    total_combinations: BigUint,
    tx: Sender<SolveEvent>,
) {
    let t0 = Instant::now();
    let mut done: u64 = 0;
    let mut satisfied: u64 = 0;
    let mut nodes: u64 = 0;
    let mut leaves: u64 = 0;
    let mut pruned: u64 = 0;
    let mut memo_hit: u64 = 0;
    let mut memo_miss: u64 = 0;
    let mut partial_sum = BigUint::zero();
    let mut last_send = Instant::now();

    loop {
        match srx.recv_timeout(Duration::from_millis(500)) {
            Ok(d) => {
                done += d.equations;
                satisfied += d.satisfied;
                nodes += d.nodes;
                leaves += d.leaves;
                pruned += d.pruned;
                memo_hit += d.memo_hits;
                memo_miss += d.memo_misses;
                partial_sum += BigUint::from(d.sum);
            }
            Err(crossbeam_channel::RecvTimeoutError::Timeout) => {}
            Err(crossbeam_channel::RecvTimeoutError::Disconnected) => {
                // 全ワーカーが終了
                let dt = t0.elapsed().as_secs_f64();
                let rate = if dt > 0.0 { nodes as f64 / dt } else { 0.0 };
                let st = SolveProgress {
                    solving: false,
                    equations_done: done,
                    total_equations,
                    satisfied_count: satisfied,
                    nodes_searched: nodes,
                    leaves_visited: leaves,
                    pruned_count: pruned,
                    memo_hit,
                    memo_miss,
                    total_combinations: total_combinations.clone(),
                    partial_sum: partial_sum.clone(),
                    search_rate: rate,
                };
                let _ = tx.send(SolveEvent::Finished(st));
                break;
            }
        }

        // 定期的な進捗通知
        if last_send.elapsed() >= Duration::from_millis(500) {
            let dt = t0.elapsed().as_secs_f64();
            let rate = if dt > 0.0 { nodes as f64 / dt } else { 0.0 };
            let st = SolveProgress {
                solving: true,
                equations_done: done,
                total_equations,
                satisfied_count: satisfied,
                nodes_searched: nodes,
                leaves_visited: leaves,
                pruned_count: pruned,
                memo_hit,
                memo_miss,
                total_combinations: total_combinations.clone(),
                partial_sum: partial_sum.clone(),
                search_rate: rate,
            };
            let _ = tx.send(SolveEvent::Progress(st));
            last_send = Instant::now();
        }
    }
}
