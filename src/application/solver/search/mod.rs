// アプリケーション層 - 演算子割当て探索の実装

pub mod aggregator;
pub mod dfs;
pub mod engine;
pub mod writer;

pub use dfs::evaluate;
pub use engine::{run_solve, solve_batch};
