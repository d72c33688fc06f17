// 演算子チェーン総当たり - ライブラリモジュール

pub mod constants;
pub mod domain;         // ドメイン層
pub mod application;    // アプリケーション層
pub mod infrastructure; // インフラ層
pub mod logging;

// 外部クレートの再エクスポート
pub use anyhow::{anyhow, Context, Result};
pub use num_bigint::BigUint;
pub use num_traits::{One, ToPrimitive, Zero};

// 主要な型を再エクスポート
pub use application::solver::search::{evaluate, run_solve, solve_batch};
pub use domain::equation::{Equation, Operator, OperatorSet};
pub use domain::solve::{OperatorMode, SolveConfig};
