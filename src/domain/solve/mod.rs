// 解探索関連のドメインモデル

pub mod config;
pub mod result;

pub use config::{MemoSize, OperatorMode, SolveConfig};
pub use result::{EquationOutcome, SolveSummary};
