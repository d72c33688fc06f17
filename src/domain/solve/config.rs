// 解探索設定の Value Objects

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::equation::OperatorSet;

/// 使用する演算子セットの選択
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum OperatorMode {
    /// `{Add, Mul}`
    AddMul,
    /// `{Add, Mul, Concat}`
    AddMulConcat,
}

impl OperatorMode {
    pub fn operator_set(self) -> OperatorSet {
        match self {
            OperatorMode::AddMul => OperatorSet::add_mul(),
            OperatorMode::AddMulConcat => OperatorSet::add_mul_concat(),
        }
    }
}

/// 状態メモ上限を表す Value Object（千単位）
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MemoSize(usize);

impl MemoSize {
    pub fn new_in_thousands(k: u32) -> Result<Self> {
        if k == 0 {
            return Err(anyhow!("メモ上限は1以上"));
        }
        if k > 10000 {
            return Err(anyhow!("メモ上限が大きすぎます"));
        }
        Ok(Self((k as usize) * 1000))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

/// 解探索設定の Value Object
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SolveConfig {
    pub mode: OperatorMode,
    pub memo_limit: MemoSize,
}

impl SolveConfig {
    pub fn validate(&self) -> Result<()> {
        // Value Objectsで既に検証済み
        Ok(())
    }
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            mode: OperatorMode::AddMul,
            memo_limit: MemoSize::new_in_thousands(300).unwrap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::equation::Operator;

    #[test]
    fn mode_maps_to_canonical_sets() {
        assert_eq!(
            OperatorMode::AddMul.operator_set().operators(),
            &[Operator::Add, Operator::Mul]
        );
        assert_eq!(
            OperatorMode::AddMulConcat.operator_set().operators(),
            &[Operator::Add, Operator::Mul, Operator::Concat]
        );
    }

    #[test]
    fn memo_size_rejects_zero() {
        assert!(MemoSize::new_in_thousands(0).is_err());
    }

    #[test]
    fn memo_size_rejects_too_large() {
        assert!(MemoSize::new_in_thousands(10001).is_err());
    }

    #[test]
    fn memo_size_accepts_valid() {
        let memo = MemoSize::new_in_thousands(300).unwrap();
        assert_eq!(memo.get(), 300000);
    }

    #[test]
    fn default_config_is_valid() {
        let config = SolveConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mode, OperatorMode::AddMul);
    }
}
