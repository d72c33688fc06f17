// 方程式の Value Object

use anyhow::{anyhow, Result};
use num_bigint::BigUint;
use num_traits::One;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_OPERANDS;

/// 目標値とオペランド列。生成後は不変で、評価は常に左から右へ行う。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

impl Equation {
    pub fn new(target: u64, operands: Vec<u64>) -> Result<Self> {
        if operands.is_empty() {
            return Err(anyhow!("オペランドは1個以上必要です"));
        }
        if operands.len() > MAX_OPERANDS {
            return Err(anyhow!(
                "オペランド数が上限を超えています: {} > {}",
                operands.len(),
                MAX_OPERANDS
            ));
        }
        // 0 を含むと乗算が第1引数について単調でなくなり、
        // 超過枝刈りが成立しないため、オペランドは 1 以上に制限する
        if operands.contains(&0) {
            return Err(anyhow!("オペランドは1以上の整数が必要です"));
        }
        Ok(Self { target, operands })
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    pub fn operands(&self) -> &[u64] {
        &self.operands
    }

    /// 演算子を割り当てる隙間の数（オペランド数 - 1）
    pub fn gap_count(&self) -> usize {
        self.operands.len() - 1
    }

    /// 演算子セットの大きさに対する割当ての総数 `set_len ^ gap_count`
    pub fn combination_count(&self, set_len: usize) -> BigUint {
        let mut total = BigUint::one();
        for _ in 0..self.gap_count() {
            total *= BigUint::from(set_len);
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_operands() {
        assert!(Equation::new(10, Vec::new()).is_err());
    }

    #[test]
    fn rejects_zero_operand() {
        assert!(Equation::new(10, vec![10, 0]).is_err());
        assert!(Equation::new(0, vec![0]).is_err());
        // 目標値の 0 は許容する
        assert!(Equation::new(0, vec![1, 2]).is_ok());
    }

    #[test]
    fn rejects_too_many_operands() {
        assert!(Equation::new(0, vec![1; MAX_OPERANDS]).is_ok());
        assert!(Equation::new(0, vec![1; MAX_OPERANDS + 1]).is_err());
    }

    #[test]
    fn accessors() {
        let eq = Equation::new(190, vec![10, 19]).unwrap();
        assert_eq!(eq.target(), 190);
        assert_eq!(eq.operands(), &[10, 19]);
        assert_eq!(eq.gap_count(), 1);
    }

    #[test]
    fn combination_count_is_exponential_in_gaps() {
        let eq = Equation::new(7290, vec![6, 8, 6, 15]).unwrap();
        assert_eq!(eq.combination_count(3), BigUint::from(27u32));
        assert_eq!(eq.combination_count(2), BigUint::from(8u32));

        let single = Equation::new(5, vec![5]).unwrap();
        assert_eq!(single.combination_count(3), BigUint::from(1u32));
    }
}
