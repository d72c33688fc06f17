// 行指向の入力パース

use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::domain::equation::Equation;

/// `<target>: <operand> <operand> ...` 形式の1行をパースする
pub fn parse_line(line: &str) -> Result<Equation> {
    let (target_part, operands_part) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("区切り文字 ':' がありません"))?;

    let target: u64 = target_part
        .trim()
        .parse()
        .with_context(|| format!("目標値が数値ではありません: {:?}", target_part.trim()))?;

    let mut operands = Vec::new();
    for token in operands_part.split_whitespace() {
        let operand: u64 = token
            .parse()
            .with_context(|| format!("オペランドが数値ではありません: {:?}", token))?;
        operands.push(operand);
    }

    Equation::new(target, operands)
}

/// 空行を飛ばしつつ全行をパースする。不正な行は行番号付きで即エラー。
pub fn parse_str(input: &str) -> Result<Vec<Equation>> {
    let mut equations = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let equation =
            parse_line(line).with_context(|| format!("{}行目が不正です", index + 1))?;
        equations.push(equation);
    }
    Ok(equations)
}

/// ファイルから方程式の一覧を読み込む
pub fn parse_path(path: &Path) -> Result<Vec<Equation>> {
    let file =
        File::open(path).with_context(|| format!("入力を開けません: {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut equations = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line =
            line.with_context(|| format!("{}行目の読み込みに失敗しました", index + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let equation =
            parse_line(&line).with_context(|| format!("{}行目が不正です", index + 1))?;
        equations.push(equation);
    }
    Ok(equations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_line() {
        let eq = parse_line("3267: 81 40 27").unwrap();
        assert_eq!(eq.target(), 3267);
        assert_eq!(eq.operands(), &[81, 40, 27]);
    }

    #[test]
    fn parses_single_operand_line() {
        let eq = parse_line("5: 5").unwrap();
        assert_eq!(eq.target(), 5);
        assert_eq!(eq.operands(), &[5]);
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(parse_line("190 10 19").is_err());
    }

    #[test]
    fn rejects_non_numeric_target() {
        assert!(parse_line("abc: 10 19").is_err());
        assert!(parse_line("-5: 10 19").is_err());
    }

    #[test]
    fn rejects_non_numeric_operand() {
        assert!(parse_line("190: 10 x").is_err());
        assert!(parse_line("190: 10 -19").is_err());
    }

    #[test]
    fn rejects_line_without_operands() {
        assert!(parse_line("190:").is_err());
        assert!(parse_line("190:   ").is_err());
    }

    #[test]
    fn rejects_zero_operand() {
        assert!(parse_line("190: 0 19").is_err());
    }

    #[test]
    fn rejects_oversized_literal() {
        // u64 に収まらない目標値はパースエラー
        assert!(parse_line("99999999999999999999999: 1 2").is_err());
    }

    #[test]
    fn parse_str_skips_blank_lines_and_numbers_errors() {
        let equations = parse_str("190: 10 19\n\n83: 17 5\n").unwrap();
        assert_eq!(equations.len(), 2);

        let err = parse_str("190: 10 19\nbogus\n").unwrap_err();
        assert!(format!("{err:#}").contains("2行目"));
    }
}
