// 定数とユーティリティ型定義

use nohash_hasher::BuildNoHashHasher;

/// 1本の方程式が持てるオペランド数の上限
pub const MAX_OPERANDS: usize = 100;

// u64 キー専用のノーハッシュ（高速化）
pub type U64Set = std::collections::HashSet<u64, BuildNoHashHasher<u64>>;
