// アプリケーション層 - ユースケースの実装

pub mod progress;
pub mod solver;
