// キャッシュ実装

pub mod lru;

pub use lru::{pack_state, StateMemo};
