//! ユーティリティモジュール
//!
//! このモジュールには、入力処理全体で使用される一般的なユーティリティが含まれています。

pub mod id_generator;
pub mod logger;
pub mod math;
pub mod time;

// サブモジュールの再エクスポート
pub use id_generator::*;
pub use logger::*;
pub use math::*;
pub use time::*;
