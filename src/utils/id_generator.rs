//! ID生成ユーティリティモジュール
//!
//! リスナー登録などに使う連番IDの生成器を提供します。

use std::sync::atomic::{AtomicU32, Ordering};

/// シンプルなID生成器
#[derive(Debug)]
pub struct IdGenerator {
    /// 次に生成するID値
    next_id: AtomicU32,
}

impl IdGenerator {
    /// 新しいID生成器を作成
    pub fn new() -> Self {
        Self {
            next_id: AtomicU32::new(1),
        }
    }

    /// 新しいIDを作成
    pub fn next_id(&self) -> u32 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
