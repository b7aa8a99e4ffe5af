//! 時間ユーティリティモジュール
//!
//! ジェスチャー判定で使う時刻はすべて秒単位の `f64` で扱います。
//! 判定ロジック自体は時刻を引数で受け取るため、このモジュールは
//! ブラウザから現在時刻を取得する処理だけを提供します。

use web_sys::window;

/// タイムスタンプ（秒）
pub type Seconds = f64;

/// ミリ秒を秒に変換
pub fn millis_to_secs(millis: f64) -> Seconds {
    millis / 1000.0
}

/// 現在のブラウザ時間を取得（秒）
///
/// `performance.now()` が使えない環境では `Date.now()` にフォールバックする。
pub fn current_time_secs() -> Seconds {
    let millis = window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now);
    millis_to_secs(millis)
}
