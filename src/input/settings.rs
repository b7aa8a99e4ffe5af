//! ジェスチャー判定の閾値設定
//!
//! 距離は入力デバイスのピクセル、時間は秒で表します。

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 設定の読み書きで発生するエラー
#[derive(Debug, Error)]
pub enum SettingsError {
    /// JSONの解析に失敗
    #[error("ジェスチャー設定の解析に失敗しました: {0}")]
    Parse(#[source] serde_json::Error),
    /// JSONへの変換に失敗
    #[error("ジェスチャー設定の書き出しに失敗しました: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// ジェスチャー判定の閾値
///
/// 生成後は変更しない前提で扱う。値の妥当性は検証しない
/// （負の値や `tap_threshold > swipe_threshold` でもパニックはしないが、
/// 判定結果は意味を持たない）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// スワイプと判定する最小移動距離
    pub swipe_threshold: f32,
    /// スワイプと判定する最大時間（この値未満）
    pub max_swipe_time: f64,
    /// タップと判定する最大移動距離（この値未満）
    pub tap_threshold: f32,
    /// タップと判定する最大時間（この値未満）
    pub max_tap_time: f64,
    /// ダブルタップとみなす2回のタップの最大間隔
    pub double_tap_interval: f64,
    /// 長押しと判定する最小保持時間
    pub long_press_time: f64,
    /// 長押し中に許容する移動量（この値未満）
    pub dead_zone: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            swipe_threshold: 50.0,
            max_swipe_time: 0.5,
            tap_threshold: 20.0,
            max_tap_time: 0.3,
            double_tap_interval: 0.3,
            long_press_time: 0.5,
            dead_zone: 10.0,
        }
    }
}

impl GestureSettings {
    /// デフォルト値で作成
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON文字列から読み込む（省略されたフィールドはデフォルト値）
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        serde_json::from_str(json).map_err(SettingsError::Parse)
    }

    /// JSON文字列に変換
    pub fn to_json(&self) -> Result<String, SettingsError> {
        serde_json::to_string(self).map_err(SettingsError::Serialize)
    }

    pub fn with_swipe(mut self, threshold: f32, max_time: f64) -> Self {
        self.swipe_threshold = threshold;
        self.max_swipe_time = max_time;
        self
    }

    pub fn with_tap(mut self, threshold: f32, max_time: f64) -> Self {
        self.tap_threshold = threshold;
        self.max_tap_time = max_time;
        self
    }

    pub fn with_double_tap_interval(mut self, interval: f64) -> Self {
        self.double_tap_interval = interval;
        self
    }

    pub fn with_long_press(mut self, time: f64, dead_zone: f32) -> Self {
        self.long_press_time = time;
        self.dead_zone = dead_zone;
        self
    }

    /// 疑わしい設定値の一覧
    ///
    /// 設定は拒否しない。呼び出し側が警告として表示するためのもの。
    pub fn diagnostics(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let distances = [
            ("swipe_threshold", self.swipe_threshold),
            ("tap_threshold", self.tap_threshold),
            ("dead_zone", self.dead_zone),
        ];
        for (name, value) in distances {
            if value < 0.0 || value.is_nan() {
                warnings.push(format!("{} が負または NaN です: {}", name, value));
            }
        }

        let durations = [
            ("max_swipe_time", self.max_swipe_time),
            ("max_tap_time", self.max_tap_time),
            ("double_tap_interval", self.double_tap_interval),
            ("long_press_time", self.long_press_time),
        ];
        for (name, value) in durations {
            if value < 0.0 || value.is_nan() {
                warnings.push(format!("{} が負または NaN です: {}", name, value));
            }
        }

        if self.tap_threshold > self.swipe_threshold {
            warnings.push(format!(
                "tap_threshold ({}) が swipe_threshold ({}) より大きいため、重なる範囲ではタップの判定が優先されます",
                self.tap_threshold, self.swipe_threshold
            ));
        }

        warnings
    }

    /// 疑わしい設定値を警告ログに出力
    pub fn log_diagnostics(&self) {
        for warning in self.diagnostics() {
            log::warn!("⚠️ {}", warning);
        }
    }
}
