//! ジェスチャー検出モジュール
//!
//! フレームごとのポインタ入力から、タップ・ダブルタップ・長押し・
//! 上下左右のスワイプを判定する状態機械です。
//!
//! 状態は「待機中」と「押下中」の2つだけで、押下中の情報は `ActivePress`
//! としてまとめて保持します（押下中のみ開始位置・開始時刻・対象が存在する）。

use std::fmt;

use crate::ecs::Entity;
use crate::input::gesture::{GestureEvent, GestureKind, PointerPhase, PointerSample, SwipeDirection};
use crate::input::settings::GestureSettings;
use crate::utils::math::Vector2;

/// 判定結果を受け取るコールバック
pub type GestureObserver = Box<dyn FnMut(&GestureEvent)>;

/// 押下中の情報
#[derive(Debug, Clone, Copy, PartialEq)]
struct ActivePress {
    /// 押下開始位置
    start_position: Vector2,
    /// 押下開始時刻（秒）
    start_time: f64,
    /// 押下開始時にヒットテストで解決された対象
    target: Option<Entity>,
}

/// ジェスチャー検出器
pub struct GestureDetector {
    /// 判定の閾値
    settings: GestureSettings,
    /// 無効中は入力を無視し、状態をそのまま保持する
    enabled: bool,
    /// 押下中の情報（待機中は `None`）
    press: Option<ActivePress>,
    /// 直前の有効なタップの時刻（ダブルタップ待ちがなければ `None`）
    last_tap_time: Option<f64>,
    /// 判定結果の通知先
    observer: Option<GestureObserver>,
}

impl Default for GestureDetector {
    fn default() -> Self {
        Self::new(GestureSettings::default())
    }
}

impl fmt::Debug for GestureDetector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureDetector")
            .field("settings", &self.settings)
            .field("enabled", &self.enabled)
            .field("press", &self.press)
            .field("last_tap_time", &self.last_tap_time)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl GestureDetector {
    /// 設定を指定して検出器を作成
    pub fn new(settings: GestureSettings) -> Self {
        settings.log_diagnostics();
        Self {
            settings,
            enabled: true,
            press: None,
            last_tap_time: None,
            observer: None,
        }
    }

    /// 判定に使用している設定
    pub fn settings(&self) -> &GestureSettings {
        &self.settings
    }

    /// 有効・無効を切り替える
    ///
    /// 無効化しても押下中の状態は破棄しない。再度有効にすると、無効化前の
    /// 開始位置と開始時刻のまま判定を続ける。
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            log::debug!(
                "ジェスチャー検出を{} (押下中: {})",
                if enabled { "有効化" } else { "無効化" },
                self.press.is_some()
            );
        }
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// 押下中かどうか
    pub fn is_pressed(&self) -> bool {
        self.press.is_some()
    }

    /// 判定結果の通知先を設定
    pub fn set_observer<F>(&mut self, observer: F)
    where
        F: FnMut(&GestureEvent) + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    /// 通知先を解除
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// 対象の解決を行わずに入力を処理する
    pub fn update(&mut self, sample: PointerSample, now: f64) -> Option<GestureEvent> {
        self.update_detection(sample, now, |_| None)
    }

    /// 1フレーム分の入力を処理する
    ///
    /// `resolve_target` は押下開始時にだけ呼ばれ、その結果が押下中の対象になる。
    /// 判定が確定した場合は通知先に渡したうえで返す。1回の呼び出しで
    /// 確定するジェスチャーは最大1つ。
    pub fn update_detection<R>(
        &mut self,
        sample: PointerSample,
        now: f64,
        resolve_target: R,
    ) -> Option<GestureEvent>
    where
        R: FnOnce(Vector2) -> Option<Entity>,
    {
        if !self.enabled {
            return None;
        }

        let event = match sample.phase {
            PointerPhase::Began => {
                self.touch_began(sample.position, now, resolve_target);
                None
            }
            PointerPhase::Held => self.touch_held(sample.position, now),
            PointerPhase::Ended => self.touch_ended(sample.position, now),
            PointerPhase::Released => None,
        };

        if let (Some(event), Some(observer)) = (&event, self.observer.as_mut()) {
            observer(event);
        }
        event
    }

    /// 押下開始を処理
    fn touch_began<R>(&mut self, position: Vector2, now: f64, resolve_target: R)
    where
        R: FnOnce(Vector2) -> Option<Entity>,
    {
        if let Some(stale) = self.press {
            // 解放を受け取れなかった押下は新しい押下で置き換える
            log::warn!(
                "解放されていない押下を破棄します (開始位置: {:?}, 開始時刻: {:.3})",
                stale.start_position,
                stale.start_time
            );
        }

        let target = resolve_target(position);
        log::debug!("押下開始 {:?} t={:.3} 対象={:?}", position, now, target);

        self.press = Some(ActivePress {
            start_position: position,
            start_time: now,
            target,
        });
    }

    /// 押下継続を処理（長押しの判定）
    ///
    /// 長押しは押下継続中のフレームでのみ判定するため、フレームレートが低いと
    /// 閾値より遅れて検出される。
    fn touch_held(&mut self, position: Vector2, now: f64) -> Option<GestureEvent> {
        let press = self.press?;
        let duration = now - press.start_time;
        let distance = position.distance(press.start_position);

        if duration >= self.settings.long_press_time && distance < self.settings.dead_zone {
            self.press = None;
            return Some(GestureEvent::new(
                GestureKind::LongPress,
                press.start_position,
                position,
                duration,
                press.target,
            ));
        }

        None
    }

    /// 押下終了を処理（タップ・ダブルタップ・スワイプの判定）
    fn touch_ended(&mut self, position: Vector2, now: f64) -> Option<GestureEvent> {
        // 長押し確定後の解放などは待機中に届くので何もしない
        let press = self.press.take()?;
        let duration = now - press.start_time;
        let delta = position - press.start_position;
        let distance = delta.length();

        let kind = if distance < self.settings.tap_threshold && duration < self.settings.max_tap_time {
            Some(self.classify_tap(now))
        } else if distance >= self.settings.swipe_threshold && duration < self.settings.max_swipe_time {
            Some(GestureKind::Swipe(SwipeDirection::from_delta(delta)))
        } else {
            None
        };

        match kind {
            Some(kind) => Some(GestureEvent::new(
                kind,
                press.start_position,
                position,
                duration,
                press.target,
            )),
            None => {
                log::debug!(
                    "どのジェスチャーにも該当しません (距離: {:.1}, 時間: {:.3})",
                    distance,
                    duration
                );
                None
            }
        }
    }

    /// タップとダブルタップを区別する
    ///
    /// ダブルタップが成立したらタップ待ちを消費するので、3回目の連続タップは
    /// 通常のタップになる。
    fn classify_tap(&mut self, now: f64) -> GestureKind {
        match self.last_tap_time {
            Some(last) if now - last < self.settings.double_tap_interval => {
                self.last_tap_time = None;
                GestureKind::DoubleTap
            }
            _ => {
                self.last_tap_time = Some(now);
                GestureKind::Tap
            }
        }
    }
}
