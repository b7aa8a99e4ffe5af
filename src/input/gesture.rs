//! ジェスチャーの入力・出力データ
//!
//! 入力はフレームごとのポインタ状態 (`PointerSample`)、出力は判定済みの
//! ジェスチャー (`GestureEvent`) です。

use serde::{Deserialize, Serialize};

use crate::ecs::Entity;
use crate::utils::math::Vector2;

/// スワイプの方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    /// 上方向
    Up,
    /// 下方向
    Down,
    /// 左方向
    Left,
    /// 右方向
    Right,
}

impl SwipeDirection {
    /// 移動量の支配的な軸と符号から方向を決定
    ///
    /// 水平成分の絶対値が垂直成分より大きい場合のみ水平方向になる
    /// （同じ大きさなら垂直方向）。
    pub fn from_delta(delta: Vector2) -> Self {
        if delta.x.abs() > delta.y.abs() {
            if delta.x > 0.0 {
                SwipeDirection::Right
            } else {
                SwipeDirection::Left
            }
        } else if delta.y > 0.0 {
            SwipeDirection::Up
        } else {
            SwipeDirection::Down
        }
    }

    /// 方向の単位ベクトル
    pub fn axis(self) -> Vector2 {
        match self {
            SwipeDirection::Up => Vector2::UP,
            SwipeDirection::Down => Vector2::DOWN,
            SwipeDirection::Left => Vector2::LEFT,
            SwipeDirection::Right => Vector2::RIGHT,
        }
    }
}

/// ジェスチャーの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureKind {
    /// タップ（短い押し）
    Tap,
    /// ダブルタップ
    DoubleTap,
    /// 長押し
    LongPress,
    /// スワイプ（上下左右）
    Swipe(SwipeDirection),
}

impl GestureKind {
    /// スワイプの場合はその方向
    pub fn swipe_direction(self) -> Option<SwipeDirection> {
        match self {
            GestureKind::Swipe(direction) => Some(direction),
            _ => None,
        }
    }

    /// ログやJavaScript向けの名前
    pub fn as_str(self) -> &'static str {
        match self {
            GestureKind::Tap => "tap",
            GestureKind::DoubleTap => "double_tap",
            GestureKind::LongPress => "long_press",
            GestureKind::Swipe(SwipeDirection::Left) => "swipe_left",
            GestureKind::Swipe(SwipeDirection::Right) => "swipe_right",
            GestureKind::Swipe(SwipeDirection::Up) => "swipe_up",
            GestureKind::Swipe(SwipeDirection::Down) => "swipe_down",
        }
    }
}

/// 判定済みのジェスチャー
///
/// 判定が確定した瞬間に検出器が1度だけ生成し、同じフレーム内で配信される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    /// ジェスチャーの種類
    pub kind: GestureKind,
    /// 押下開始位置
    pub start_position: Vector2,
    /// 判定時の位置
    pub end_position: Vector2,
    /// `end_position - start_position`
    pub delta: Vector2,
    /// 押下開始から判定までの経過時間（秒）
    pub duration: f64,
    /// 押下開始時にヒットテストで解決された対象
    pub target: Option<Entity>,
}

impl GestureEvent {
    /// 新しいジェスチャーを作成
    pub fn new(
        kind: GestureKind,
        start_position: Vector2,
        end_position: Vector2,
        duration: f64,
        target: Option<Entity>,
    ) -> Self {
        Self {
            kind,
            start_position,
            end_position,
            delta: end_position - start_position,
            duration,
            target,
        }
    }

    /// スワイプ方向の単位ベクトル（スワイプ以外は `None`）
    pub fn swipe_axis_direction(&self) -> Option<Vector2> {
        self.kind.swipe_direction().map(SwipeDirection::axis)
    }
}

/// フレームごとのポインタの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// 押されていない
    Released,
    /// このフレームで押された
    Began,
    /// 押され続けている
    Held,
    /// このフレームで離された
    Ended,
}

/// 1フレーム分のポインタ入力
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub phase: PointerPhase,
    pub position: Vector2,
}

impl PointerSample {
    pub fn new(phase: PointerPhase, position: Vector2) -> Self {
        Self { phase, position }
    }

    pub fn released(position: Vector2) -> Self {
        Self::new(PointerPhase::Released, position)
    }

    pub fn began(position: Vector2) -> Self {
        Self::new(PointerPhase::Began, position)
    }

    pub fn held(position: Vector2) -> Self {
        Self::new(PointerPhase::Held, position)
    }

    pub fn ended(position: Vector2) -> Self {
        Self::new(PointerPhase::Ended, position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_direction_from_delta() {
        assert_eq!(SwipeDirection::from_delta(Vector2::new(100.0, 0.0)), SwipeDirection::Right);
        assert_eq!(SwipeDirection::from_delta(Vector2::new(-80.0, 30.0)), SwipeDirection::Left);
        assert_eq!(SwipeDirection::from_delta(Vector2::new(0.0, -100.0)), SwipeDirection::Down);
        assert_eq!(SwipeDirection::from_delta(Vector2::new(10.0, 60.0)), SwipeDirection::Up);
        // 同じ大きさなら垂直方向が優先
        assert_eq!(SwipeDirection::from_delta(Vector2::new(50.0, 50.0)), SwipeDirection::Up);
    }

    #[test]
    fn test_event_delta_and_axis() {
        let event = GestureEvent::new(
            GestureKind::Swipe(SwipeDirection::Left),
            Vector2::new(100.0, 10.0),
            Vector2::new(20.0, 0.0),
            0.2,
            None,
        );
        assert_eq!(event.delta, Vector2::new(-80.0, -10.0));
        assert_eq!(event.swipe_axis_direction(), Some(Vector2::LEFT));

        let tap = GestureEvent::new(GestureKind::Tap, Vector2::ZERO, Vector2::ZERO, 0.1, None);
        assert_eq!(tap.swipe_axis_direction(), None);
    }

    #[test]
    fn test_event_json_shape() {
        let event = GestureEvent::new(
            GestureKind::Swipe(SwipeDirection::Up),
            Vector2::ZERO,
            Vector2::new(0.0, 70.0),
            0.25,
            Some(Entity::from_raw(4, 0)),
        );
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"]["Swipe"], "Up");
        assert_eq!(json["target"]["id"], 4);
        assert_eq!(json["delta"]["y"], 70.0);
    }
}
