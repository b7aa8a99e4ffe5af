//! ポインタ状態の追跡
//!
//! ブラウザなど、押下・移動・解放をイベントとしてしか受け取れないホスト向けに、
//! イベント列をフレームごとの `PointerSample` に変換します。

use std::collections::VecDeque;

use crate::input::gesture::{PointerPhase, PointerSample};
use crate::utils::math::Vector2;

/// 報告待ちにできる押下・解放の最大数
const MAX_PENDING_EDGES: usize = 8;

/// 単一ポインタの押下状態を追跡する構造体
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    /// 現在押されているか
    down: bool,
    /// まだ報告していない押下・解放（発生順、`Began` と `Ended` が交互に並ぶ）
    pending: VecDeque<PointerSample>,
    /// 最新の位置
    position: Vector2,
}

impl PointerTracker {
    /// 新しいトラッカーを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// ポインタが押された
    pub fn press(&mut self, position: Vector2) {
        if self.down {
            return;
        }
        self.down = true;
        self.position = position;
        self.push_edge(PointerSample::began(position));
    }

    /// ポインタが移動した
    pub fn move_to(&mut self, position: Vector2) {
        self.position = position;
    }

    /// ポインタが離された
    pub fn release(&mut self, position: Vector2) {
        if !self.down {
            return;
        }
        self.down = false;
        self.position = position;
        self.push_edge(PointerSample::ended(position));
    }

    /// 現在押されているか
    pub fn is_down(&self) -> bool {
        self.down
    }

    /// 最新の位置
    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// このフレームのサンプルを取り出す（フレームごとに1回呼ぶ）
    ///
    /// 前回のサンプル以降の押下・解放は発生順に1フレームに1つずつ報告する。
    /// 報告待ちがなくなった時点で、報告する状態は `is_down` と一致する。
    pub fn sample(&mut self) -> PointerSample {
        if let Some(edge) = self.pending.pop_front() {
            return edge;
        }

        if self.down {
            PointerSample::held(self.position)
        } else {
            PointerSample::released(self.position)
        }
    }

    fn push_edge(&mut self, edge: PointerSample) {
        if self.pending.len() >= MAX_PENDING_EDGES {
            // 最も古い押下と解放の組を捨てる（交互の並びは保たれる）
            self.pending.drain(..2);
            log::debug!("報告待ちの押下が多すぎるため古いものを破棄しました");
        }
        self.pending.push_back(edge);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phases(tracker: &mut PointerTracker, count: usize) -> Vec<PointerPhase> {
        (0..count).map(|_| tracker.sample().phase).collect()
    }

    #[test]
    fn test_press_hold_release_sequence() {
        let mut tracker = PointerTracker::new();
        assert_eq!(tracker.sample().phase, PointerPhase::Released);

        tracker.press(Vector2::new(1.0, 2.0));
        assert_eq!(tracker.sample(), PointerSample::began(Vector2::new(1.0, 2.0)));

        tracker.move_to(Vector2::new(3.0, 2.0));
        assert_eq!(tracker.sample(), PointerSample::held(Vector2::new(3.0, 2.0)));

        tracker.release(Vector2::new(4.0, 2.0));
        assert_eq!(tracker.sample(), PointerSample::ended(Vector2::new(4.0, 2.0)));
        assert_eq!(tracker.sample().phase, PointerPhase::Released);
    }

    #[test]
    fn test_press_and_release_within_one_frame() {
        let mut tracker = PointerTracker::new();
        tracker.press(Vector2::new(10.0, 10.0));
        tracker.release(Vector2::new(11.0, 10.0));
        assert!(!tracker.is_down());

        // 押下と解放を別々のフレームで報告する
        assert_eq!(tracker.sample(), PointerSample::began(Vector2::new(10.0, 10.0)));
        assert_eq!(tracker.sample(), PointerSample::ended(Vector2::new(11.0, 10.0)));
        assert_eq!(tracker.sample().phase, PointerPhase::Released);
    }

    #[test]
    fn test_release_and_repress_within_one_frame() {
        let mut tracker = PointerTracker::new();
        tracker.press(Vector2::ZERO);
        tracker.sample();

        tracker.release(Vector2::new(5.0, 0.0));
        tracker.press(Vector2::new(30.0, 30.0));

        assert_eq!(tracker.sample(), PointerSample::ended(Vector2::new(5.0, 0.0)));
        assert_eq!(tracker.sample(), PointerSample::began(Vector2::new(30.0, 30.0)));
        assert_eq!(tracker.sample().phase, PointerPhase::Held);
    }

    #[test]
    fn test_two_taps_between_frames_end_released() {
        let mut tracker = PointerTracker::new();
        tracker.press(Vector2::ZERO);
        tracker.sample();

        tracker.release(Vector2::ZERO);
        tracker.press(Vector2::new(2.0, 0.0));
        tracker.release(Vector2::new(2.0, 0.0));

        assert_eq!(
            phases(&mut tracker, 5),
            vec![
                PointerPhase::Ended,
                PointerPhase::Began,
                PointerPhase::Ended,
                PointerPhase::Released,
                PointerPhase::Released,
            ]
        );
        assert!(!tracker.is_down());
    }

    #[test]
    fn test_press_release_press_from_idle_ends_held() {
        let mut tracker = PointerTracker::new();
        tracker.press(Vector2::new(0.0, 0.0));
        tracker.release(Vector2::new(1.0, 0.0));
        tracker.press(Vector2::new(2.0, 0.0));

        assert_eq!(tracker.sample(), PointerSample::began(Vector2::new(0.0, 0.0)));
        assert_eq!(tracker.sample(), PointerSample::ended(Vector2::new(1.0, 0.0)));
        assert_eq!(tracker.sample(), PointerSample::began(Vector2::new(2.0, 0.0)));
        assert_eq!(tracker.sample().phase, PointerPhase::Held);

        // 後の解放も失われない
        tracker.release(Vector2::new(3.0, 0.0));
        assert_eq!(tracker.sample(), PointerSample::ended(Vector2::new(3.0, 0.0)));
        assert_eq!(tracker.sample().phase, PointerPhase::Released);
    }

    #[test]
    fn test_phase_matches_pointer_after_bursts() {
        // true: press, false: release
        let bursts: [&[bool]; 6] = [
            &[true, false, true, false],
            &[true, false, true],
            &[false, true, false, true, false, true],
            &[true, true, false, false],
            &[true; 30],
            &[true, false, true, false, true, false, true, false, true, false, true, false, true],
        ];

        for burst in bursts {
            let mut tracker = PointerTracker::new();
            tracker.press(Vector2::ZERO);
            tracker.sample();

            for (i, &pressed) in burst.iter().enumerate() {
                let position = Vector2::new(i as f32, 0.0);
                if pressed {
                    tracker.press(position);
                } else {
                    tracker.release(position);
                }
            }

            // 報告待ちの押下・解放は交互に並び、最初は直前の状態の逆になる
            let mut reported_down = true;
            for _ in 0..MAX_PENDING_EDGES {
                match tracker.sample().phase {
                    PointerPhase::Began => {
                        assert!(!reported_down);
                        reported_down = true;
                    }
                    PointerPhase::Ended => {
                        assert!(reported_down);
                        reported_down = false;
                    }
                    PointerPhase::Held | PointerPhase::Released => break,
                }
            }

            assert_eq!(reported_down, tracker.is_down(), "{:?}", burst);
            let expected = if tracker.is_down() { PointerPhase::Held } else { PointerPhase::Released };
            assert_eq!(tracker.sample().phase, expected, "{:?}", burst);
        }
    }

    #[test]
    fn test_pending_edges_are_bounded() {
        let mut tracker = PointerTracker::new();
        for i in 0..20 {
            let position = Vector2::new(i as f32, 0.0);
            tracker.press(position);
            tracker.release(position);
        }

        let drained: Vec<PointerSample> = (0..MAX_PENDING_EDGES).map(|_| tracker.sample()).collect();
        assert_eq!(drained[0], PointerSample::began(Vector2::new(16.0, 0.0)));
        assert_eq!(drained[MAX_PENDING_EDGES - 1], PointerSample::ended(Vector2::new(19.0, 0.0)));
        assert_eq!(tracker.sample().phase, PointerPhase::Released);
    }

    #[test]
    fn test_duplicate_events_are_ignored() {
        let mut tracker = PointerTracker::new();
        tracker.release(Vector2::ZERO);
        assert_eq!(tracker.sample().phase, PointerPhase::Released);

        tracker.press(Vector2::ZERO);
        tracker.press(Vector2::new(50.0, 50.0));
        assert_eq!(tracker.sample(), PointerSample::began(Vector2::ZERO));
        assert_eq!(tracker.position(), Vector2::ZERO);
    }
}
