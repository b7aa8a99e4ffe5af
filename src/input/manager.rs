//! 入力マネージャーモジュール
//!
//! ジェスチャー検出器を1つ所有し、判定結果を購読者と配信先エンティティへ
//! 届けます。グローバルな状態は持たず、ホスト側で作成して所有します。
//!
//! 配信順序:
//! 1. すべてのジェスチャーを受け取るチャンネル
//! 2. 種類ごとのチャンネル（タップ・ダブルタップ・長押し・スワイプ）
//! 3. 押下開始時に解決された対象の能力（`TapCapability` など）
//! 4. 対象の `GestureReceiverCapability`（種類を問わない）

use std::fmt;

use crate::ecs::{Entity, World};
use crate::input::capability::{
    GestureReceiverCapability, LongPressCapability, SwipeCapability, TapCapability,
};
use crate::input::channel::{invoke_isolated, ChannelKind, GestureChannel, ListenerId};
use crate::input::detector::GestureDetector;
use crate::input::gesture::{GestureEvent, GestureKind, PointerSample};
use crate::input::hit_test::LayeredHitTester;
use crate::input::settings::GestureSettings;

/// 購読の登録情報（解除に使用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription {
    channel: ChannelKind,
    id: ListenerId,
}

impl Subscription {
    /// 登録先のチャンネル
    pub fn channel(&self) -> ChannelKind {
        self.channel
    }

    pub fn id(&self) -> ListenerId {
        self.id
    }
}

/// 入力マネージャー
pub struct InputManager {
    detector: GestureDetector,
    any: GestureChannel,
    tap: GestureChannel,
    double_tap: GestureChannel,
    long_press: GestureChannel,
    swipe: GestureChannel,
    hit_tester: LayeredHitTester,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new(GestureSettings::default())
    }
}

impl fmt::Debug for InputManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputManager")
            .field("detector", &self.detector)
            .field("any", &self.any)
            .field("tap", &self.tap)
            .field("double_tap", &self.double_tap)
            .field("long_press", &self.long_press)
            .field("swipe", &self.swipe)
            .field("hit_layers", &self.hit_tester.layer_count())
            .finish()
    }
}

impl InputManager {
    /// 設定を指定してマネージャーを作成
    pub fn new(settings: GestureSettings) -> Self {
        log::info!("🖐️ 入力マネージャーを初期化しました");
        Self {
            detector: GestureDetector::new(settings),
            any: GestureChannel::new(ChannelKind::Any),
            tap: GestureChannel::new(ChannelKind::Tap),
            double_tap: GestureChannel::new(ChannelKind::DoubleTap),
            long_press: GestureChannel::new(ChannelKind::LongPress),
            swipe: GestureChannel::new(ChannelKind::Swipe),
            hit_tester: LayeredHitTester::standard(),
        }
    }

    /// ヒットテスターを差し替える
    pub fn with_hit_tester(mut self, hit_tester: LayeredHitTester) -> Self {
        self.hit_tester = hit_tester;
        self
    }

    pub fn hit_tester_mut(&mut self) -> &mut LayeredHitTester {
        &mut self.hit_tester
    }

    pub fn settings(&self) -> &GestureSettings {
        self.detector.settings()
    }

    /// 入力の受け付けを再開
    pub fn enable(&mut self) {
        self.detector.set_enabled(true);
        log::info!("入力を有効化しました");
    }

    /// 入力の受け付けを停止（押下中の状態は保持される）
    pub fn disable(&mut self) {
        self.detector.set_enabled(false);
        log::info!("入力を無効化しました");
    }

    pub fn is_enabled(&self) -> bool {
        self.detector.is_enabled()
    }

    /// 1フレーム分の入力を処理し、確定したジェスチャーを配信して返す
    pub fn update(
        &mut self,
        world: &mut World,
        sample: PointerSample,
        now: f64,
    ) -> Option<GestureEvent> {
        let event = {
            let hit_tester = &self.hit_tester;
            let scene: &World = world;
            self.detector
                .update_detection(sample, now, |position| hit_tester.resolve(scene, position))
        }?;

        log::debug!("ジェスチャー確定: {} 対象={:?}", event.kind.as_str(), event.target);
        self.dispatch(world, &event);
        Some(event)
    }

    /// すべてのジェスチャーを購読
    pub fn on_gesture<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&GestureEvent) + 'static,
    {
        self.subscribe(ChannelKind::Any, listener)
    }

    pub fn on_tap<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&GestureEvent) + 'static,
    {
        self.subscribe(ChannelKind::Tap, listener)
    }

    pub fn on_double_tap<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&GestureEvent) + 'static,
    {
        self.subscribe(ChannelKind::DoubleTap, listener)
    }

    pub fn on_long_press<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&GestureEvent) + 'static,
    {
        self.subscribe(ChannelKind::LongPress, listener)
    }

    /// 上下左右すべてのスワイプを購読（方向は `event.kind` で判別する）
    pub fn on_swipe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&GestureEvent) + 'static,
    {
        self.subscribe(ChannelKind::Swipe, listener)
    }

    /// 指定したチャンネルを購読
    pub fn subscribe<F>(&mut self, channel: ChannelKind, listener: F) -> Subscription
    where
        F: FnMut(&GestureEvent) + 'static,
    {
        let id = self.channel_mut(channel).subscribe(listener);
        Subscription { channel, id }
    }

    /// 購読を解除（すでに解除済みなら `false`）
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.channel_mut(subscription.channel).unsubscribe(subscription.id)
    }

    pub fn listener_count(&self, channel: ChannelKind) -> usize {
        self.channel(channel).len()
    }

    fn channel(&self, kind: ChannelKind) -> &GestureChannel {
        match kind {
            ChannelKind::Any => &self.any,
            ChannelKind::Tap => &self.tap,
            ChannelKind::DoubleTap => &self.double_tap,
            ChannelKind::LongPress => &self.long_press,
            ChannelKind::Swipe => &self.swipe,
        }
    }

    fn channel_mut(&mut self, kind: ChannelKind) -> &mut GestureChannel {
        match kind {
            ChannelKind::Any => &mut self.any,
            ChannelKind::Tap => &mut self.tap,
            ChannelKind::DoubleTap => &mut self.double_tap,
            ChannelKind::LongPress => &mut self.long_press,
            ChannelKind::Swipe => &mut self.swipe,
        }
    }

    fn dispatch(&mut self, world: &mut World, event: &GestureEvent) {
        self.any.emit(event);
        self.channel_mut(ChannelKind::for_gesture(event.kind)).emit(event);

        let Some(target) = event.target else {
            return;
        };
        if !world.is_alive(target) {
            log::debug!("対象 {} はすでに破棄されています", target);
            return;
        }
        dispatch_to_target(world, target, event);
    }
}

/// 対象エンティティの能力を呼び出す（持っていない能力は無視）
fn dispatch_to_target(world: &mut World, target: Entity, event: &GestureEvent) {
    match event.kind {
        GestureKind::Tap => {
            if let Some(capability) = world.get_component_mut::<TapCapability>(target) {
                invoke_isolated("タップ能力", || capability.handler_mut().on_tap());
            }
        }
        GestureKind::LongPress => {
            if let Some(capability) = world.get_component_mut::<LongPressCapability>(target) {
                invoke_isolated("長押し能力", || capability.handler_mut().on_long_press());
            }
        }
        GestureKind::Swipe(direction) => {
            if let Some(capability) = world.get_component_mut::<SwipeCapability>(target) {
                invoke_isolated("スワイプ能力", || capability.handler_mut().on_swipe(direction));
            }
        }
        GestureKind::DoubleTap => {}
    }

    if let Some(receiver) = world.get_component_mut::<GestureReceiverCapability>(target) {
        invoke_isolated("汎用受信能力", || receiver.handler_mut().on_gesture_received(event));
    }
}
