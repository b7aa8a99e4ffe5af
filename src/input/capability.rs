//! ジェスチャーを受け取る能力の定義
//!
//! 配信先のエンティティは、以下の能力を任意の組み合わせでコンポーネントとして持てます。
//! クロージャはそのまま各トレイトを実装しているので、小さな処理は
//! `TapCapability::new(|| ...)` のように登録できます。

use crate::ecs::Component;
use crate::input::gesture::{GestureEvent, SwipeDirection};

/// タップを受け取る
pub trait Tappable {
    fn on_tap(&mut self);
}

/// 長押しを受け取る
pub trait LongPressable {
    fn on_long_press(&mut self);
}

/// スワイプを受け取る
pub trait Swipeable {
    fn on_swipe(&mut self, direction: SwipeDirection);
}

/// 種類を問わずすべてのジェスチャーを受け取る
///
/// 他の能力と同時に持つことができ、その場合は両方が呼ばれる。
pub trait GestureReceiver {
    fn on_gesture_received(&mut self, event: &GestureEvent);
}

impl<F: FnMut()> Tappable for F {
    fn on_tap(&mut self) {
        self()
    }
}

impl<F: FnMut()> LongPressable for F {
    fn on_long_press(&mut self) {
        self()
    }
}

impl<F: FnMut(SwipeDirection)> Swipeable for F {
    fn on_swipe(&mut self, direction: SwipeDirection) {
        self(direction)
    }
}

impl<F: FnMut(&GestureEvent)> GestureReceiver for F {
    fn on_gesture_received(&mut self, event: &GestureEvent) {
        self(event)
    }
}

/// タップ能力コンポーネント
#[derive(Component)]
pub struct TapCapability {
    handler: Box<dyn Tappable>,
}

impl TapCapability {
    pub fn new(handler: impl Tappable + 'static) -> Self {
        Self {
            handler: Box::new(handler),
        }
    }

    pub fn handler_mut(&mut self) -> &mut dyn Tappable {
        self.handler.as_mut()
    }
}

/// 長押し能力コンポーネント
#[derive(Component)]
pub struct LongPressCapability {
    handler: Box<dyn LongPressable>,
}

impl LongPressCapability {
    pub fn new(handler: impl LongPressable + 'static) -> Self {
        Self {
            handler: Box::new(handler),
        }
    }

    pub fn handler_mut(&mut self) -> &mut dyn LongPressable {
        self.handler.as_mut()
    }
}

/// スワイプ能力コンポーネント
#[derive(Component)]
pub struct SwipeCapability {
    handler: Box<dyn Swipeable>,
}

impl SwipeCapability {
    pub fn new(handler: impl Swipeable + 'static) -> Self {
        Self {
            handler: Box::new(handler),
        }
    }

    pub fn handler_mut(&mut self) -> &mut dyn Swipeable {
        self.handler.as_mut()
    }
}

/// 汎用受信能力コンポーネント
#[derive(Component)]
pub struct GestureReceiverCapability {
    handler: Box<dyn GestureReceiver>,
}

impl GestureReceiverCapability {
    pub fn new(handler: impl GestureReceiver + 'static) -> Self {
        Self {
            handler: Box::new(handler),
        }
    }

    pub fn handler_mut(&mut self) -> &mut dyn GestureReceiver {
        self.handler.as_mut()
    }
}
