//! ジェスチャー通知チャンネル
//!
//! 登録順にリスナーを保持し、ジェスチャーごとに順番に呼び出します。
//! リスナー内のパニックはそのリスナーだけで捕捉してログに残し、
//! 残りのリスナーへの通知を続けます。

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::input::gesture::{GestureEvent, GestureKind};
use crate::utils::id_generator::IdGenerator;

/// リスナーの登録ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// ジェスチャーを受け取るリスナー
pub type GestureListener = Box<dyn FnMut(&GestureEvent)>;

/// 通知チャンネルの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    /// すべてのジェスチャー
    Any,
    Tap,
    DoubleTap,
    LongPress,
    /// 上下左右すべてのスワイプ
    Swipe,
}

impl ChannelKind {
    /// ジェスチャーの種類に対応する個別チャンネル
    pub fn for_gesture(kind: GestureKind) -> ChannelKind {
        match kind {
            GestureKind::Tap => ChannelKind::Tap,
            GestureKind::DoubleTap => ChannelKind::DoubleTap,
            GestureKind::LongPress => ChannelKind::LongPress,
            GestureKind::Swipe(_) => ChannelKind::Swipe,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChannelKind::Any => "any",
            ChannelKind::Tap => "tap",
            ChannelKind::DoubleTap => "double_tap",
            ChannelKind::LongPress => "long_press",
            ChannelKind::Swipe => "swipe",
        }
    }
}

/// 1種類のジェスチャー通知を扱うチャンネル
pub struct GestureChannel {
    kind: ChannelKind,
    listeners: Vec<(ListenerId, GestureListener)>,
    ids: IdGenerator,
}

impl fmt::Debug for GestureChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GestureChannel")
            .field("kind", &self.kind)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl GestureChannel {
    /// 新しいチャンネルを作成
    pub fn new(kind: ChannelKind) -> Self {
        Self {
            kind,
            listeners: Vec::new(),
            ids: IdGenerator::new(),
        }
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    /// リスナーを登録
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&GestureEvent) + 'static,
    {
        let id = ListenerId(self.ids.next_id());
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// リスナーを解除（登録されていなければ `false`）
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// 登録順にすべてのリスナーへ通知し、パニックせずに完了した数を返す
    pub fn emit(&mut self, event: &GestureEvent) -> usize {
        let channel = self.kind.as_str();
        let mut delivered = 0;

        for (id, listener) in self.listeners.iter_mut() {
            let label = format!("{} リスナー #{}", channel, id.0);
            if invoke_isolated(&label, || listener(event)) {
                delivered += 1;
            }
        }

        delivered
    }
}

/// コールバックを実行し、パニックした場合はログに残して `false` を返す
pub(crate) fn invoke_isolated<F: FnOnce()>(label: &str, callback: F) -> bool {
    match panic::catch_unwind(AssertUnwindSafe(callback)) {
        Ok(()) => true,
        Err(payload) => {
            log::error!("❌ {} でパニックが発生しました: {}", label, panic_message(payload.as_ref()));
            false
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "不明なパニック"
    }
}
