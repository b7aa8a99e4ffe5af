//! 入力処理システムの実装
//!
//! このモジュールは、単一ポインタ（タッチ・マウス）の入力からジェスチャーを判定し、
//! 購読者と配信先エンティティに届ける処理を担当します。
//!
//! ## 構成
//!
//! - `settings`: 判定の閾値
//! - `gesture`: 入力サンプルと判定結果のデータ型
//! - `detector`: タップ・ダブルタップ・長押し・スワイプを判定する状態機械
//! - `pointer`: ポインタイベントをフレームごとのサンプルに変換
//! - `hit_test`: UI → 2D平面 → 3D空間 の順に配信先を解決
//! - `capability`: エンティティが持てるジェスチャー受信能力
//! - `channel`: 種類ごとの通知チャンネル
//! - `manager`: 上記をまとめる入力マネージャー

pub mod capability;
pub mod channel;
pub mod detector;
pub mod gesture;
pub mod manager;
pub mod pointer;
pub mod settings;

pub use capability::{
    GestureReceiver, GestureReceiverCapability, LongPressCapability, LongPressable,
    SwipeCapability, Swipeable, TapCapability, Tappable,
};
pub use channel::{ChannelKind, GestureChannel, GestureListener, ListenerId};
pub use detector::{GestureDetector, GestureObserver};
pub use gesture::{GestureEvent, GestureKind, PointerPhase, PointerSample, SwipeDirection};
pub use hit_test::{HitLayer, HitLayerKind, HitShape, HitTarget, LayeredHitTester, RegionLayer};
pub use manager::{InputManager, Subscription};
pub use pointer::PointerTracker;
pub use settings::{GestureSettings, SettingsError};
