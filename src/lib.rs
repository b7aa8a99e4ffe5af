//! 単一ポインタ入力のジェスチャー判定と配信
//!
//! タッチ・マウスの入力からタップ・ダブルタップ・長押し・上下左右のスワイプを判定し、
//! 購読者と、押下位置のヒットテストで解決したエンティティへ届けます。
//!
//! ```ignore
//! let mut world = World::new();
//! let mut input = InputManager::default();
//! input.on_tap(|event| log::info!("タップ: {:?}", event.start_position));
//!
//! // 毎フレーム
//! input.update(&mut world, PointerSample::began(Vector2::new(10.0, 20.0)), now);
//! ```

use wasm_bindgen::prelude::*;

// モジュール宣言
pub mod ecs;
pub mod input;
pub mod utils;
pub mod web;

pub use ecs::{Entity, World};
pub use input::{
    GestureEvent, GestureKind, GestureSettings, InputManager, PointerPhase, PointerSample,
    SwipeDirection,
};
pub use utils::math::Vector2;
pub use web::GestureInput;

// 初期化用のエントリーポイント
#[wasm_bindgen(start)]
pub fn start() {
    // エラーをコンソールにパニックフックとして表示
    console_error_panic_hook::set_once();

    // ロガーの初期化
    let level = if cfg!(feature = "debug") {
        utils::logger::LogLevel::Debug
    } else {
        utils::logger::LogLevel::Info
    };
    utils::logger::init_logging(level);
    log::info!("WebAssembly module initialized!");
}

// ログレベルを変更するエクスポート関数
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let level = utils::logger::LogLevel::parse(level)
        .ok_or_else(|| JsValue::from_str(&format!("不明なログレベルです: {}", level)))?;
    utils::logger::set_log_level(level);
    Ok(())
}
