//! ブラウザ向けのエクスポート
//!
//! JavaScript 側のイベントハンドラから `pointer_down` / `pointer_move` /
//! `pointer_up` を呼び、`requestAnimationFrame` ごとに `update` を呼ぶ想定です。
//! 判定されたジェスチャーは JSON 文字列として返し、コールバックにも渡します。

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::ecs::{Entity, World};
use crate::input::{
    GestureEvent, GestureSettings, HitLayerKind, HitShape, HitTarget, InputManager,
    PointerTracker, Subscription,
};
use crate::utils::math::Vector2;
use crate::utils::time::current_time_secs;

/// JavaScript からアクセス可能なジェスチャー入力
#[wasm_bindgen]
pub struct GestureInput {
    // 配信先となるヒット領域を保持するワールド
    world: World,
    manager: InputManager,
    tracker: PointerTracker,
    // JavaScript コールバックの購読
    callback: Option<Subscription>,
}

impl Default for GestureInput {
    fn default() -> Self {
        Self::from_settings(GestureSettings::default())
    }
}

impl GestureInput {
    fn from_settings(settings: GestureSettings) -> Self {
        Self {
            world: World::new(),
            manager: InputManager::new(settings),
            tracker: PointerTracker::new(),
            callback: None,
        }
    }

    /// Rust 側から配信先のワールドを操作する
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn manager_mut(&mut self) -> &mut InputManager {
        &mut self.manager
    }

    fn add_target(
        &mut self,
        layer: &str,
        shape: HitShape,
        center: Vector2,
        z: f32,
    ) -> Result<u64, JsValue> {
        let kind = HitLayerKind::parse(layer)
            .ok_or_else(|| JsValue::from_str(&format!("不明なレイヤーです: {}", layer)))?;
        let entity = self.world.create_entity();
        self.world.add_component(entity, HitTarget::new(kind, shape, center, z));
        Ok(entity.to_bits())
    }
}

#[wasm_bindgen]
impl GestureInput {
    /// 既定の設定で作成
    #[wasm_bindgen(constructor)]
    pub fn new() -> GestureInput {
        Self::default()
    }

    /// JSON 形式の設定から作成（省略した項目は既定値）
    pub fn with_settings(settings_json: &str) -> Result<GestureInput, JsValue> {
        let settings = GestureSettings::from_json(settings_json)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::from_settings(settings))
    }

    /// 現在の設定を JSON 形式で取得
    pub fn settings_json(&self) -> Result<String, JsValue> {
        self.manager
            .settings()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.tracker.press(Vector2::new(x, y));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.tracker.move_to(Vector2::new(x, y));
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) {
        self.tracker.release(Vector2::new(x, y));
    }

    /// ブラウザの現在時刻で1フレーム分を処理
    pub fn update(&mut self) -> Option<String> {
        self.update_at(current_time_secs())
    }

    /// 指定した時刻（秒）で1フレーム分を処理し、確定したジェスチャーを JSON で返す
    pub fn update_at(&mut self, now: f64) -> Option<String> {
        let sample = self.tracker.sample();
        let event = self.manager.update(&mut self.world, sample, now)?;
        match serde_json::to_string(&event) {
            Ok(json) => Some(json),
            Err(e) => {
                log::error!("ジェスチャーのシリアライズに失敗しました: {}", e);
                None
            }
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        if enabled {
            self.manager.enable();
        } else {
            self.manager.disable();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.manager.is_enabled()
    }

    /// 矩形のヒット領域を追加し、エンティティIDを返す
    pub fn add_rect_target(
        &mut self,
        layer: &str,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        z: f32,
    ) -> Result<u64, JsValue> {
        self.add_target(layer, HitShape::Rect { width, height }, Vector2::new(x, y), z)
    }

    /// 円形のヒット領域を追加し、エンティティIDを返す
    pub fn add_circle_target(
        &mut self,
        layer: &str,
        x: f32,
        y: f32,
        radius: f32,
        z: f32,
    ) -> Result<u64, JsValue> {
        self.add_target(layer, HitShape::Circle { radius }, Vector2::new(x, y), z)
    }

    /// ヒット領域を削除（存在しなければ `false`）
    pub fn remove_target(&mut self, id: u64) -> bool {
        self.world.destroy_entity(Entity::from_bits(id))
    }

    /// 判定されたジェスチャーを JSON 文字列で受け取るコールバックを設定
    ///
    /// 既存のコールバックは置き換えられる。
    pub fn set_gesture_callback(&mut self, callback: js_sys::Function) {
        self.clear_gesture_callback();

        let subscription = self.manager.on_gesture(move |event: &GestureEvent| {
            let json = match serde_json::to_string(event) {
                Ok(json) => json,
                Err(e) => {
                    log::error!("ジェスチャーのシリアライズに失敗しました: {}", e);
                    return;
                }
            };
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_str(&json)) {
                log::error!("❌ ジェスチャーコールバックでエラーが発生しました");
                console::error_1(&err);
            }
        });
        self.callback = Some(subscription);
    }

    pub fn clear_gesture_callback(&mut self) {
        if let Some(subscription) = self.callback.take() {
            self.manager.unsubscribe(subscription);
        }
    }
}
