//! Entity Component System (ECS)
//!
//! ジェスチャーの配信先となるオブジェクトを管理するための最小限のECSです。
//!
//! ## 主要なコンポーネント:
//!
//! - `Entity`: ヒットテストで解決される配信先の一意なハンドル
//! - `Component`: エンティティに付与される能力やヒット領域などのデータ
//! - `World`: エンティティとコンポーネントをまとめて管理する中央ハブ

// マクロのリエクスポート
pub use ecs_derive::Component;

// モジュール宣言
pub mod component;
pub mod entity;
pub mod macros;

// 主要な構造体をエクスポート
pub use component::{Component, ComponentManager, ComponentStorage, VecStorage};
pub use entity::{Entity, EntityId, EntityManager};

/// ゲーム世界全体を表す中央のオブジェクト
/// エンティティとコンポーネントを統合的に管理します
#[derive(Default)]
pub struct World {
    entities: EntityManager,
    components: ComponentManager,
}

impl World {
    /// 新しいゲーム世界を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいエンティティを作成
    pub fn create_entity(&mut self) -> Entity {
        self.entities.create_entity()
    }

    /// エンティティを削除し、付与されていたコンポーネントもすべて破棄
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        if !self.entities.destroy_entity(entity) {
            return false;
        }
        self.components.remove_all_components(entity);
        true
    }

    /// エンティティが有効かどうかを確認
    pub fn is_alive(&self, entity: Entity) -> bool {
        self.entities.is_alive(entity)
    }

    /// アクティブなエンティティの数を取得
    pub fn entity_count(&self) -> usize {
        self.entities.entity_count()
    }

    /// エンティティにコンポーネントを追加
    ///
    /// 削除済みのエンティティには追加せず、そのまま返す。
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) -> Option<T> {
        if !self.entities.is_alive(entity) {
            log::warn!("削除済みの {} に {} を追加しようとしました", entity, T::name());
            return Some(component);
        }
        self.components.add_component(entity, component)
    }

    /// エンティティからコンポーネントを取得
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.components.get_component(entity)
    }

    /// エンティティからコンポーネントを可変で取得
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.components.get_component_mut(entity)
    }

    /// エンティティがコンポーネントを持っているか確認
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.components.has_component::<T>(entity)
    }

    /// エンティティからコンポーネントを削除
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> bool {
        self.components.remove_component::<T>(entity)
    }

    /// 特定のコンポーネントを持つエンティティを走査
    pub fn query<T: Component>(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.components.iter::<T>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Component)]
    struct Health(u32);

    #[test]
    fn test_destroy_entity_drops_components() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, Health(10));
        assert!(world.has_component::<Health>(entity));

        assert!(world.destroy_entity(entity));
        assert!(!world.is_alive(entity));
        assert_eq!(world.query::<Health>().count(), 0);

        // 再利用されたIDに古いコンポーネントが残らない
        let reused = world.create_entity();
        assert_eq!(reused.id(), entity.id());
        assert!(world.get_component::<Health>(reused).is_none());
    }

    #[test]
    fn test_add_component_to_dead_entity_is_rejected() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.destroy_entity(entity);

        let rejected = world.add_component(entity, Health(1));
        assert_eq!(rejected.map(|h| h.0), Some(1));
        assert_eq!(world.query::<Health>().count(), 0);
    }

    #[test]
    fn test_query_returns_all() {
        let mut world = World::new();
        let a = world.create_entity();
        let b = world.create_entity();
        world.add_component(a, Health(3));
        world.add_component(b, Health(4));

        let total: u32 = world.query::<Health>().map(|(_, h)| h.0).sum();
        assert_eq!(total, 7);
        assert_eq!(world.entity_count(), 2);
    }
}
