use std::any::{Any, TypeId};
use std::collections::HashMap;

use crate::ecs::entity::Entity;

/// コンポーネント型を識別するためのトレイト
///
/// 入力処理はシングルスレッドで駆動されるため `Send`/`Sync` は要求しない。
pub trait Component: 'static {
    /// コンポーネントの名前を取得
    fn name() -> &'static str
    where
        Self: Sized;
}

/// コンポーネントのストレージ抽象化
pub trait ComponentStorage {
    /// エンティティからコンポーネントを削除
    fn remove(&mut self, entity: Entity) -> bool;

    /// 特定のエンティティのコンポーネントが存在するか確認
    fn has(&self, entity: Entity) -> bool;

    /// 格納されているコンポーネント数
    fn len(&self) -> usize;

    /// 内部ストレージをAny型として取得
    fn as_any(&self) -> &dyn Any;

    /// 内部ストレージを可変Any型として取得
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// 特定の型Tに対するコンポーネントストレージの実装
pub struct VecStorage<T: Component> {
    /// エンティティ→インデックスのマッピング
    indices: HashMap<Entity, usize>,
    /// コンポーネントデータとそのエンティティのペア
    data: Vec<(Entity, T)>,
}

impl<T: Component> VecStorage<T> {
    /// 新しいストレージを作成
    pub fn new() -> Self {
        Self {
            indices: HashMap::new(),
            data: Vec::new(),
        }
    }

    /// コンポーネントを追加
    ///
    /// 既存のコンポーネントがあれば置き換えて古い値を返す。
    pub fn insert(&mut self, entity: Entity, component: T) -> Option<T> {
        if let Some(&index) = self.indices.get(&entity) {
            return Some(std::mem::replace(&mut self.data[index].1, component));
        }

        self.indices.insert(entity, self.data.len());
        self.data.push((entity, component));
        None
    }

    /// コンポーネントを取得
    pub fn get(&self, entity: Entity) -> Option<&T> {
        self.indices.get(&entity).map(|&index| &self.data[index].1)
    }

    /// コンポーネントを可変で取得
    pub fn get_mut(&mut self, entity: Entity) -> Option<&mut T> {
        let index = *self.indices.get(&entity)?;
        Some(&mut self.data[index].1)
    }

    /// すべてのコンポーネントとそのエンティティを取得
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.data.iter().map(|(e, c)| (*e, c))
    }
}

impl<T: Component> Default for VecStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Component> ComponentStorage for VecStorage<T> {
    fn remove(&mut self, entity: Entity) -> bool {
        let Some(index) = self.indices.remove(&entity) else {
            return false;
        };

        // 最後の要素を削除位置に移動して詰める
        self.data.swap_remove(index);
        if let Some((moved, _)) = self.data.get(index) {
            self.indices.insert(*moved, index);
        }
        true
    }

    fn has(&self, entity: Entity) -> bool {
        self.indices.contains_key(&entity)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// コンポーネントマネージャー
/// 異なる型のコンポーネントを格納・管理する
#[derive(Default)]
pub struct ComponentManager {
    /// 型ID → コンポーネントストレージのマッピング
    storages: HashMap<TypeId, Box<dyn ComponentStorage>>,
}

impl ComponentManager {
    /// 新しいコンポーネントマネージャーを作成
    pub fn new() -> Self {
        Self::default()
    }

    fn storage<T: Component>(&self) -> Option<&VecStorage<T>> {
        self.storages
            .get(&TypeId::of::<T>())
            .and_then(|storage| storage.as_any().downcast_ref::<VecStorage<T>>())
    }

    fn storage_mut<T: Component>(&mut self) -> Option<&mut VecStorage<T>> {
        self.storages
            .get_mut(&TypeId::of::<T>())
            .and_then(|storage| storage.as_any_mut().downcast_mut::<VecStorage<T>>())
    }

    /// エンティティにコンポーネントを追加
    pub fn add_component<T: Component>(&mut self, entity: Entity, component: T) -> Option<T> {
        // 必要に応じてストレージを登録
        let storage = self
            .storages
            .entry(TypeId::of::<T>())
            .or_insert_with(|| Box::new(VecStorage::<T>::new()));

        storage
            .as_any_mut()
            .downcast_mut::<VecStorage<T>>()
            .and_then(|storage| storage.insert(entity, component))
    }

    /// エンティティからコンポーネントを取得
    pub fn get_component<T: Component>(&self, entity: Entity) -> Option<&T> {
        self.storage::<T>()?.get(entity)
    }

    /// エンティティからコンポーネントを可変で取得
    pub fn get_component_mut<T: Component>(&mut self, entity: Entity) -> Option<&mut T> {
        self.storage_mut::<T>()?.get_mut(entity)
    }

    /// エンティティがコンポーネントを持っているか確認
    pub fn has_component<T: Component>(&self, entity: Entity) -> bool {
        self.storages
            .get(&TypeId::of::<T>())
            .map_or(false, |storage| storage.has(entity))
    }

    /// エンティティからコンポーネントを削除
    pub fn remove_component<T: Component>(&mut self, entity: Entity) -> bool {
        self.storages
            .get_mut(&TypeId::of::<T>())
            .map_or(false, |storage| storage.remove(entity))
    }

    /// 特定のコンポーネント型を持つすべてのエンティティとコンポーネントを走査
    pub fn iter<T: Component>(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.storage::<T>().into_iter().flat_map(|storage| storage.iter())
    }

    /// 特定のコンポーネント型の数を取得
    pub fn count<T: Component>(&self) -> usize {
        self.storages
            .get(&TypeId::of::<T>())
            .map_or(0, |storage| storage.len())
    }

    /// エンティティからすべてのコンポーネントを削除
    pub fn remove_all_components(&mut self, entity: Entity) {
        for storage in self.storages.values_mut() {
            storage.remove(entity);
        }
    }
}
