use std::fmt;

use serde::{Deserialize, Serialize};

/// エンティティの一意な識別子
pub type EntityId = u32;

/// エンティティを表す構造体
/// エンティティはIDと世代からなり、再利用されたIDを区別できる
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    id: EntityId,
    generation: u32,
}

impl Entity {
    /// IDと世代からエンティティを構築
    pub fn from_raw(id: EntityId, generation: u32) -> Self {
        Self { id, generation }
    }

    /// エンティティのIDを取得
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// エンティティの世代を取得
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// JavaScript側に渡すための64bit表現
    pub fn to_bits(self) -> u64 {
        (u64::from(self.generation) << 32) | u64::from(self.id)
    }

    /// `to_bits` の逆変換
    pub fn from_bits(bits: u64) -> Self {
        Self {
            id: bits as u32,
            generation: (bits >> 32) as u32,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Entity({}v{})", self.id, self.generation)
    }
}

/// エンティティの生成と削除を管理する構造体
///
/// 削除されたIDは世代を1つ進めて再利用する。
#[derive(Debug, Default)]
pub struct EntityManager {
    /// IDごとの現在の世代
    generations: Vec<u32>,
    /// IDごとの生存フラグ
    alive: Vec<bool>,
    /// 再利用待ちのID
    free_ids: Vec<EntityId>,
    /// 生存中のエンティティ数
    live_count: usize,
}

impl EntityManager {
    /// 新しいエンティティマネージャーを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// 新しいエンティティを作成
    pub fn create_entity(&mut self) -> Entity {
        self.live_count += 1;

        if let Some(id) = self.free_ids.pop() {
            let index = id as usize;
            self.alive[index] = true;
            return Entity::from_raw(id, self.generations[index]);
        }

        let id = self.generations.len() as EntityId;
        self.generations.push(0);
        self.alive.push(true);
        Entity::from_raw(id, 0)
    }

    /// エンティティを削除
    ///
    /// 既に削除済みのエンティティの場合は `false` を返す。
    pub fn destroy_entity(&mut self, entity: Entity) -> bool {
        if !self.is_alive(entity) {
            return false;
        }

        let index = entity.id as usize;
        self.alive[index] = false;
        self.generations[index] = self.generations[index].wrapping_add(1);
        self.free_ids.push(entity.id);
        self.live_count -= 1;
        true
    }

    /// エンティティが有効かどうかを確認
    pub fn is_alive(&self, entity: Entity) -> bool {
        let index = entity.id as usize;
        self.alive.get(index).copied().unwrap_or(false)
            && self.generations[index] == entity.generation
    }

    /// アクティブなエンティティの数を取得
    pub fn entity_count(&self) -> usize {
        self.live_count
    }
}
