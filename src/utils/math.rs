//! 数学ユーティリティモジュール
//!
//! このモジュールには、ジェスチャー判定で使用される2次元ベクトルが含まれています。

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// 2次元ベクトル
///
/// 入力デバイスのピクセル座標を表す。Y軸は上向きが正。
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    /// 原点
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    /// 右向きの単位ベクトル
    pub const RIGHT: Vector2 = Vector2 { x: 1.0, y: 0.0 };
    /// 左向きの単位ベクトル
    pub const LEFT: Vector2 = Vector2 { x: -1.0, y: 0.0 };
    /// 上向きの単位ベクトル
    pub const UP: Vector2 = Vector2 { x: 0.0, y: 1.0 };
    /// 下向きの単位ベクトル
    pub const DOWN: Vector2 = Vector2 { x: 0.0, y: -1.0 };

    /// 新しいベクトルを作成
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// ベクトルの長さ
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// ベクトルの長さの二乗（距離の比較用）
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    /// 2点間の距離
    pub fn distance(self, other: Vector2) -> f32 {
        (other - self).length()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(3.0, 4.0);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!((b - a).length_squared(), 25.0);
    }

    #[test]
    fn test_operators() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(4.0, -1.0);
        assert_eq!(a + b, Vector2::new(5.0, 1.0));
        assert_eq!(b - a, Vector2::new(3.0, -3.0));
    }
}
