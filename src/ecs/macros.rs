//! コンポーネントマクロモジュール
//!
//! derive を使えない型（テスト用の型など）に `Component` を実装するためのマクロを提供します。

/// コンポーネントマクロ
///
/// # 使用例
/// ```ignore
/// struct Marker;
/// impl_component!(Marker, "Marker");
/// ```
#[macro_export]
macro_rules! impl_component {
    ($type:ty, $name:expr) => {
        impl $crate::ecs::Component for $type {
            fn name() -> &'static str {
                $name
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::ecs::Component;

    struct TestComponent;

    impl_component!(TestComponent, "TestComponent");

    #[test]
    fn test_component_macro() {
        assert_eq!(TestComponent::name(), "TestComponent");
    }
}
