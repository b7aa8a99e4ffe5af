use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Component トレイトを自動的に実装するマクロ
///
/// 生成されるコードは `crate::ecs::Component` を参照するため、
/// `ecs` モジュールを持つクレート内で使用します。
///
/// # 使用例
/// ```ignore
/// #[derive(Component)]
/// pub struct TapCapability {
///     handler: Box<dyn Tappable>,
/// }
/// ```
#[proc_macro_derive(Component)]
pub fn derive_component(input: TokenStream) -> TokenStream {
    // 入力を解析
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // Component トレイトの実装を生成
    let expanded = quote! {
        impl #impl_generics crate::ecs::Component for #name #ty_generics #where_clause {
            fn name() -> &'static str {
                stringify!(#name)
            }
        }
    };

    // トークンストリームに変換して返す
    expanded.into()
}
