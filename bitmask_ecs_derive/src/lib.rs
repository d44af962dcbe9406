mod component;

use proc_macro::TokenStream;

#[proc_macro_derive(Component)]
pub fn derive_component(input: TokenStream) -> TokenStream {
    match syn::parse::<syn::DeriveInput>(input) {
        Ok(ast) => component::impl_component(&ast),
        Err(error) => error.to_compile_error().into(),
    }
}
