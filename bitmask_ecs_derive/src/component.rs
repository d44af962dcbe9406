use quote::{format_ident, quote};
use proc_macro::TokenStream;
use syn::DeriveInput;

pub fn impl_component(ast: &DeriveInput) -> TokenStream {
    let name = &ast.ident;
    if !ast.generics.params.is_empty() {
        return syn::Error::new_spanned(&ast.generics, "components cannot be generic")
            .to_compile_error()
            .into();
    }

    let name_str = name.to_string().to_uppercase();
    let id_name = format_ident!("__COMPONENT_ID_OF_{}", name_str);

    let gen = quote! {
        const _: () = {
            bitmask_ecs::lazy_static! {
                static ref #id_name: bitmask_ecs::components::ComponentId =
                    bitmask_ecs::components::get_next(::std::any::type_name::<#name>());
            }

            impl bitmask_ecs::components::Component for #name {
                #[inline(always)]
                fn component_id() -> bitmask_ecs::components::ComponentId {
                    *#id_name
                }
            }
        };
    };
    gen.into()
}
