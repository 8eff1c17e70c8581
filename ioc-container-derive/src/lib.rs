use crate::component::{expand_component, expand_component_scan};
use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput, Error};

mod attributes;
mod component;

#[proc_macro_derive(Component, attributes(component, autowired))]
pub fn generate_component(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_component(&input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

#[proc_macro_derive(ComponentScan, attributes(component_scan))]
pub fn generate_component_scan(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_component_scan(&input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}
