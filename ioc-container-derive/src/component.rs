use crate::attributes::{
    ComponentAttributes, ComponentScanAttributes, DefaultDefinition, FieldAttributes,
};
use itertools::Itertools;
use proc_macro2::{Ident, TokenStream};
use quote::{quote, ToTokens};
use syn::spanned::Spanned;
use syn::{
    Attribute, Data, DataStruct, DeriveInput, Error, Field, Fields, FieldsNamed, FieldsUnnamed,
    Index, Result,
};

const COMPONENT: &str = "component";
const AUTOWIRED: &str = "autowired";
const COMPONENT_SCAN: &str = "component_scan";

fn is_autowired(field: &Field) -> Result<bool> {
    for attr in &field.attrs {
        if attr.path().is_ident(AUTOWIRED) {
            attr.meta.require_path_only()?;
            return Ok(true);
        }
    }

    Ok(false)
}

fn generate_construction(field: &Field) -> Result<TokenStream> {
    if is_autowired(field)? {
        return Ok(quote!(std::default::Default::default()));
    }

    for attr in &field.attrs {
        if attr.path().is_ident(COMPONENT) {
            let attributes = FieldAttributes::try_from(attr)?;
            if let Some(DefaultDefinition::Expr(path)) = &attributes.default {
                return Ok(quote!(#path()));
            }
        }
    }

    Ok(quote!(std::default::Default::default()))
}

fn make_named_struct(fields: &FieldsNamed) -> Result<TokenStream> {
    let fields: Vec<_> = fields
        .named
        .iter()
        .map(|field| -> Result<TokenStream> {
            let ident = field.ident.as_ref().unwrap();
            let instance = generate_construction(field)?;
            Ok(quote! {
                #ident: #instance
            })
        })
        .try_collect()?;

    Ok(quote! {
        Self {
            #(#fields),*
        }
    })
}

fn make_unnamed_struct(fields: &FieldsUnnamed) -> Result<TokenStream> {
    let fields: Vec<_> = fields
        .unnamed
        .iter()
        .map(generate_construction)
        .try_collect()?;

    Ok(quote! {
        Self(#(#fields),*)
    })
}

fn make_injectable_field(
    ident: &Ident,
    member: TokenStream,
    name: String,
    field: &Field,
) -> TokenStream {
    let ty = &field.ty;
    quote! {
        {
            fn accessor(component: &#ident) -> &#ty {
                &component.#member
            }

            ioc_container::component::InjectableField::new::<
                #ident,
                <#ty as ioc_container::component::AutowiredTarget>::Target,
            >(#name, accessor)
        }
    }
}

fn make_injectable_fields(ident: &Ident, fields: &Fields) -> Result<Vec<TokenStream>> {
    let mut result = vec![];
    for (index, field) in fields.iter().enumerate() {
        if !is_autowired(field)? {
            continue;
        }

        let (member, name) = match &field.ident {
            Some(field_ident) => (field_ident.to_token_stream(), field_ident.to_string()),
            None => (Index::from(index).to_token_stream(), index.to_string()),
        };

        result.push(make_injectable_field(ident, member, name, field));
    }

    Ok(result)
}

fn extract_component_attributes(attributes: &[Attribute]) -> Result<Option<ComponentAttributes>> {
    attributes
        .iter()
        .filter_map(|attribute| {
            if attribute.path().is_ident(COMPONENT) {
                Some(ComponentAttributes::try_from(attribute))
            } else {
                None
            }
        })
        .next()
        .transpose()
}

fn extract_component_scan_attributes(
    attributes: &[Attribute],
) -> Result<Option<ComponentScanAttributes>> {
    attributes
        .iter()
        .filter_map(|attribute| {
            if attribute.path().is_ident(COMPONENT_SCAN) {
                Some(ComponentScanAttributes::try_from(attribute))
            } else {
                None
            }
        })
        .next()
        .transpose()
}

fn reject_generics(input: &DeriveInput) -> Result<()> {
    if input.generics.params.is_empty() {
        Ok(())
    } else {
        Err(Error::new(
            input.generics.span(),
            "Generic types cannot be registered in the container!",
        ))
    }
}

pub fn expand_component(input: &DeriveInput) -> Result<TokenStream> {
    reject_generics(input)?;

    if let Data::Struct(DataStruct { fields, .. }) = &input.data {
        let ident = &input.ident;
        let generation = match fields {
            Fields::Named(fields) => make_named_struct(fields)?,
            Fields::Unnamed(fields) => make_unnamed_struct(fields)?,
            Fields::Unit => quote! { Self },
        };
        let construction = match extract_component_attributes(&input.attrs)? {
            Some(ComponentAttributes {
                constructor: Some(constructor),
            }) => quote! { #constructor() },
            _ => quote! { Ok(#generation) },
        };
        let injectable_fields = make_injectable_fields(ident, fields)?;

        Ok(quote! {
            #[automatically_derived]
            impl ioc_container::component::Component for #ident {
                fn create() -> std::result::Result<Self, ioc_container::ErrorPtr> {
                    #construction
                }

                fn injectable_fields() -> std::vec::Vec<ioc_container::component::InjectableField> {
                    vec![#(#injectable_fields),*]
                }
            }

            const _: () = {
                fn register() -> ioc_container::type_catalog::ComponentDefinition {
                    ioc_container::type_catalog::ComponentDefinition::of::<#ident>(module_path!())
                }

                ioc_container::type_catalog::internal::submit! {
                    ioc_container::type_catalog::internal::ComponentRegisterer {
                        register
                    }
                };
            };
        })
    } else {
        Err(Error::new(
            input.span(),
            "Can only derive Component on structs!",
        ))
    }
}

pub fn expand_component_scan(input: &DeriveInput) -> Result<TokenStream> {
    reject_generics(input)?;

    let ident = &input.ident;
    let base_package = match extract_component_scan_attributes(&input.attrs)? {
        Some(ComponentScanAttributes {
            base_package: Some(base_package),
        }) => quote! { std::option::Option::Some(#base_package.to_string()) },
        _ => quote! { std::option::Option::None },
    };

    Ok(quote! {
        const _: () = {
            fn register() -> ioc_container::type_catalog::ComponentScanDefinition {
                ioc_container::type_catalog::ComponentScanDefinition {
                    target: ioc_container::type_descriptor::TypeDescriptor::of::<#ident>(),
                    package: module_path!(),
                    attributes: ioc_container::marker_inspector::ComponentScanAttributes {
                        base_package: #base_package,
                    },
                }
            }

            ioc_container::type_catalog::internal::submit! {
                ioc_container::type_catalog::internal::ComponentScanRegisterer {
                    register
                }
            };
        };
    })
}
