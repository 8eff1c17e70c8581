use syn::{Attribute, Error, ExprPath, LitStr, Token};

pub enum DefaultDefinition {
    Default,
    Expr(ExprPath),
}

pub struct FieldAttributes {
    pub default: Option<DefaultDefinition>,
}

impl TryFrom<&Attribute> for FieldAttributes {
    type Error = Error;

    fn try_from(value: &Attribute) -> Result<Self, Self::Error> {
        let mut default = None;
        value.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                if meta.input.peek(Token![=]) {
                    let value = meta.value()?;
                    let expr: LitStr = value.parse()?;
                    default = Some(DefaultDefinition::Expr(expr.parse()?));
                } else {
                    default = Some(DefaultDefinition::Default);
                }

                Ok(())
            } else {
                Err(meta.error("unsupported field attribute"))
            }
        })?;

        Ok(Self { default })
    }
}

pub struct ComponentAttributes {
    pub constructor: Option<ExprPath>,
}

impl TryFrom<&Attribute> for ComponentAttributes {
    type Error = Error;

    fn try_from(value: &Attribute) -> Result<Self, Self::Error> {
        let mut constructor = None;
        value.parse_nested_meta(|meta| {
            if meta.path.is_ident("constructor") {
                let value = meta.value()?;
                let expr: LitStr = value.parse()?;
                constructor = Some(expr.parse()?);

                Ok(())
            } else {
                Err(meta.error("unsupported component attribute"))
            }
        })?;

        Ok(Self { constructor })
    }
}

pub struct ComponentScanAttributes {
    pub base_package: Option<LitStr>,
}

impl TryFrom<&Attribute> for ComponentScanAttributes {
    type Error = Error;

    fn try_from(value: &Attribute) -> Result<Self, Self::Error> {
        let mut base_package = None;
        value.parse_nested_meta(|meta| {
            if meta.path.is_ident("base_package") {
                base_package = Some(meta.value()?.parse()?);

                Ok(())
            } else {
                Err(meta.error("unsupported component_scan attribute"))
            }
        })?;

        Ok(Self { base_package })
    }
}
