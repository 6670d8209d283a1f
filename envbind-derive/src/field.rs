use darling::{FromField, util::Override};
use syn::{Ident, Type, Visibility, ext::IdentExt};

/// One named field of a `#[derive(Record)]` struct.
///
/// `#[env(from)]` takes the key from the upper-cased field name,
/// `#[env(from = "KEY")]` names it. `#[env(required)]` is shorthand for
/// `required = "true"`.
#[derive(FromField)]
#[darling(attributes(env))]
pub struct RecordFieldReceiver {
    pub ident: Option<Ident>,
    pub vis: Visibility,
    pub ty: Type,
    pub from: Option<Override<String>>,
    pub required: Option<Override<String>>,
}

impl RecordFieldReceiver {
    pub fn ident(&self) -> &Ident {
        self.ident
            .as_ref()
            .expect("darling only accepts structs with named fields")
    }

    pub fn env_key(&self) -> Option<String> {
        self.from.as_ref().map(|from| match from {
            Override::Inherit => self.ident().unraw().to_string().to_uppercase(),
            Override::Explicit(key) => key.clone(),
        })
    }

    pub fn required(&self) -> Option<String> {
        self.required.as_ref().map(|required| match required {
            Override::Inherit => "true".to_owned(),
            Override::Explicit(flag) => flag.clone(),
        })
    }

    /// Private fields are left alone even when they carry a key.
    pub fn writable(&self) -> bool {
        !matches!(self.vis, Visibility::Inherited)
    }

    pub fn validate(&self) -> darling::Result<()> {
        if self.from.is_none() && self.required.is_some() {
            let err = darling::Error::custom("`required` has no effect without `from`")
                .with_span(self.ident());
            return Err(err);
        }

        if matches!(&self.from, Some(Override::Explicit(key)) if key.is_empty()) {
            let err = darling::Error::custom("`from` must name a non-empty environment variable")
                .with_span(self.ident());
            return Err(err);
        }

        Ok(())
    }
}
