use quote::ToTokens;
use syn::{PathArguments, Type};

const SCALARS: &[&str] = &[
    "String", "bool", "i8", "i16", "i32", "i64", "isize", "u8", "u16", "u32", "u64", "usize",
];

/// Whether `ty` names one of the types the binder can coerce into.
///
/// Decided on the last path segment, so `std::string::String` counts but a
/// type alias does not.
pub fn is_scalar(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };

    if type_path.qself.is_some() {
        return false;
    }

    let Some(segment) = type_path.path.segments.last() else {
        return false;
    };

    matches!(segment.arguments, PathArguments::None)
        && SCALARS.iter().any(|scalar| segment.ident == *scalar)
}

/// Renders `ty` for diagnostics, closing up the spaces the token printer puts
/// around punctuation.
pub fn type_name(ty: &Type) -> String {
    const TIGHTEN: &[(&str, &str)] = &[
        (" <", "<"),
        ("< ", "<"),
        (" >", ">"),
        (" ::", "::"),
        (":: ", "::"),
        (" ,", ","),
        (" ;", ";"),
        ("& ", "&"),
    ];

    TIGHTEN
        .iter()
        .fold(ty.to_token_stream().to_string(), |name, (from, to)| {
            name.replace(from, to)
        })
}
