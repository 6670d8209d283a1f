/// Interprets an environment string as a boolean.
///
/// Only `""`, `"0"`, `"false"` and `"FALSE"` are false. Everything else,
/// including `"False"` and `"no"`, is true. The same rule decides whether a
/// field's `required` flag is set.
pub fn truthy(s: &str) -> bool {
    !matches!(s, "" | "0" | "false" | "FALSE")
}
