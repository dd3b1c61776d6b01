//! Type-name translation from source spelling to C spelling.

use std::borrow::Cow;

/// Translate a source type name into its C form.
///
/// A name containing `*` is a pointer type: everything up to and including the first `*` is dropped and a trailing `*`
/// is appended, so `ptr*int` becomes `int*`. Any later `*` stays in the base name as written. Names without `*` pass
/// through unchanged.
///
/// ## Examples
/// ```rust
/// use crb::backend::translate_type;
///
/// assert_eq!(translate_type("int"), "int");
/// assert_eq!(translate_type("foo*int"), "int*");
/// ```
pub fn translate_type(type_name: &str) -> Cow<'_, str> {
    match type_name.split_once('*') {
        Some((_, base)) => Cow::Owned(format!("{}*", base)),
        None => Cow::Borrowed(type_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_type_unchanged() {
        assert_eq!(translate_type("int"), "int");
        assert_eq!(translate_type("unsigned long"), "unsigned long");
        assert_eq!(translate_type(""), "");
    }

    #[test]
    fn test_plain_type_is_borrowed() {
        assert!(matches!(translate_type("char"), Cow::Borrowed("char")));
    }

    #[test]
    fn test_pointer_type() {
        assert_eq!(translate_type("foo*bar"), "bar*");
        assert_eq!(translate_type("ptr*char"), "char*");
    }

    #[test]
    fn test_empty_segments() {
        assert_eq!(translate_type("*int"), "int*");
        assert_eq!(translate_type("int*"), "*");
    }

    #[test]
    fn test_only_first_star_splits() {
        assert_eq!(translate_type("a*b*c"), "b*c*");
    }
}
