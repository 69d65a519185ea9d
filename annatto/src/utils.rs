//! Small helpers and macros shared across the crate.

/// Generates a builder-style `with_<field>` method for a struct field.
#[macro_export]
macro_rules! with_field_fn {
    ($field_name: ident, $field_type: ty) => {
        paste::paste! {
            pub fn [<with_$field_name>](mut self, value: impl Into<$field_type>) -> Self {
                self.$field_name = Some(value.into());
                self
            }
        }
    };
}

/// Strips one layer of matching single or double quotes, if present.
pub fn unquote(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 && (b[0] == b'"' || b[0] == b'\'') && b[b.len() - 1] == b[0] {
        &s[1..s.len() - 1]
    }
    else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::unquote;

    #[test]
    fn test_unquote() {
        assert_eq!(unquote("\"seq1 desc\""), "seq1 desc");
        assert_eq!(unquote("'seq1'"), "seq1");
        assert_eq!(unquote("plain"), "plain");
        assert_eq!(unquote("\"unbalanced"), "\"unbalanced");
        assert_eq!(unquote("\""), "\"");
    }
}
