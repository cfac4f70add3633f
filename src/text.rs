//! Diagnostic rendering shared by the model types.
//!
//! Every model value implements `Display` as a brace-delimited listing of
//! its *present* fields in declaration order, using the wire-level field
//! names: `{PoolName: test-pool,MfaConfiguration: ON}`. The output is for
//! logs and debugging only; it is never parsed and never fed back to the
//! service.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};

/// Renders one field value inside a model value's `Display` output.
pub(crate) trait FieldFmt {
    fn field_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl FieldFmt for String {
    fn field_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl FieldFmt for i32 {
    fn field_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FieldFmt for bool {
    fn field_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl FieldFmt for DateTime<Utc> {
    fn field_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Lists render as `[a, b, c]`.
impl<T: FieldFmt> FieldFmt for Vec<T> {
    fn field_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.field_fmt(f)?;
        }
        f.write_str("]")
    }
}

/// Maps render as `{k1=v1, k2=v2}` in key order.
impl FieldFmt for BTreeMap<String, String> {
    fn field_fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        f.write_str("}")
    }
}

/// Writes `{Name: value,Name2: value2}` for the fields that are present.
pub(crate) fn write_fields(
    f: &mut fmt::Formatter<'_>,
    fields: &[(&str, Option<&dyn FieldFmt>)],
) -> fmt::Result {
    f.write_str("{")?;
    let mut first = true;
    for (name, value) in fields {
        if let Some(value) = value {
            if !first {
                f.write_str(",")?;
            }
            first = false;
            f.write_str(name)?;
            f.write_str(": ")?;
            value.field_fmt(f)?;
        }
    }
    f.write_str("}")
}

/// Implements `Display` (and [`FieldFmt`], so values nest) for a model type:
/// present fields only, declaration order, wire-level names.
macro_rules! display_fields {
    ($ty:ident { $($wire:literal => $field:ident),* $(,)? }) => {
        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let fields: &[(&str, Option<&dyn crate::text::FieldFmt>)] = &[
                    $((
                        $wire,
                        self.$field
                            .as_ref()
                            .map(|value| value as &dyn crate::text::FieldFmt),
                    ),)*
                ];
                crate::text::write_fields(f, fields)
            }
        }

        impl crate::text::FieldFmt for $ty {
            fn field_fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }
    };
}

pub(crate) use display_fields;

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe<T>(T);

    impl<T: FieldFmt> fmt::Display for Probe<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.field_fmt(f)
        }
    }

    #[test]
    fn list_rendering() {
        let list = vec!["email".to_string(), "phone_number".to_string()];
        assert_eq!(Probe(list).to_string(), "[email, phone_number]");
    }

    #[test]
    fn empty_list_rendering() {
        assert_eq!(Probe(Vec::<String>::new()).to_string(), "[]");
    }

    #[test]
    fn map_rendering_is_key_ordered() {
        let mut map = BTreeMap::new();
        map.insert("env".to_string(), "prod".to_string());
        map.insert("app".to_string(), "portal".to_string());
        assert_eq!(Probe(map).to_string(), "{app=portal, env=prod}");
    }

    #[test]
    fn scalar_rendering() {
        assert_eq!(Probe(30i32).to_string(), "30");
        assert_eq!(Probe(true).to_string(), "true");
    }
}
