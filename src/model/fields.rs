//! Name-based access to strongly typed records
//!
//! Section props and item records are plain structs. Editors still address
//! them by field name, so every record implements [`Record`], generated by the
//! `record!` and `item_record!` macros.

use thiserror::Error;

/// A value carried by a single record field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    List(Vec<String>),
    /// Item records as `(field, value)` rows
    Records(Vec<Vec<(String, FieldValue)>>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Convert a TOML value; `None` for shapes no record field can hold
    pub fn from_toml(value: &toml::Value) -> Option<Self> {
        match value {
            toml::Value::String(s) => Some(FieldValue::Text(s.clone())),
            toml::Value::Boolean(b) => Some(FieldValue::Flag(*b)),
            toml::Value::Array(values) if values.iter().all(|v| v.is_table()) && !values.is_empty() => {
                let rows = values
                    .iter()
                    .filter_map(|v| v.as_table())
                    .map(|table| {
                        table
                            .iter()
                            .map(|(k, v)| FieldValue::from_toml(v).map(|fv| (k.clone(), fv)))
                            .collect::<Option<Vec<_>>>()
                    })
                    .collect::<Option<Vec<_>>>()?;
                Some(FieldValue::Records(rows))
            }
            toml::Value::Array(values) => values
                .iter()
                .map(|v| v.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
                .map(FieldValue::List),
            _ => None,
        }
    }

    /// Convert every entry of a TOML table
    pub fn table_from_toml(table: &toml::Table) -> Result<Vec<(String, FieldValue)>, FieldError> {
        table
            .iter()
            .map(|(name, value)| {
                FieldValue::from_toml(value)
                    .map(|v| (name.clone(), v))
                    .ok_or_else(|| FieldError::Invalid(name.clone()))
            })
            .collect()
    }
}

/// Why a field assignment was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown field '{0}'")]
    Unknown(String),
    #[error("invalid value for field '{0}'")]
    Invalid(String),
}

/// Storage types a record field may use
pub trait FieldSlot {
    fn to_value(&self) -> FieldValue;
    /// Replace the slot with `value`; false if the value has the wrong shape
    fn assign(&mut self, value: FieldValue) -> bool;
}

impl FieldSlot for String {
    fn to_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }

    fn assign(&mut self, value: FieldValue) -> bool {
        match value {
            FieldValue::Text(s) => {
                *self = s;
                true
            }
            _ => false,
        }
    }
}

impl FieldSlot for bool {
    fn to_value(&self) -> FieldValue {
        FieldValue::Flag(*self)
    }

    fn assign(&mut self, value: FieldValue) -> bool {
        match value {
            FieldValue::Flag(b) => {
                *self = b;
                true
            }
            _ => false,
        }
    }
}

impl FieldSlot for Vec<String> {
    fn to_value(&self) -> FieldValue {
        FieldValue::List(self.clone())
    }

    fn assign(&mut self, value: FieldValue) -> bool {
        match value {
            FieldValue::List(list) => {
                *self = list;
                true
            }
            _ => false,
        }
    }
}

/// A struct whose fields can be read and written by name
pub trait Record {
    /// Field names in declaration order
    const FIELDS: &'static [&'static str];

    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Set one field; false if the name is unknown or the value has the wrong shape
    fn set_field(&mut self, name: &str, value: FieldValue) -> bool;

    /// Apply named overrides, reporting the first refused field
    fn apply_fields(&mut self, fields: &[(String, FieldValue)]) -> Result<(), FieldError> {
        for (name, value) in fields {
            if !Self::FIELDS.contains(&name.as_str()) {
                return Err(FieldError::Unknown(name.clone()));
            }
            if !self.set_field(name, value.clone()) {
                return Err(FieldError::Invalid(name.clone()));
            }
        }
        Ok(())
    }
}

macro_rules! record_impl {
    ($name:ident { $($field:ident),* }) => {
        impl $crate::model::fields::Record for $name {
            const FIELDS: &'static [&'static str] = &[$(stringify!($field)),*];

            fn field(&self, name: &str) -> Option<$crate::model::fields::FieldValue> {
                $(
                    if name == stringify!($field) {
                        return Some($crate::model::fields::FieldSlot::to_value(&self.$field));
                    }
                )*
                None
            }

            fn set_field(&mut self, name: &str, value: $crate::model::fields::FieldValue) -> bool {
                $(
                    if name == stringify!($field) {
                        return $crate::model::fields::FieldSlot::assign(&mut self.$field, value);
                    }
                )*
                false
            }
        }
    };
}

macro_rules! record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* pub $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        $crate::model::fields::record_impl!($name { $($field),* });
    };
}

/// Like `record!`, plus an `id` that is not addressable by name
macro_rules! item_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* pub $field:ident : $ty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            pub id: $crate::model::ItemId,
            $( $(#[$fmeta])* pub $field: $ty, )*
        }

        $crate::model::fields::record_impl!($name { $($field),* });

        impl $crate::model::items::ItemRecord for $name {
            fn blank(id: $crate::model::ItemId) -> Self {
                Self {
                    id,
                    $( $field: Default::default(), )*
                }
            }

            fn id(&self) -> $crate::model::ItemId {
                self.id
            }

            fn set_id(&mut self, id: $crate::model::ItemId) {
                self.id = id;
            }
        }
    };
}

pub(crate) use item_record;
pub(crate) use record;
pub(crate) use record_impl;

#[cfg(test)]
mod tests {
    use super::*;

    record! {
        pub struct Sample {
            pub title: String,
            pub popular: bool,
            pub features: Vec<String>,
        }
    }

    fn sample() -> Sample {
        Sample {
            title: "Pro".to_string(),
            popular: false,
            features: vec![],
        }
    }

    #[test]
    fn test_field_names_in_order() {
        assert_eq!(Sample::FIELDS, &["title", "popular", "features"]);
    }

    #[test]
    fn test_set_field_checks_shape() {
        let mut s = sample();
        assert!(s.set_field("title", FieldValue::text("Team")));
        assert!(s.set_field("popular", FieldValue::Flag(true)));
        assert!(!s.set_field("popular", FieldValue::text("yes")));
        assert!(!s.set_field("missing", FieldValue::text("x")));
        assert_eq!(s.title, "Team");
        assert!(s.popular);
    }

    #[test]
    fn test_apply_fields_reports_errors() {
        let mut s = sample();
        let err = s
            .apply_fields(&[("subtitle".to_string(), FieldValue::text("x"))])
            .unwrap_err();
        assert_eq!(err, FieldError::Unknown("subtitle".to_string()));
        let err = s
            .apply_fields(&[("title".to_string(), FieldValue::Flag(true))])
            .unwrap_err();
        assert_eq!(err, FieldError::Invalid("title".to_string()));
    }

    #[test]
    fn test_from_toml_shapes() {
        let table: toml::Table = toml::from_str(
            r#"
title = "Hi"
popular = true
features = ["a", "b"]
items = [{ name = "One" }]
count = 3
"#,
        )
        .unwrap();
        assert_eq!(FieldValue::from_toml(&table["title"]), Some(FieldValue::text("Hi")));
        assert_eq!(FieldValue::from_toml(&table["popular"]), Some(FieldValue::Flag(true)));
        assert_eq!(
            FieldValue::from_toml(&table["features"]),
            Some(FieldValue::List(vec!["a".to_string(), "b".to_string()]))
        );
        assert_eq!(
            FieldValue::from_toml(&table["items"]),
            Some(FieldValue::Records(vec![vec![(
                "name".to_string(),
                FieldValue::text("One")
            )]]))
        );
        assert_eq!(FieldValue::from_toml(&table["count"]), None);
    }
}
