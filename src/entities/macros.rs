//! Macros for reducing boilerplate when defining record types
//!
//! Listing types repeat the same `Record` implementation: a resource name, an
//! id accessor, and a field lookup for every sortable column. `impl_record!`
//! generates all three from one declaration.

/// Implement [`Record`](crate::core::record::Record) for a struct
///
/// Each entry of `fields` names a sort key and the expression producing its
/// value; the expression is converted with `FieldValue::from`.
///
/// # Example
///
/// ```rust,ignore
/// impl_record!(
///     Order,
///     resource: "orders",
///     id: String => id,
///     fields: {
///         "id" => |o| &o.id,
///         "customer" => |o| &o.customer.name,
///         "amount" => |o| o.amount,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $type:ty,
        resource: $resource:expr,
        id: $id_type:ty => $id_field:ident,
        fields: {
            $( $key:literal => |$rec:ident| $value:expr ),* $(,)?
        }
    ) => {
        impl $crate::core::record::Record for $type {
            type Id = $id_type;

            fn resource_name() -> &'static str {
                $resource
            }

            fn id(&self) -> &$id_type {
                &self.$id_field
            }

            fn sort_fields() -> &'static [&'static str] {
                &[ $( $key ),* ]
            }

            fn field_value(&self, field: &str) -> Option<$crate::core::field::FieldValue> {
                match field {
                    $(
                        $key => {
                            let $rec = self;
                            Some($crate::core::field::FieldValue::from($value))
                        }
                    )*
                    _ => None,
                }
            }
        }
    };
}
