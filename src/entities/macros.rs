//! Macro for reducing boilerplate when defining entity records
//!
//! Each entity struct carries its own domain fields; the macro generates the
//! repetitive [`Record`] implementation from the resource names and the list
//! of fields reachable by the free-text filter.
//!
//! [`Record`]: crate::core::record::Record

/// Implement [`Record`] for an entity struct.
///
/// The struct must have an `id: RecordId` field, and every listed searchable
/// field must implement `Display`.
///
/// # Example
///
/// ```rust,ignore
/// impl_record!(Invoice, "invoice", "invoices", [supplier, amount, date, status]);
/// ```
///
/// [`Record`]: crate::core::record::Record
#[macro_export]
macro_rules! impl_record {
    (
        $type:ident,
        $singular:expr,
        $plural:expr,
        [ $( $field:ident ),* $(,)? ]
    ) => {
        impl $crate::core::record::Record for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> $crate::core::record::RecordId {
                self.id
            }

            fn set_id(&mut self, id: $crate::core::record::RecordId) {
                self.id = id;
            }

            fn searchable_values(&self) -> Vec<String> {
                vec![ $( self.$field.to_string() ),* ]
            }
        }
    };
}
