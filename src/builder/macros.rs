//! Macros for ergonomic action declaration.

/// Declare an action enum and implement [`Action`](crate::core::Action) for it.
///
/// Each variant is a unit or struct variant followed by its tag. The macro
/// derives `Clone`, `PartialEq`, `Debug`, `Serialize` and `Deserialize`, so
/// the calling crate needs `serde` with the `derive` feature.
///
/// # Example
///
/// ```
/// use reducto::action_enum;
/// use reducto::core::Action;
///
/// action_enum! {
///     pub enum BioAction {
///         UpdateBio { name: String, age: u32 } => "UPDATE_BIO",
///         IncrementNum { incrementer: i64 } => "INCREMENT_NUM",
///         Reset => "RESET",
///     }
/// }
///
/// let action = BioAction::IncrementNum { incrementer: 5 };
/// assert_eq!(action.kind(), "INCREMENT_NUM");
/// ```
#[macro_export]
macro_rules! action_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $({
                    $($field:ident : $field_ty:ty),* $(,)?
                })? => $tag:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $({ $($field : $field_ty),* })?
            ),*
        }

        impl $crate::core::Action for $name {
            fn kind(&self) -> &str {
                match self {
                    $(Self::$variant { .. } => $tag),*
                }
            }
        }
    };
}
