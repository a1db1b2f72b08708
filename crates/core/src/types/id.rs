//! Newtype identifiers for type-safe entity references.
//!
//! Identifiers in the console are opaque strings (`"merchant-1"`,
//! `"branch-1"`). Use the `define_id!` macro to create wrappers that prevent
//! passing a branch reference where a principal reference is expected.

/// Macro to define a type-safe string identifier.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `new()`, `as_str()`, `Display`, and `From<&str>`/`From<String>`
///
/// # Example
///
/// ```rust
/// # use loyalty_pro_core::define_id;
/// define_id!(OutletId);
/// define_id!(ReportId);
///
/// let outlet = OutletId::new("outlet-1");
/// assert_eq!(outlet.as_str(), "outlet-1");
///
/// // These are different types, so this won't compile:
/// // let _: ReportId = outlet;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(PrincipalId);
define_id!(BranchId);
