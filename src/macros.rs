/// Adds a kind to the runtime index and checks its name at compile time.
///
/// The kind must already implement [`CollectionKind`](crate::CollectionKind).
///
/// ```ignore
/// pub enum RingKind {}
/// impl kind_map::CollectionKind for RingKind { /* ... */ }
///
/// kind_map::register_kind!(RingKind);
/// ```
#[cfg(feature = "registry")]
#[macro_export]
macro_rules! register_kind {
    ($kind:ty) => {
        $crate::inventory::submit! {
            $crate::registry::KindEntry::of::<$kind>()
        }
    };
}

/// Without the `registry` feature only the compile-time name check remains.
#[cfg(not(feature = "registry"))]
#[macro_export]
macro_rules! register_kind {
    ($kind:ty) => {
        const _: () = $crate::validate_kind_name(<$kind as $crate::CollectionKind>::NAME);
    };
}
