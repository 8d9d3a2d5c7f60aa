/// Builds the property list of an entity from `name: Type` pairs.
///
/// Every property is readable and writable; use [`Property::read_only`] on
/// individual descriptors when that is not the case.
///
/// [`Property::read_only`]: crate::Property::read_only
#[macro_export]
macro_rules! properties {
    (
        $entity:ty { $( $name:ident : $ty:ty ),* $(,)? }
    ) => {
        vec![ $( $crate::Property::new::<$entity, $ty>(stringify!($name)), )* ]
    };
}
