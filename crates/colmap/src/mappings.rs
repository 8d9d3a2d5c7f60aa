use crate::{Catalog, PrimaryKeys, TypeMap};
use colmap_core::schema::app::PropertyResolver;
use std::sync::{Arc, LazyLock};

/// A type-mapping store and a primary-key store sharing one property
/// resolver.
///
/// The two stores are independent: clearing one leaves the other intact.
pub struct Mappings {
    resolver: Arc<dyn PropertyResolver>,
    types: TypeMap,
    primary_keys: PrimaryKeys,
}

impl Mappings {
    /// Creates empty stores resolving properties through a fresh
    /// [`Catalog`].
    pub fn new() -> Mappings {
        Mappings::with_resolver(Arc::new(Catalog::new()))
    }

    pub fn with_resolver(resolver: Arc<dyn PropertyResolver>) -> Mappings {
        Mappings {
            types: TypeMap::with_resolver(resolver.clone()),
            primary_keys: PrimaryKeys::with_resolver(resolver.clone()),
            resolver,
        }
    }

    pub fn types(&self) -> &TypeMap {
        &self.types
    }

    pub fn primary_keys(&self) -> &PrimaryKeys {
        &self.primary_keys
    }

    pub fn resolver(&self) -> &Arc<dyn PropertyResolver> {
        &self.resolver
    }

    /// Clears both stores.
    pub fn clear(&self) {
        self.types.clear();
        self.primary_keys.clear();
    }
}

impl Default for Mappings {
    fn default() -> Self {
        Mappings::new()
    }
}

impl std::fmt::Debug for Mappings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mappings")
            .field("types", &self.types)
            .field("primary_keys", &self.primary_keys)
            .finish()
    }
}

/// Returns the process-wide mappings.
///
/// The instance is created empty on first access and lives until the process
/// exits; there is no teardown. Application bootstrap code populates it,
/// query and materialization code reads it. Code that needs isolation, such
/// as tests, should construct its own [`Mappings`] instead.
pub fn global() -> &'static Mappings {
    static GLOBAL: LazyLock<Mappings> = LazyLock::new(|| {
        tracing::debug!("initializing global mappings");
        Mappings::new()
    });

    &GLOBAL
}
