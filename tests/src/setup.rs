use colmap::{Catalog, EntityType, Property, PropertyIdent, PropertyResolver};
use std::sync::Arc;
use std_util::str::eq_ignore_case;

/// Provides the property resolver a test's mappings are built on.
pub trait Setup: Send + Sync + 'static {
    fn name(&self) -> &'static str;

    fn resolver(&self) -> Arc<dyn PropertyResolver>;
}

/// Resolves through the default caching [`Catalog`], with the fixture
/// entities registered up front.
#[derive(Default)]
pub struct SetupCatalog;

impl SetupCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl Setup for SetupCatalog {
    fn name(&self) -> &'static str {
        "catalog"
    }

    fn resolver(&self) -> Arc<dyn PropertyResolver> {
        let catalog = Catalog::new();
        catalog
            .register::<crate::entities::Order>()
            .register::<crate::entities::Customer>();
        Arc::new(catalog)
    }
}

/// Resolves by scanning the entity's property list on every call, without
/// caching.
#[derive(Default)]
pub struct SetupScan;

impl SetupScan {
    pub fn new() -> Self {
        Self
    }
}

impl Setup for SetupScan {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn resolver(&self) -> Arc<dyn PropertyResolver> {
        Arc::new(ScanResolver)
    }
}

struct ScanResolver;

impl PropertyResolver for ScanResolver {
    fn resolve(&self, entity: &EntityType, ident: &PropertyIdent<'_>) -> Option<Property> {
        let mut properties = entity.properties().into_iter();

        match ident {
            PropertyIdent::Name(name) => {
                properties.find(|property| eq_ignore_case(property.name(), name))
            }
            PropertyIdent::Field(field) => {
                if field.declaring().is_some_and(|ty| ty != entity.info()) {
                    return None;
                }
                properties.find(|property| eq_ignore_case(property.name(), field.name()))
            }
            PropertyIdent::Path(name) => properties.find(|property| property.name() == *name),
        }
    }
}
