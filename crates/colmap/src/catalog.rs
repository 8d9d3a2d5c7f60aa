use colmap_core::schema::app::{Entity, EntityType, Property, PropertyIdent, PropertyResolver, TypeInfo};
use dashmap::DashMap;
use indexmap::IndexMap;
use std::sync::Arc;
use std_util::str::fold_case;

/// Properties of one entity, in declaration order, keyed by folded name.
type Properties = IndexMap<String, Property>;

/// Cache of entity property lists, used as the default [`PropertyResolver`].
///
/// An entity's properties are read from [`Entity::properties`] the first time
/// the entity is resolved (or when it is registered) and kept until
/// [`Catalog::clear`].
#[derive(Default)]
pub struct Catalog {
    entities: DashMap<TypeInfo, Arc<Properties>>,
}

impl Catalog {
    pub fn new() -> Catalog {
        Catalog::default()
    }

    /// Reads and caches the properties of `E` ahead of first use.
    pub fn register<E: Entity>(&self) -> &Self {
        self.properties_of(&EntityType::of::<E>());
        self
    }

    /// Returns the properties of `entity` in declaration order.
    pub fn properties(&self, entity: &EntityType) -> Vec<Property> {
        self.properties_of(entity).values().cloned().collect()
    }

    /// Looks up a property of `entity` by name, ignoring case.
    pub fn property(&self, entity: &EntityType, name: &str) -> Option<Property> {
        self.properties_of(entity).get(&fold_case(name)).cloned()
    }

    pub fn is_registered(&self, entity: impl Into<TypeInfo>) -> bool {
        self.entities.contains_key(&entity.into())
    }

    /// Drops every cached property list.
    pub fn clear(&self) {
        self.entities.clear();
    }

    fn properties_of(&self, entity: &EntityType) -> Arc<Properties> {
        if let Some(properties) = self.entities.get(&entity.info()) {
            return properties.value().clone();
        }

        // Built outside the map so `Entity::properties` may itself use the
        // catalog.
        let built = Arc::new(build(entity));

        self.entities
            .entry(entity.info())
            .or_insert(built)
            .value()
            .clone()
    }
}

fn build(entity: &EntityType) -> Properties {
    let mut properties = Properties::new();

    for property in entity.properties() {
        if property.declaring != entity.info() {
            tracing::debug!(
                %entity,
                property = %property,
                "skipping property declared on another type"
            );
            continue;
        }

        let folded = fold_case(property.name());
        if let Some(existing) = properties.get(&folded) {
            tracing::debug!(
                %entity,
                kept = existing.name(),
                skipped = property.name(),
                "property names differ only by case; keeping the first"
            );
            continue;
        }

        properties.insert(folded, property);
    }

    tracing::trace!(%entity, count = properties.len(), "entity properties cached");
    properties
}

impl PropertyResolver for Catalog {
    fn resolve(&self, entity: &EntityType, ident: &PropertyIdent<'_>) -> Option<Property> {
        let properties = self.properties_of(entity);

        match ident {
            PropertyIdent::Name(name) => properties.get(&fold_case(name)).cloned(),
            PropertyIdent::Field(field) => {
                if let Some(declaring) = field.declaring() {
                    if declaring != entity.info() {
                        return None;
                    }
                }

                properties.get(&fold_case(field.name())).cloned()
            }
            PropertyIdent::Path(name) => properties
                .values()
                .find(|property| property.name() == *name)
                .cloned(),
        }
    }
}
