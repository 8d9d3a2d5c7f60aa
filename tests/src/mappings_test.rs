use crate::Setup;
use colmap::Mappings;

/// Fresh mapping stores for one test run, built on a [`Setup`]'s resolver.
pub struct MappingsTest {
    setup: Box<dyn Setup>,
    mappings: Mappings,
}

impl MappingsTest {
    pub fn new(setup: impl Setup) -> Self {
        init_tracing();

        let mappings = Mappings::with_resolver(setup.resolver());

        Self {
            setup: Box::new(setup),
            mappings,
        }
    }

    pub fn mappings(&self) -> &Mappings {
        &self.mappings
    }

    pub fn types(&self) -> &colmap::TypeMap {
        self.mappings.types()
    }

    pub fn primary_keys(&self) -> &colmap::PrimaryKeys {
        self.mappings.primary_keys()
    }

    pub fn setup_name(&self) -> &'static str {
        self.setup.name()
    }
}

/// Installs a test writer subscriber, filtered by `RUST_LOG`. Only the first
/// call in a process has an effect.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
