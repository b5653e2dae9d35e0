use anyhow::Context;
use std::sync::Arc;

use crate::module::{InitCtx, Module};

/// Module registry driving the lifecycle of every registered module.
///
/// Modules are initialized and started in registration order and stopped in
/// reverse order.
pub struct ModuleRegistry {
    modules: Vec<Arc<dyn Module>>,
}

impl ModuleRegistry {
    /// Create a new module registry
    pub fn new() -> Self {
        Self {
            modules: Vec::new(),
        }
    }

    /// Register a module with the registry
    pub fn register(&mut self, module: Arc<dyn Module>) {
        tracing::debug!(module = module.name(), "module registered");
        self.modules.push(module);
    }

    /// Get all registered modules in registration order
    pub fn modules(&self) -> impl Iterator<Item = &Arc<dyn Module>> {
        self.modules.iter()
    }

    /// Number of registered modules
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Initialize every module
    pub async fn init_modules(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!("initializing {} modules", self.modules.len());

        for module in &self.modules {
            tracing::info!(module = module.name(), "initializing module");

            module
                .init(ctx)
                .await
                .with_context(|| format!("failed to initialize module '{}'", module.name()))?;
        }

        Ok(())
    }

    /// Start every module
    pub async fn start_modules(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!("starting {} modules", self.modules.len());

        for module in &self.modules {
            tracing::info!(module = module.name(), "starting module");

            module
                .start(ctx)
                .await
                .with_context(|| format!("failed to start module '{}'", module.name()))?;
        }

        Ok(())
    }

    /// Stop every module (reverse order)
    pub async fn stop_modules(&self) -> anyhow::Result<()> {
        tracing::info!("stopping {} modules", self.modules.len());

        for module in self.modules.iter().rev() {
            tracing::info!(module = module.name(), "stopping module");

            module
                .stop()
                .await
                .with_context(|| format!("failed to stop module '{}'", module.name()))?;
        }

        Ok(())
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use std::sync::Mutex;

    struct TestModule {
        name: &'static str,
        journal: Arc<Mutex<Vec<String>>>,
    }

    impl TestModule {
        fn record(&self, phase: &str) {
            self.journal
                .lock()
                .unwrap()
                .push(format!("{phase}:{}", self.name));
        }
    }

    #[async_trait::async_trait]
    impl Module for TestModule {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
            self.record("init");
            Ok(())
        }

        async fn start(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
            self.record("start");
            Ok(())
        }

        async fn stop(&self) -> anyhow::Result<()> {
            self.record("stop");
            Ok(())
        }
    }

    struct FailingModule;

    #[async_trait::async_trait]
    impl Module for FailingModule {
        fn name(&self) -> &'static str {
            "broken"
        }

        async fn init(&self, _ctx: &InitCtx<'_>) -> anyhow::Result<()> {
            anyhow::bail!("store unreachable")
        }
    }

    #[test]
    fn test_module_registry_creation() {
        let registry = ModuleRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[tokio::test]
    async fn test_module_lifecycle_order() {
        let journal = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ModuleRegistry::new();
        for name in ["first", "second"] {
            registry.register(Arc::new(TestModule {
                name,
                journal: journal.clone(),
            }));
        }

        let settings = Settings::default();
        let ctx = InitCtx {
            settings: &settings,
        };

        registry.init_modules(&ctx).await.unwrap();
        registry.start_modules(&ctx).await.unwrap();
        registry.stop_modules().await.unwrap();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.modules().map(|m| m.name()).collect::<Vec<_>>(),
            vec!["first", "second"]
        );
        assert_eq!(
            *journal.lock().unwrap(),
            vec![
                "init:first",
                "init:second",
                "start:first",
                "start:second",
                "stop:second",
                "stop:first",
            ]
        );
    }

    #[tokio::test]
    async fn test_init_failure_names_module() {
        let mut registry = ModuleRegistry::new();
        registry.register(Arc::new(FailingModule));

        let settings = Settings::default();
        let ctx = InitCtx {
            settings: &settings,
        };

        let err = registry.init_modules(&ctx).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to initialize module 'broken'");
    }
}
