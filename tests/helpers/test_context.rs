//! Test context for unified test setup
//!
//! Every context owns its own temporary data directory, so tests never see
//! each other's snapshots.

use std::sync::Once;
use GrandPrix::config::Settings;
use GrandPrix::database::DataManager;
use GrandPrix::services::ServiceFactory;
use tempfile::TempDir;

static INIT: Once = Once::new();

/// Initialize test logging once per test binary
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

/// Test configuration options
#[derive(Debug, Clone)]
pub struct TestConfig {
    pub seed: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self { seed: true }
    }
}

pub struct TestContext {
    pub temp_dir: TempDir,
    pub settings: Settings,
    pub manager: DataManager,
    pub services: ServiceFactory,
}

impl TestContext {
    /// Context with the default seed data loaded
    pub fn new() -> Self {
        Self::new_with_config(TestConfig::default())
    }

    /// Context over an empty data directory
    pub fn empty() -> Self {
        Self::new_with_config(TestConfig { seed: false })
    }

    pub fn new_with_config(config: TestConfig) -> Self {
        init_test_env();

        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut settings = Settings::default();
        settings.storage.data_dir = temp_dir.path().join("data");
        settings.seed.enabled = config.seed;

        let manager = DataManager::open(&settings).expect("Failed to open data manager");
        let services = ServiceFactory::new(&settings);

        Self {
            temp_dir,
            settings,
            manager,
            services,
        }
    }

    /// Open a second data manager over the same directory
    pub fn reopen(&self) -> DataManager {
        DataManager::open(&self.settings).expect("Failed to reopen data manager")
    }

    /// Raw snapshot contents of a collection file
    pub fn snapshot(&self, file_name: &str) -> Option<String> {
        std::fs::read_to_string(self.settings.storage.data_dir.join(file_name)).ok()
    }
}
