use serenewings::server::{config::Config, model::app::AppState};
use serenewings_test_utils::TestContext;

/// Builds application state whose email and auth clients point at the test's mock server.
pub trait TestContextExt {
    fn app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn app_state(&self) -> AppState {
        let config =
            Config::from_lookup(|key| self.env_var(key)).expect("test configuration is complete");

        AppState::new(self.db.clone(), &config).expect("failed to build HTTP client")
    }
}
