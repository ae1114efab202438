use crate::client::SignupClient;
use crate::controller::Dashboard;
use crate::interval::Interval;
use crate::models::DashboardView;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub client: SignupClient,
    pub dashboard: Arc<Mutex<Dashboard>>,
}

impl AppState {
    pub fn new(client: SignupClient) -> Self {
        Self {
            client,
            dashboard: Arc::new(Mutex::new(Dashboard::new())),
        }
    }

    /// Switches to `interval`, fetches once, and folds the result in.
    ///
    /// The lock is released while the request is in flight; the ticket decides
    /// whether the response is still wanted when it lands.
    pub async fn select(&self, interval: Interval) -> DashboardView {
        let ticket = self.dashboard.lock().await.select(interval);
        let result = self.client.fetch_daily().await;

        let mut dashboard = self.dashboard.lock().await;
        match result {
            Ok(records) => {
                dashboard.apply(ticket, &records);
            }
            Err(err) => dashboard.fail(ticket, &err),
        }
        dashboard.snapshot()
    }

    pub async fn view(&self) -> DashboardView {
        self.dashboard.lock().await.snapshot()
    }
}
