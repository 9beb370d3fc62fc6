//! Dashboard aggregates.

use samaj_core::entities::{ChokhlaDashboard, DashboardStats, VillageDashboard};

use crate::{ApiClient, error::ApiError, segment};

impl ApiClient {
    /// Society-wide counters shown to super admins.
    ///
    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get("/api/dashboard/stats").await
    }

    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn chokhla_dashboard(&self, chokhla_id: &str) -> Result<ChokhlaDashboard, ApiError> {
        self.get(&format!("/api/dashboard/chokhla/{}", segment(chokhla_id)))
            .await
    }

    /// # Errors
    ///
    /// Returns any error from the request wrapper.
    pub async fn village_dashboard(&self, village_id: &str) -> Result<VillageDashboard, ApiError> {
        self.get(&format!("/api/dashboard/village/{}", segment(village_id)))
            .await
    }
}
