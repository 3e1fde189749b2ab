use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
pub struct DashboardMetrics {
    pub total_users: i64,
    pub active_projects: i64,
    pub completed_projects: i64,
    pub monthly_revenue: f64,
}

#[derive(Debug, Serialize)]
pub struct ChartData {
    pub labels: Vec<&'static str>,
    pub data: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct Activity {
    pub id: i64,
    pub user: &'static str,
    pub action: &'static str,
    pub project: &'static str,
    pub time: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DashboardData {
    pub metrics: DashboardMetrics,
    pub user_growth: ChartData,
    pub project_status: BTreeMap<&'static str, i64>,
    pub recent_activities: Vec<Activity>,
}
