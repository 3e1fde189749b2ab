use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::{
    auth::extractor::AuthUser,
    error::ApiError,
    projects::repo::{Project, ProjectStatus},
    state::AppState,
    users::repo::User,
};

use super::dto::{Activity, ChartData, DashboardData, DashboardMetrics};

// Demo placeholders shown while the corresponding table is still empty.
const PLACEHOLDER_TOTAL_USERS: i64 = 42;
const PLACEHOLDER_ACTIVE_PROJECTS: i64 = 15;
const PLACEHOLDER_COMPLETED_PROJECTS: i64 = 28;
const PLACEHOLDER_PAUSED_PROJECTS: i64 = 3;
const PLACEHOLDER_MONTHLY_REVENUE: f64 = 48750.50;

pub fn router() -> Router<AppState> {
    Router::new().route("/dashboard/metrics", get(get_dashboard_metrics))
}

/// Fallback policy for demo dashboards: a real count wins as soon as there
/// is one, an empty table shows the documented placeholder.
fn count_or_placeholder(count: i64, placeholder: i64) -> i64 {
    if count > 0 {
        count
    } else {
        placeholder
    }
}

#[instrument(skip(state, _auth))]
async fn get_dashboard_metrics(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<DashboardData>, ApiError> {
    let total_users = User::count(&state.db).await?;
    let active = Project::count_by_status(&state.db, ProjectStatus::Active).await?;
    let completed = Project::count_by_status(&state.db, ProjectStatus::Completed).await?;
    let paused = Project::count_by_status(&state.db, ProjectStatus::Paused).await?;

    let metrics = DashboardMetrics {
        total_users: count_or_placeholder(total_users, PLACEHOLDER_TOTAL_USERS),
        active_projects: count_or_placeholder(active, PLACEHOLDER_ACTIVE_PROJECTS),
        completed_projects: count_or_placeholder(completed, PLACEHOLDER_COMPLETED_PROJECTS),
        monthly_revenue: PLACEHOLDER_MONTHLY_REVENUE,
    };

    // Fixed six-month demo series; no historical table backs this.
    let user_growth = ChartData {
        labels: vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
        data: vec![10.0, 15.0, 22.0, 28.0, 35.0, 42.0],
    };

    let project_status = BTreeMap::from([
        ("active", count_or_placeholder(active, PLACEHOLDER_ACTIVE_PROJECTS)),
        (
            "completed",
            count_or_placeholder(completed, PLACEHOLDER_COMPLETED_PROJECTS),
        ),
        ("paused", count_or_placeholder(paused, PLACEHOLDER_PAUSED_PROJECTS)),
    ]);

    let recent_activities = vec![
        Activity {
            id: 1,
            user: "Rafael García",
            action: "Created new project",
            project: "ERP Module",
            time: "2 hours ago",
        },
        Activity {
            id: 2,
            user: "Ana López",
            action: "Completed task",
            project: "Dashboard UI",
            time: "4 hours ago",
        },
        Activity {
            id: 3,
            user: "Carlos Ruiz",
            action: "Updated user profile",
            project: "User Management",
            time: "6 hours ago",
        },
    ];

    Ok(Json(DashboardData {
        metrics,
        user_growth,
        project_status,
        recent_activities,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_count_wins_over_placeholder() {
        assert_eq!(count_or_placeholder(7, PLACEHOLDER_TOTAL_USERS), 7);
        assert_eq!(count_or_placeholder(1, PLACEHOLDER_PAUSED_PROJECTS), 1);
    }

    #[test]
    fn empty_table_falls_back_to_placeholder() {
        assert_eq!(
            count_or_placeholder(0, PLACEHOLDER_TOTAL_USERS),
            PLACEHOLDER_TOTAL_USERS
        );
    }
}
