use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::repo::{Project, ProjectPriority, ProjectStatus};

#[derive(Debug, Deserialize)]
pub struct ProjectCreate {
    pub name: String,
    pub description: Option<String>,
    #[serde(default = "default_status")]
    pub status: ProjectStatus,
    #[serde(default = "default_priority")]
    pub priority: ProjectPriority,
    pub owner_id: i64,
}

fn default_status() -> ProjectStatus {
    ProjectStatus::Active
}

fn default_priority() -> ProjectPriority {
    ProjectPriority::Medium
}

/// Partial update: absent fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct ProjectUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub status: Option<ProjectStatus>,
    pub priority: Option<ProjectPriority>,
}

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: ProjectStatus,
    pub priority: ProjectPriority,
    pub owner_id: Option<i64>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            description: p.description,
            status: p.status,
            priority: p.priority,
            owner_id: p.owner_id,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_defaults_to_active_medium() {
        let req: ProjectCreate =
            serde_json::from_str(r#"{"name":"ERP Module","owner_id":1}"#).unwrap();
        assert_eq!(req.status, ProjectStatus::Active);
        assert_eq!(req.priority, ProjectPriority::Medium);
        assert!(req.description.is_none());
    }

    #[test]
    fn status_and_priority_use_lowercase_wire_names() {
        let req: ProjectCreate = serde_json::from_str(
            r#"{"name":"X","owner_id":1,"status":"paused","priority":"high"}"#,
        )
        .unwrap();
        assert_eq!(req.status, ProjectStatus::Paused);
        assert_eq!(req.priority, ProjectPriority::High);
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Completed).unwrap(),
            r#""completed""#
        );
    }
}
