use sqlx::PgPool;
use tracing::info;

use crate::auth::password::hash_password;
use crate::projects::repo::{Project, ProjectPriority, ProjectStatus};
use crate::users::repo::User;

/// Seed the database with demo data. Idempotent: a single existing user
/// row means seeding already happened (or real data exists) and the whole
/// step is skipped.
pub async fn seed_data(db: &PgPool) -> anyhow::Result<()> {
    let existing = User::count(db).await?;
    if existing > 0 {
        info!(existing, "database already has users, skipping seed");
        return Ok(());
    }

    info!("seeding database with sample data");

    let admin_hash = hash_password("admin123")?;
    let admin_id: i64 = sqlx::query_scalar(
        "INSERT INTO users (email, username, full_name, password_hash, is_admin) \
         VALUES ($1, $2, $3, $4, TRUE) RETURNING id",
    )
    .bind("admin@smartadmin.com")
    .bind("admin")
    .bind("Administrator")
    .bind(&admin_hash)
    .fetch_one(db)
    .await?;

    let demo_users = [
        (
            "rafael.garcia@example.com",
            "rafael",
            "Rafael García - Tech Lead Guadalajara",
        ),
        (
            "ana.lopez@example.com",
            "ana",
            "Ana López - Frontend Developer",
        ),
        (
            "carlos.ruiz@example.com",
            "carlos",
            "Carlos Ruiz - Backend Developer",
        ),
        (
            "maria.gonzalez@example.com",
            "maria",
            "María González - UX Designer",
        ),
    ];
    for (email, username, full_name) in demo_users {
        let hash = hash_password("password123")?;
        User::create(db, email, username, full_name, &hash, true).await?;
    }

    let demo_projects = [
        (
            "ERP Gubernamental",
            "Sistema ERP especializado en contaduría gubernamental desarrollado en Guadalajara con metodologías Agile",
            ProjectStatus::Active,
            ProjectPriority::High,
        ),
        (
            "SmartAdmin Dashboard",
            "Panel de métricas y analytics en tiempo real con Axum + React + PostgreSQL",
            ProjectStatus::Active,
            ProjectPriority::High,
        ),
        (
            "Mobile App Flutter",
            "Aplicación móvil para gestión de tareas administrativas con Flutter",
            ProjectStatus::Completed,
            ProjectPriority::Medium,
        ),
        (
            "API Gateway Microservice",
            "Microservicio para gestión centralizada de APIs con Docker y CI/CD",
            ProjectStatus::Active,
            ProjectPriority::Medium,
        ),
        (
            "Tech Lead Portfolio",
            "Proyecto showcase para demostrar habilidades de liderazgo técnico y stack moderno",
            ProjectStatus::Active,
            ProjectPriority::High,
        ),
        (
            "Legacy System Migration",
            "Migración de sistema legacy en VB.NET a arquitectura moderna con microservicios",
            ProjectStatus::Paused,
            ProjectPriority::Low,
        ),
    ];
    for (name, description, status, priority) in demo_projects {
        Project::create(db, name, Some(description), status, priority, admin_id).await?;
    }

    info!("sample data seeded, admin credentials admin@smartadmin.com / admin123");
    Ok(())
}
