//! `folio-seed` -- one-shot database seeding utility.
//!
//! Clears the projects table and repopulates it from a fixed sample set.
//! The sample records are an explicit constant input to this reset-and-
//! populate run; nothing else in the workspace depends on them.
//!
//! # Environment variables
//!
//! | Variable       | Required | Description                  |
//! |----------------|----------|------------------------------|
//! | `DATABASE_URL` | yes      | PostgreSQL connection string |

use folio_db::models::project::CreateProject;
use folio_db::repositories::ProjectRepo;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Sample portfolio entries inserted on every run.
struct SeedProject {
    title: &'static str,
    description: &'static str,
    tech_stack: &'static [&'static str],
    github_link: &'static str,
}

const SEED_PROJECTS: &[SeedProject] = &[
    SeedProject {
        title: "Brain Tumor Detection",
        description: "A machine learning application that uses deep learning to detect \
                      brain tumors from MRI scans with high accuracy. Implements CNN \
                      architecture for medical image classification.",
        tech_stack: &["Python", "TensorFlow", "Keras", "NumPy", "OpenCV"],
        github_link: "https://github.com/yourusername/brain-tumor-detection",
    },
    SeedProject {
        title: "Real-Time Face Recognition System",
        description: "An advanced computer vision system that performs real-time face \
                      detection and recognition using OpenCV. Features include face \
                      tracking, recognition accuracy optimization, and live video \
                      processing.",
        tech_stack: &["Python", "OpenCV", "NumPy", "dlib"],
        github_link: "https://github.com/yourusername/face-recognition-system",
    },
];

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_seed=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| {
        tracing::error!("DATABASE_URL environment variable is required");
        std::process::exit(1);
    });

    if let Err(err) = seed(&database_url).await {
        tracing::error!(error = %err, "Seeding failed");
        std::process::exit(1);
    }
}

/// Connect, migrate, clear, and repopulate.
async fn seed(database_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    let pool = folio_db::create_pool(database_url).await?;
    folio_db::run_migrations(&pool).await?;

    tracing::info!("Clearing existing projects");
    let cleared = ProjectRepo::delete_all(&pool).await?;
    tracing::info!(cleared, "Projects table cleared");

    for sample in SEED_PROJECTS {
        let input = CreateProject {
            title: sample.title.to_string(),
            description: sample.description.to_string(),
            tech_stack: sample.tech_stack.iter().map(|s| s.to_string()).collect(),
            github_link: sample.github_link.to_string(),
        };
        let project = ProjectRepo::create(&pool, &input).await?;
        tracing::info!(id = project.id, title = %project.title, "Seeded project");
    }

    tracing::info!(count = SEED_PROJECTS.len(), "Database seeded successfully");
    Ok(())
}
