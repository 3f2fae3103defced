//! Seed the teacher directory used to resolve `teacher_username`.
//!
//! Usage: seed-teachers --teacher USERNAME=DISPLAY_NAME [--teacher ...]
//!   Existing usernames get their display name refreshed.

use clap::Parser;

use school_announcements_api::{db, models::teacher::Teacher, store::PgTeacherDirectory};

#[derive(Parser)]
#[command(
    name = "seed-teachers",
    about = "Insert or update teachers in the announcements database"
)]
struct Args {
    /// Teacher to upsert, as USERNAME=DISPLAY_NAME (repeatable)
    #[arg(long = "teacher", value_parser = parse_teacher, required = true)]
    teachers: Vec<Teacher>,

    /// Maximum database connections for this run
    #[arg(long, default_value_t = 2)]
    max_connections: u32,
}

fn parse_teacher(raw: &str) -> Result<Teacher, String> {
    let (username, display_name) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected USERNAME=DISPLAY_NAME, got '{raw}'"))?;
    let username = username.trim();
    let display_name = display_name.trim();
    if username.is_empty() || display_name.is_empty() {
        return Err(format!("username and display name must not be empty in '{raw}'"));
    }
    Ok(Teacher {
        username: username.to_string(),
        display_name: display_name.to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args = Args::parse();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable not set"))?;

    let pool = db::create_pool(&database_url, args.max_connections).await?;
    db::run_migrations(&pool).await?;

    let directory = PgTeacherDirectory::new(pool);
    for teacher in &args.teachers {
        let saved = directory.upsert(teacher).await?;
        tracing::info!("Seeded teacher {} ({})", saved.username, saved.display_name);
    }

    tracing::info!("Seeded {} teachers", args.teachers.len());
    Ok(())
}
