use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use sqlx::Row;
use std::collections::HashSet;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Compare avatar records against the files in the avatars directory
#[derive(Parser)]
struct Cli {
    #[arg(long)]
    database_url: Option<String>,

    /// Avatars directory; defaults to AVATARS_DIR, then ./avatars
    #[arg(long)]
    avatars_dir: Option<PathBuf>,

    /// Remove files that no record references
    #[arg(long)]
    delete_orphans: bool,

    /// Files modified more recently than this are never orphans; an upload
    /// writes its file before it inserts the record
    #[arg(long, default_value_t = 300)]
    min_age_secs: u64,
}

struct AvatarFile {
    path: PathBuf,
    modified: SystemTime,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let db_url = cli
        .database_url
        .or_else(|| env::var("DATABASE_URL").ok())
        .context("DATABASE_URL must be set or passed with --database-url")?;
    let avatars_dir = cli
        .avatars_dir
        .or_else(|| env::var("AVATARS_DIR").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("./avatars"));

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    let rows = sqlx::query("SELECT id, student_id, file_path FROM avatars ORDER BY id")
        .fetch_all(&pool)
        .await?;

    // Records whose file is gone; from-fs fails for these
    let mut referenced = Vec::with_capacity(rows.len());
    let mut dangling = 0usize;
    for r in rows.iter() {
        let id: i64 = r.get("id");
        let student_id: i64 = r.get("student_id");
        let file_path = PathBuf::from(r.get::<String, _>("file_path"));
        if !tokio::fs::try_exists(&file_path).await.unwrap_or(false) {
            dangling += 1;
            println!(
                "dangling record id: {}, student_id: {}, file_path: {}",
                id,
                student_id,
                file_path.display()
            );
        }
        referenced.push(file_path);
    }
    println!("Dangling records: {}", dangling);

    // Files left behind by an upload that never reached the database
    let on_disk = list_files(&avatars_dir)
        .await
        .with_context(|| format!("Failed to list {}", avatars_dir.display()))?;
    let cutoff = SystemTime::now()
        .checked_sub(Duration::from_secs(cli.min_age_secs))
        .unwrap_or(SystemTime::UNIX_EPOCH);
    let orphans = find_orphans(&on_disk, &referenced, cutoff);

    println!("Orphan files: {}", orphans.len());
    for path in orphans.iter() {
        println!("orphan: {}", path.display());
        if !cli.delete_orphans {
            continue;
        }
        // A record may have been inserted since the first scan
        if is_referenced(&pool, path).await? {
            println!("Skipped (now referenced): {}", path.display());
            continue;
        }
        tokio::fs::remove_file(path).await?;
        println!("Deleted: {}", path.display());
    }

    Ok(())
}

async fn list_files(dir: &Path) -> std::io::Result<Vec<AvatarFile>> {
    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let metadata = entry.metadata().await?;
        if metadata.is_file() {
            files.push(AvatarFile {
                path: entry.path(),
                modified: metadata.modified()?,
            });
        }
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Files whose name matches no recorded path and that were last modified
/// before `cutoff`. Names are unique within the directory, so comparing by
/// file name ignores how the root was spelled.
fn find_orphans(
    on_disk: &[AvatarFile],
    referenced: &[PathBuf],
    cutoff: SystemTime,
) -> Vec<PathBuf> {
    let referenced: HashSet<OsString> = referenced
        .iter()
        .filter_map(|path| path.file_name().map(|name| name.to_os_string()))
        .collect();

    on_disk
        .iter()
        .filter(|file| file.modified < cutoff)
        .filter(|file| {
            file.path
                .file_name()
                .map(|name| !referenced.contains(name))
                .unwrap_or(false)
        })
        .map(|file| file.path.clone())
        .collect()
}

async fn is_referenced(pool: &sqlx::PgPool, path: &Path) -> anyhow::Result<bool> {
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .with_context(|| format!("Unexpected file name {}", path.display()))?;

    let row = sqlx::query(
        "SELECT EXISTS (SELECT 1 FROM avatars \
         WHERE file_path = $1 OR right(file_path, char_length($1) + 1) = '/' || $1) AS referenced",
    )
    .bind(name)
    .fetch_one(pool)
    .await?;
    Ok(row.get("referenced"))
}
