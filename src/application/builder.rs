use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::api::router::{AppState, AVATARS_BASE_PATH};
use crate::application::{
    mapper::AvatarMapper,
    ports::{
        AvatarRepository, BlobStore, FacultyRepository, FileNameGenerator, StudentRepository,
    },
    use_cases::{
        DownloadAvatarUseCase, FindFacultiesUseCase, ListAvatarsUseCase, UploadAvatarUseCase,
    },
};
use crate::config::Config;
use crate::infrastructure::{
    persistence::{
        PostgresAvatarRepository, PostgresFacultyRepository, PostgresStudentRepository,
    },
    storage::{LocalAvatarStore, UuidFileNameGenerator},
};

type BuildResult = Result<AppState, Box<dyn std::error::Error>>;

/// Application builder for clean dependency injection and setup
pub struct ApplicationBuilder {
    config: Config,
    pool: Option<sqlx::PgPool>,
    avatar_repo: Option<Arc<dyn AvatarRepository>>,
    student_repo: Option<Arc<dyn StudentRepository>>,
    faculty_repo: Option<Arc<dyn FacultyRepository>>,
    blob_store: Option<Arc<dyn BlobStore>>,
    name_generator: Arc<dyn FileNameGenerator>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pool: None,
            avatar_repo: None,
            student_repo: None,
            faculty_repo: None,
            blob_store: None,
            name_generator: Arc::new(UuidFileNameGenerator),
        }
    }

    /// Initialize database connection pool with retry logic
    pub async fn with_database(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        info!("Connecting to database");

        // Retry connection with exponential backoff
        let mut retries = 3;
        let mut delay = Duration::from_secs(1);
        let pool = loop {
            match PgPoolOptions::new()
                .max_connections(self.config.db_max_connections)
                .min_connections(self.config.db_min_connections)
                .acquire_timeout(Duration::from_secs(self.config.db_acquire_timeout_secs))
                .idle_timeout(Some(Duration::from_secs(self.config.db_idle_timeout_secs)))
                .max_lifetime(Some(Duration::from_secs(self.config.db_max_lifetime_secs)))
                .connect(&self.config.database_url)
                .await
            {
                Ok(pool) => break pool,
                Err(e) if retries > 0 => {
                    retries -= 1;
                    tracing::warn!(
                        "Database connection failed, retrying in {:?} ({} retries left): {}",
                        delay,
                        retries,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2; // Exponential backoff
                }
                Err(e) => {
                    tracing::error!("Failed to connect to database after retries: {}", e);
                    return Err(Box::new(e));
                }
            }
        };

        info!(
            "Database pool configured: max={}, min={}, acquire_timeout={}s",
            self.config.db_max_connections,
            self.config.db_min_connections,
            self.config.db_acquire_timeout_secs,
        );

        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to run migrations: {}", e);
                e
            })?;

        self.pool = Some(pool);
        Ok(self)
    }

    /// Initialize infrastructure layer (repositories and avatar storage)
    pub async fn with_infrastructure(mut self) -> Result<Self, Box<dyn std::error::Error>> {
        let pool = self.pool.as_ref().ok_or("Database pool not initialized")?;

        let avatar_repo: Arc<dyn AvatarRepository> =
            Arc::new(PostgresAvatarRepository::new(pool.clone()));
        let student_repo: Arc<dyn StudentRepository> =
            Arc::new(PostgresStudentRepository::new(pool.clone()));
        let faculty_repo: Arc<dyn FacultyRepository> =
            Arc::new(PostgresFacultyRepository::new(pool.clone()));

        let blob_store = Arc::new(LocalAvatarStore::with_durability(
            self.config.avatars_dir.clone(),
            self.config.durable_writes,
        ));
        // The service cannot run without its avatars directory
        blob_store.init().await.map_err(|e| {
            tracing::error!(
                "Failed to prepare avatars directory {:?}: {}",
                self.config.avatars_dir,
                e
            );
            e
        })?;
        let blob_store: Arc<dyn BlobStore> = blob_store;

        self.avatar_repo = Some(avatar_repo);
        self.student_repo = Some(student_repo);
        self.faculty_repo = Some(faculty_repo);
        self.blob_store = Some(blob_store);

        info!("Infrastructure layer initialized");
        Ok(self)
    }

    /// Replace the blob naming strategy
    pub fn with_name_generator(mut self, name_generator: Arc<dyn FileNameGenerator>) -> Self {
        self.name_generator = name_generator;
        self
    }

    /// Build application state with all use cases
    pub fn build(self) -> BuildResult {
        let pool = self.pool.ok_or("Database pool not initialized")?;
        let avatar_repo = self
            .avatar_repo
            .ok_or("Avatar repository not initialized")?;
        let student_repo = self
            .student_repo
            .ok_or("Student repository not initialized")?;
        let faculty_repo = self
            .faculty_repo
            .ok_or("Faculty repository not initialized")?;
        let blob_store = self.blob_store.ok_or("Blob store not initialized")?;

        let port = self
            .config
            .listen_port()
            .ok_or("LISTEN_ADDR does not contain a port")?;
        let mapper = AvatarMapper::new(&self.config.public_host, port, AVATARS_BASE_PATH);

        let upload_use_case = Arc::new(UploadAvatarUseCase::new(
            Arc::clone(&avatar_repo),
            Arc::clone(&student_repo),
            Arc::clone(&blob_store),
            Arc::clone(&self.name_generator),
        ));

        let download_use_case = Arc::new(DownloadAvatarUseCase::new(
            Arc::clone(&avatar_repo),
            Arc::clone(&blob_store),
        ));

        let list_use_case = Arc::new(ListAvatarsUseCase::new(
            Arc::clone(&avatar_repo),
            Arc::clone(&student_repo),
            mapper,
        ));

        let faculty_use_case = Arc::new(FindFacultiesUseCase::new(faculty_repo));

        info!("Application layer initialized");

        Ok(AppState {
            pool: Arc::new(pool),
            upload_use_case,
            download_use_case,
            list_use_case,
            faculty_use_case,
            max_avatar_bytes: self.config.max_avatar_bytes,
            allowed_origins: self.config.allowed_origins,
        })
    }
}
