//! Shared fixtures for the integration tests
//!
//! In-memory record stores stand in for Postgres; avatar files go to a real
//! `LocalAvatarStore` inside a temporary directory.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

use school_registry::{
    application::{
        mapper::AvatarMapper,
        ports::{
            AvatarRepository, BlobStore, FileNameGenerator, RepositoryError, StudentRepository,
        },
        use_cases::{DownloadAvatarUseCase, ListAvatarsUseCase, UploadAvatarUseCase},
    },
    domain::{
        entities::{Avatar, NewAvatar, Student},
        value_objects::{AvatarId, StudentId},
    },
    infrastructure::storage::{LocalAvatarStore, UuidFileNameGenerator},
};

pub const TEST_HOST: &str = "localhost";
pub const TEST_PORT: u16 = 8080;

/// Avatar records kept in insertion order, IDs assigned from 1
#[derive(Default)]
pub struct InMemoryAvatarRepository {
    records: Mutex<Vec<Avatar>>,
}

impl InMemoryAvatarRepository {
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn all(&self) -> Vec<Avatar> {
        self.records.lock().clone()
    }
}

#[async_trait]
impl AvatarRepository for InMemoryAvatarRepository {
    async fn save(&self, avatar: &NewAvatar) -> Result<Avatar, RepositoryError> {
        let mut records = self.records.lock();
        let id = AvatarId::new(records.len() as i64 + 1);
        let saved = avatar.clone().into_avatar(id, Utc::now());
        records.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_student(
        &self,
        student_id: StudentId,
    ) -> Result<Option<Avatar>, RepositoryError> {
        Ok(self
            .records
            .lock()
            .iter()
            .rev()
            .find(|a| a.student_id() == student_id)
            .cloned())
    }

    async fn find_page(&self, limit: i64, offset: i64) -> Result<Vec<Avatar>, RepositoryError> {
        let offset = usize::try_from(offset).map_err(|e| RepositoryError::Internal(e.to_string()))?;
        let limit = usize::try_from(limit).map_err(|e| RepositoryError::Internal(e.to_string()))?;
        Ok(self
            .records
            .lock()
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryStudentRepository {
    students: Mutex<HashMap<StudentId, Student>>,
}

impl InMemoryStudentRepository {
    pub fn with_students(students: impl IntoIterator<Item = Student>) -> Self {
        let repo = Self::default();
        {
            let mut map = repo.students.lock();
            for student in students {
                map.insert(student.id(), student);
            }
        }
        repo
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn find_by_id(&self, id: StudentId) -> Result<Option<Student>, RepositoryError> {
        Ok(self.students.lock().get(&id).cloned())
    }

    async fn find_by_ids(&self, ids: &[StudentId]) -> Result<Vec<Student>, RepositoryError> {
        let students = self.students.lock();
        Ok(ids.iter().filter_map(|id| students.get(id).cloned()).collect())
    }
}

/// Use cases wired to in-memory records and a temporary avatars directory
pub struct TestEnvironment {
    pub avatar_repo: Arc<InMemoryAvatarRepository>,
    pub blob_store: Arc<LocalAvatarStore>,
    pub upload_use_case: Arc<UploadAvatarUseCase>,
    pub download_use_case: Arc<DownloadAvatarUseCase>,
    pub list_use_case: Arc<ListAvatarsUseCase>,
    _temp_dir: TempDir, // Keep temp dir alive
}

impl TestEnvironment {
    pub async fn new(students: Vec<Student>) -> Self {
        Self::with_name_generator(students, Arc::new(UuidFileNameGenerator)).await
    }

    pub async fn with_name_generator(
        students: Vec<Student>,
        name_generator: Arc<dyn FileNameGenerator>,
    ) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let blob_store = Arc::new(LocalAvatarStore::with_durability(
            temp_dir.path().join("avatars"),
            false,
        ));
        blob_store.init().await.expect("Failed to init avatars dir");

        let avatar_repo = Arc::new(InMemoryAvatarRepository::default());
        let student_repo: Arc<dyn StudentRepository> =
            Arc::new(InMemoryStudentRepository::with_students(students));
        let avatar_repo_dyn: Arc<dyn AvatarRepository> = avatar_repo.clone();
        let blob_store_dyn: Arc<dyn BlobStore> = blob_store.clone();

        let upload_use_case = Arc::new(UploadAvatarUseCase::new(
            Arc::clone(&avatar_repo_dyn),
            Arc::clone(&student_repo),
            Arc::clone(&blob_store_dyn),
            name_generator,
        ));
        let download_use_case = Arc::new(DownloadAvatarUseCase::new(
            Arc::clone(&avatar_repo_dyn),
            Arc::clone(&blob_store_dyn),
        ));
        let list_use_case = Arc::new(ListAvatarsUseCase::new(
            avatar_repo_dyn,
            student_repo,
            AvatarMapper::new(TEST_HOST, TEST_PORT, "/avatars"),
        ));

        Self {
            avatar_repo,
            blob_store,
            upload_use_case,
            download_use_case,
            list_use_case,
            _temp_dir: temp_dir,
        }
    }

    pub fn avatars_dir(&self) -> PathBuf {
        self.blob_store.root().to_path_buf()
    }

    /// Files currently in the avatars directory
    pub fn files_on_disk(&self) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = std::fs::read_dir(self.avatars_dir())
            .expect("Failed to read avatars dir")
            .map(|entry| entry.expect("Bad dir entry").path())
            .collect();
        files.sort();
        files
    }
}

pub fn student(id: i64, name: &str) -> Student {
    Student::new(StudentId::new(id), name, 11, None)
}

pub mod assertions {
    use std::path::Path;

    pub fn assert_file_contents(path: &Path, expected: &[u8]) {
        let actual = std::fs::read(path).expect("Avatar file missing");
        assert_eq!(actual, expected, "File {} has unexpected contents", path.display());
    }
}
