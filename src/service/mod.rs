use crate::{
    dto::{CreateMemoRequest, MemoResponse},
    repository::{MemoRepository, RepositoryError},
};

use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum MemoServiceError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("{0}")]
    Persistence(#[from] RepositoryError),
}

/// Usecase layer: validates input, then delegates to the repository.
#[derive(Clone)]
pub struct MemoService {
    repo: Arc<dyn MemoRepository>,
}

impl MemoService {
    pub fn new(repo: Arc<dyn MemoRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_memo(
        &self,
        request: CreateMemoRequest,
    ) -> Result<MemoResponse, MemoServiceError> {
        if request.content.is_empty() {
            return Err(MemoServiceError::Validation(
                "content is required".to_string(),
            ));
        }

        let memo = self
            .repo
            .create_memo(request.title, request.content)
            .await?;

        Ok(MemoResponse::from(memo))
    }

    pub async fn get_memo_by_id(
        &self,
        id: i64,
    ) -> Result<Option<MemoResponse>, MemoServiceError> {
        let memo = self.repo.get_memo_by_id(id).await?;

        Ok(memo.map(MemoResponse::from))
    }

    pub async fn get_all_memo(&self) -> Result<Vec<MemoResponse>, MemoServiceError> {
        let memos = self.repo.get_all_memo().await?;

        Ok(memos.into_iter().map(MemoResponse::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Memo;

    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records creates so tests can assert whether a write happened;
    /// optionally fails every call with a fixed store error.
    struct RecordingRepository {
        memos: Mutex<Vec<Memo>>,
        failure: Option<String>,
    }

    impl RecordingRepository {
        fn new() -> Self {
            Self {
                memos: Mutex::new(Vec::new()),
                failure: None,
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                memos: Mutex::new(Vec::new()),
                failure: Some(message.to_string()),
            }
        }

        fn create_count(&self) -> usize {
            self.memos.lock().unwrap().len()
        }

        fn check(&self) -> Result<(), RepositoryError> {
            match &self.failure {
                Some(message) => Err(message.clone().into()),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl MemoRepository for RecordingRepository {
        async fn create_memo(&self, title: String, content: String) -> Result<Memo, RepositoryError> {
            self.check()?;
            let mut memos = self.memos.lock().unwrap();
            let memo = Memo {
                id: memos.len() as i64 + 1,
                title,
                content,
                created_at: None,
                updated_at: None,
                deleted_at: None,
            };
            memos.push(memo.clone());
            Ok(memo)
        }

        async fn get_memo_by_id(&self, id: i64) -> Result<Option<Memo>, RepositoryError> {
            self.check()?;
            let memos = self.memos.lock().unwrap();
            Ok(memos.iter().find(|m| m.id == id).cloned())
        }

        async fn get_all_memo(&self) -> Result<Vec<Memo>, RepositoryError> {
            self.check()?;
            Ok(self.memos.lock().unwrap().clone())
        }
    }

    fn service_with_repo() -> (MemoService, Arc<RecordingRepository>) {
        let repo = Arc::new(RecordingRepository::new());
        (MemoService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn create_memo_assigns_id() {
        let (service, _) = service_with_repo();

        let created = service
            .create_memo(CreateMemoRequest {
                title: "Hello".to_string(),
                content: "World!".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.title, "Hello");
        assert_eq!(created.content, "World!");
    }

    #[tokio::test]
    async fn create_memo_rejects_empty_content() {
        let (service, repo) = service_with_repo();

        let err = service
            .create_memo(CreateMemoRequest {
                title: "no body".to_string(),
                content: String::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, MemoServiceError::Validation(_)));
        assert_eq!(repo.create_count(), 0);
    }

    #[tokio::test]
    async fn create_memo_surfaces_store_errors_unchanged() {
        let repo = Arc::new(RecordingRepository::failing("connection refused"));
        let service = MemoService::new(repo);

        let err = service
            .create_memo(CreateMemoRequest {
                title: "Hello".to_string(),
                content: "World!".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, MemoServiceError::Persistence(_)));
        assert_eq!(err.to_string(), "connection refused");
    }

    #[tokio::test]
    async fn get_memo_by_id_surfaces_store_errors_unchanged() {
        let repo = Arc::new(RecordingRepository::failing("connection refused"));
        let service = MemoService::new(repo);

        let err = service.get_memo_by_id(1).await.unwrap_err();

        assert!(matches!(err, MemoServiceError::Persistence(_)));
        assert_eq!(err.to_string(), "connection refused");
    }

    #[tokio::test]
    async fn get_memo_by_id_round_trips_created_memo() {
        let (service, _) = service_with_repo();

        let created = service
            .create_memo(CreateMemoRequest {
                title: "title".to_string(),
                content: "content".to_string(),
            })
            .await
            .unwrap();

        let fetched = service.get_memo_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.title, "title");
        assert_eq!(fetched.content, "content");
    }

    #[tokio::test]
    async fn get_memo_by_id_unknown_id_is_none() {
        let (service, _) = service_with_repo();

        let fetched = service.get_memo_by_id(42).await.unwrap();
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn get_all_memo_returns_creates_in_order() {
        let (service, _) = service_with_repo();

        for i in 0..3 {
            service
                .create_memo(CreateMemoRequest {
                    title: format!("memo {i}"),
                    content: format!("content {i}"),
                })
                .await
                .unwrap();
        }

        let memos = service.get_all_memo().await.unwrap();
        assert_eq!(memos.len(), 3);
        for (i, memo) in memos.iter().enumerate() {
            assert_eq!(memo.title, format!("memo {i}"));
            assert_eq!(memo.content, format!("content {i}"));
        }
    }
}
