use std::sync::Arc;

use course_outline_server::{
    models::domain::SessionUser,
    repositories::{InMemoryUserRepository, UserRepository},
};

async fn assert_upsert_contract(repo: &dyn UserRepository) {
    assert!(repo.find_by_id("u1").await.unwrap().is_none());

    let saved = repo
        .upsert(SessionUser::new("u1", "Ann", "a@x.com"))
        .await
        .unwrap();
    assert_eq!(saved.id, "u1");

    repo.upsert(SessionUser::new("u1", "Ann", "ann@new.example"))
        .await
        .unwrap();
    let found = repo.find_by_id("u1").await.unwrap().unwrap();
    assert_eq!(found.email, "ann@new.example");
}

#[tokio::test]
async fn test_in_memory_repository_upsert_contract() {
    let repo = InMemoryUserRepository::new();
    assert_upsert_contract(&repo).await;
}

#[tokio::test]
async fn test_in_memory_repository_concurrent_logins() {
    let repo = Arc::new(InMemoryUserRepository::new());

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let repo = repo.clone();
            tokio::spawn(async move {
                repo.upsert(SessionUser::new(
                    &format!("user-{}", i % 8),
                    "Visitor",
                    "v@x.com",
                ))
                .await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(repo.len().await, 8);
    for i in 0..8 {
        let id = format!("user-{}", i);
        assert!(repo.find_by_id(&id).await.unwrap().is_some());
    }
}
