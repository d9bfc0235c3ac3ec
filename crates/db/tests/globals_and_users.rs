//! Repository tests for `globals` and `users` against a real database.

use sava_db::models::user::CreateUser;
use sava_db::repositories::{GlobalRepo, UserRepo};
use serde_json::json;
use sqlx::PgPool;

fn new_user(email: &str) -> CreateUser {
    CreateUser {
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        role: "admin".to_string(),
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_upsert_twice_keeps_one_row(pool: PgPool) {
    assert!(GlobalRepo::find(&pool, "landing").await.unwrap().is_none());

    let user = UserRepo::create(&pool, &new_user("admin@sava.test"))
        .await
        .unwrap();

    let first = GlobalRepo::upsert(
        &pool,
        "landing",
        &json!({ "hero": { "heading": "Uno" } }),
        None,
    )
    .await
    .unwrap();
    let second = GlobalRepo::upsert(
        &pool,
        "landing",
        &json!({ "hero": { "heading": "Dos" } }),
        Some(user.id),
    )
    .await
    .unwrap();

    assert_eq!(second.created_at, first.created_at);
    assert!(second.updated_at >= first.updated_at);
    assert_eq!(second.updated_by, Some(user.id));

    let stored = GlobalRepo::find(&pool, "landing")
        .await
        .unwrap()
        .expect("document should exist");
    assert_eq!(stored.data["hero"]["heading"], "Dos");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM globals")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_global_slug_violates_check(pool: PgPool) {
    let err = GlobalRepo::upsert(&pool, "footer", &json!({}), None)
        .await
        .expect_err("only landing and seo are valid slugs");
    assert_eq!(
        err.as_database_error().and_then(|e| e.code()).as_deref(),
        Some("23514")
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_email_lookup_is_case_insensitive(pool: PgPool) {
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 0);

    let created = UserRepo::create(&pool, &new_user("Admin@Sava.test"))
        .await
        .unwrap();
    assert!(created.is_active);
    assert_eq!(UserRepo::count(&pool).await.unwrap(), 1);

    let found = UserRepo::find_by_email(&pool, "admin@SAVA.TEST")
        .await
        .unwrap()
        .expect("lookup should ignore case");
    assert_eq!(found.id, created.id);

    assert!(UserRepo::find_by_email(&pool, "other@sava.test")
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_email_violates_unique(pool: PgPool) {
    UserRepo::create(&pool, &new_user("admin@sava.test"))
        .await
        .unwrap();
    let err = UserRepo::create(&pool, &new_user("admin@sava.test"))
        .await
        .expect_err("duplicate email must be rejected");

    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.code().as_deref(), Some("23505"));
    assert_eq!(db_err.constraint(), Some("uq_users_email"));
}
