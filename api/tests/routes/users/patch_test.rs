#[cfg(test)]
mod tests {
    use crate::helpers::app::make_test_app;
    use api::auth::generate_jwt;
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use chrono::Utc;
    use db::models::user::{ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel};
    use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    struct TestData {
        admin_user: UserModel,
        non_admin_user: UserModel,
    }

    async fn insert_user(
        db: &DatabaseConnection,
        email: &str,
        school_id: &str,
        admin: bool,
    ) -> UserModel {
        UserActiveModel {
            first_name: Set("Test".into()),
            last_name: Set("User".into()),
            email: Set(email.into()),
            gpa: Set(4.0),
            password_hash: Set(UserModel::hash_password("password1").unwrap()),
            is_admin: Set(admin),
            school_id: Set(school_id.into()),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
    }

    async fn setup_test_data(db: &DatabaseConnection) -> TestData {
        TestData {
            admin_user: insert_user(db, "admin@test.com", "tuser0001", true).await,
            non_admin_user: insert_user(db, "user@test.com", "tuser0002", false).await,
        }
    }

    async fn get_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_update_self_rehashes_password() {
        let (app, db) = make_test_app().await;
        let data = setup_test_data(&db).await;

        let (token, _) = generate_jwt(data.non_admin_user.id, data.non_admin_user.is_admin);
        let req_body = json!({ "password": "brand-new-pw", "preferred_name": "Adie" });

        let req = Request::builder()
            .method("PATCH")
            .uri("/api/user")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(AxumBody::from(req_body.to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["preferred_name"], "Adie");
        assert!(json["data"].get("password").is_none());

        let stored = UserEntity::find_by_id(data.non_admin_user.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        // the stored value is a hash, never the raw request value
        assert_ne!(stored.password_hash, "brand-new-pw");
        assert!(stored.verify_password("brand-new-pw"));
        assert!(!stored.verify_password("password1"));
    }

    #[tokio::test]
    async fn test_update_self_preserves_omitted_fields() {
        let (app, db) = make_test_app().await;
        let data = setup_test_data(&db).await;

        let (token, _) = generate_jwt(data.non_admin_user.id, data.non_admin_user.is_admin);
        let req = Request::builder()
            .method("PATCH")
            .uri("/api/user")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(AxumBody::from(json!({ "first_name": "Renamed" }).to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["first_name"], "Renamed");
        assert_eq!(json["data"]["last_name"], "User");
        assert_eq!(json["data"]["email"], "user@test.com");
    }

    #[tokio::test]
    async fn test_update_self_requires_auth() {
        let (app, _db) = make_test_app().await;

        let req = Request::builder()
            .method("PATCH")
            .uri("/api/user")
            .header("Content-Type", "application/json")
            .body(AxumBody::from(json!({ "first_name": "Nobody" }).to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_admin_update_demotes_with_explicit_false() {
        let (app, db) = make_test_app().await;
        let data = setup_test_data(&db).await;
        let target = insert_user(&db, "other.admin@test.com", "tuser0003", true).await;

        let (token, _) = generate_jwt(data.admin_user.id, data.admin_user.is_admin);
        let req = Request::builder()
            .method("PATCH")
            .uri(format!("/api/user/{}", target.id))
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(AxumBody::from(json!({ "is_admin": false }).to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["is_admin"], false);
        assert_eq!(json["data"]["email"], "other.admin@test.com");
    }

    #[tokio::test]
    async fn test_admin_update_email_conflict() {
        let (app, db) = make_test_app().await;
        let data = setup_test_data(&db).await;

        let (token, _) = generate_jwt(data.admin_user.id, data.admin_user.is_admin);
        let req = Request::builder()
            .method("PATCH")
            .uri(format!("/api/user/{}", data.non_admin_user.id))
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(AxumBody::from(
                json!({ "email": "admin@test.com" }).to_string(),
            ))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "A user with that email already exists.");
    }

    #[tokio::test]
    async fn test_admin_update_missing_user_returns_not_found() {
        let (app, db) = make_test_app().await;
        let data = setup_test_data(&db).await;

        let (token, _) = generate_jwt(data.admin_user.id, data.admin_user.is_admin);
        let req = Request::builder()
            .method("PATCH")
            .uri("/api/user/424242")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(AxumBody::from(json!({ "first_name": "Ghost" }).to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "No account found.");
    }

    #[tokio::test]
    async fn test_admin_update_forbidden_as_non_admin() {
        let (app, db) = make_test_app().await;
        let data = setup_test_data(&db).await;

        let (token, _) = generate_jwt(data.non_admin_user.id, data.non_admin_user.is_admin);
        let req = Request::builder()
            .method("PATCH")
            .uri(format!("/api/user/{}", data.admin_user.id))
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(AxumBody::from(json!({ "is_admin": true }).to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
