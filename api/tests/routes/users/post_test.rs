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
    async fn test_create_user_success_as_admin() {
        let (app, db) = make_test_app().await;
        let data = setup_test_data(&db).await;

        let (token, _) = generate_jwt(data.admin_user.id, data.admin_user.is_admin);
        let req_body = json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@x.edu",
            "password": "p1secret"
        });

        let req = Request::builder()
            .method("POST")
            .uri("/api/user")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(AxumBody::from(req_body.to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["first_name"], "Ada");
        assert_eq!(json["data"]["gpa"], 4.0);
        assert_eq!(json["data"]["is_admin"], false);
        assert!(
            json["data"]["school_id"]
                .as_str()
                .unwrap()
                .starts_with("alovelace")
        );
        // the password never appears in any form
        assert!(json["data"].get("password").is_none());
        assert!(json["data"].get("password_hash").is_none());

        let stored = UserModel::find_by_email(&db, "ada@x.edu")
            .await
            .unwrap()
            .unwrap();
        assert!(stored.verify_password("p1secret"));
    }

    #[tokio::test]
    async fn test_create_user_email_conflict_writes_nothing() {
        let (app, db) = make_test_app().await;
        let data = setup_test_data(&db).await;

        let (token, _) = generate_jwt(data.admin_user.id, data.admin_user.is_admin);
        let req_body = json!({
            "first_name": "Copy",
            "last_name": "Cat",
            "email": data.non_admin_user.email,
            "password": "p1secret"
        });

        let req = Request::builder()
            .method("POST")
            .uri("/api/user")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(AxumBody::from(req_body.to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "A user with that email already exists.");

        let count = UserEntity::find().all(&db).await.unwrap().len();
        assert_eq!(count, 2);
    }

    #[tokio::test]
    async fn test_create_user_validation_failure() {
        let (app, db) = make_test_app().await;
        let data = setup_test_data(&db).await;

        let (token, _) = generate_jwt(data.admin_user.id, data.admin_user.is_admin);
        let req_body = json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "not-an-email",
            "password": "p1"
        });

        let req = Request::builder()
            .method("POST")
            .uri("/api/user")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(AxumBody::from(req_body.to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_create_user_forbidden_as_non_admin() {
        let (app, db) = make_test_app().await;
        let data = setup_test_data(&db).await;

        let (token, _) = generate_jwt(data.non_admin_user.id, data.non_admin_user.is_admin);
        let req_body = json!({
            "first_name": "Blocked",
            "last_name": "User",
            "email": "blocked@test.com",
            "password": "p1secret"
        });

        let req = Request::builder()
            .method("POST")
            .uri("/api/user")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(AxumBody::from(req_body.to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
