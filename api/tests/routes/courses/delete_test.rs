#[cfg(test)]
mod tests {
    use crate::helpers::app::make_test_app;
    use api::auth::generate_jwt;
    use axum::{
        body::Body as AxumBody,
        http::{Request, StatusCode},
    };
    use chrono::Utc;
    use db::models::course::{
        ActiveModel as CourseActiveModel, Entity as CourseEntity, Model as CourseModel,
    };
    use db::models::course_user::Model as EnrollmentModel;
    use db::models::user::{ActiveModel as UserActiveModel, Model as UserModel};
    use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    async fn insert_admin(db: &DatabaseConnection) -> UserModel {
        UserActiveModel {
            first_name: Set("Test".into()),
            last_name: Set("Admin".into()),
            email: Set("admin@test.com".into()),
            gpa: Set(4.0),
            password_hash: Set(UserModel::hash_password("password1").unwrap()),
            is_admin: Set(true),
            school_id: Set("tadmin0001".into()),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
    }

    async fn insert_course(db: &DatabaseConnection) -> CourseModel {
        CourseActiveModel {
            name: Set("Intro to Databases".into()),
            course_number: Set("CS240".into()),
            credit_hours: Set(3),
            semester_id: Set(1),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
    }

    async fn get_json_body(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_delete_course_removes_enrollments() {
        let (app, db) = make_test_app().await;
        let admin = insert_admin(&db).await;
        let course = insert_course(&db).await;
        EnrollmentModel::enroll(&db, admin.id, course.id).await.unwrap();

        let (token, _) = generate_jwt(admin.id, admin.is_admin);
        let req = Request::builder()
            .method("DELETE")
            .uri("/api/course")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(AxumBody::from(json!({ "id": course.id }).to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["id"], course.id);

        assert!(
            CourseEntity::find_by_id(course.id)
                .one(&db)
                .await
                .unwrap()
                .is_none()
        );
        let enrollments = EnrollmentModel::find_for_course(&db, course.id)
            .await
            .unwrap();
        assert!(enrollments.is_empty());
    }

    #[tokio::test]
    async fn test_delete_missing_course_returns_not_found() {
        let (app, db) = make_test_app().await;
        let admin = insert_admin(&db).await;

        let (token, _) = generate_jwt(admin.id, admin.is_admin);
        let req = Request::builder()
            .method("DELETE")
            .uri("/api/course")
            .header("Authorization", format!("Bearer {}", token))
            .header("Content-Type", "application/json")
            .body(AxumBody::from(json!({ "id": 999 }).to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "No course with that id exists.");
    }
}
