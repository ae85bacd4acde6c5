use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    dto::{input, output},
    error::Error,
    service::{
        notifications_feed_service::NotificationsFeedService,
        notifications_service::NotificationsService,
    },
};
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/notifications", post(create_notification))
        .route(
            "/api/v1/notifications/transaction",
            post(create_transaction_notification),
        )
        .route(
            "/api/v1/notifications/earning",
            post(create_earning_notification),
        )
        .route(
            "/api/v1/notifications/system",
            post(create_system_notification),
        )
        .route("/api/v1/notifications/agent", post(create_agent_notification))
        .route(
            "/api/v1/notifications/welcome",
            post(create_welcome_notification),
        )
        .route(
            "/api/v1/notifications/low-balance",
            post(create_low_balance_notification),
        )
        .layer(application_middleware.body_limit.clone())
        .route("/api/v1/users/:user_id/notifications", get(get_notifications))
}

fn saved(saved: bool) -> Json<output::NotificationSaved> {
    Json(output::NotificationSaved { saved })
}

async fn create_notification(
    State(service): State<Arc<dyn NotificationsService>>,
    Json(body): Json<input::Notification>,
) -> Json<output::NotificationSaved> {
    let notification = output::Notification::from(body);

    saved(service.create_notification(notification).await)
}

async fn create_transaction_notification(
    State(service): State<Arc<dyn NotificationsService>>,
    Json(body): Json<input::TransactionNotification>,
) -> Json<output::NotificationSaved> {
    let result = service
        .notify_transaction(
            body.user_id,
            body.transaction_type,
            body.amount,
            body.status,
            body.additional_info,
        )
        .await;

    saved(result)
}

async fn create_earning_notification(
    State(service): State<Arc<dyn NotificationsService>>,
    Json(body): Json<input::EarningNotification>,
) -> Json<output::NotificationSaved> {
    let result = service
        .notify_earning(
            body.user_id,
            body.earning_type,
            body.amount,
            body.additional_info,
        )
        .await;

    saved(result)
}

async fn create_system_notification(
    State(service): State<Arc<dyn NotificationsService>>,
    Json(body): Json<input::SystemNotification>,
) -> Json<output::NotificationSaved> {
    let result = service
        .notify_system(body.user_id, body.title, body.message, body.notification_type)
        .await;

    saved(result)
}

async fn create_agent_notification(
    State(service): State<Arc<dyn NotificationsService>>,
    Json(body): Json<input::AgentNotification>,
) -> Json<output::NotificationSaved> {
    let result = service
        .notify_agent(body.agent_id, body.request_type, body.amount, body.user_id)
        .await;

    saved(result)
}

async fn create_welcome_notification(
    State(service): State<Arc<dyn NotificationsService>>,
    Json(body): Json<input::WelcomeNotification>,
) -> Json<output::NotificationSaved> {
    let result = service.notify_welcome(body.user_id, body.user_name).await;

    saved(result)
}

async fn create_low_balance_notification(
    State(service): State<Arc<dyn NotificationsService>>,
    Json(body): Json<input::LowBalanceNotification>,
) -> Json<output::NotificationSaved> {
    let result = service.notify_low_balance(body.user_id, body.balance).await;

    saved(result)
}

async fn get_notifications(
    State(service): State<Arc<dyn NotificationsFeedService>>,
    Path(user_id): Path<u64>,
) -> Result<Json<Value>, Error> {
    let notifications = service.find_notifications(user_id).await?;

    Ok(Json(notifications))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        dto::{NotificationType, TransactionStatus, TransactionType},
        service::{
            notifications_feed_service::MockNotificationsFeedService,
            notifications_service::MockNotificationsService,
        },
    };
    use axum::{
        body::{to_bytes, Body},
        http::{
            header::{CONTENT_LENGTH, CONTENT_TYPE},
            HeaderValue, Method, Request, StatusCode,
        },
    };
    use serde_json::json;
    use tower::ServiceExt;
    use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

    const MAX_BODY_LEN: usize = 1024;

    fn create_router(
        notifications_service: MockNotificationsService,
        notifications_feed_service: MockNotificationsFeedService,
    ) -> Router {
        let middleware = ApplicationMiddleware {
            trace: TraceLayer::new_for_http(),
            body_limit: RequestBodyLimitLayer::new(MAX_BODY_LEN),
        };
        let state = ApplicationState {
            notifications_service: Arc::new(notifications_service),
            notifications_feed_service: Arc::new(notifications_feed_service),
        };

        routing(&middleware).with_state(state)
    }

    fn post_json(uri: &str, body: String) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn response_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn create_notification_saved() {
        let mut notifications_service = MockNotificationsService::new();
        notifications_service
            .expect_create_notification()
            .withf(|notification| {
                notification.user_id == 4
                    && notification.title == "Lot sold"
                    && notification.notification_type == NotificationType::Success
            })
            .times(1)
            .returning(|_| true);
        let router = create_router(notifications_service, MockNotificationsFeedService::new());
        let body = json!({
            "user_id": 4,
            "title": "Lot sold",
            "message": "Your lot #9 was sold",
            "type": "success"
        });

        let response = router
            .oneshot(post_json("/api/v1/notifications", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, json!({"saved": true}));
    }

    #[tokio::test]
    async fn create_notification_not_saved() {
        let mut notifications_service = MockNotificationsService::new();
        notifications_service
            .expect_create_notification()
            .times(1)
            .returning(|_| false);
        let router = create_router(notifications_service, MockNotificationsFeedService::new());
        let body = json!({"user_id": 4, "title": "t", "message": "m"});

        let response = router
            .oneshot(post_json("/api/v1/notifications", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, json!({"saved": false}));
    }

    #[tokio::test]
    async fn create_notification_missing_field() {
        let mut notifications_service = MockNotificationsService::new();
        notifications_service.expect_create_notification().never();
        let router = create_router(notifications_service, MockNotificationsFeedService::new());
        let body = json!({"user_id": 4, "title": "t"});

        let response = router
            .oneshot(post_json("/api/v1/notifications", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_notification_body_too_large() {
        let mut notifications_service = MockNotificationsService::new();
        notifications_service.expect_create_notification().never();
        let router = create_router(notifications_service, MockNotificationsFeedService::new());
        let body = json!({
            "user_id": 4,
            "title": "t",
            "message": "m".repeat(MAX_BODY_LEN)
        })
        .to_string();
        let mut request = post_json("/api/v1/notifications", body.clone());
        request
            .headers_mut()
            .insert(CONTENT_LENGTH, HeaderValue::from(body.len()));

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn create_transaction_notification_saved() {
        let mut notifications_service = MockNotificationsService::new();
        notifications_service
            .expect_notify_transaction()
            .withf(|user_id, transaction_type, amount, status, additional_info| {
                *user_id == 12
                    && *transaction_type == TransactionType::Deposit
                    && *amount == 2500.0
                    && *status == TransactionStatus::Approved
                    && additional_info.as_deref() == Some("Ref: 88")
            })
            .times(1)
            .returning(|_, _, _, _, _| true);
        let router = create_router(notifications_service, MockNotificationsFeedService::new());
        let body = json!({
            "user_id": 12,
            "transaction_type": "deposit",
            "amount": 2500.0,
            "status": "approved",
            "additional_info": "Ref: 88"
        });

        let response = router
            .oneshot(post_json(
                "/api/v1/notifications/transaction",
                body.to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response_json(response).await, json!({"saved": true}));
    }

    #[tokio::test]
    async fn create_transaction_notification_unknown_status() {
        let mut notifications_service = MockNotificationsService::new();
        notifications_service.expect_notify_transaction().never();
        let router = create_router(notifications_service, MockNotificationsFeedService::new());
        let body = json!({
            "user_id": 12,
            "transaction_type": "deposit",
            "amount": 2500.0,
            "status": "lost"
        });

        let response = router
            .oneshot(post_json(
                "/api/v1/notifications/transaction",
                body.to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn create_earning_notification_saved() {
        let mut notifications_service = MockNotificationsService::new();
        notifications_service
            .expect_notify_earning()
            .times(1)
            .returning(|_, _, _, _| true);
        let router = create_router(notifications_service, MockNotificationsFeedService::new());
        let body = json!({"user_id": 12, "earning_type": "daily", "amount": 150.0});

        let response = router
            .oneshot(post_json("/api/v1/notifications/earning", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response_json(response).await, json!({"saved": true}));
    }

    #[tokio::test]
    async fn create_system_notification_default_type() {
        let mut notifications_service = MockNotificationsService::new();
        notifications_service
            .expect_notify_system()
            .withf(|_, _, _, notification_type| *notification_type == NotificationType::Info)
            .times(1)
            .returning(|_, _, _, _| true);
        let router = create_router(notifications_service, MockNotificationsFeedService::new());
        let body = json!({"user_id": 12, "title": "Maintenance", "message": "Tonight"});

        let response = router
            .oneshot(post_json("/api/v1/notifications/system", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response_json(response).await, json!({"saved": true}));
    }

    #[tokio::test]
    async fn create_agent_notification_saved() {
        let mut notifications_service = MockNotificationsService::new();
        notifications_service
            .expect_notify_agent()
            .withf(|agent_id, _, _, user_id| *agent_id == 2 && *user_id == 12)
            .times(1)
            .returning(|_, _, _, _| true);
        let router = create_router(notifications_service, MockNotificationsFeedService::new());
        let body = json!({
            "agent_id": 2,
            "request_type": "withdrawal",
            "amount": 5000.0,
            "user_id": 12
        });

        let response = router
            .oneshot(post_json("/api/v1/notifications/agent", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response_json(response).await, json!({"saved": true}));
    }

    #[tokio::test]
    async fn create_welcome_notification_saved() {
        let mut notifications_service = MockNotificationsService::new();
        notifications_service
            .expect_notify_welcome()
            .withf(|user_id, user_name| *user_id == 12 && user_name == "Awa")
            .times(1)
            .returning(|_, _| true);
        let router = create_router(notifications_service, MockNotificationsFeedService::new());
        let body = json!({"user_id": 12, "user_name": "Awa"});

        let response = router
            .oneshot(post_json("/api/v1/notifications/welcome", body.to_string()))
            .await
            .unwrap();

        assert_eq!(response_json(response).await, json!({"saved": true}));
    }

    #[tokio::test]
    async fn create_low_balance_notification_not_saved() {
        let mut notifications_service = MockNotificationsService::new();
        notifications_service
            .expect_notify_low_balance()
            .times(1)
            .returning(|_, _| false);
        let router = create_router(notifications_service, MockNotificationsFeedService::new());
        let body = json!({"user_id": 12, "balance": 25000.0});

        let response = router
            .oneshot(post_json(
                "/api/v1/notifications/low-balance",
                body.to_string(),
            ))
            .await
            .unwrap();

        assert_eq!(response_json(response).await, json!({"saved": false}));
    }

    #[tokio::test]
    async fn get_notifications_ok() {
        let mut notifications_feed_service = MockNotificationsFeedService::new();
        notifications_feed_service
            .expect_find_notifications()
            .withf(|user_id| *user_id == 12)
            .times(1)
            .returning(|_| Ok(json!([{"id": 1, "title": "Lot sold"}])));
        let router = create_router(MockNotificationsService::new(), notifications_feed_service);
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/v1/users/12/notifications")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response_json(response).await,
            json!([{"id": 1, "title": "Lot sold"}])
        );
    }

    #[tokio::test]
    async fn get_notifications_backend_down() {
        let mut notifications_feed_service = MockNotificationsFeedService::new();
        notifications_feed_service
            .expect_find_notifications()
            .times(1)
            .returning(|_| {
                Err(Error::Backend(request_client::Error::InvalidTarget(
                    "notifications".to_string(),
                )))
            });
        let router = create_router(MockNotificationsService::new(), notifications_feed_service);
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/v1/users/12/notifications")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn get_notifications_invalid_user_id() {
        let mut notifications_feed_service = MockNotificationsFeedService::new();
        notifications_feed_service.expect_find_notifications().never();
        let router = create_router(MockNotificationsService::new(), notifications_feed_service);
        let request = Request::builder()
            .method(Method::GET)
            .uri("/api/v1/users/abc/notifications")
            .body(Body::empty())
            .unwrap();

        let response = router.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
