//
//  catchtrend
//  tests/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Client tests against a mock backend.

use std::sync::Arc;

use catchtrend::auth::{AuthManager, CredentialStore};
use catchtrend::completion::{AiModel, CompletionClient, CompletionError, ReasoningConfig};
use catchtrend::{ApiClient, LoginError, NetworkError};
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

const LOGIN_PATH: &str = "/api/v1/stocks/auth/login";

fn new_client(server: &ServerGuard) -> ApiClient {
    let auth = Arc::new(AuthManager::new(CredentialStore::in_memory()));
    ApiClient::new(&server.url(), auth).unwrap()
}

async fn logged_in_client(server: &mut ServerGuard) -> ApiClient {
    server
        .mock("POST", LOGIN_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"success":true,"message":"ok","access_token":"abc123","token_type":"bearer","expires_in":3600}"#)
        .create_async()
        .await;

    let client = new_client(server);
    client.login("sui", "sui0617").await.unwrap();
    client
}

// =============================================================================
// Authentication
// =============================================================================

mod authentication {
    use super::*;

    #[tokio::test]
    async fn test_login_saves_credentials_and_authorizes_next_call() {
        let mut server = Server::new_async().await;

        let login = server
            .mock("POST", LOGIN_PATH)
            .match_header("authorization", Matcher::Missing)
            .match_body(Matcher::Json(json!({"username": "sui", "password": "sui0617"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true,"message":"ok","access_token":"abc123","token_type":"bearer","expires_in":3600}"#)
            .create_async()
            .await;

        let data = server
            .mock("GET", "/api/v1/stocks/CONL/comprehensive")
            .match_header("authorization", "Bearer abc123")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true,"message":"","timestamp":"2025-11-07T15:30:00","comprehensive_data":{"symbol":"CONL"}}"#)
            .create_async()
            .await;

        let client = new_client(&server);
        let mut changes = client.auth().subscribe();

        let response = client.login("sui", "sui0617").await.unwrap();
        assert!(response.success);
        assert_eq!(response.access_token, "abc123");

        assert!(changes.has_changed().unwrap());
        let snapshot = changes.borrow_and_update().clone();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.current_username.as_deref(), Some("sui"));

        let comprehensive = client.get_comprehensive_data("CONL", None).await.unwrap();
        assert_eq!(comprehensive.comprehensive_data.unwrap().symbol, "CONL");

        login.assert_async().await;
        data.assert_async().await;
    }

    #[tokio::test]
    async fn test_rejected_login_stores_nothing() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", LOGIN_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":false,"message":"Invalid credentials","access_token":""}"#)
            .create_async()
            .await;

        let client = new_client(&server);
        let response = client.login("sui", "wrong").await.unwrap();

        assert!(!response.success);
        assert_eq!(response.message, "Invalid credentials");
        assert!(!client.auth().is_authenticated());
        assert_eq!(client.auth().get_access_token(), None);
    }

    #[tokio::test]
    async fn test_success_without_token_is_not_a_login() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", LOGIN_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true,"message":"ok","access_token":""}"#)
            .create_async()
            .await;

        let client = new_client(&server);
        let err = client.login("sui", "sui0617").await.unwrap_err();

        assert!(matches!(err, LoginError::Network(NetworkError::Unauthorized)));
        assert!(!client.auth().is_authenticated());
        assert_eq!(client.auth().get_access_token(), None);
    }

    #[tokio::test]
    async fn test_unauthenticated_call_never_reaches_server() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = new_client(&server);
        let err = client.get_comprehensive_data("CONL", None).await.unwrap_err();

        assert!(matches!(err, NetworkError::Unauthorized));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_401_does_not_log_out() {
        let mut server = Server::new_async().await;
        let client = logged_in_client(&mut server).await;

        server
            .mock("GET", "/api/v1/stocks/CONL/comprehensive")
            .with_status(401)
            .with_body(r#"{"detail":"Token expired"}"#)
            .create_async()
            .await;

        let err = client.get_comprehensive_data("CONL", None).await.unwrap_err();
        assert!(matches!(err, NetworkError::Unauthorized));
        assert!(client.auth().is_authenticated());
        assert_eq!(client.auth().get_access_token().as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_logout_then_call_fails_fast() {
        let mut server = Server::new_async().await;
        let client = logged_in_client(&mut server).await;

        client.logout();

        let err = client
            .get_realtime(&["CONL".to_string()], 1)
            .await
            .unwrap_err();
        assert!(matches!(err, NetworkError::Unauthorized));
        assert_eq!(client.auth().current_username(), None);
    }
}

// =============================================================================
// Status Classification
// =============================================================================

mod status_classification {
    use super::*;

    async fn failing_call(status: usize, body: &str) -> NetworkError {
        let mut server = Server::new_async().await;
        let client = logged_in_client(&mut server).await;

        server
            .mock("GET", "/api/v1/stocks/CONL/comprehensive")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        client.get_comprehensive_data("CONL", None).await.unwrap_err()
    }

    #[tokio::test]
    async fn test_429_is_rate_limited() {
        let err = failing_call(429, r#"{"detail":"slow down"}"#).await;
        assert!(matches!(err, NetworkError::RateLimited));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn test_5xx_is_server_error() {
        let err = failing_call(503, "").await;
        assert!(matches!(err, NetworkError::ServerError(503)));
    }

    #[tokio::test]
    async fn test_other_status_is_http_error() {
        let err = failing_call(404, r#"{"detail":"Not Found"}"#).await;
        assert!(matches!(err, NetworkError::HttpError(404)));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_bad_json_is_decoding_error() {
        let err = failing_call(200, "<html>maintenance</html>").await;
        assert!(matches!(err, NetworkError::DecodingError(_)));
    }

    #[tokio::test]
    async fn test_rate_limit_keeps_credentials() {
        let mut server = Server::new_async().await;
        let client = logged_in_client(&mut server).await;

        server
            .mock("POST", "/api/v1/stocks/realtime")
            .with_status(429)
            .create_async()
            .await;

        let err = client
            .get_realtime(&["CONL".to_string()], 1)
            .await
            .unwrap_err();
        assert!(matches!(err, NetworkError::RateLimited));
        assert!(client.auth().is_authenticated());
    }
}

// =============================================================================
// Requests On The Wire
// =============================================================================

mod requests {
    use super::*;

    #[tokio::test]
    async fn test_kline_body() {
        let mut server = Server::new_async().await;
        let client = logged_in_client(&mut server).await;

        let mock = server
            .mock("POST", "/api/v1/stocks/kline")
            .match_body(Matcher::Json(json!({
                "symbol": "CONL",
                "period": "1d",
                "count": 100,
                "timestamp": 1762500000
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true,"message":"","timestamp":"","kline_data":{"symbol":"CONL","period":"1d","count":1,"data":[{"timestamp":1762500000,"datetime":"2025-11-07 09:30:00","open":10.0,"high":11.0,"low":9.5,"close":10.5,"volume":1200}]}}"#)
            .create_async()
            .await;

        let response = client.get_kline("CONL", "1d", 100, 1762500000).await.unwrap();
        assert!(response.success);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_minute_body_omits_missing_date() {
        let mut server = Server::new_async().await;
        let client = logged_in_client(&mut server).await;

        let mock = server
            .mock("POST", "/api/v1/stocks/minute")
            .match_body(Matcher::Json(json!({"symbol": "CONL", "timestamp": 5})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true}"#)
            .create_async()
            .await;

        client.get_minute("CONL", None, 5).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_realtime_response_keyed_by_symbol() {
        let mut server = Server::new_async().await;
        let client = logged_in_client(&mut server).await;

        server
            .mock("POST", "/api/v1/stocks/realtime")
            .match_body(Matcher::Json(json!({"symbols": ["CONL", "COIN"], "timestamp": 7})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true,"real_time_data":{"CONL":{"symbol":"CONL","current_price":31.2}}}"#)
            .create_async()
            .await;

        let symbols = vec!["CONL".to_string(), "COIN".to_string()];
        let response = client.get_realtime(&symbols, 7).await.unwrap();

        let conl = &response.real_time_data["CONL"];
        assert_eq!(conl.current_price, Some(31.2));
        assert_eq!(conl.currency, "USD");
    }

    #[tokio::test]
    async fn test_comprehensive_timestamp_query() {
        let mut server = Server::new_async().await;
        let client = logged_in_client(&mut server).await;

        let mock = server
            .mock("GET", "/api/v1/stocks/CONL/comprehensive")
            .match_query(Matcher::UrlEncoded("timestamp".into(), "42".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success":true}"#)
            .create_async()
            .await;

        client.get_comprehensive_data("CONL", Some(42)).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_analysis_latest_query() {
        let mut server = Server::new_async().await;
        let client = logged_in_client(&mut server).await;

        let mock = server
            .mock("GET", "/api/v1/analyze/conl/latest")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("kline_type".into(), "1min".into()),
                Matcher::UrlEncoded("include_market_context".into(), "false".into()),
                Matcher::UrlEncoded("_t".into(), "99".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"date":"2025-11-07","summary":{"open":30.1,"close":31.2,"prev_close":29.8,
                "day_high":32.0,"day_high_pct":7.38,"gap_open_pct":1.01,"close_change_pct":4.7,
                "text":"Gap up, held gains"},"units":[]}"#,
            )
            .create_async()
            .await;

        let analysis = client
            .get_conl_analysis_latest("1min", false, Some(99))
            .await
            .unwrap();
        assert_eq!(analysis.date, "2025-11-07");
        assert_eq!(analysis.summary.close, 31.2);
        assert!(analysis.narrative.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_analysis_by_date_path() {
        let mut server = Server::new_async().await;
        let client = logged_in_client(&mut server).await;

        let mock = server
            .mock("GET", "/api/v1/analyze/conl/2025-11-07")
            .match_query(Matcher::UrlEncoded(
                "include_market_context".into(),
                "true".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"date":"2025-11-07","summary":{"open":1,"close":1,"prev_close":1,
                "day_high":1,"day_high_pct":0,"gap_open_pct":0,"close_change_pct":0}}"#,
            )
            .create_async()
            .await;

        client
            .get_conl_analysis_by_date("2025-11-07", true, None)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_dot_path_parameter_rejected_before_sending() {
        let mut server = Server::new_async().await;
        let client = logged_in_client(&mut server).await;

        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let err = client
            .get_conl_analysis_by_date("..", false, None)
            .await
            .unwrap_err();
        assert!(matches!(err, NetworkError::InvalidUrl(_)));
        mock.assert_async().await;
    }
}

// =============================================================================
// Completion Service
// =============================================================================

mod completion {
    use super::*;

    fn completion_client(server: &ServerGuard, model: AiModel) -> CompletionClient {
        CompletionClient::new(&server.url(), Some("sk-test".to_string()), model).unwrap()
    }

    #[tokio::test]
    async fn test_chat_returns_first_choice() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::PartialJson(json!({
                "model": "gpt-4o",
                "messages": [
                    {"role": "system", "content": "Be brief."},
                    {"role": "user", "content": "Summarize CONL today."}
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"c1","object":"chat.completion","created":1,"model":"gpt-4o",
                "choices":[{"index":0,"message":{"role":"assistant","content":"Up 4.7%."},"finish_reason":"stop"}],
                "usage":{"prompt_tokens":12,"completion_tokens":4,"total_tokens":16}}"#)
            .create_async()
            .await;

        let client = completion_client(&server, AiModel::Gpt4o);
        let reply = client.chat("Be brief.", "Summarize CONL today.").await.unwrap();

        assert_eq!(reply, "Up 4.7%.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_chat_without_choices_is_empty_response() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let client = completion_client(&server, AiModel::Gpt5Mini);
        let err = client.chat("s", "u").await.unwrap_err();
        assert!(matches!(err, CompletionError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_insufficient_quota() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"You exceeded your current quota","type":"insufficient_quota","code":"insufficient_quota"}}"#)
            .create_async()
            .await;

        let client = completion_client(&server, AiModel::Gpt5Mini);
        let err = client.chat("s", "u").await.unwrap_err();
        assert!(matches!(err, CompletionError::InsufficientQuota));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_plain_429_is_rate_limited() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .create_async()
            .await;

        let client = completion_client(&server, AiModel::Gpt5Mini);
        let err = client.chat("s", "u").await.unwrap_err();
        assert!(matches!(
            err,
            CompletionError::Network(NetworkError::RateLimited)
        ));
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_fast() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = CompletionClient::new(&server.url(), None, AiModel::Gpt5Mini).unwrap();
        assert!(!client.has_api_key());

        let err = client.chat("s", "u").await.unwrap_err();
        assert!(matches!(
            err,
            CompletionError::Network(NetworkError::Unauthorized)
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_reasoning_answer_and_summary() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/responses")
            .match_body(Matcher::PartialJson(json!({
                "model": "o3",
                "instructions": "Answer concisely.",
                "input": "Why did CONL gap up?",
                "reasoning": {"summary": "detailed"}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"r1","object":"response","status":"completed","model":"o3","output":[
                {"type":"reasoning","summary":[{"type":"summary_text","text":"COIN rallied premarket."}]},
                {"type":"message","role":"assistant","content":[{"type":"output_text","text":"Crypto strength."}]}
            ]}"#)
            .create_async()
            .await;

        let client = completion_client(&server, AiModel::O3);
        let (answer, summary) = client
            .reasoning(
                "Answer concisely.",
                "Why did CONL gap up?",
                Some(ReasoningConfig::detailed()),
            )
            .await
            .unwrap();

        assert_eq!(answer, "Crypto strength.");
        assert_eq!(summary.as_deref(), Some("COIN rallied premarket."));
        mock.assert_async().await;
    }
}
