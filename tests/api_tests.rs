use axum::http::{HeaderName, HeaderValue};
use axum_test::TestServer;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use meal_recommender::api::{create_router, AppState};
use meal_recommender::config::Config;

fn test_config(spring_url: String, return_all_slots: bool) -> Config {
    Config {
        spring_url,
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 5,
        return_all_slots,
        refetch_per_slot: false,
    }
}

fn create_test_server(config: &Config) -> TestServer {
    let state = AppState::from_config(config).unwrap();
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

fn sample_history() -> Value {
    json!([
        {
            "EATING_FOODNAME": "계란밥",
            "RECIPECODE": "R0301",
            "MEALTYPE": "아침",
            "INGREDIENT": ["계란", "밥"],
            "CALORIE": 400, "PROTEIN": 15, "FAT": 10, "CARBOHYDRATE": 60
        },
        {
            "EATING_FOODNAME": "김치계란밥",
            "RECIPECODE": "R0302",
            "MEALTYPE": "아침",
            "INGREDIENT": ["계란", "김치", "밥"],
            "CALORIE": 400, "PROTEIN": 15, "FAT": 10, "CARBOHYDRATE": 60
        },
        {
            "EATING_FOODNAME": "김치밥",
            "RECIPECODE": "R0303",
            "MEALTYPE": "아침",
            "INGREDIENT": ["김치", "밥"],
            "CALORIE": 400, "PROTEIN": 15, "FAT": 10, "CARBOHYDRATE": 60
        },
        {
            "EATING_FOODNAME": "불고기",
            "RECIPECODE": "R0500",
            "MEALTYPE": "점심",
            "INGREDIENT": ["소고기", "양파"],
            "CALORIE": 650, "PROTEIN": 35, "FAT": 25, "CARBOHYDRATE": 30
        },
        {
            "EATING_FOODNAME": "된장찌개",
            "RECIPECODE": "R0700",
            "MEALTYPE": "저녁",
            "INGREDIENT": ["된장", "두부"],
            "CALORIE": 180, "PROTEIN": 12, "FAT": 6, "CARBOHYDRATE": 15
        }
    ])
}

async fn mount_history(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/userMeals"))
        .and(query_param("id", "user-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_health_check() {
    let spring = MockServer::start().await;
    let server = create_test_server(&test_config(spring.uri(), false));

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_recommends_first_slot_and_saves_it() {
    let spring = MockServer::start().await;
    mount_history(&spring, sample_history()).await;

    Mock::given(method("POST"))
        .and(path("/saveRecommendation"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&spring)
        .await;

    let server = create_test_server(&test_config(spring.uri(), false));
    let response = server
        .get("/foodRecommend")
        .add_query_param("id", "user-1")
        .await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "recommended_foods": [{
            "MEAL_TYPE": "아침",
            "RECOMMEND_FOOD": "김치계란밥",
            "RECIPECODE": "R0302"
        }]
    }));

    let saved = spring.received_requests().await.unwrap();
    let save = saved
        .iter()
        .find(|r| r.url.path() == "/saveRecommendation")
        .unwrap();
    let body: Value = serde_json::from_slice(&save.body).unwrap();
    assert_eq!(
        body,
        json!({
            "userId": "user-1",
            "mealType": "아침",
            "foodName": "김치계란밥",
            "recipeCode": "R0302"
        })
    );
}

#[tokio::test]
async fn test_history_failure_recommends_default_meal() {
    let spring = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/userMeals"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&spring)
        .await;

    Mock::given(method("POST"))
        .and(path("/saveRecommendation"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&spring)
        .await;

    let server = create_test_server(&test_config(spring.uri(), false));
    let response = server
        .get("/foodRecommend")
        .add_query_param("id", "user-1")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recommended_foods"].as_array().unwrap().len(), 1);
    assert_eq!(body["recommended_foods"][0]["MEAL_TYPE"], "아침");
    assert_eq!(body["recommended_foods"][0]["RECOMMEND_FOOD"], "닭가슴살 샐러드");
    assert_eq!(body["recommended_foods"][0]["RECIPECODE"], "R0001");
}

#[tokio::test]
async fn test_empty_history_recommends_default_meal() {
    let spring = MockServer::start().await;
    mount_history(&spring, json!([])).await;

    Mock::given(method("POST"))
        .and(path("/saveRecommendation"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&spring)
        .await;

    let server = create_test_server(&test_config(spring.uri(), false));
    let response = server
        .get("/foodRecommend")
        .add_query_param("id", "user-1")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recommended_foods"][0]["RECIPECODE"], "R0001");
}

#[tokio::test]
async fn test_save_failure_still_returns_recommendation() {
    let spring = MockServer::start().await;
    mount_history(&spring, sample_history()).await;

    Mock::given(method("POST"))
        .and(path("/saveRecommendation"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&spring)
        .await;

    let server = create_test_server(&test_config(spring.uri(), false));
    let response = server
        .get("/foodRecommend")
        .add_query_param("id", "user-1")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recommended_foods"][0]["RECIPECODE"], "R0302");
}

#[tokio::test]
async fn test_return_all_slots() {
    let spring = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/userMeals"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_history()))
        .expect(1)
        .mount(&spring)
        .await;

    Mock::given(method("POST"))
        .and(path("/saveRecommendation"))
        .respond_with(ResponseTemplate::new(200))
        .expect(3)
        .mount(&spring)
        .await;

    let server = create_test_server(&test_config(spring.uri(), true));
    let response = server
        .get("/foodRecommend")
        .add_query_param("id", "user-1")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let foods = body["recommended_foods"].as_array().unwrap();
    let codes: Vec<&str> = foods
        .iter()
        .map(|f| f["RECIPECODE"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["R0302", "R0500", "R0700"]);
}

#[tokio::test]
async fn test_missing_id_rejected() {
    let spring = MockServer::start().await;
    let server = create_test_server(&test_config(spring.uri(), false));

    let response = server.get("/foodRecommend").await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_blank_id_rejected() {
    let spring = MockServer::start().await;
    let server = create_test_server(&test_config(spring.uri(), false));

    let response = server
        .get("/foodRecommend")
        .add_query_param("id", "  ")
        .await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("id"));
}

#[tokio::test]
async fn test_request_id_echoed() {
    let spring = MockServer::start().await;
    let server = create_test_server(&test_config(spring.uri(), false));

    let request_id = "6f1c2b9e-3a7d-4c1e-9b2a-0d5e8f7a1c3b";
    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_static(request_id),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("x-request-id"), request_id);
}

#[tokio::test]
async fn test_user_id_forwarded_unmodified() {
    let spring = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/userMeals"))
        .and(query_param("id", " user-1 "))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_history()))
        .expect(1)
        .mount(&spring)
        .await;

    Mock::given(method("POST"))
        .and(path("/saveRecommendation"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&spring)
        .await;

    let server = create_test_server(&test_config(spring.uri(), false));
    let response = server
        .get("/foodRecommend")
        .add_query_param("id", " user-1 ")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["recommended_foods"][0]["RECIPECODE"], "R0302");

    let saved = spring.received_requests().await.unwrap();
    let save = saved
        .iter()
        .find(|r| r.url.path() == "/saveRecommendation")
        .unwrap();
    let body: Value = serde_json::from_slice(&save.body).unwrap();
    assert_eq!(body["userId"], " user-1 ");
}
