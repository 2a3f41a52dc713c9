// tests/page_flows.rs
// DOCUMENTATION: End-to-end page flow tests
// PURPOSE: Drive the controller over a headless page against an in-process mock REST API

use std::net::TcpListener;
use std::sync::Mutex;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::{json, Value};

use hbnb_web_client::controller::messages;
use hbnb_web_client::controller::DomEvent;
use hbnb_web_client::page::ids;
use hbnb_web_client::session::token_cookie;
use hbnb_web_client::views::PRICE_ATTRIBUTE;
use hbnb_web_client::{
    AuthContext, ClientConfig, EventBinding, HbnbApiClient, HeadlessPage, Page, PageAction,
    PageController,
};

const VALID_EMAIL: &str = "riyadh@mail.com";
const VALID_PASSWORD: &str = "1234";
const ISSUED_TOKEN: &str = "tok-123";
/// Login email and review token for which the mock backend answers with a non-JSON error page
const OUTAGE_EMAIL: &str = "outage@mail.com";
const OUTAGE_TOKEN: &str = "tok-outage";

#[derive(Debug, Clone)]
struct RecordedRequest {
    method: String,
    path: String,
    authorization: Option<String>,
    body: Value,
}

#[derive(Default)]
struct MockApi {
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockApi {
    fn record(&self, req: &HttpRequest, body: &[u8]) -> RecordedRequest {
        let recorded = RecordedRequest {
            method: req.method().to_string(),
            path: req.path().to_string(),
            authorization: req
                .headers()
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: serde_json::from_slice(body).unwrap_or(Value::Null),
        };
        self.requests.lock().unwrap().push(recorded.clone());
        recorded
    }

    fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn login(req: HttpRequest, body: web::Bytes, api: web::Data<MockApi>) -> HttpResponse {
    let recorded = api.record(&req, &body);
    if recorded.body["email"] == OUTAGE_EMAIL {
        return HttpResponse::InternalServerError()
            .content_type("text/html")
            .body("<html>Traceback</html>");
    }
    if recorded.body["email"] == VALID_EMAIL && recorded.body["password"] == VALID_PASSWORD {
        HttpResponse::Ok().json(json!({ "access_token": ISSUED_TOKEN, "token_type": "Bearer" }))
    } else {
        HttpResponse::Unauthorized().json(json!({ "message": "Invalid credentials" }))
    }
}

async fn list_places(req: HttpRequest, body: web::Bytes, api: web::Data<MockApi>) -> HttpResponse {
    api.record(&req, &body);
    HttpResponse::Ok().json(json!([
        { "id": "p1", "name": "Tent", "price": 5, "latitude": 1.0 },
        { "id": "p2", "name": "Cabin", "price": 20.0 },
        { "id": "p3", "title": "Beach House", "price": 75 }
    ]))
}

async fn place_detail(
    req: HttpRequest,
    body: web::Bytes,
    path: web::Path<String>,
    api: web::Data<MockApi>,
) -> HttpResponse {
    api.record(&req, &body);
    let place_id = path.into_inner();
    if place_id == "p-sparse" {
        return HttpResponse::Ok().json(json!({
            "name": "Hut",
            "host": null,
            "price": 9,
            "description": null,
            "amenities": [],
            "reviews": [{ "user": null, "comment": "Rustic", "rating": 3 }]
        }));
    }
    if place_id != "p1" {
        return HttpResponse::NotFound().json(json!({ "message": "Place not found" }));
    }
    HttpResponse::Ok().json(json!({
        "name": "Tent",
        "host": "Badr",
        "price": 5,
        "description": "Under the stars",
        "amenities": ["Wi-Fi", { "id": "a2", "name": "Campfire" }],
        "reviews": [
            { "user": "Mhamad", "comment": "Cosy", "rating": 4 },
            { "user": "Riyadh", "text": "Cold", "rating": 0 }
        ]
    }))
}

async fn create_review(req: HttpRequest, body: web::Bytes, api: web::Data<MockApi>) -> HttpResponse {
    let recorded = api.record(&req, &body);
    let expected = format!("Bearer {}", ISSUED_TOKEN);
    let outage = format!("Bearer {}", OUTAGE_TOKEN);
    if recorded.authorization.as_deref() == Some(outage.as_str()) {
        return HttpResponse::BadGateway().finish();
    }
    if recorded.authorization.as_deref() != Some(expected.as_str()) {
        // JSON body without a message: the client falls back to the status text
        return HttpResponse::Unauthorized().json(json!({}));
    }
    if !recorded.body["rating"].is_i64() {
        return HttpResponse::BadRequest().json(json!({ "error": "Invalid rating" }));
    }
    HttpResponse::Created().json(json!({ "id": "r1" }))
}

/// Start the mock API on an ephemeral port
fn start_mock_api() -> (String, web::Data<MockApi>) {
    let api = web::Data::new(MockApi::default());
    let app_api = api.clone();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_api.clone())
            .route("/api/v1/login", web::post().to(login))
            .route("/api/v1/places", web::get().to(list_places))
            .route("/api/v1/places/{id}", web::get().to(place_detail))
            .route("/api/v1/reviews", web::post().to(create_review))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .unwrap();

    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());
    (format!("http://{}/api/v1", addr), api)
}

fn controller(base_url: &str, page: HeadlessPage) -> PageController<HeadlessPage> {
    let config = ClientConfig::default().with_api_base_url(base_url);
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    PageController::new(page, HbnbApiClient::with_client(&config, client))
}

#[actix_web::test]
async fn test_login_success_sets_cookie_and_navigates() {
    let (base_url, api) = start_mock_api();
    let page = HeadlessPage::with_page_elements("/login.html");
    page.set_value(ids::EMAIL, VALID_EMAIL);
    page.set_value(ids::PASSWORD, VALID_PASSWORD);
    let controller = controller(&base_url, page);

    let bindings = controller.boot().await;
    assert_eq!(
        bindings,
        vec![EventBinding::submit(ids::LOGIN_FORM, PageAction::Login)]
    );
    assert!(api.requests().is_empty());

    controller.handle(PageAction::Login).await;

    let page = controller.page();
    assert_eq!(page.cookie("token").as_deref(), Some(ISSUED_TOKEN));
    assert_eq!(page.navigations(), vec!["index.html"]);
    assert!(page.alerts().is_empty());

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/v1/login");
    assert_eq!(requests[0].authorization, None);
    assert_eq!(
        requests[0].body,
        json!({ "email": VALID_EMAIL, "password": VALID_PASSWORD })
    );
}

#[actix_web::test]
async fn test_login_invalid_credentials_alerts_without_navigation() {
    let (base_url, _api) = start_mock_api();
    let page = HeadlessPage::with_page_elements("/login.html");
    page.set_value(ids::EMAIL, VALID_EMAIL);
    page.set_value(ids::PASSWORD, "wrong");
    let controller = controller(&base_url, page);

    controller.boot().await;
    controller.handle(PageAction::Login).await;

    let page = controller.page();
    assert_eq!(page.alerts(), vec!["Login failed: Invalid credentials"]);
    assert!(page.navigations().is_empty());
    assert_eq!(page.cookie("token"), None);
}

#[actix_web::test]
async fn test_login_page_without_form_binds_nothing() {
    let (base_url, _api) = start_mock_api();
    let controller = controller(&base_url, HeadlessPage::new("/login.html"));

    assert!(controller.boot().await.is_empty());
}

#[actix_web::test]
async fn test_listing_anonymous() {
    let (base_url, api) = start_mock_api();
    let controller = controller(&base_url, HeadlessPage::with_page_elements("/index.html"));

    let bindings = controller.boot().await;

    assert_eq!(
        bindings,
        vec![EventBinding::change(ids::PRICE_FILTER, PageAction::FilterPrices)]
    );
    assert_eq!(bindings[0].event, DomEvent::Change);

    let page = controller.page();
    assert_eq!(page.is_visible(ids::LOGIN_LINK), Some(true));

    let cards = page.children(ids::PLACES_LIST);
    let prices: Vec<_> = cards.iter().filter_map(|c| c.attribute(PRICE_ATTRIBUTE)).collect();
    assert_eq!(prices, vec!["5", "20", "75"]);
    assert!(cards[2].inner_html.contains("Beach House"));
    assert!(cards[0].inner_html.contains("place.html?id=p1"));
    assert_eq!(page.children(ids::PRICE_FILTER).len(), 4);

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/api/v1/places");
    assert_eq!(requests[0].authorization, None);
}

#[actix_web::test]
async fn test_listing_with_token_sends_bearer_and_hides_login_link() {
    let (base_url, api) = start_mock_api();
    let page = HeadlessPage::with_page_elements("/index.html").with_cookie(&token_cookie("abc"));
    let controller = controller(&base_url, page);

    controller.boot().await;

    assert_eq!(controller.page().is_visible(ids::LOGIN_LINK), Some(false));
    assert_eq!(api.requests()[0].authorization.as_deref(), Some("Bearer abc"));
}

#[actix_web::test]
async fn test_listing_price_filter_change() {
    let (base_url, _api) = start_mock_api();
    let controller = controller(&base_url, HeadlessPage::with_page_elements("/index.html"));
    controller.boot().await;

    controller.page().set_value(ids::PRICE_FILTER, "50");
    controller.handle(PageAction::FilterPrices).await;

    let visible: Vec<_> = controller
        .page()
        .visible_children(ids::PLACES_LIST)
        .iter()
        .filter_map(|c| c.attribute(PRICE_ATTRIBUTE).map(str::to_string))
        .collect();
    assert_eq!(visible, vec!["5", "20"]);

    controller.page().set_value(ids::PRICE_FILTER, "All");
    controller.handle(PageAction::FilterPrices).await;
    assert_eq!(controller.page().visible_children(ids::PLACES_LIST).len(), 3);
}

#[actix_web::test]
async fn test_listing_without_containers_still_fetches() {
    let (base_url, api) = start_mock_api();
    let controller = controller(&base_url, HeadlessPage::new("/index.html"));

    let bindings = controller.boot().await;

    assert!(bindings.is_empty());
    assert_eq!(api.requests().len(), 1);
    assert!(controller.page().alerts().is_empty());
}

#[actix_web::test]
async fn test_detail_renders_place_and_reviews() {
    let (base_url, api) = start_mock_api();
    let page =
        HeadlessPage::with_page_elements("/place.html?id=p1").with_cookie(&token_cookie("abc"));
    let controller = controller(&base_url, page);

    let bindings = controller.boot().await;
    assert!(bindings.is_empty());

    let page = controller.page();
    assert_eq!(page.is_visible(ids::ADD_REVIEW), Some(true));

    let info = page.children(ids::PLACE_DETAILS);
    assert_eq!(info.len(), 1);
    assert!(info[0].inner_html.contains("<strong>Host:</strong> Badr"));
    assert!(info[0].inner_html.contains("Wi-Fi, Campfire"));

    let reviews = page.children(ids::REVIEWS);
    assert_eq!(reviews.len(), 3);
    assert!(reviews[1].inner_html.contains("Rating: ⭐⭐⭐⭐</p>"));
    assert!(reviews[2].inner_html.contains("Cold"));
    assert!(reviews[2].inner_html.contains("Rating: </p>"));

    let requests = api.requests();
    assert_eq!(requests[0].path, "/api/v1/places/p1");
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer abc"));
}

#[actix_web::test]
async fn test_detail_anonymous_hides_add_review() {
    let (base_url, api) = start_mock_api();
    let controller = controller(&base_url, HeadlessPage::with_page_elements("/place.html?id=p1"));

    controller.boot().await;

    assert_eq!(controller.page().is_visible(ids::ADD_REVIEW), Some(false));
    assert_eq!(api.requests()[0].authorization, None);
}

#[actix_web::test]
async fn test_detail_not_found_alerts() {
    let (base_url, _api) = start_mock_api();
    let controller = controller(&base_url, HeadlessPage::with_page_elements("/place.html?id=nope"));

    controller.boot().await;

    let page = controller.page();
    assert_eq!(page.alerts(), vec![messages::PLACE_DETAILS_FAILED]);
    assert!(page.children(ids::PLACE_DETAILS).is_empty());
}

#[actix_web::test]
async fn test_detail_without_id_sends_nothing() {
    let (base_url, api) = start_mock_api();
    let controller = controller(&base_url, HeadlessPage::with_page_elements("/place.html"));

    controller.boot().await;

    assert_eq!(controller.page().alerts(), vec![messages::PLACE_DETAILS_FAILED]);
    assert!(api.requests().is_empty());
}

#[actix_web::test]
async fn test_add_review_without_token_redirects_without_request() {
    let (base_url, api) = start_mock_api();
    let controller = controller(&base_url, HeadlessPage::with_page_elements("/add_review.html?id=p1"));

    let bindings = controller.boot().await;

    assert_eq!(controller.page().navigations(), vec!["index.html"]);
    // handler stays bound; firing it redirects again and sends nothing
    assert_eq!(
        bindings,
        vec![EventBinding::submit(
            ids::REVIEW_FORM,
            PageAction::SubmitReview {
                auth: AuthContext::anonymous(),
                place_id: Some("p1".to_string()),
            },
        )]
    );
    controller.handle(bindings[0].action.clone()).await;

    assert_eq!(controller.page().navigations(), vec!["index.html", "index.html"]);
    assert!(api.requests().is_empty());
}

#[actix_web::test]
async fn test_add_review_submits_and_resets_form() {
    let (base_url, api) = start_mock_api();
    let page = HeadlessPage::with_page_elements("/add_review.html?id=p1")
        .with_cookie(&token_cookie(ISSUED_TOKEN));
    let controller = controller(&base_url, page);

    let bindings = controller.boot().await;
    assert!(controller.page().navigations().is_empty());

    controller.page().set_value(ids::REVIEW, "Loved it");
    controller.page().set_value(ids::RATING, "4");
    controller.handle(bindings[0].action.clone()).await;

    let page = controller.page();
    assert_eq!(page.alerts(), vec![messages::REVIEW_SUBMITTED]);
    assert_eq!(page.form_resets(), vec![ids::REVIEW_FORM]);
    assert_eq!(page.value(ids::REVIEW).as_deref(), Some(""));

    let requests = api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/api/v1/reviews");
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some("Bearer tok-123")
    );
    assert_eq!(
        requests[0].body,
        json!({ "place_id": "p1", "comment": "Loved it", "rating": 4 })
    );
}

#[actix_web::test]
async fn test_add_review_rejected_shows_server_error() {
    let (base_url, _api) = start_mock_api();
    let page = HeadlessPage::with_page_elements("/add_review.html?id=p1")
        .with_cookie(&token_cookie(ISSUED_TOKEN));
    let controller = controller(&base_url, page);

    let bindings = controller.boot().await;
    controller.page().set_value(ids::REVIEW, "Hmm");
    controller.page().set_value(ids::RATING, "great");
    controller.handle(bindings[0].action.clone()).await;

    let page = controller.page();
    assert_eq!(page.alerts(), vec!["Failed to submit review: Invalid rating"]);
    assert!(page.form_resets().is_empty());
}

#[actix_web::test]
async fn test_add_review_with_stale_token_falls_back_to_status_text() {
    let (base_url, _api) = start_mock_api();
    let page = HeadlessPage::with_page_elements("/add_review.html?id=p1")
        .with_cookie(&token_cookie("expired"));
    let controller = controller(&base_url, page);

    let bindings = controller.boot().await;
    controller.handle(bindings[0].action.clone()).await;

    assert_eq!(
        controller.page().alerts(),
        vec!["Failed to submit review: Unauthorized"]
    );
}

#[actix_web::test]
async fn test_add_review_non_json_error_shows_generic_alert() {
    let (base_url, api) = start_mock_api();
    let page = HeadlessPage::with_page_elements("/add_review.html?id=p1")
        .with_cookie(&token_cookie(OUTAGE_TOKEN));
    let controller = controller(&base_url, page);

    let bindings = controller.boot().await;
    controller.page().set_value(ids::RATING, "5");
    controller.handle(bindings[0].action.clone()).await;

    let page = controller.page();
    assert_eq!(page.alerts(), vec![messages::REVIEW_GENERIC_FAILURE]);
    assert!(page.form_resets().is_empty());
    assert_eq!(api.requests().len(), 1);
}

#[actix_web::test]
async fn test_login_html_error_page_shows_generic_alert() {
    let (base_url, _api) = start_mock_api();
    let controller = controller(&base_url, HeadlessPage::with_page_elements("/login.html"));

    let bindings = controller.boot().await;
    controller.page().set_value(ids::EMAIL, OUTAGE_EMAIL);
    controller.page().set_value(ids::PASSWORD, "pw");
    controller.handle(bindings[0].action.clone()).await;

    let page = controller.page();
    assert_eq!(page.alerts(), vec![messages::GENERIC_FAILURE]);
    assert!(page.navigations().is_empty());
    assert_eq!(page.cookie("token"), None);
}

#[actix_web::test]
async fn test_detail_with_null_fields_renders() {
    let (base_url, _api) = start_mock_api();
    let controller = controller(
        &base_url,
        HeadlessPage::with_page_elements("/place.html?id=p-sparse"),
    );

    controller.boot().await;

    let page = controller.page();
    assert!(page.alerts().is_empty());
    let info = page.children(ids::PLACE_DETAILS);
    assert_eq!(info.len(), 1);
    assert!(info[0].inner_html.contains("<h2>Hut</h2>"));
    assert!(info[0].inner_html.contains("<strong>Host:</strong> </p>"));
    let reviews = page.children(ids::REVIEWS);
    assert_eq!(reviews.len(), 2);
    assert!(reviews[1].inner_html.contains("Rustic"));
}

#[actix_web::test]
async fn test_unreachable_backend_shows_generic_alert() {
    // Grab a free port, then close it so nothing listens there
    let port = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let base_url = format!("http://127.0.0.1:{}/api/v1", port);
    let controller = controller(&base_url, HeadlessPage::with_page_elements("/index.html"));

    let bindings = controller.boot().await;

    assert!(bindings.is_empty());
    assert_eq!(controller.page().alerts(), vec![messages::GENERIC_FAILURE]);
    assert!(controller.page().children(ids::PLACES_LIST).is_empty());
}

#[actix_web::test]
async fn test_unknown_page_runs_no_flow() {
    let (base_url, api) = start_mock_api();
    let controller = controller(&base_url, HeadlessPage::new("/about.html"));

    assert!(controller.boot().await.is_empty());
    assert!(api.requests().is_empty());
    assert!(controller.page().alerts().is_empty());
}
