use aws_smithy_client::test_connection::TestConnection;
use aws_smithy_http::body::SdkBody;
use aws_types::{region::Region, Credentials};
use customer_records_api::handlers;
use customer_records_api::models::customer::{Customer, CustomerFields};
use customer_records_api::store::{CustomerStore, DynamoDbStore, StoreError};
use customer_records_api::utils::id::{IdGenerator, IdStrategy};
use lambda_http::{Body, Request, RequestExt, Response};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::HashMap;

/*---------- Constants ----------*/
const ADA_ITEM: &str = r#"{
    "customerId": {"S": "1700000000000"},
    "firstName": {"S": "Ada"},
    "lastName": {"S": "Lovelace"},
    "email": {"S": "ada@example.com"},
    "phone": {"NULL": true},
    "address": {"S": "London"}
}"#;

const NOT_FOUND_ERROR: &str = r#"{
    "__type": "com.amazonaws.dynamodb.v20120810#ResourceNotFoundException",
    "message": "Requested resource not found"
}"#;

/*---------- Helpers ----------*/
fn replay(responses: Vec<(u16, String)>) -> (DynamoDbStore, TestConnection<String>) {
    let events = responses
        .into_iter()
        .map(|(status, body)| {
            (
                http::Request::builder()
                    .body(SdkBody::from(""))
                    .unwrap(),
                http::Response::builder()
                    .status(status)
                    .header("content-type", "application/x-amz-json-1.0")
                    .body(body)
                    .unwrap(),
            )
        })
        .collect();

    let connection = TestConnection::new(events);

    let config = aws_sdk_dynamodb::Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::from_keys("AKIDTEST", "secret", None))
        .build();

    let client = aws_sdk_dynamodb::Client::from_conf_conn(config, connection.clone());

    (DynamoDbStore::new(client, "customers"), connection)
}

fn ada() -> Customer {
    Customer {
        customer_id: "1700000000000".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: None,
        address: Some("London".to_owned()),
    }
}

fn sent_body(connection: &TestConnection<String>, index: usize) -> Value {
    let requests = connection.requests();
    let bytes = requests[index].actual.body().bytes().unwrap();

    serde_json::from_slice(bytes).unwrap()
}

fn with_customer_id(method: &str, body: Body, customer_id: &str) -> Request {
    http::Request::builder()
        .method(method)
        .uri(format!("/customers/{}", customer_id))
        .body(body)
        .unwrap()
        .with_path_parameters(HashMap::from([(
            "customerId".to_owned(),
            customer_id.to_owned(),
        )]))
}

fn assert_store_failure(response: &Response<Body>) {
    assert_eq!(response.status(), 500);
    assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
    assert_eq!(response.headers()["Access-Control-Allow-Credentials"], "true");

    let body: Value = match response.body() {
        Body::Text(text) => serde_json::from_str(text).unwrap(),
        other => panic!("expected a JSON body, got {:?}", other),
    };
    assert_eq!(
        body,
        json!({ "error": "ResourceNotFoundException: Requested resource not found" })
    );
}

fn failing_store() -> DynamoDbStore {
    let (store, _) = replay(vec![(400, NOT_FOUND_ERROR.to_owned())]);

    store
}

/*---------- Tests ----------*/
#[tokio::test]
async fn get_maps_an_item_to_a_customer() {
    let (store, _) = replay(vec![(200, format!(r#"{{"Item": {}}}"#, ADA_ITEM))]);

    let customer = store.get("1700000000000").await.unwrap();

    assert_eq!(customer, Some(ada()));
}

#[tokio::test]
async fn get_without_item_is_none() {
    let (store, connection) = replay(vec![(200, "{}".to_owned())]);

    let customer = store.get("missing").await.unwrap();

    assert_eq!(customer, None);

    let sent = sent_body(&connection, 0);
    assert_eq!(sent["TableName"], "customers");
    assert_eq!(sent["Key"]["customerId"]["S"], "missing");
}

#[tokio::test]
async fn put_writes_absent_optional_fields_as_null() {
    let (store, connection) = replay(vec![(200, "{}".to_owned())]);

    store.put(&ada()).await.unwrap();

    let sent = sent_body(&connection, 0);
    assert_eq!(sent["TableName"], "customers");
    assert_eq!(sent["Item"]["customerId"]["S"], "1700000000000");
    assert_eq!(sent["Item"]["firstName"]["S"], "Ada");
    assert_eq!(sent["Item"]["phone"]["NULL"], true);
    assert_eq!(sent["Item"]["address"]["S"], "London");
}

#[tokio::test]
async fn update_returns_the_new_image() {
    let (store, connection) = replay(vec![(200, format!(r#"{{"Attributes": {}}}"#, ADA_ITEM))]);
    let fields = CustomerFields {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        phone: None,
        address: Some("London".to_owned()),
    };

    let customer = store.update("1700000000000", &fields).await.unwrap();

    assert_eq!(customer, ada());

    let sent = sent_body(&connection, 0);
    assert_eq!(sent["ReturnValues"], "ALL_NEW");
    assert_eq!(sent["ExpressionAttributeValues"][":phone"]["NULL"], true);
    assert_eq!(sent["ExpressionAttributeValues"][":firstName"]["S"], "Ada");
}

#[tokio::test]
async fn delete_sends_the_key() {
    let (store, connection) = replay(vec![(200, "{}".to_owned())]);

    store.delete("1700000000000").await.unwrap();

    let sent = sent_body(&connection, 0);
    assert_eq!(sent["Key"]["customerId"]["S"], "1700000000000");
}

#[tokio::test]
async fn list_all_follows_last_evaluated_key() {
    let second_item = ADA_ITEM.replace("1700000000000", "1700000000001");
    let (store, connection) = replay(vec![
        (
            200,
            format!(
                r#"{{"Items": [{}], "Count": 1, "ScannedCount": 1,
                    "LastEvaluatedKey": {{"customerId": {{"S": "1700000000000"}}}}}}"#,
                ADA_ITEM
            ),
        ),
        (
            200,
            format!(
                r#"{{"Items": [{}], "Count": 1, "ScannedCount": 1}}"#,
                second_item
            ),
        ),
    ]);

    let store = store.with_page_limit(1);

    let customers = store.list_all().await.unwrap();

    let ids: Vec<&str> = customers.iter().map(|c| c.customer_id.as_str()).collect();
    assert_eq!(ids, vec!["1700000000000", "1700000000001"]);

    assert_eq!(sent_body(&connection, 0)["Limit"], 1);

    let second_request = sent_body(&connection, 1);
    assert_eq!(
        second_request["ExclusiveStartKey"]["customerId"]["S"],
        "1700000000000"
    );
}

#[tokio::test]
async fn service_errors_become_store_errors() {
    let (store, _) = replay(vec![(400, NOT_FOUND_ERROR.to_owned())]);

    let result = store.get("1700000000000").await;

    match result {
        Err(StoreError::Request(message)) => {
            assert!(message.contains("Requested resource not found"))
        }
        other => panic!("expected a request error, got {:?}", other),
    }
}

#[tokio::test]
async fn get_surfaces_store_failures_verbatim() {
    let request = with_customer_id("GET", Body::Empty, "1700000000000");

    let response = handlers::get::handle(&failing_store(), request).await.unwrap();

    assert_store_failure(&response);
}

#[tokio::test]
async fn create_surfaces_store_failures_verbatim() {
    let request = http::Request::builder()
        .method("POST")
        .uri("/customers")
        .body(Body::from(
            json!({ "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com" })
                .to_string(),
        ))
        .unwrap();
    let ids = IdGenerator::new(IdStrategy::Ulid);

    let response = handlers::create::handle(&failing_store(), &ids, request)
        .await
        .unwrap();

    assert_store_failure(&response);
}

#[tokio::test]
async fn update_surfaces_store_failures_verbatim() {
    let body = Body::from(
        json!({ "firstName": "Ada", "lastName": "Lovelace", "email": "ada@example.com" })
            .to_string(),
    );
    let request = with_customer_id("PUT", body, "1700000000000");

    let response = handlers::update::handle(&failing_store(), request)
        .await
        .unwrap();

    assert_store_failure(&response);
}

#[tokio::test]
async fn delete_surfaces_store_failures_verbatim() {
    let request = with_customer_id("DELETE", Body::Empty, "1700000000000");

    let response = handlers::delete::handle(&failing_store(), request)
        .await
        .unwrap();

    assert_store_failure(&response);
}

#[tokio::test]
async fn list_surfaces_store_failures_verbatim() {
    let request = http::Request::builder()
        .method("GET")
        .uri("/customers")
        .body(Body::Empty)
        .unwrap();

    let response = handlers::list::handle(&failing_store(), request)
        .await
        .unwrap();

    assert_store_failure(&response);
}
