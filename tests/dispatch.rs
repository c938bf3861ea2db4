//! End-to-end tests exercising the public client API against a mock gateway.

use daraja_rust::{
    apis::{
        auth::Credentials,
        b2c::B2CPaymentRequest,
        express::{ExpressQueryRequest, ExpressSimulateRequest},
    },
    client::Environment,
    error::ValidationError,
    DarajaClient, Error, MpesaApi,
};
use openssl::{
    asn1::Asn1Time,
    hash::MessageDigest,
    pkey::PKey,
    rsa::Rsa,
    x509::{X509Builder, X509NameBuilder},
};
use reqwest::Url;
use serde_json::json;
use wiremock::{
    matchers::{body_partial_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

fn mock_client(mock_server: &MockServer) -> DarajaClient {
    let base_url = Url::parse(&mock_server.uri()).unwrap();
    DarajaClient::builder(Credentials::new("mock-consumer-key", "mock-consumer-secret"))
        .with_environment(Environment::from_base_url(base_url.clone()))
        .with_certificate_url(base_url.join("/cert.cer").unwrap())
        .build()
}

async fn mock_token_endpoint(mock_server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/oauth/v1/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "mock-access-token",
            "expires_in": "3599"
        })))
        .expect(expected_calls)
        .mount(mock_server)
        .await;
}

/// Self-signed RSA certificate in PEM form, like the one the gateway
/// publishes.
fn certificate_pem() -> Vec<u8> {
    let rsa = Rsa::generate(2048).unwrap();
    let pkey = PKey::from_rsa(rsa).unwrap();

    let mut name = X509NameBuilder::new().unwrap();
    name.append_entry_by_text("CN", "mock.gateway").unwrap();
    let name = name.build();

    let mut builder = X509Builder::new().unwrap();
    builder.set_version(2).unwrap();
    builder.set_subject_name(&name).unwrap();
    builder.set_issuer_name(&name).unwrap();
    builder.set_pubkey(&pkey).unwrap();
    builder
        .set_not_before(&Asn1Time::days_from_now(0).unwrap())
        .unwrap();
    builder
        .set_not_after(&Asn1Time::days_from_now(365).unwrap())
        .unwrap();
    builder.sign(&pkey, MessageDigest::sha256()).unwrap();

    builder.build().to_pem().unwrap()
}

fn express_query_request() -> ExpressQueryRequest {
    ExpressQueryRequest {
        business_short_code: 174379,
        password: "bW9jay1wYXNzd29yZA==".to_string(),
        timestamp: "20230907195244".to_string(),
        checkout_request_id: "ws_CO_07092023195244460712345678".to_string(),
    }
}

fn b2c_request() -> B2CPaymentRequest {
    B2CPaymentRequest {
        originator_conversation_id: None,
        initiator_name: "testapi".to_string(),
        initiator_password: "Safaricom999!*!".to_string(),
        security_credential: String::new(),
        command_id: "BusinessPayment".to_string(),
        amount: 10,
        party_a: 600999,
        party_b: 254712345678,
        remarks: "Salary".to_string(),
        queue_time_out_url: "https://example.com/timeout".to_string(),
        result_url: "https://example.com/result".to_string(),
        occasion: "December salary".to_string(),
    }
}

#[tokio::test]
async fn express_query_decodes_the_gateway_envelope() {
    let mock_server = MockServer::start().await;
    mock_token_endpoint(&mock_server, 1).await;
    Mock::given(method("POST"))
        .and(path("/mpesa/stkpush/v1/query"))
        .and(body_partial_json(json!({
            "BusinessShortCode": 174379,
            "CheckoutRequestID": "ws_CO_07092023195244460712345678"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ResponseCode": "0",
            "ResponseDescription": "The service request has been accepted successsfully",
            "MerchantRequestID": "92643-47073138-2",
            "CheckoutRequestID": "ws_CO_07092023195244460712345678",
            "ResultCode": "1032",
            "ResultDesc": "Request cancelled by user"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let res = mock_client(&mock_server)
        .express_query(&express_query_request())
        .await
        .unwrap();

    assert_eq!(res.response_code, "0");
    assert_eq!(res.merchant_request_id, "92643-47073138-2");
    assert_eq!(res.checkout_request_id, "ws_CO_07092023195244460712345678");
    assert_eq!(res.result_code, "1032");
    assert_eq!(res.result_desc, "Request cancelled by user");
}

#[tokio::test]
async fn a_fresh_token_is_acquired_for_every_operation() {
    let mock_server = MockServer::start().await;
    mock_token_endpoint(&mock_server, 2).await;
    Mock::given(method("POST"))
        .and(path("/mpesa/stkpush/v1/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ResponseCode": "0",
            "ResultCode": "0",
            "ResultDesc": "Processed successfully"
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    client.express_query(&express_query_request()).await.unwrap();
    client.express_query(&express_query_request()).await.unwrap();
}

#[tokio::test]
async fn the_certificate_is_fetched_for_every_sensitive_operation() {
    let mock_server = MockServer::start().await;
    mock_token_endpoint(&mock_server, 2).await;
    Mock::given(method("GET"))
        .and(path("/cert.cer"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(certificate_pem()))
        .expect(2) // No certificate caching across calls
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/mpesa/b2c/v1/paymentrequest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "OriginatorConversationID": "29112-34801843-1",
            "ConversationID": "AG_20230907_2010325b025970fde878",
            "ResponseCode": "0",
            "ResponseDescription": "Accept the service request successfully."
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);
    client.b2c_payment(&b2c_request()).await.unwrap();
    client.b2c_payment(&b2c_request()).await.unwrap();

    // Each submission carries an independently derived credential
    let requests = mock_server.received_requests().await.unwrap();
    let credentials: Vec<String> = requests
        .iter()
        .filter(|r| r.url.path() == "/mpesa/b2c/v1/paymentrequest")
        .map(|r| {
            let body: serde_json::Value = serde_json::from_slice(&r.body).unwrap();
            body["SecurityCredential"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(credentials.len(), 2);
    assert!(credentials.iter().all(|c| !c.is_empty()));
}

#[tokio::test]
async fn validation_failures_produce_no_network_traffic() {
    let mock_server = MockServer::start().await;
    // Any request reaching the server is a failure
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = mock_client(&mock_server);

    let err = client
        .express_query(&ExpressQueryRequest {
            business_short_code: 1,
            ..express_query_request()
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidShortCode(1))
    ));

    let err = client
        .b2c_payment(&B2CPaymentRequest {
            command_id: "SendMoney".to_string(),
            ..b2c_request()
        })
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::InvalidCommandId(c)) if c == "SendMoney"
    ));
}

#[tokio::test]
async fn express_simulate_round_trip() {
    let mock_server = MockServer::start().await;
    mock_token_endpoint(&mock_server, 1).await;
    Mock::given(method("POST"))
        .and(path("/mpesa/stkpush/v1/processrequest"))
        .and(body_partial_json(json!({
            "BusinessShortCode": 174379,
            "TransactionType": "CustomerPayBillOnline",
            "Amount": 10,
            "PartyA": 254712345678u64,
            "PartyB": 174379,
            "PhoneNumber": 254712345678u64,
            "CallBackURL": "https://example.com/callback",
            "AccountReference": "CompanyX",
            "TransactionDesc": "Payment"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "MerchantRequestID": "29115-34620561-1",
            "CheckoutRequestID": "ws_CO_191220191020363925",
            "ResponseCode": "0",
            "ResponseDescription": "Success. Request accepted for processing",
            "CustomerMessage": "Success. Request accepted for processing"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let res = mock_client(&mock_server)
        .express_simulate(&ExpressSimulateRequest {
            business_short_code: 174379,
            password: "bW9jay1wYXNzd29yZA==".to_string(),
            timestamp: "20230907195244".to_string(),
            transaction_type: "CustomerPayBillOnline".to_string(),
            amount: 10,
            party_a: 254712345678,
            party_b: 174379,
            phone_number: 254712345678,
            call_back_url: "https://example.com/callback".to_string(),
            account_reference: "CompanyX".to_string(),
            transaction_desc: "Payment".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(res.response_code, "0");
    assert_eq!(res.customer_message, "Success. Request accepted for processing");
}
