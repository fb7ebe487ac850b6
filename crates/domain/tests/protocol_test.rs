use pdns_backend_domain::{
    BackendQuery, BackendRequest, BackendResponse, BackendResult, DomainError, Method,
    ResponseRecord,
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct LookupParams {
    qname: String,
    qtype: String,
}

#[test]
fn test_request_decodes_envelope() {
    let request = BackendRequest::from_slice(
        br#"{"method":"lookup","parameters":{"qname":"www.example.com.","qtype":"A"}}"#,
    )
    .unwrap();

    assert_eq!(request.method(), Method::Lookup);
    let params: LookupParams = request.parameters_as().unwrap();
    assert_eq!(params.qname, "www.example.com.");
    assert_eq!(params.qtype, "A");
}

#[test]
fn test_request_without_parameters_defaults_to_empty_object() {
    let request = BackendRequest::from_slice(br#"{"method":"initialize"}"#).unwrap();

    assert_eq!(request.method(), Method::Initialize);
    let params: serde_json::Map<String, serde_json::Value> = request.parameters_as().unwrap();
    assert!(params.is_empty());
}

#[test]
fn test_undecodable_envelope_is_invalid_request() {
    let result = BackendRequest::from_slice(b"{\"parameters\":{}}");

    assert!(matches!(result, Err(DomainError::InvalidRequest(_))));
}

#[test]
fn test_missing_parameter_is_invalid_parameters() {
    let request = BackendRequest::new("lookup", json!({"qname": "example.com."}));

    let result: Result<LookupParams, _> = request.parameters_as();

    match result {
        Err(DomainError::InvalidParameters { method, .. }) => assert_eq!(method, "lookup"),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_unset_result_renders_false() {
    let response = BackendResponse::default();

    assert_eq!(response.to_value(), json!({"result": false, "log": []}));
}

#[test]
fn test_records_render_as_array_and_soa_omits_auth() {
    let response = BackendResponse {
        result: BackendResult::Records(vec![
            ResponseRecord {
                qtype: "SOA".to_string(),
                qname: "example.com".to_string(),
                ttl: 1800,
                content: "ns1.example.net. hostmaster.example.com. 1 2 3 4 5".to_string(),
                auth: None,
            },
            ResponseRecord {
                qtype: "A".to_string(),
                qname: "www.example.com".to_string(),
                ttl: 60,
                content: "192.0.2.1".to_string(),
                auth: Some(true),
            },
        ]),
        log: vec!["ok".to_string()],
    };

    let value = response.to_value();

    assert!(value["result"][0].get("auth").is_none());
    assert_eq!(value["result"][1]["auth"], json!(true));
    assert_eq!(value["log"], json!(["ok"]));
}

#[test]
fn test_json_line_is_newline_terminated() {
    let line = BackendResponse::failure("boom").to_json_line();

    assert_eq!(line.last(), Some(&b'\n'));
    let decoded: BackendResponse = serde_json::from_slice(&line[..line.len() - 1]).unwrap();
    assert_eq!(decoded.result, BackendResult::Flag(false));
    assert_eq!(decoded.log, vec!["boom".to_string()]);
}

#[test]
fn test_query_captures_normalized_method_and_request() {
    let request = BackendRequest::new("LIST", json!({"zonename": "example.com."}));

    let query = BackendQuery::from_request(&request);

    assert_eq!(query.method, Method::List);
    assert_eq!(query.request["parameters"]["zonename"], json!("example.com."));
    assert_eq!(query.record_ids_json(), "[]");
    assert!(query.response_json().is_none());
}
