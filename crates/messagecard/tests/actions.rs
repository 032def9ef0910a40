use messagecard::{CardError, Header, HttpPostAction, OpenUriAction};

const OPEN_URI: &str = r#"{"@type": "OpenUri", "name": "Open URL", "targets": [{"os": "default", "uri": "http://www.python.org"}]}"#;
const HTTP_POST: &str = r#"{"@type": "HttpPOST", "name": "Run tests", "target": "http://jenkins.com?action=trigger""#;

#[test]
fn open_uri_from_url() {
    let action = OpenUriAction::new("Open URL", "http://www.python.org").expect("action");
    assert_eq!(action.to_json(), OPEN_URI);
}

#[test]
fn open_uri_from_mapping() {
    let action =
        OpenUriAction::new("Open URL", [("default", "http://www.python.org")]).expect("action");
    assert_eq!(action.to_json(), OPEN_URI);
}

#[test]
fn open_uri_add_target() {
    let mut action = OpenUriAction::new("Open URL", "http://www.python.org").expect("action");
    action
        .add_target("android", "http://www.python.org")
        .expect("android target");
    assert_eq!(
        action.to_json(),
        r#"{"@type": "OpenUri", "name": "Open URL", "targets": [{"os": "default", "uri": "http://www.python.org"}, {"os": "android", "uri": "http://www.python.org"}]}"#
    );

    let err = action
        .add_target("default", "http://www.numpy.org")
        .unwrap_err();
    assert!(matches!(err, CardError::InvalidValue { .. }));
    assert_eq!(action.platforms().count(), 2);
}

#[test]
fn http_post_basic() {
    let action = HttpPostAction::new("Run tests", "http://jenkins.com?action=trigger");
    assert_eq!(action.to_json(), format!("{HTTP_POST}}}"));
}

#[test]
fn http_post_headers_from_mapping() {
    let expected = format!(
        r#"{HTTP_POST}, "headers": [{{"name": "h_name", "value": "h_value"}}]}}"#
    );

    let mut action = HttpPostAction::new("Run tests", "http://jenkins.com?action=trigger");
    action.set_headers([("h_name", "h_value")]).expect("headers");
    assert_eq!(action.to_json(), expected);

    let mut action = HttpPostAction::new("Run tests", "http://jenkins.com?action=trigger");
    action.add_headers([("h_name", "h_value")]).expect("headers");
    assert_eq!(action.to_json(), expected);
}

#[test]
fn http_post_add_headers_appends_in_order() {
    let mut action = HttpPostAction::new("Run tests", "http://jenkins.com?action=trigger");
    action.add_headers([("h_name", "h_value")]).expect("headers");
    action
        .add_headers([("h_name_2", "h_value_2")])
        .expect("headers");
    action.set_body("Body content");
    action.set_body_content_type("BodyContentType");
    assert_eq!(
        action.to_json(),
        format!(
            r#"{HTTP_POST}, "headers": [{{"name": "h_name", "value": "h_value"}}, {{"name": "h_name_2", "value": "h_value_2"}}], "body": "Body content", "bodyContentType": "BodyContentType"}}"#
        )
    );
}

#[test]
fn http_post_set_headers_replaces() {
    let mut action = HttpPostAction::new("Run tests", "http://jenkins.com");
    action.add_header("first", "1");
    action
        .set_headers(vec![Header::new("second", "2")])
        .expect("headers");
    let names: Vec<_> = action
        .elements("headers")
        .map(|header| header.get("name").expect("name").clone())
        .collect();
    assert_eq!(names.len(), 1);
    assert_eq!(names[0].as_str(), Some("second"));
}

#[test]
fn http_post_pretty_payload() {
    let mut action = HttpPostAction::new("Run tests", "http://jenkins.com?aciton=trigger");
    action
        .set_headers([("Header name", "Header value")])
        .expect("headers");
    action.add_header("header2", "value2");
    action.set_body("Body content");
    assert_eq!(
        action.to_json_pretty(4),
        r#"{
    "@type": "HttpPOST",
    "name": "Run tests",
    "target": "http://jenkins.com?aciton=trigger",
    "headers": [
        {
            "name": "Header name",
            "value": "Header value"
        },
        {
            "name": "header2",
            "value": "value2"
        }
    ],
    "body": "Body content"
}"#
    );
}

#[test]
fn duplicate_platforms_rejected_on_generic_paths() {
    let mut action = OpenUriAction::new("Open URL", "http://www.python.org").expect("action");
    let err = action
        .append("targets", [("default", "http://www.numpy.org")])
        .unwrap_err();
    assert!(matches!(err, CardError::InvalidValue { .. }));
    assert_eq!(action.to_json(), OPEN_URI);

    let err = OpenUriAction::from_fields([
        ("name", "Open URL".into()),
        (
            "targets",
            [("default", "http://a.org"), ("default", "http://b.org")].into(),
        ),
    ])
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid value for `targets`: entry already set for os `default`"
    );
}
