use messagecard::{
    CardElement, CardError, ElementKind, Fact, FieldInput, FieldValue, HttpPostAction,
    MessageCard, OpenUriAction, Section, TextInput,
};
use serde_json::Value;

fn fact_value(name: &str, value: &str) -> FieldValue {
    FieldValue::Element(Fact::new(name, value).into_element())
}

#[test]
fn every_field_starts_unset() {
    let section = Section::new();
    for spec in section.schema().fields() {
        assert_eq!(
            section.get(spec.name),
            Err(CardError::not_set(spec.name)),
            "{}",
            spec.name
        );
    }
}

#[test]
fn constructed_fields_read_back() {
    let section = Section::from_fields([
        ("title", "a".into()),
        ("markdown", false.into()),
        ("hero_image", "http://img".into()),
        ("facts", vec![Fact::new("c", "d")].into()),
    ])
    .expect("section");

    assert_eq!(section.get("title").ok().and_then(FieldValue::as_str), Some("a"));
    assert_eq!(section.get("markdown").ok().and_then(FieldValue::as_bool), Some(false));
    assert_eq!(
        section.get("facts").expect("facts"),
        &FieldValue::List(vec![fact_value("c", "d")])
    );
    assert_eq!(
        section
            .get("hero_image")
            .ok()
            .and_then(FieldValue::as_element)
            .map(CardElement::kind),
        Some(ElementKind::Image)
    );
}

#[test]
fn single_value_promotes_to_list() {
    let section = Section::from_fields([("facts", Fact::new("a", "b").into())]).expect("section");
    assert_eq!(
        section.get("facts").expect("facts"),
        &FieldValue::List(vec![fact_value("a", "b")])
    );
}

#[test]
fn equality_compares_kind_and_values() {
    let titled = |title: &str| Section::from_fields([("title", title.into())]).expect("section");

    assert_eq!(titled("a"), titled("a"));
    assert_ne!(titled("a"), titled("b"));
    assert_ne!(
        titled("a").into_element(),
        Fact::new("a", "b").into_element()
    );

    let mut grouped = Section::new();
    grouped.set_markdown(false);
    assert_ne!(titled("a"), grouped);
}

#[test]
fn value_checks() {
    let err = Section::from_fields([("otherfield", "False".into())]).unwrap_err();
    assert!(matches!(err, CardError::UnknownField { kind: "Section", .. }));

    let err = Section::from_fields([("markdown", "False".into())]).unwrap_err();
    assert_eq!(err, CardError::type_mismatch("markdown", "bool", "string"));

    let mixed: Vec<FieldInput> = vec![Fact::new("a", "b").into(), "False".into()];
    let err = Section::from_fields([("facts", FieldInput::List(mixed))]).unwrap_err();
    assert_eq!(err, CardError::type_mismatch("facts", "Fact", "string"));
}

#[test]
fn failed_set_keeps_previous_value() {
    let mut input = TextInput::new();
    input.set_max_length(10);
    assert!(input.set("max_length", "ten").is_err());
    assert_eq!(input.get("max_length").ok().and_then(FieldValue::as_i64), Some(10));
}

#[test]
fn set_replaces_and_promotes() {
    let mut section = Section::from_fields([("title", "a".into())]).expect("section");
    section.set("title", "b").expect("title");
    assert_eq!(section.get("title").ok().and_then(FieldValue::as_str), Some("b"));

    section
        .set("facts", vec![Fact::new("a", "1"), Fact::new("b", "2")])
        .expect("facts");
    section.set("facts", Fact::new("d", "4")).expect("facts");
    assert_eq!(
        section.get("facts").expect("facts"),
        &FieldValue::List(vec![fact_value("d", "4")])
    );
}

#[test]
fn empty_list_is_set_and_rendered() {
    let mut section = Section::new();
    section
        .set("facts", FieldInput::List(Vec::new()))
        .expect("facts");
    assert!(section.is_set("facts"));
    assert_eq!(section.to_json(), r#"{"facts": []}"#);
}

#[test]
fn display_lists_set_field_names() {
    let section = Section::from_fields([
        ("text", "body".into()),
        ("title", "head".into()),
    ])
    .expect("section");
    assert_eq!(section.to_string(), "Section(title, text)");
}

#[test]
fn generic_element_matches_typed_wrapper() {
    let element = CardElement::with_fields(
        ElementKind::Fact,
        [("name", "a".into()), ("value", "b".into())],
    )
    .expect("fact");
    let fact = Fact::try_from(element).expect("kind");
    assert_eq!(fact, Fact::new("a", "b"));

    let err = Section::try_from(Fact::new("a", "b").into_element()).unwrap_err();
    assert!(matches!(err, CardError::TypeMismatch { .. }));
}

fn key_sequence(value: &Value, keys: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                keys.push(key.clone());
                key_sequence(child, keys);
            }
        }
        Value::Array(items) => items.iter().for_each(|item| key_sequence(item, keys)),
        _ => {}
    }
}

#[test]
fn indented_and_compact_text_differ_only_in_whitespace() {
    let mut section = Section::new();
    section.set_title("Build \u{e9}t\u{e9}");
    section.add_fact("Status:", "failed, see \"log\"");
    section.add_fact("Duration:", "3m");
    section
        .add_potential_action(OpenUriAction::new("Log", "http://ci/log").expect("action"))
        .expect("action");
    let mut post = HttpPostAction::new("Retry", "http://ci/retry");
    post.add_header("X-Token", "t");
    let mut card = MessageCard::new();
    card.set_title("CI");
    card.add_section(section);
    card.add_section(Section::new());
    card.add_potential_action(post).expect("action");

    let compact: Value = serde_json::from_str(&card.to_json()).expect("compact");
    for indent in [0, 2, 4] {
        let pretty: Value = serde_json::from_str(&card.to_json_pretty(indent)).expect("pretty");
        assert_eq!(compact, pretty);
        let (mut compact_keys, mut pretty_keys) = (Vec::new(), Vec::new());
        key_sequence(&compact, &mut compact_keys);
        key_sequence(&pretty, &mut pretty_keys);
        assert_eq!(compact_keys, pretty_keys);
    }
    assert_eq!(compact, card.payload());

    let mut keys = Vec::new();
    key_sequence(&compact, &mut keys);
    assert_eq!(
        &keys[..5],
        &["@type", "@context", "summary", "title", "sections"]
    );
}
