use assert_json_diff::assert_json_eq;
use recognize_client::model::normalize::{Item, normalize};
use recognize_client::model::soap::SoapReply;
use serde_json::{Value, json};

const LIST_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/" xmlns:ns1="http://clapi.itraff.pl" xmlns:ns2="http://xml.apache.org/xml-soap" xmlns:SOAP-ENC="http://schemas.xmlsoap.org/soap/encoding/">
  <SOAP-ENV:Body>
    <ns1:imageListResponse>
      <return>
        <item><key>status</key><value>0</value></item>
        <item><key>data</key><value SOAP-ENC:arrayType="ns2:Map[2]">
          <item>
            <item><key>id</key><value>a1</value></item>
            <item><key>name</key><value>Poster</value></item>
            <item><key>href</key><value>http://img.example/a1.jpg</value></item>
          </item>
          <item>
            <item><key>id</key><value>b2</value></item>
            <item><key>name</key><value>Cover &amp; Back</value></item>
            <item><key>href</key><value/></item>
          </item>
        </value></item>
        <item><key>message</key></item>
      </return>
    </ns1:imageListResponse>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#;

#[test]
fn test_array_members_keyed_by_position() {
    let SoapReply::Result(map) = SoapReply::parse(LIST_RESPONSE).unwrap() else {
        panic!("expected a result");
    };

    assert_json_eq!(
        Value::Object(map),
        json!({
            "status": "0",
            "data": {
                "0": {"id": "a1", "name": "Poster", "href": "http://img.example/a1.jpg"},
                "1": {"id": "b2", "name": "Cover & Back"},
            },
        })
    );
}

#[test]
fn test_top_level_keys_match_present_entries() {
    let items = vec![
        Item::scalar("status", "0"),
        Item::absent("message"),
        Item::nested("data", vec![Item::scalar("count", "12")]),
    ];
    let map = normalize(&items);
    let keys: Vec<&String> = map.keys().collect();
    assert_eq!(keys.len(), 2);
    assert!(map.contains_key("status"));
    assert!(map.contains_key("data"));
    assert!(!map.contains_key("message"));
}

#[test]
fn test_empty_list() {
    assert!(normalize(&[]).is_empty());
}

#[test]
fn test_nested_lists_recurse() {
    let items = vec![Item::nested(
        "limits",
        vec![Item::list(vec![Item::scalar("left", "3")])],
    )];
    assert_eq!(
        Value::Object(normalize(&items)),
        json!({"limits": {"0": {"left": "3"}}})
    );
}
