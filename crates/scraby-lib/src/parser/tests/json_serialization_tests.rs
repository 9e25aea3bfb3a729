use serde_json::json;

use crate::parser::parse;

#[test]
fn tag_projection_json() {
    let statements = parse(r#"SELECT <p class="x">"#).unwrap();
    let value = serde_json::to_value(&statements).unwrap();

    assert_eq!(
        value,
        json!([{
            "Select": {
                "projections": [{
                    "expr": {
                        "Column": {
                            "parts": [{
                                "Tag": {
                                    "name": "p",
                                    "attributes": [{ "name": "class", "value": "x", "is_regex": false }],
                                    "span": { "start": 7, "end": 20 }
                                }
                            }]
                        }
                    }
                }],
                "from": null,
                "span": { "start": 0, "end": 20 }
            }
        }])
    );
}

#[test]
fn load_source_json() {
    let statements = parse("SELECT a FROM LOAD('u', 2) AS p").unwrap();
    let value = serde_json::to_value(&statements).unwrap();
    let from = &value[0]["Select"]["from"];

    assert_eq!(from["alias"]["text"], "p");
    assert_eq!(from["source"]["Load"]["url"]["value"], "u");
    assert_eq!(from["source"]["Load"]["url"]["kind"], "String");
    assert_eq!(from["source"]["Load"]["pages"]["Literal"]["value"], "2");
}

#[test]
fn error_json() {
    let err = parse("SELECT a FROM LOAD()").unwrap_err();
    let diag = err.diagnostic().expect("diagnostic");
    let value = serde_json::to_value(diag).unwrap();

    assert_eq!(
        value,
        json!({
            "kind": "BadLoadArguments",
            "range": { "start": 14, "end": 20 },
            "message": "bad arguments for LOAD: expected 1 or 2 arguments, found 0"
        })
    );
}
