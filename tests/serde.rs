#![cfg(feature = "serde")]

use lenient_uri::Uri;

#[test]
fn serialize_as_string() {
    let u = Uri::parse("HTTP://Example.com:80/a?b#c").unwrap();
    assert_eq!(
        serde_json::to_string(&u).unwrap(),
        r#""http://example.com/a?b#c""#
    );
}

#[test]
fn deserialize_from_string() {
    let u: Uri = serde_json::from_str(r#""https://user@example.com:8443/x""#).unwrap();
    assert_eq!(u.userinfo(), "user");
    assert_eq!(u.port(), Some(8443));

    let e = serde_json::from_str::<Uri>(r#""host:65536""#).unwrap_err();
    assert!(e.to_string().contains("host:65536"));
}
