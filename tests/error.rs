use lenient_uri::*;

#[test]
fn parse_error_message_contains_uri() {
    let e = Uri::parse("host:65536").unwrap_err();
    assert_eq!(
        e.to_string(),
        "the uri 'host:65536' is not valid: invalid port at index 5"
    );
    assert_eq!(e.plain().to_string(), "invalid port at index 5");

    let e = Uri::parse("http://").unwrap_err();
    assert_eq!(
        e.to_string(),
        "the uri 'http://' is not valid: empty host at index 7"
    );
}

#[test]
fn port_range_error_message_contains_port() {
    let e = Uri::new().with_port(Some(65536)).unwrap_err();
    assert_eq!(
        e.to_string(),
        "port '65536' is not within a valid UDP/TCP range"
    );

    let e = Uri::new().with_port(Some(-1)).unwrap_err();
    assert_eq!(e.to_string(), "port '-1' is not within a valid UDP/TCP range");
    assert!(e.port() < PortRangeError::MIN);
}

#[test]
#[cfg(feature = "impl-error")]
fn errors_are_std_errors() {
    fn boxed<E: std::error::Error + Send + Sync + 'static>(e: E) -> Box<dyn std::error::Error> {
        Box::new(e)
    }

    let e = boxed(Uri::parse(":").unwrap_err());
    assert!(e.to_string().contains("':'"));

    let e = boxed(Uri::new().with_port(Some(70000)).unwrap_err());
    assert!(e.to_string().contains("70000"));
}

#[test]
fn into_input() {
    let e = Uri::parse("http://host:abc").unwrap_err();
    assert_eq!(e.into_input(), "http://host:abc");
}
