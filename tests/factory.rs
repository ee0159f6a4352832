use lenient_uri::*;

#[test]
fn creates_uri() {
    let factory = UriFactory::new();
    let uri = factory.create_uri("/users/1").unwrap();
    assert_eq!(uri.path(), "/users/1");
    assert_eq!(uri, Uri::parse("/users/1").unwrap());
}

#[test]
fn propagates_parse_error() {
    let factory = UriFactory::default();
    let e = factory.create_uri("host:65536").unwrap_err();
    assert_eq!(e, Uri::parse("host:65536").unwrap_err());
    assert_eq!(e.kind(), ParseErrorKind::InvalidPort);
}
