#![no_main]
use lenient_uri::Uri;
use libfuzzer_sys::{arbitrary::Arbitrary, fuzz_target};

#[derive(Arbitrary, Debug)]
struct Parts<'a> {
    scheme: &'a str,
    user: &'a str,
    password: Option<&'a str>,
    host: &'a str,
    port: Option<i64>,
    path: &'a str,
    query: &'a str,
    fragment: &'a str,
}

fuzz_target!(|p: Parts<'_>| {
    let base = Uri::new()
        .with_scheme(p.scheme)
        .with_userinfo(p.user, p.password)
        .with_host(p.host)
        .with_path(p.path)
        .with_query(p.query)
        .with_fragment(p.fragment);

    let uri = match base.with_port(p.port) {
        Ok(uri) => uri,
        Err(e) => {
            let port = p.port.unwrap();
            assert!(!(0..=65535).contains(&port));
            assert_eq!(e.port(), port);
            return;
        }
    };

    let before = base.to_string();
    let s = uri.to_string();
    assert_eq!(base.to_string(), before);

    assert_eq!(uri.path(), p.path);
    assert_eq!(uri.password(), p.password.unwrap_or_default());
    if !p.host.is_empty() && !p.path.is_empty() {
        assert!(s.contains(&format!("{}/", uri.authority())));
    }
    if p.host.is_empty() {
        // The path must not be taken for an authority.
        let scheme = uri.scheme();
        let rest = if scheme.is_empty() { &s[..] } else { &s[scheme.len() + 1..] };
        assert!(!rest.starts_with("//"));
    }
});
