#![no_main]
use lenient_uri::{component::Components, Uri};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(c) = Components::parse(data) else {
        assert!(Uri::parse(data).is_err());
        return;
    };
    let uri = Uri::parse(data).unwrap();

    // Every component is a slice of the input, in order.
    let mut rest = data;
    for part in [c.scheme, c.user, c.password, c.host, c.path, c.query, c.fragment]
        .into_iter()
        .flatten()
    {
        let i = rest.find(part).expect("component not in input");
        rest = &rest[i + part.len()..];
    }

    assert_eq!(uri.host_raw(), c.host.unwrap_or_default());
    assert_eq!(uri.port_value(), c.port);
    assert_eq!(uri.has_authority(), uri.host().len() > 0);
    if let Some(port) = uri.port() {
        assert_ne!(port, 0);
        assert!(uri.authority().ends_with(&format!(":{port}")));
    }
    let _ = uri.to_string();
});
