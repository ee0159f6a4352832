use lenient_uri::Uri;

fn main() {
    let uri = Uri::new()
        .with_scheme("HTTPS")
        .with_userinfo("hello", None)
        .with_host("Example.com")
        .with_port(Some(443))
        .expect("port in range")
        .with_path("what")
        .with_query("k=v")
        .with_fragment("title1");
    println!("{uri}");
    println!("{uri:#?}");

    let moved = uri.with_port(Some(8443)).expect("port in range");
    println!("{moved}");

    match uri.with_port(Some(70000)) {
        Ok(_) => unreachable!(),
        Err(e) => println!("Error: {e}"),
    }

    let uri = Uri::new().with_path("////double").with_fragment("fragment");
    println!("{uri}");
    println!("{uri:#?}");
}
