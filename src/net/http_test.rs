use super::*;

#[test]
fn url_for_joins_base_and_path() {
    let transport = HttpTransport::new("http://localhost:3000");
    assert_eq!(transport.url_for("/api/auth/login"), "http://localhost:3000/api/auth/login");
}

#[cfg(not(feature = "csr"))]
#[test]
fn send_fails_outside_the_browser() {
    use crate::net::api::{DETAILS_PATH, Method};

    let transport = HttpTransport::new("http://localhost:3000");
    let request = ApiRequest { method: Method::Get, path: DETAILS_PATH, bearer: None, body: None };
    let err = futures::executor::block_on(transport.send(request)).unwrap_err();
    assert!(matches!(err, SessionError::Network(_)));
}
