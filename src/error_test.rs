use super::*;

#[test]
fn auth_rejected_displays_message_verbatim() {
    let err = SessionError::AuthRejected { status: 401, message: "bad creds".to_owned() };
    assert_eq!(err.to_string(), "bad creds");
}

#[test]
fn network_error_displays_cause() {
    let err = SessionError::Network("connection refused".to_owned());
    assert_eq!(err.to_string(), "network request failed: connection refused");
}

#[test]
fn http_status_displays_code() {
    assert_eq!(SessionError::HttpStatus(503).to_string(), "request failed with status 503");
}

#[test]
fn unauthorized_covers_401_and_403() {
    assert!(SessionError::HttpStatus(401).is_unauthorized());
    assert!(SessionError::HttpStatus(403).is_unauthorized());
    assert!(
        SessionError::AuthRejected { status: 401, message: LOGIN_FAILED_MESSAGE.to_owned() }
            .is_unauthorized()
    );
    assert!(!SessionError::HttpStatus(500).is_unauthorized());
    assert!(!SessionError::Network("x".to_owned()).is_unauthorized());
}

#[test]
fn storage_write_error_names_key() {
    let err = StorageError::Write { key: "ns.user".to_owned(), reason: "quota".to_owned() };
    assert_eq!(err.to_string(), "failed to write ns.user: quota");
}
