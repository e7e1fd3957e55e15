use super::*;

#[test]
fn base_url_trailing_slash_is_trimmed() {
    let client = ApiClient::new("http://cms.local:3000/", None).expect("client");
    assert_eq!(client.url("/api/blogs"), "http://cms.local:3000/api/blogs");
}

#[test]
fn blank_token_sends_no_credential() {
    assert!(ApiClient::new("http://cms.local", Some("   ")).is_ok());
}

#[test]
fn token_with_newline_is_rejected() {
    assert!(matches!(
        ApiClient::new("http://cms.local", Some("abc\ndef")),
        Err(CliError::InvalidHeader(_))
    ));
}

#[test]
fn server_error_uses_backend_message() {
    match server_error(409, r#"{"message":"Slug already in use"}"#) {
        CliError::Server { status, message } => {
            assert_eq!(status, 409);
            assert_eq!(message, "Slug already in use");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn server_error_without_message_is_generic() {
    let err = server_error(500, "<html>oops</html>");
    assert_eq!(
        err.to_string(),
        format!("server returned HTTP 500: {}", drafts::submit::GENERIC_SUBMIT_FAILURE)
    );
}
