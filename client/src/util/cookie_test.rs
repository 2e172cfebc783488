use super::*;

#[test]
fn access_token_cookie_is_root_scoped_for_seven_days() {
    let raw = access_token_cookie("A");
    assert!(raw.starts_with("accessToken=A"), "{raw}");
    assert!(raw.contains("Path=/"), "{raw}");
    assert!(raw.contains("Max-Age=604800"), "{raw}");
}

#[test]
fn expired_cookie_is_empty_and_dated_at_epoch() {
    let raw = expired_access_token_cookie();
    assert!(raw.starts_with("accessToken=;"), "{raw}");
    assert!(raw.contains("Path=/"), "{raw}");
    assert!(raw.contains("01 Jan 1970 00:00:00 GMT"), "{raw}");

    let parsed = Cookie::parse(raw).unwrap();
    assert_eq!(parsed.value(), "");
    assert_eq!(parsed.expires_datetime(), Some(OffsetDateTime::UNIX_EPOCH));
}

#[test]
fn find_cookie_picks_named_value() {
    let header = "theme=dark; accessToken=abc.def; other=1";
    assert_eq!(find_cookie(header, "accessToken").as_deref(), Some("abc.def"));
    assert_eq!(find_cookie(header, "missing"), None);
}

#[test]
fn find_cookie_ignores_empty_value() {
    assert_eq!(find_cookie("accessToken=; theme=dark", "accessToken"), None);
    assert_eq!(find_cookie("", "accessToken"), None);
}
