use error_origin::traits::ResultExt;
use error_origin::OriginResult;

#[test]
fn wrap_err_on_err_keeps_the_message() {
    let result: Result<(), &str> = Err("original");
    let err = result.wrap_err().unwrap_err();

    assert_eq!(err.message(), "original");
}

#[test]
fn wrap_err_on_ok_passes_the_value_through() {
    let result: Result<i32, &str> = Ok(42);
    assert_eq!(result.wrap_err().unwrap(), 42);
}

#[test]
fn wrap_err_suffix_appends_context() {
    let result: Result<String, std::io::Error> =
        std::fs::read_to_string("/nonexistent/config.toml");
    let err = result.wrap_err_suffix("loading configuration").unwrap_err();

    assert!(err.message().ends_with(": loading configuration"));
    assert_eq!(err.suffix(), Some("loading configuration"));
}

#[test]
fn wrap_err_with_is_lazy_on_ok() {
    let mut called = false;
    let result: Result<(), &str> = Ok(());

    let _ = result.wrap_err_with(|| {
        called = true;
        "should not be called"
    });
    assert!(!called, "closure for wrap_err_with should not be called on Ok result");
}

#[test]
fn wrap_err_with_runs_on_err() {
    let result: Result<(), &str> = Err("not found");
    let err = result.wrap_err_with(|| format!("user {}", 42)).unwrap_err();

    assert_eq!(err.message(), "not found: user 42");
}

#[test]
fn wrap_err_records_the_call_site() {
    fn parse(raw: &str) -> OriginResult<u32> {
        raw.parse::<u32>().wrap_err()
    }

    let err = parse("x").unwrap_err();
    assert!(err.location().file().ends_with("result_ext.rs"));
    assert!(err.type_name().contains("ParseIntError"));
}
