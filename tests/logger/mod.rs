use std::io::{self, Write};
use std::process::Command;
use std::sync::{Arc, Mutex};
use std::thread;

use error_origin::{ErrorLogger, LoggerConfig, Sink};

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

struct Broken;

impl Write for Broken {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn print_writes_prefix_and_stack_dump() {
    let capture = Capture::default();
    let logger = ErrorLogger::writer(capture.clone());

    logger.print("disk full");

    let output = capture.contents();
    let (head, stack) = output.split_once('\n').unwrap();
    assert!(head.starts_with("[error] "));
    assert!(head.ends_with(" disk full"));
    assert!(head.contains("MessageError"));
    assert!(!stack.is_empty());
    assert!(output.ends_with('\n'));
    assert!(!output.ends_with("\n\n"));
}

#[test]
fn only_the_first_line_is_prefixed() {
    let capture = Capture::default();
    ErrorLogger::writer(capture.clone()).print("x");

    assert_eq!(capture.contents().matches("[error] ").count(), 1);
}

#[test]
fn printf_formats_before_wrapping() {
    let capture = Capture::default();
    ErrorLogger::writer(capture.clone()).printf(format_args!("retry {} of {}", 2, 3));

    assert!(capture.contents().lines().next().unwrap().ends_with(" retry 2 of 3"));
}

#[test]
fn custom_prefix_is_used() {
    let capture = Capture::default();
    let logger = ErrorLogger::writer(capture.clone()).with_config(LoggerConfig::with_prefix("E: "));

    logger.print(std::io::Error::other("boom"));

    assert!(capture.contents().starts_with("E: "));
    assert_eq!(logger.config().prefix, "E: ");
}

#[test]
fn bare_config_writes_the_dump_verbatim() {
    let capture = Capture::default();
    let logger = ErrorLogger::new(LoggerConfig::bare(), Sink::writer(capture.clone()));
    let err = error_origin::OriginError::new("x");

    logger.log(&err).unwrap();

    assert_eq!(capture.contents(), LoggerConfig::bare().render(&err.stack_dump()));
    assert!(capture.contents().starts_with(err.type_name()));
}

#[test]
fn write_failures_surface_only_through_try_print() {
    let logger = ErrorLogger::writer(Broken);

    logger.print("ignored");
    let err = logger.try_print("reported").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
}

#[test]
fn concurrent_records_stay_whole() {
    let capture = Capture::default();
    let logger = Arc::new(ErrorLogger::writer(capture.clone()));

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || logger.printf(format_args!("worker {worker}")))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let output = capture.contents();
    let records: Vec<&str> = output.split("[error] ").filter(|r| !r.is_empty()).collect();
    assert_eq!(records.len(), 8);
    for record in records {
        let head = record.lines().next().unwrap();
        assert!(head.contains(" worker "));
        assert!(record.ends_with('\n'));
    }
}

#[inline(never)]
fn report_from_helper(logger: &ErrorLogger) {
    logger.print("helper failed");
}

#[test]
fn print_attributes_the_stack_to_its_caller() {
    let capture = Capture::default();
    report_from_helper(&ErrorLogger::writer(capture.clone()));

    let output = capture.contents();
    let mut lines = output.lines();
    assert!(lines.next().unwrap().ends_with("MessageError helper failed"));
    assert!(lines.next().unwrap().contains("logger"));
    assert!(lines.next().unwrap().ends_with("report_from_helper"), "{output}");
    assert!(!output.contains("ErrorLogger::print"));
}

#[test]
fn render_adds_exactly_one_newline() {
    let config = LoggerConfig::default();

    assert_eq!(config.render("a"), "[error] a\n");
    assert_eq!(config.render("a\n"), "[error] a\n");
    assert_eq!(config.render("a\nb"), "[error] a\nb\n");
}

#[test]
fn zero_exit_code_still_reports_failure() {
    assert_eq!(LoggerConfig::default().exit_status(), 1);
    assert_eq!(LoggerConfig::default().exit_code(0).exit_status(), 1);
    assert_eq!(LoggerConfig::default().exit_code(7).exit_status(), 7);
}

#[test]
fn global_logger_can_only_be_installed_before_first_use() {
    let global = ErrorLogger::global();

    assert_eq!(global.config(), &LoggerConfig::default());
    assert!(ErrorLogger::install(ErrorLogger::stderr()).is_err());
    assert!(std::ptr::eq(global, ErrorLogger::global()));
}

#[test]
fn fatal_logs_then_exits_with_the_configured_status() {
    if std::env::var_os("ERROR_ORIGIN_FATAL_CHILD").is_some() {
        let logger = ErrorLogger::stderr().with_config(LoggerConfig::default().exit_code(3));
        logger.fatal("unrecoverable");
    }

    let output = Command::new(std::env::current_exe().unwrap())
        .args(["--exact", "logger::fatal_logs_then_exits_with_the_configured_status"])
        .arg("--nocapture")
        .env("ERROR_ORIGIN_FATAL_CHILD", "1")
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr.contains("[error] "));
    assert!(stderr.contains(" unrecoverable\n"));
}

#[cfg(feature = "tracing")]
mod tracing_sink {
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use error_origin::{ErrorLogger, OriginError};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    type Fields = Vec<(&'static str, String)>;

    #[derive(Clone, Default)]
    struct Events(Arc<Mutex<Vec<(Level, String, Fields)>>>);

    struct Recorder(Fields);

    impl Visit for Recorder {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.push((field.name(), value.to_owned()));
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0.push((field.name(), format!("{value:?}")));
        }
    }

    impl<S: Subscriber> Layer<S> for Events {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut recorder = Recorder(Vec::new());
            event.record(&mut recorder);
            let meta = event.metadata();
            self.0.lock().unwrap().push((*meta.level(), meta.target().to_owned(), recorder.0));
        }
    }

    fn field<'a>(fields: &'a Fields, name: &str) -> Option<&'a str> {
        fields.iter().find(|(key, _)| *key == name).map(|(_, value)| value.as_str())
    }

    #[test]
    fn records_become_one_structured_error_event() {
        let events = Events::default();
        let subscriber = tracing_subscriber::registry().with(events.clone());
        let err = OriginError::with_suffix("quota exhausted", "tenant 7");

        tracing::subscriber::with_default(subscriber, || ErrorLogger::tracing().log(&err)).unwrap();

        let recorded = events.0.lock().unwrap();
        assert_eq!(recorded.len(), 1);

        let (level, target, fields) = &recorded[0];
        assert_eq!(*level, Level::ERROR);
        assert_eq!(target, "error_origin");
        assert_eq!(field(fields, "error.type"), Some(err.type_name()));
        assert_eq!(field(fields, "error.message"), Some("quota exhausted: tenant 7"));
        assert_eq!(field(fields, "origin"), Some(err.location().to_string().as_str()));

        let message = field(fields, "message").unwrap();
        assert!(message.starts_with("[error] "));
        assert!(message.contains(" quota exhausted: tenant 7\n"));
    }

    #[test]
    fn records_are_accepted_without_a_subscriber() {
        assert!(ErrorLogger::tracing().try_print("routed to tracing").is_ok());
    }
}
