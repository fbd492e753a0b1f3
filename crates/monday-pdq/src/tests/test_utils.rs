use crate::SimpleClient;
use monday::Client;
use wiremock::matchers::body_string_contains;
use wiremock::matchers::method;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

pub(super) fn simple_client(server: &MockServer) -> SimpleClient {
    let client = Client::builder("token")
        .endpoint(&format!("{}/v2/", server.uri()))
        .build()
        .unwrap();
    SimpleClient::from_client(client)
}

/// Answer every request whose form-encoded body contains `fragment` with
/// `body`.
pub(super) async fn respond(
    server: &MockServer,
    fragment: &str,
    body: &str,
    expected_calls: u64,
) {
    Mock::given(method("POST"))
        .and(body_string_contains(fragment))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

thread_local! {
    static CAPTURED: std::cell::RefCell<Vec<String>> = const {
        std::cell::RefCell::new(Vec::new())
    };
}

/// Records every message logged on the current thread.
struct CapturingLogger;
impl log::Log for CapturingLogger {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        let message = record.args().to_string();
        CAPTURED.with(|captured| captured.borrow_mut().push(message));
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger;

/// Start capturing this thread's log messages, discarding earlier ones.
pub(super) fn capture_logs() {
    // Another test may have installed it already.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(log::LevelFilter::Trace);
    CAPTURED.with(|captured| captured.borrow_mut().clear());
}

/// Whether a message logged on this thread since [`capture_logs`] equals
/// `message`.
pub(super) fn logged(message: &str) -> bool {
    CAPTURED.with(|captured| captured.borrow().iter().any(|m| m == message))
}
