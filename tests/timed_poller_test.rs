#[cfg(test)]
mod timed_poller {

    use std::sync::Arc;
    use std::time::Duration;

    use repeater::http_client::reqwest_http_client::ReqwestHttpClient;
    use repeater::poller::poller::Poller;
    use repeater::poller::timed_poller::TimedPoller;

    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn make_timed_poller(base_url: &str, iteration_bound: u32) -> TimedPoller {
        TimedPoller::new(
            Arc::new(ReqwestHttpClient::default()),
            base_url,
            iteration_bound,
            Duration::from_millis(0),
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn should_poll_the_send_endpoint_until_the_bound() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/send/"))
            .and(header("Accept", "application/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"{"ok":true}"#, "application/json"),
            )
            .expect(4)
            .mount(&mock_server)
            .await;

        let poller = make_timed_poller(&mock_server.uri(), 5);

        assert_eq!(poller.execute().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn should_stop_polling_when_the_endpoint_starts_failing() {
        let mock_server = MockServer::start().await;

        // The first two calls answer 200, every call after that falls through
        // to the mock server's default 404.
        Mock::given(method("GET"))
            .and(path("/send/"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(r#"{"ok":true}"#, "application/json"),
            )
            .up_to_n_times(2)
            .mount(&mock_server)
            .await;

        let poller = make_timed_poller(&mock_server.uri(), 300);

        let failure = poller.execute().await.unwrap_err();

        assert_eq!(failure.iteration, 3);
        assert!(failure.reason.contains("404"));
    }

    #[tokio::test]
    async fn should_abort_when_the_endpoint_is_slower_than_the_request_timeout() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/send/"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_raw(r#"{"ok":true}"#, "application/json")
                    .set_delay(Duration::from_millis(200)),
            )
            .mount(&mock_server)
            .await;

        let poller = TimedPoller::new(
            Arc::new(ReqwestHttpClient::default()),
            &mock_server.uri(),
            300,
            Duration::from_millis(0),
            Duration::from_millis(50),
        );

        let failure = poller.execute().await.unwrap_err();

        assert_eq!(failure.iteration, 1);
        assert!(failure.reason.contains("timed out"));
    }

    #[tokio::test]
    async fn should_abort_when_the_endpoint_body_is_not_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/send/"))
            .respond_with(ResponseTemplate::new(200).set_body_string("pong"))
            .mount(&mock_server)
            .await;

        let poller = make_timed_poller(&mock_server.uri(), 300);

        let failure = poller.execute().await.unwrap_err();

        assert_eq!(failure.iteration, 1);
        assert!(failure.reason.contains("Undecodable body"));
    }
}
