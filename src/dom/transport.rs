//! Background send-code request over `fetch`.

use crate::conf::REQUEST_TIMEOUT_MS;
use crate::error::{SendCodeError, SendCodeResult};
use crate::send_code::{CodeSender, SendCodeResponse};

use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::{AbortController, FormData, HtmlFormElement};

/// Posts the form's current fields to the JSON endpoint.
pub struct FetchSender {
    form: HtmlFormElement,
    endpoint: String,
}

impl FetchSender {
    pub fn new(form: HtmlFormElement, endpoint: String) -> Self {
        Self { form, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl CodeSender for FetchSender {
    async fn send(&self) -> SendCodeResult<SendCodeResponse> {
        let body = FormData::new_with_form(&self.form).map_err(|_| SendCodeError::FormData)?;

        // without a controller the request simply runs without a deadline
        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(AbortController::signal);
        let _timeout = controller
            .clone()
            .map(|controller| Timeout::new(REQUEST_TIMEOUT_MS, move || controller.abort()));

        let response = Request::post(&self.endpoint)
            .abort_signal(signal.as_ref())
            .body(body)
            .send()
            .await
            .map_err(SendCodeError::from_request)?;

        response
            .json::<SendCodeResponse>()
            .await
            .map_err(SendCodeError::Parse)
    }
}
