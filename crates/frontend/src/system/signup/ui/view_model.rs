use std::rc::Rc;

use contracts::shared::response::MessageResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::model::{SignupError, SignupField, SignupState};
use crate::shared::api_utils::ApiError;
use crate::shared::notice::{Notice, NoticeService, Notifier};
use crate::system::signup::api::{HttpSignupApi, SignupApi};

pub const SIGNUP_SUCCEEDED: &str = "Signup successful!";
pub const SIGNUP_ERROR: &str = "Something went wrong.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Stopped by local validation, nothing was sent
    Rejected(SignupError),
    /// The service answered and its message was shown
    Answered,
    /// Transport or decode failure
    Failed,
}

/// Validate the form and, when it passes, send it to the account service.
///
/// Every path ends with exactly one notice.
pub async fn submit_signup(
    api: &dyn SignupApi,
    notifier: &dyn Notifier,
    state: &SignupState,
) -> SubmitOutcome {
    let request = match state.validate() {
        Ok(request) => request,
        Err(err) => {
            notifier.notify(Notice::error(err.to_string()));
            return SubmitOutcome::Rejected(err);
        }
    };

    match api.signup(&request).await {
        Ok(body) => {
            log::debug!("Signup response: {:?}", body);
            notifier.notify(Notice::success(body.message_or(SIGNUP_SUCCEEDED)));
            SubmitOutcome::Answered
        }
        Err(ApiError::Status { status, message }) => {
            log::warn!("Signup answered with status {}: {:?}", status, message);
            let body = MessageResponse { message };
            notifier.notify(Notice::success(body.message_or(SIGNUP_SUCCEEDED)));
            SubmitOutcome::Answered
        }
        Err(err) => {
            log::error!("Signup error: {}", err);
            notifier.notify(Notice::error(SIGNUP_ERROR));
            SubmitOutcome::Failed
        }
    }
}

#[derive(Clone)]
pub struct SignupDeps {
    pub api: Rc<dyn SignupApi>,
    pub notifier: Rc<dyn Notifier>,
}

impl SignupDeps {
    pub fn browser(notices: NoticeService) -> Self {
        Self {
            api: Rc::new(HttpSignupApi::from_config()),
            notifier: Rc::new(notices),
        }
    }
}

/// ViewModel for the signup form
#[derive(Clone, Copy)]
pub struct SignupViewModel {
    pub state: RwSignal<SignupState>,
    pub submitting: RwSignal<bool>,
    deps: StoredValue<SignupDeps, LocalStorage>,
}

impl SignupViewModel {
    pub fn new(deps: SignupDeps) -> Self {
        Self {
            state: RwSignal::new(SignupState::new(&mut rand::thread_rng())),
            submitting: RwSignal::new(false),
            deps: StoredValue::new_local(deps),
        }
    }

    pub fn value(&self, field: SignupField) -> String {
        self.state.with(|s| s.form.get(field).to_string())
    }

    pub fn set_field(&self, field: SignupField, value: String) {
        self.state.update(|s| s.form.set(field, value));
    }

    pub fn captcha(&self) -> String {
        self.state.with(|s| s.captcha.clone())
    }

    pub fn refresh_captcha(&self) {
        self.state
            .update(|s| s.refresh_captcha(&mut rand::thread_rng()));
    }

    /// Submit the current form. Ignored while a previous submit is in flight.
    pub fn submit_command(&self) {
        if self.submitting.get_untracked() {
            return;
        }
        let snapshot = self.state.get_untracked();
        let deps = self.deps.get_value();
        let submitting = self.submitting;

        submitting.set(true);
        spawn_local(async move {
            submit_signup(deps.api.as_ref(), deps.notifier.as_ref(), &snapshot).await;
            let _ = submitting.try_set(false);
        });
    }
}
