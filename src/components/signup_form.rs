use gloo::console::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::banner::BannerKind;
use crate::error::ApiError;

const SIGNUP_FALLBACK: &str = "An error occurred";
const SIGNUP_NETWORK_FAILURE: &str = "Failed to sign up. Please try again.";

/// Banner content for a finished signup request.
pub fn signup_notice(result: &Result<String, ApiError>) -> (BannerKind, String) {
    match result {
        Ok(message) => (BannerKind::Success, message.clone()),
        Err(e @ ApiError::Rejected { .. }) => (
            BannerKind::Error,
            e.detail().unwrap_or(SIGNUP_FALLBACK).to_string(),
        ),
        Err(_) => (BannerKind::Error, SIGNUP_NETWORK_FAILURE.to_string()),
    }
}

/// Announces the outcome; on success also resets the form and asks for one
/// list refresh.
pub fn finish_signup(
    result: &Result<String, ApiError>,
    on_notice: &Callback<(BannerKind, String)>,
    on_signed_up: &Callback<()>,
    reset_form: impl FnOnce(),
) {
    on_notice.emit(signup_notice(result));
    if result.is_ok() {
        reset_form();
        on_signed_up.emit(());
    }
}

#[derive(Properties, PartialEq)]
pub struct SignupFormProps {
    pub api: ApiClient,
    pub activity_names: Vec<AttrValue>,
    /// Fired once after a successful signup so the list can be refreshed.
    pub on_signed_up: Callback<()>,
    pub on_notice: Callback<(BannerKind, String)>,
}

#[function_component(SignupForm)]
pub fn signup_form(props: &SignupFormProps) -> Html {
    let form_ref = use_node_ref();
    let email_ref = use_node_ref();
    let activity_ref = use_node_ref();

    let on_submit = {
        let api = props.api.clone();
        let on_signed_up = props.on_signed_up.clone();
        let on_notice = props.on_notice.clone();
        let form_ref = form_ref.clone();
        let email_ref = email_ref.clone();
        let activity_ref = activity_ref.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email = email_ref
                .cast::<HtmlInputElement>()
                .map(|i| i.value())
                .unwrap_or_default();
            let activity = activity_ref
                .cast::<HtmlSelectElement>()
                .map(|s| s.value())
                .unwrap_or_default();

            let api = api.clone();
            let on_signed_up = on_signed_up.clone();
            let on_notice = on_notice.clone();
            let form_ref = form_ref.clone();

            spawn_local(async move {
                let result = api.sign_up(&activity, &email).await;
                if let Err(ApiError::Network(msg) | ApiError::Decode(msg)) = &result {
                    error!("Error signing up:", msg.clone());
                }
                finish_signup(&result, &on_notice, &on_signed_up, || {
                    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                });
            });
        })
    };

    html! {
        <form id="signup-form" ref={form_ref} onsubmit={on_submit}>
          <div class="form-group">
            <label for="email">{ "Student Email:" }</label>
            <input type="email" id="email" ref={email_ref} required={true}
                   placeholder="your-email@mergington.edu" />
          </div>
          <div class="form-group">
            <label for="activity">{ "Select Activity:" }</label>
            <select id="activity" ref={activity_ref} required={true}>
              <option value="">{ "-- Select an activity --" }</option>
              { for props.activity_names.iter().map(|name| html! {
                  <option value={name.clone()}>{ name.clone() }</option>
              }) }
            </select>
          </div>
          <button type="submit">{ "Sign Up" }</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn success_uses_server_message() {
        let notice = signup_notice(&Ok("Signed up emma@mergington.edu for Chess Club".into()));
        assert_eq!(
            notice,
            (BannerKind::Success, "Signed up emma@mergington.edu for Chess Club".to_string())
        );
    }

    #[test]
    fn rejection_prefers_detail_then_fallback() {
        let with_detail = Err(ApiError::Rejected {
            status: 400,
            detail: Some("Student is already signed up".into()),
        });
        assert_eq!(
            signup_notice(&with_detail),
            (BannerKind::Error, "Student is already signed up".to_string())
        );

        let bare = Err(ApiError::Rejected { status: 500, detail: None });
        assert_eq!(signup_notice(&bare), (BannerKind::Error, SIGNUP_FALLBACK.to_string()));
    }

    #[test]
    fn transport_failure_is_generic() {
        let offline = Err(ApiError::Network("TypeError: Failed to fetch".into()));
        assert_eq!(
            signup_notice(&offline),
            (BannerKind::Error, SIGNUP_NETWORK_FAILURE.to_string())
        );
    }

    #[derive(Default)]
    struct Seen {
        notices: RefCell<Vec<(BannerKind, String)>>,
        refreshes: Cell<u32>,
        resets: Cell<u32>,
    }

    fn finish(result: Result<String, ApiError>) -> Rc<Seen> {
        let seen = Rc::new(Seen::default());
        let on_notice = {
            let seen = seen.clone();
            Callback::from(move |n: (BannerKind, String)| seen.notices.borrow_mut().push(n))
        };
        let on_signed_up = {
            let seen = seen.clone();
            Callback::from(move |()| seen.refreshes.set(seen.refreshes.get() + 1))
        };
        finish_signup(&result, &on_notice, &on_signed_up, || {
            seen.resets.set(seen.resets.get() + 1)
        });
        seen
    }

    #[test]
    fn success_resets_form_and_refreshes_once() {
        let seen = finish(Ok("Signed up emma@mergington.edu for Chess Club".into()));
        assert_eq!(seen.resets.get(), 1);
        assert_eq!(seen.refreshes.get(), 1);
        assert_eq!(
            *seen.notices.borrow(),
            vec![(BannerKind::Success, "Signed up emma@mergington.edu for Chess Club".to_string())]
        );
    }

    #[test]
    fn failure_neither_resets_nor_refreshes() {
        for result in [
            Err(ApiError::Rejected {
                status: 400,
                detail: Some("Student is already signed up".into()),
            }),
            Err(ApiError::Network("TypeError: Failed to fetch".into())),
        ] {
            let seen = finish(result);
            assert_eq!(seen.resets.get(), 0);
            assert_eq!(seen.refreshes.get(), 0);
            assert_eq!(seen.notices.borrow().len(), 1);
            assert_eq!(seen.notices.borrow()[0].0, BannerKind::Error);
        }
    }
}
