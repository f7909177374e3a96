use std::rc::Rc;

use gloo::console::error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlButtonElement};
use yew::prelude::*;

use crate::api::ApiClient;
use crate::banner::{flash, Banner, BannerKind};
use crate::components::{ActivityList, MessageBanner, SignupForm};
use crate::config::AppConfig;
use crate::error::ApiError;
use crate::model::Activities;
use crate::removal::{PendingRemovals, RemovalAction};
use crate::roster::RemovalTarget;

const LIST_FAILURE: &str = "Failed to load activities. Please try again later.";
const REMOVAL_FALLBACK: &str = "Failed to remove participant";
const REMOVAL_NETWORK_FAILURE: &str = "Failed to remove participant. Please try again.";

#[derive(Clone, PartialEq)]
enum Listing {
    Loading,
    Ready(Rc<Activities>),
    Failed,
}

/// Banner text for a failed removal.
fn removal_failure_text(e: &ApiError) -> String {
    match e {
        ApiError::Rejected { .. } => e.detail().unwrap_or(REMOVAL_FALLBACK).to_string(),
        _ => REMOVAL_NETWORK_FAILURE.to_string(),
    }
}

/// Resolves a click inside the list to the participant row it should remove.
/// Returns the clicked control alongside the decoded identifiers.
fn removal_click_target(e: &MouseEvent) -> Option<(Element, RemovalTarget)> {
    let origin = e.target_dyn_into::<Element>()?;
    let control = origin.closest(".participant-delete").ok()??;
    let row = control.closest(".participant-item").ok()??;
    let target = RemovalTarget::from_encoded(
        row.get_attribute("data-email").as_deref(),
        row.get_attribute("data-activity").as_deref(),
    )?;
    Some((control, target))
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| AppConfig::load());
    let api = use_memo(config.clone(), |cfg| ApiClient::new(cfg.api_base.clone()));

    let listing = use_state(|| Listing::Loading);
    let banner = use_reducer(Banner::default);
    let pending = use_reducer(PendingRemovals::default);

    let notify = {
        let banner = banner.dispatcher();
        let hide_after_ms = config.banner_hide_ms;
        Callback::from(move |(kind, text): (BannerKind, String)| {
            flash(&banner, kind, text, hide_after_ms)
        })
    };

    // Fetch and rebuild cards + dropdown together. Overlapping reloads are not
    // guarded; whichever resolves last is what stays on screen.
    let reload = {
        let api = api.clone();
        let listing = listing.clone();
        let pending = pending.dispatcher();
        Callback::from(move |()| {
            let api = api.clone();
            let listing = listing.clone();
            let pending = pending.clone();
            spawn_local(async move {
                match api.activities().await {
                    Ok(activities) => {
                        listing.set(Listing::Ready(Rc::new(activities)));
                        pending.dispatch(RemovalAction::Reset);
                    }
                    Err(e) => {
                        error!("Error fetching activities:", e.to_string());
                        listing.set(Listing::Failed);
                    }
                }
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| {
            reload.emit(());
            || ()
        });
    }

    // One listener for every current and future removal control.
    let on_list_click = {
        let api = api.clone();
        let pending = pending.dispatcher();
        let reload = reload.clone();
        let notify = notify.clone();
        Callback::from(move |e: MouseEvent| {
            let Some((control, target)) = removal_click_target(&e) else {
                return;
            };
            // The DOM flag guards a second click before the next render; the
            // reducer keeps the vdom in agreement. Both sides are always
            // flipped together.
            let button = control.dyn_into::<HtmlButtonElement>().ok();
            if let Some(button) = &button {
                if button.disabled() {
                    return;
                }
                button.set_disabled(true);
            }
            pending.dispatch(RemovalAction::Begin(target.clone()));

            let api = api.clone();
            let pending = pending.clone();
            let reload = reload.clone();
            let notify = notify.clone();
            spawn_local(async move {
                match api.remove_participant(&target.activity, &target.email).await {
                    Ok(()) => reload.emit(()),
                    Err(e) => {
                        error!("Error removing participant:", e.to_string());
                        if let Some(button) = &button {
                            button.set_disabled(false);
                        }
                        pending.dispatch(RemovalAction::Fail(target));
                        notify.emit((BannerKind::Error, removal_failure_text(&e)));
                    }
                }
            });
        })
    };

    let activity_names: Vec<AttrValue> = match &*listing {
        Listing::Ready(acts) => acts.keys().map(|k| AttrValue::from(k.clone())).collect(),
        _ => Vec::new(),
    };

    let list_body = match &*listing {
        Listing::Loading => html! { <p>{ "Loading activities..." }</p> },
        Listing::Failed => html! { <p>{ LIST_FAILURE }</p> },
        Listing::Ready(acts) => html! {
            <ActivityList
                activities={acts.clone()}
                visible_participants={config.visible_participants}
                pending={(*pending).clone()} />
        },
    };

    html! {
      <>
        <header>
          <h1>{ "Mergington High School" }</h1>
          <h2>{ "Extracurricular Activities" }</h2>
        </header>

        <main>
          <section id="activities-container">
            <h3>{ "Available Activities" }</h3>
            <div id="activities-list" onclick={on_list_click}>
              { list_body }
            </div>
          </section>

          <section id="signup-container">
            <h3>{ "Sign Up for an Activity" }</h3>
            <SignupForm
                api={(*api).clone()}
                activity_names={activity_names}
                on_signed_up={reload}
                on_notice={notify} />
            <MessageBanner banner={(*banner).clone()} />
          </section>
        </main>
      </>
    }
}
