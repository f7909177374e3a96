use std::rc::Rc;

use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    pub fn class(self) -> &'static str {
        match self {
            BannerKind::Success => "success",
            BannerKind::Error => "error",
        }
    }
}

/// The single message banner under the signup form.
#[derive(Debug, Clone, PartialEq)]
pub struct Banner {
    pub text: String,
    pub kind: Option<BannerKind>,
    pub hidden: bool,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            text: String::new(),
            kind: None,
            hidden: true,
        }
    }
}

impl Banner {
    pub fn classes(&self) -> Classes {
        classes!(self.kind.map(BannerKind::class), self.hidden.then_some("hidden"))
    }
}

pub enum BannerAction {
    Show(BannerKind, String),
    Hide,
}

impl Reducible for Banner {
    type Action = BannerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            BannerAction::Show(kind, text) => Rc::new(Banner {
                text,
                kind: Some(kind),
                hidden: false,
            }),
            BannerAction::Hide => {
                if self.hidden {
                    return self;
                }
                Rc::new(Banner {
                    hidden: true,
                    ..(*self).clone()
                })
            }
        }
    }
}

/// Shows a message and schedules it to hide after `hide_after_ms`.
///
/// Timers are never cancelled: an older timer can hide a newer message early.
pub fn flash(banner: &UseReducerDispatcher<Banner>, kind: BannerKind, text: String, hide_after_ms: u32) {
    let banner = banner.clone();
    flash_with(
        move |action| banner.dispatch(action),
        |ms, hide| { Timeout::new(ms, hide).forget(); },
        kind,
        text,
        hide_after_ms,
    );
}

/// `flash` with the dispatch and the timer supplied by the caller.
pub fn flash_with<D, S>(dispatch: D, schedule: S, kind: BannerKind, text: String, hide_after_ms: u32)
where
    D: Fn(BannerAction) + 'static,
    S: FnOnce(u32, Box<dyn FnOnce()>),
{
    dispatch(BannerAction::Show(kind, text));
    schedule(hide_after_ms, Box::new(move || dispatch(BannerAction::Hide)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    fn show(b: Rc<Banner>, kind: BannerKind, text: &str) -> Rc<Banner> {
        b.reduce(BannerAction::Show(kind, text.to_string()))
    }

    #[test]
    fn starts_hidden() {
        let b = Banner::default();
        assert!(b.hidden);
        assert_eq!(b.classes().to_string(), "hidden");
    }

    #[test]
    fn show_unhides_and_hide_restores_class() {
        let b = show(Rc::new(Banner::default()), BannerKind::Success, "Signed up a@x.com for Chess Club");
        assert!(!b.hidden);
        assert_eq!(b.classes().to_string(), "success");

        let b = b.reduce(BannerAction::Hide);
        assert!(b.hidden);
        assert_eq!(b.text, "Signed up a@x.com for Chess Club");
        assert_eq!(b.classes().to_string(), "success hidden");
    }

    #[test]
    fn error_path_uses_error_class() {
        let b = show(Rc::new(Banner::default()), BannerKind::Error, "An error occurred");
        assert_eq!(b.classes().to_string(), "error");
        assert_eq!(b.reduce(BannerAction::Hide).classes().to_string(), "error hidden");
    }

    #[test]
    fn stale_hide_still_hides_newer_message() {
        let b = show(Rc::new(Banner::default()), BannerKind::Success, "first");
        let b = show(b, BannerKind::Error, "second");
        // The first message's timer fires while the second is showing.
        let b = b.reduce(BannerAction::Hide);
        assert!(b.hidden);
        assert_eq!(b.text, "second");
    }

    type Pending = Option<(u32, Box<dyn FnOnce()>)>;

    /// Runs `flash_with` against an in-memory banner, returning the banner
    /// state and the scheduled hide (not yet fired).
    fn flash_into(state: &Rc<RefCell<Rc<Banner>>>, kind: BannerKind, text: &str) -> Pending {
        let target = state.clone();
        let mut scheduled: Pending = None;
        flash_with(
            move |action| {
                let next = target.borrow().clone().reduce(action);
                *target.borrow_mut() = next;
            },
            |ms, hide| scheduled = Some((ms, hide)),
            kind,
            text.to_string(),
            AppConfig::default().banner_hide_ms,
        );
        scheduled
    }

    #[test]
    fn flash_unhides_now_and_hides_after_five_seconds() {
        for kind in [BannerKind::Success, BannerKind::Error] {
            let state = Rc::new(RefCell::new(Rc::new(Banner::default())));

            let (delay, hide) = flash_into(&state, kind, "hello").expect("hide scheduled");
            assert_eq!(delay, 5_000);
            assert!(!state.borrow().hidden);
            assert_eq!(state.borrow().classes().to_string(), kind.class());

            hide();
            assert!(state.borrow().hidden);
            assert_eq!(state.borrow().classes().to_string(), format!("{} hidden", kind.class()));
        }
    }

    #[test]
    fn earlier_timer_hides_later_flash() {
        let state = Rc::new(RefCell::new(Rc::new(Banner::default())));
        let (_, first_hide) = flash_into(&state, BannerKind::Success, "first").unwrap();
        let (_, _second_hide) = flash_into(&state, BannerKind::Error, "second").unwrap();

        first_hide();
        assert!(state.borrow().hidden);
        assert_eq!(state.borrow().text, "second");
    }
}
