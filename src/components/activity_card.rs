use std::rc::Rc;

use yew::prelude::*;

use crate::model::{Activities, Activity};
use crate::removal::PendingRemovals;
use crate::roster::{initials, RemovalTarget, RosterWindow};

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub name: AttrValue,
    pub activity: Activity,
    pub visible_participants: usize,
    pub pending: PendingRemovals,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let a = &props.activity;
    html! {
        <div class="activity-card">
          <h4>{ props.name.clone() }</h4>
          <p>{ a.description.clone() }</p>
          <p><strong>{ "Schedule:" }</strong>{ format!(" {}", a.schedule) }</p>
          <p><strong>{ "Availability:" }</strong>{ format!(" {}", a.availability_label()) }</p>
          <p><strong>{ "Participants:" }</strong></p>
          { participants(&props.name, &a.participants, props.visible_participants, &props.pending) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ActivityListProps {
    pub activities: Rc<Activities>,
    pub visible_participants: usize,
    pub pending: PendingRemovals,
}

/// One card per activity, in server order.
#[function_component(ActivityList)]
pub fn activity_list(props: &ActivityListProps) -> Html {
    html! {
      <>
        { for props.activities.iter().map(|(name, activity)| html! {
            <ActivityCard
                key={name.clone()}
                name={AttrValue::from(name.clone())}
                activity={activity.clone()}
                visible_participants={props.visible_participants}
                pending={props.pending.clone()} />
        }) }
      </>
    }
}

fn participants(activity: &str, all: &[String], cap: usize, pending: &PendingRemovals) -> Html {
    if all.is_empty() {
        return html! { <p class="muted">{ "No participants yet — be the first!" }</p> };
    }

    let window = RosterWindow::new(all, cap);
    html! {
        <ul class="participants-list">
          { for window.visible.iter().map(|p| participant_row(activity, p, pending)) }
          if let Some(more) = window.more_label() {
            <li class="participant-more">{ more }</li>
          }
        </ul>
    }
}

// The delegated click handler on #activities-list reads the row's data
// attributes, so they must stay encoded.
fn participant_row(activity: &str, email: &str, pending: &PendingRemovals) -> Html {
    let target = RemovalTarget::new(activity, email);
    let (enc_email, enc_activity) = target.encoded();
    let label = format!("Remove {email}");
    html! {
        <li class="participant-item" key={format!("{enc_activity}/{enc_email}")}
            data-email={enc_email} data-activity={enc_activity}>
          <span class="avatar">{ initials(email) }</span>
          <span class="participant-name">{ email.to_string() }</span>
          <button type="button" class="participant-delete" title={label.clone()} aria-label={label}
                  disabled={pending.is_pending(&target)}>
            { "×" }
          </button>
        </li>
    }
}
