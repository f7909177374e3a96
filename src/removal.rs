use std::collections::HashSet;
use std::rc::Rc;

use yew::prelude::*;

use crate::roster::RemovalTarget;

/// Removal controls currently disabled while their request is in flight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingRemovals {
    inflight: HashSet<RemovalTarget>,
}

impl PendingRemovals {
    pub fn is_pending(&self, target: &RemovalTarget) -> bool {
        self.inflight.contains(target)
    }
}

pub enum RemovalAction {
    /// The control was clicked; disable it.
    Begin(RemovalTarget),
    /// The request failed; re-enable just this control.
    Fail(RemovalTarget),
    /// The list was re-rendered; every control starts enabled again.
    Reset,
}

impl Reducible for PendingRemovals {
    type Action = RemovalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            RemovalAction::Begin(t) => next.inflight.insert(t),
            RemovalAction::Fail(t) => next.inflight.remove(&t),
            RemovalAction::Reset => {
                let had_any = !next.inflight.is_empty();
                next.inflight.clear();
                had_any
            }
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}
