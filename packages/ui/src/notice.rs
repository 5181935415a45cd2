//! # Notice slot
//!
//! The single user-facing message area. At most one notice is shown; a new
//! notice replaces the old one, and each notice auto-dismisses after the
//! configured delay unless the user closes it first.
//!
//! [`NoticeSlot`] stamps every notice with a generation. The dismiss timer armed
//! for a notice carries its [`NoticeTicket`] and only clears the slot if that
//! notice is still the one on screen, so a late timer never wipes a newer
//! message.

use std::time::Duration;

use dioxus::prelude::*;

use dioxus::core::Task;

use crate::timer::{self, Cancel, TaskSlot};

/// Identifies one shown notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket(u64);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeSlot {
    message: Option<String>,
    generation: u64,
}

impl NoticeSlot {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Replace whatever is shown with `message`.
    pub fn show(&mut self, message: impl Into<String>) -> NoticeTicket {
        self.generation += 1;
        self.message = Some(message.into());
        NoticeTicket(self.generation)
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    /// Clear the slot if `ticket` still names the shown notice.
    /// Returns whether anything was cleared.
    pub fn expire(&mut self, ticket: NoticeTicket) -> bool {
        if ticket.0 == self.generation && self.message.is_some() {
            self.message = None;
            true
        } else {
            false
        }
    }

    /// Ticket of the notice currently shown.
    pub fn current(&self) -> Option<NoticeTicket> {
        self.message.as_ref().map(|_| NoticeTicket(self.generation))
    }
}

/// Drop the pending dismiss timer and, if a notice is shown, arm a new one
/// for it with `arm`.
pub fn rearm_dismiss<T: Cancel>(
    timer: &mut TaskSlot<T>,
    ticket: Option<NoticeTicket>,
    arm: impl FnOnce(NoticeTicket) -> T,
) {
    timer.cancel();
    if let Some(ticket) = ticket {
        timer.replace(arm(ticket));
    }
}

/// Toast that renders the shared [`NoticeSlot`] and runs its dismiss timer.
///
/// The timer task belongs to this component's scope, so it is dropped when
/// the toast unmounts and a replaced notice cancels the previous timer.
#[component]
pub fn NoticeToast(mut notice: Signal<NoticeSlot>, dismiss_after: Duration) -> Element {
    let mut timer_task = use_signal(TaskSlot::<Task>::default);

    use_effect(move || {
        let ticket = notice.read().current();
        rearm_dismiss(&mut *timer_task.write(), ticket, |ticket| {
            spawn(async move {
                timer::sleep(dismiss_after).await;
                notice.write().expire(ticket);
            })
        });
    });

    use_drop(move || timer_task.write().cancel());

    let Some(message) = notice.read().message().map(str::to_string) else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "notice-toast",
            role: "alert",
            span { class: "notice-toast__message", "{message}" }
            button {
                class: "notice-toast__close",
                r#type: "button",
                "aria-label": "Close",
                onclick: move |_| notice.write().dismiss(),
                "×"
            }
        }
    }
}
