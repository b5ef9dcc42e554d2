//! Transient notifications.
//!
//! A [`Toaster`] at the app root owns the queue and its dismissal timers, so a
//! toast raised right before a navigation still shows on the next page.

use std::time::Duration;

use dioxus::prelude::*;

use crate::clock::sleep;

pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);
pub const VISIBLE_TOASTS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            Self::Success => "toast toast-success",
            Self::Error => "toast toast-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
    scheduled: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(
        &mut self,
        kind: ToastKind,
        title: impl Into<String>,
        description: Option<String>,
    ) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.push(Toast {
            id,
            kind,
            title: title.into(),
            description,
            scheduled: false,
        });
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Newest first, capped at [`VISIBLE_TOASTS`].
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().rev().take(VISIBLE_TOASTS)
    }

    pub fn has_unscheduled(&self) -> bool {
        self.toasts.iter().any(|t| !t.scheduled)
    }

    /// Mark pending toasts as scheduled and return their ids.
    pub fn take_unscheduled(&mut self) -> Vec<u64> {
        self.toasts
            .iter_mut()
            .filter(|t| !t.scheduled)
            .map(|t| {
                t.scheduled = true;
                t.id
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Toast capability handed to code that should not depend on the UI runtime.
pub trait Notifier {
    fn notify(&self, kind: ToastKind, title: &str, description: Option<String>);

    fn success(&self, title: &str, description: Option<String>) {
        self.notify(ToastKind::Success, title, description);
    }

    fn error(&self, title: &str, description: Option<String>) {
        self.notify(ToastKind::Error, title, description);
    }
}

impl Notifier for Signal<ToastQueue> {
    fn notify(&self, kind: ToastKind, title: &str, description: Option<String>) {
        let mut queue = *self;
        queue.write().push(kind, title, description);
    }
}

pub fn use_toasts() -> Signal<ToastQueue> {
    use_context::<Signal<ToastQueue>>()
}

/// Provides the toast queue to its children and renders the visible toasts.
#[component]
pub fn Toaster(children: Element) -> Element {
    let mut queue = use_signal(ToastQueue::default);
    use_context_provider(|| queue);

    use_effect(move || {
        if !queue.read().has_unscheduled() {
            return;
        }
        let ids = queue.write().take_unscheduled();
        for id in ids {
            spawn(async move {
                sleep(TOAST_LIFETIME).await;
                queue.write().dismiss(id);
            });
        }
    });

    let visible: Vec<Toast> = queue.read().visible().cloned().collect();

    rsx! {
        {children}

        section {
            class: "toaster",
            aria_live: "polite",
            for toast in visible {
                div {
                    key: "{toast.id}",
                    class: toast.kind.class(),
                    role: "status",
                    div { class: "toast-title", "{toast.title}" }
                    if let Some(description) = &toast.description {
                        div { class: "toast-description", "{description}" }
                    }
                    button {
                        class: "toast-close",
                        r#type: "button",
                        aria_label: "close",
                        onclick: move |_| {
                            queue.write().dismiss(toast.id);
                        },
                        "×"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_three_are_visible() {
        let mut queue = ToastQueue::default();
        for title in ["a", "b", "c", "d"] {
            queue.push(ToastKind::Success, title, None);
        }
        let titles: Vec<_> = queue.visible().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["d", "c", "b"]);
        assert_eq!(queue.len(), 4);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut queue = ToastQueue::default();
        let first = queue.push(ToastKind::Error, "first", Some("details".into()));
        let second = queue.push(ToastKind::Success, "second", None);

        assert!(queue.dismiss(first));
        assert!(!queue.dismiss(first));
        assert_eq!(queue.visible().map(|t| t.id).collect::<Vec<_>>(), [second]);
    }

    #[test]
    fn each_toast_is_scheduled_once() {
        let mut queue = ToastQueue::default();
        let a = queue.push(ToastKind::Success, "a", None);
        assert!(queue.has_unscheduled());
        assert_eq!(queue.take_unscheduled(), [a]);
        assert!(!queue.has_unscheduled());

        let b = queue.push(ToastKind::Error, "b", None);
        assert_eq!(queue.take_unscheduled(), [b]);
        assert!(queue.take_unscheduled().is_empty());
    }
}
