//! Enter/exit transitions for keyed lists.
//!
//! [`PresenceList`] is the bookkeeping: which keys are entering, settled, or on
//! their way out. [`AnimatePresence`] drives it from props and timers and maps
//! each status onto a CSS class.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use dioxus::prelude::*;

use crate::clock::sleep;

pub const DEFAULT_PRESENCE_MS: u64 = 300;

/// Delay before entering items settle, so the enter class is painted first.
const ENTER_FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, PartialEq)]
pub struct Keyed<T> {
    pub key: String,
    pub value: T,
}

impl<T> Keyed<T> {
    pub fn new(key: impl Into<String>, value: T) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceStatus {
    Entering,
    Present,
    Exiting,
}

impl PresenceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entering => "entering",
            Self::Present => "present",
            Self::Exiting => "exiting",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tracked<T> {
    pub key: String,
    pub value: T,
    pub status: PresenceStatus,
    exit_batch: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PresenceList<T> {
    items: Vec<Tracked<T>>,
    batches: u64,
}

fn dedup<T>(items: Vec<Keyed<T>>) -> Vec<Keyed<T>> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| {
            let fresh = seen.insert(item.key.clone());
            if !fresh {
                tracing::warn!(key = %item.key, "duplicate presence key ignored");
            }
            fresh
        })
        .collect()
}

impl<T> PresenceList<T> {
    /// Everything starts out entering.
    pub fn new(initial: Vec<Keyed<T>>) -> Self {
        let items = dedup(initial)
            .into_iter()
            .map(|Keyed { key, value }| Tracked {
                key,
                value,
                status: PresenceStatus::Entering,
                exit_batch: None,
            })
            .collect();
        Self { items, batches: 0 }
    }

    /// Reconcile with the next set of children.
    ///
    /// Survivors keep their position and take the new value; removed keys
    /// start exiting; new keys are appended as entering. Returns the batch id
    /// to [`purge`](Self::purge) once the exit transition is over, or `None`
    /// when nothing was removed.
    pub fn sync(&mut self, next: Vec<Keyed<T>>) -> Option<u64> {
        let mut pending: Vec<Option<Keyed<T>>> = dedup(next).into_iter().map(Some).collect();
        let index: HashMap<String, usize> = pending
            .iter()
            .enumerate()
            .filter_map(|(i, item)| item.as_ref().map(|item| (item.key.clone(), i)))
            .collect();

        let batch = self.batches + 1;
        let mut removed = false;

        for item in &mut self.items {
            match index.get(&item.key) {
                Some(&i) => {
                    if let Some(incoming) = pending[i].take() {
                        item.value = incoming.value;
                    }
                    if item.status == PresenceStatus::Exiting {
                        item.status = PresenceStatus::Present;
                        item.exit_batch = None;
                    }
                }
                None if item.status != PresenceStatus::Exiting => {
                    item.status = PresenceStatus::Exiting;
                    item.exit_batch = Some(batch);
                    removed = true;
                }
                None => {}
            }
        }

        self.items
            .extend(pending.into_iter().flatten().map(|Keyed { key, value }| Tracked {
                key,
                value,
                status: PresenceStatus::Entering,
                exit_batch: None,
            }));

        removed.then(|| {
            self.batches = batch;
            batch
        })
    }

    /// Promote entering items to present. Returns whether anything changed.
    pub fn settle(&mut self) -> bool {
        let mut changed = false;
        for item in &mut self.items {
            if item.status == PresenceStatus::Entering {
                item.status = PresenceStatus::Present;
                changed = true;
            }
        }
        changed
    }

    /// Drop exiting items from `batch` or earlier. Revived items are kept.
    pub fn purge(&mut self, batch: u64) -> usize {
        let before = self.items.len();
        self.items.retain(|item| {
            !(item.status == PresenceStatus::Exiting
                && item.exit_batch.is_some_and(|b| b <= batch))
        });
        before - self.items.len()
    }

    pub fn items(&self) -> &[Tracked<T>] {
        &self.items
    }

    pub fn has_entering(&self) -> bool {
        self.items
            .iter()
            .any(|item| item.status == PresenceStatus::Entering)
    }
}

/// Hold a removal batch for the exit transition, then drop it.
pub async fn expire_batch<F>(duration: Duration, batch: u64, purge: F) -> usize
where
    F: FnOnce(u64) -> usize,
{
    sleep(duration).await;
    purge(batch)
}

fn status_class<'a>(status: PresenceStatus, enter: &'a str, present: &'a str, exit: &'a str) -> &'a str {
    match status {
        PresenceStatus::Entering => enter,
        PresenceStatus::Present => present,
        PresenceStatus::Exiting => exit,
    }
}

/// Renders keyed text children, keeping removed ones around with the exit
/// class for `duration_ms`.
#[component]
pub fn AnimatePresence(
    items: Vec<Keyed<String>>,
    #[props(default = DEFAULT_PRESENCE_MS)] duration_ms: u64,
    #[props(default = "presence-enter".to_string())] enter_class: String,
    #[props(default = "presence-present".to_string())] present_class: String,
    #[props(default = "presence-exit".to_string())] exit_class: String,
    #[props(default)] class: String,
) -> Element {
    let initial = items.clone();
    let mut list = use_signal(move || PresenceList::new(initial));

    use_effect(use_reactive((&items, &duration_ms), move |(items, duration_ms)| {
        let Some(batch) = list.write().sync(items) else {
            return;
        };
        spawn(async move {
            expire_batch(Duration::from_millis(duration_ms), batch, |batch| {
                list.write().purge(batch)
            })
            .await;
        });
    }));

    use_effect(move || {
        if list.read().has_entering() {
            spawn(async move {
                sleep(ENTER_FRAME).await;
                list.write().settle();
            });
        }
    });

    let tracked = list.read().items().to_vec();

    rsx! {
        div {
            class: "presence {class}",
            for item in tracked {
                div {
                    key: "{item.key}",
                    class: status_class(item.status, &enter_class, &present_class, &exit_class),
                    style: "transition-duration: {duration_ms}ms",
                    "data-presence": item.status.as_str(),
                    "{item.value}"
                }
            }
        }
    }
}

/// A single fading message, keyed by its text. `None` fades the old one out.
#[component]
pub fn AnimatedMessage(
    #[props(!optional)] message: Option<String>,
    #[props(default)] class: String,
) -> Element {
    let items: Vec<Keyed<String>> = message
        .into_iter()
        .map(|text| Keyed::new(text.clone(), text))
        .collect();

    rsx! {
        AnimatePresence { items, class: "field-message {class}" }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::pin::pin;

    use super::*;

    fn keyed(keys: &[&str]) -> Vec<Keyed<String>> {
        keys.iter().map(|k| Keyed::new(*k, k.to_uppercase())).collect()
    }

    fn snapshot(list: &PresenceList<String>) -> Vec<(&str, PresenceStatus)> {
        list.items()
            .iter()
            .map(|item| (item.key.as_str(), item.status))
            .collect()
    }

    use PresenceStatus::*;

    #[tokio::test(start_paused = true)]
    async fn exit_class_holds_for_the_configured_duration() {
        let duration = Duration::from_millis(DEFAULT_PRESENCE_MS);
        let list = RefCell::new(PresenceList::new(keyed(&["a", "b"])));
        list.borrow_mut().settle();
        let batch = list.borrow_mut().sync(keyed(&["a"])).expect("b was removed");

        let started = tokio::time::Instant::now();
        let mut expiry = pin!(expire_batch(duration, batch, |batch| {
            list.borrow_mut().purge(batch)
        }));

        let early = tokio::time::timeout(duration - Duration::from_millis(1), expiry.as_mut()).await;
        assert!(early.is_err());
        assert_eq!(snapshot(&list.borrow()), [("a", Present), ("b", Exiting)]);

        assert_eq!(expiry.await, 1);
        assert!(started.elapsed() >= duration);
        assert_eq!(snapshot(&list.borrow()), [("a", Present)]);
    }

    #[test]
    fn initial_items_enter_then_settle() {
        let mut list = PresenceList::new(keyed(&["a", "b"]));
        assert!(list.has_entering());
        assert!(list.settle());
        assert!(!list.settle());
        assert_eq!(snapshot(&list), [("a", Present), ("b", Present)]);
    }

    #[test]
    fn removed_child_exits_until_purged() {
        let mut list = PresenceList::new(keyed(&["a", "b"]));
        list.settle();

        let batch = list.sync(keyed(&["a"])).expect("b was removed");
        assert_eq!(snapshot(&list), [("a", Present), ("b", Exiting)]);

        assert_eq!(list.purge(batch), 1);
        assert_eq!(snapshot(&list), [("a", Present)]);
    }

    #[test]
    fn additions_are_appended_in_order() {
        let mut list = PresenceList::new(keyed(&["a", "b"]));
        list.settle();

        assert_eq!(list.sync(keyed(&["c", "b", "a"])), None);
        assert_eq!(
            snapshot(&list),
            [("a", Present), ("b", Present), ("c", Entering)]
        );
    }

    #[test]
    fn survivors_take_the_new_value() {
        let mut list = PresenceList::new(vec![Keyed::new("a", "old".to_string())]);
        list.sync(vec![Keyed::new("a", "new".to_string())]);
        assert_eq!(list.items()[0].value, "new");
    }

    #[test]
    fn revived_key_survives_its_purge() {
        let mut list = PresenceList::new(keyed(&["a"]));
        list.settle();

        let batch = list.sync(vec![]).expect("a was removed");
        list.sync(keyed(&["a"]));
        assert_eq!(snapshot(&list), [("a", Present)]);

        assert_eq!(list.purge(batch), 0);
        assert_eq!(list.items().len(), 1);
    }

    #[test]
    fn purge_leaves_newer_batches_alone() {
        let mut list = PresenceList::new(keyed(&["a", "b"]));
        list.settle();

        let first = list.sync(keyed(&["b"])).expect("a was removed");
        let second = list.sync(vec![]).expect("b was removed");
        assert!(second > first);

        assert_eq!(list.purge(first), 1);
        assert_eq!(snapshot(&list), [("b", Exiting)]);
        assert_eq!(list.purge(second), 1);
        assert!(list.items().is_empty());
    }

    #[test]
    fn duplicate_keys_keep_the_first() {
        let list = PresenceList::new(vec![
            Keyed::new("a", "first".to_string()),
            Keyed::new("a", "second".to_string()),
        ]);
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].value, "first");
    }

    #[test]
    fn message_swap_exits_old_and_enters_new() {
        let mut list = PresenceList::new(keyed(&["too short"]));
        list.settle();

        let batch = list.sync(keyed(&["mismatch"]));
        assert!(batch.is_some());
        assert_eq!(
            snapshot(&list),
            [("too short", Exiting), ("mismatch", Entering)]
        );
    }
}
