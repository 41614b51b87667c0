use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    id: u32,
    pub message: String,
    pub destructive: bool,
}

/// Transient notification slot shared through context. A new notice replaces
/// the current one and auto-dismisses unless it was replaced in the meantime.
#[derive(Clone, Copy)]
pub struct Toaster {
    notice: Signal<Option<Notice>>,
    counter: Signal<u32>,
}

impl Toaster {
    pub fn provide() -> Self {
        let toaster = Self {
            notice: use_signal(|| None),
            counter: use_signal(|| 0),
        };
        provide_context(toaster)
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(message.into(), false);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(message.into(), true);
    }

    fn push(&mut self, message: String, destructive: bool) {
        let id = {
            let mut counter = self.counter.write();
            *counter += 1;
            *counter
        };
        self.notice.set(Some(Notice {
            id,
            message,
            destructive,
        }));

        let mut notice = self.notice;
        spawn(async move {
            TimeoutFuture::new(DISMISS_MS).await;
            if notice.peek().as_ref().is_some_and(|n| n.id == id) {
                notice.set(None);
            }
        });
    }
}

#[component]
pub fn ToastHost() -> Element {
    let mut toaster = use_context::<Toaster>();
    let current = toaster.notice.read().clone();

    let Some(notice) = current else {
        return rsx! {};
    };
    let tone = if notice.destructive {
        "bg-red-600 text-white"
    } else {
        "bg-zinc-900 text-white"
    };

    rsx! {
        div {
            class: "fixed bottom-6 right-6 z-50 rounded-lg px-5 py-3 shadow-lg {tone}",
            onclick: move |_| toaster.notice.set(None),
            "{notice.message}"
        }
    }
}
