use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

const DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    id: u32,
    pub message: String,
}

/// Transient error notification shared through context. A new notice
/// replaces the current one and auto-dismisses unless it was replaced in
/// the meantime.
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

    pub fn error(&mut self, message: impl Into<String>) {
        let id = {
            let mut counter = self.counter.write();
            *counter += 1;
            *counter
        };
        self.notice.set(Some(Notice {
            id,
            message: message.into(),
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

    rsx! {
        div {
            class: "fixed bottom-6 right-6 z-50 rounded-lg bg-red-600 px-5 py-3 text-white shadow-lg",
            onclick: move |_| toaster.notice.set(None),
            "{notice.message}"
        }
    }
}
