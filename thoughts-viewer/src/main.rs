use dioxus::prelude::*;
use thoughts_domain::Thought;

use crate::client::ViewerApi;
use crate::toast::{ToastHost, Toaster};

mod client;
mod error;
mod toast;

const BASE_URL: &str = match option_env!("THOUGHTS_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};

/// One vote per displayed record; this is the local choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vote {
    Up,
    Down,
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    Toaster::provide();

    rsx! {
        Viewer {}
        ToastHost {}
    }
}

async fn load_random(
    mut thought: Signal<Option<Thought>>,
    mut loading: Signal<bool>,
    mut rating: Signal<Option<Vote>>,
    mut toaster: Toaster,
) {
    loading.set(true);
    // a fresh record gets a fresh vote
    rating.set(None);
    match ViewerApi::new(BASE_URL).random_thought().await {
        Ok(fetched) => thought.set(Some(fetched)),
        Err(err) if err.is_not_found() => {
            thought.set(None);
            toaster.error("No thoughts available at this time. Please try again later.");
        }
        Err(_) => toaster.error("Failed to load thought. Please try again."),
    }
    loading.set(false);
}

#[component]
fn Viewer() -> Element {
    let toaster = use_context::<Toaster>();
    let thought = use_signal(|| None::<Thought>);
    let loading = use_signal(|| true);
    let mut rating = use_signal(|| None::<Vote>);
    let mut rating_loading = use_signal(|| false);

    use_future(move || load_random(thought, loading, rating, toaster));

    let mut cast_vote = move |choice: Vote| {
        if rating.peek().is_some() || *rating_loading.peek() {
            return;
        }
        let Some(current) = thought.peek().clone() else {
            return;
        };

        rating_loading.set(true);
        // optimistic: show the choice before the backend confirms it
        rating.set(Some(choice));
        let mut toaster = toaster;
        spawn(async move {
            let api = ViewerApi::new(BASE_URL);
            let result = match choice {
                Vote::Up => api.thumbs_up(current.id).await,
                Vote::Down => api.thumbs_down(current.id).await,
            };
            if result.is_err() {
                toaster.error("Failed to submit rating. Please try again.");
                rating.set(None);
            }
            rating_loading.set(false);
        });
    };

    let on_view_another = move |_| {
        spawn(load_random(thought, loading, rating, toaster));
    };

    let current = thought.read().clone();
    let has_thought = current.is_some();
    let is_loading = loading();
    let current_rating = rating();
    let vote_disabled = current_rating.is_some() || rating_loading();

    let up_class = match current_rating {
        Some(Vote::Up) => "bg-green-600 text-white shadow-lg shadow-green-300",
        Some(Vote::Down) => "opacity-50 cursor-not-allowed bg-zinc-200",
        None => "bg-zinc-100 hover:bg-green-50 text-zinc-700 hover:text-green-600",
    };
    let down_class = match current_rating {
        Some(Vote::Down) => "bg-red-600 text-white shadow-lg shadow-red-300",
        Some(Vote::Up) => "opacity-50 cursor-not-allowed bg-zinc-200",
        None => "bg-zinc-100 hover:bg-red-50 text-zinc-700 hover:text-red-600",
    };

    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-gradient-to-br from-blue-50 via-white to-purple-50 px-4 py-8",
            main { class: "flex w-full max-w-3xl flex-col items-center justify-center gap-8",
                div { class: "w-full rounded-2xl bg-white p-8 md:p-12 shadow-xl",
                    if is_loading {
                        div { class: "space-y-4 animate-pulse",
                            div { class: "h-8 w-full rounded bg-zinc-200" }
                            div { class: "h-8 w-5/6 rounded bg-zinc-200" }
                            div { class: "h-8 w-4/6 rounded bg-zinc-200" }
                            div { class: "mt-6 h-4 w-3/6 rounded bg-zinc-200" }
                        }
                    } else {
                        match current {
                            Some(thought) => rsx! {
                                div { class: "space-y-4",
                                    p { class: "text-2xl md:text-3xl lg:text-4xl font-medium leading-relaxed text-center text-zinc-800",
                                        "{thought.content}"
                                    }
                                    if !thought.author.is_empty() {
                                        p { class: "text-sm text-center text-zinc-600 mt-6",
                                            "{thought.author}, {thought.author_bio}"
                                        }
                                    }
                                }
                            },
                            None => rsx! {
                                p { class: "text-2xl md:text-3xl text-center text-zinc-500", "No thoughts available" }
                            },
                        }
                    }
                }

                if has_thought && !is_loading {
                    div { class: "flex gap-4 items-center justify-center",
                        button {
                            onclick: move |_| cast_vote(Vote::Up),
                            disabled: vote_disabled,
                            aria_label: "Thumbs up",
                            class: "h-14 w-14 md:h-16 md:w-16 rounded-full transition-all duration-300 {up_class}",
                            "👍"
                        }
                        button {
                            onclick: move |_| cast_vote(Vote::Down),
                            disabled: vote_disabled,
                            aria_label: "Thumbs down",
                            class: "h-14 w-14 md:h-16 md:w-16 rounded-full transition-all duration-300 {down_class}",
                            "👎"
                        }
                    }

                    button {
                        onclick: on_view_another,
                        aria_label: "View another thought",
                        class: "px-8 py-4 text-lg font-medium bg-blue-600 hover:bg-blue-700 text-white rounded-full shadow-lg transition-all duration-300",
                        "View Another Thought"
                    }
                }

                if !has_thought && !is_loading {
                    button {
                        onclick: on_view_another,
                        class: "px-8 py-4 text-lg font-medium bg-blue-600 hover:bg-blue-700 text-white rounded-full shadow-lg",
                        "Try Again"
                    }
                }
            }
        }
    }
}
