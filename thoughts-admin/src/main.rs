use dioxus::prelude::*;
use thoughts_domain::{
    AUTHOR_MAX, CONTENT_MAX, CONTENT_MIN, CreateThoughtRequest, Dominant, FieldErrors, Pager,
    SortField, SortState, Thought, ThoughtStatus, UpdateThoughtRequest, rating_summary,
    sort_thoughts, truncate, validate_thought_fields,
};
use uuid::Uuid;

use crate::client::AdminApi;
use crate::toast::{ToastHost, Toaster};

mod client;
mod error;
mod toast;

const BASE_URL: &str = match option_env!("THOUGHTS_API_URL") {
    Some(url) => url,
    None => "http://localhost:8080",
};
const PAGE_SIZE: u32 = 20;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        ThoughtsList {},
        #[route("/thoughts/new")]
        CreateThought {},
        #[route("/thoughts/:id/edit")]
        EditThought { id: Uuid },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    Toaster::provide();

    rsx! {
        Router::<Route> {}
    }
}

#[component]
fn Navbar() -> Element {
    rsx! {
        nav { class: "bg-white border-b border-gray-200 sticky top-0 z-40 shadow-sm",
            div { class: "max-w-7xl mx-auto px-6 py-4 flex justify-between items-center",
                Link {
                    to: Route::ThoughtsList {},
                    class: "text-2xl font-bold text-indigo-600 hover:text-indigo-700 transition",
                    "Thoughts Admin"
                }
                Link {
                    to: Route::CreateThought {},
                    class: "px-5 py-2.5 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 transition shadow-md",
                    "Create New Thought"
                }
            }
        }
        Outlet::<Route> {}
        ToastHost {}
    }
}

#[component]
fn StatusBadge(status: ThoughtStatus) -> Element {
    let tone = match status {
        ThoughtStatus::Approved => "bg-green-100 text-green-800",
        ThoughtStatus::Removed => "bg-red-100 text-red-800",
        ThoughtStatus::InReview => "bg-yellow-100 text-yellow-800",
    };

    rsx! {
        span { class: "px-2 py-1 rounded text-xs font-medium {tone}", "{status}" }
    }
}

#[component]
fn RatingCell(thumbs_up: u32, thumbs_down: u32) -> Element {
    let rating = rating_summary(thumbs_up, thumbs_down);

    rsx! {
        match rating.dominant {
            Dominant::None => rsx! {
                span { class: "text-gray-400 text-sm", "No ratings yet" }
            },
            Dominant::Up => rsx! {
                span { class: "font-medium text-green-600", "👍 {rating.percent_label()}" }
            },
            Dominant::Down => rsx! {
                span { class: "font-medium text-red-600", "👎 {rating.percent_label()}" }
            },
        }
    }
}

#[component]
fn ThoughtRow(thought: Thought, on_delete: EventHandler<Thought>) -> Element {
    let author = if thought.author.is_empty() {
        "Unknown".to_string()
    } else {
        thought.author.clone()
    };
    let created = thought.created_at.format("%Y-%m-%d").to_string();
    let target = thought.clone();

    rsx! {
        tr { class: "border-t",
            td { class: "px-4 py-3 font-medium", "{truncate(&thought.content, 100)}" }
            td { class: "px-4 py-3 text-sm text-gray-600", "{truncate(&author, 50)}" }
            td { class: "px-4 py-3", "{thought.thumbs_up}" }
            td { class: "px-4 py-3", "{thought.thumbs_down}" }
            td { class: "px-4 py-3",
                RatingCell { thumbs_up: thought.thumbs_up, thumbs_down: thought.thumbs_down }
            }
            td { class: "px-4 py-3",
                StatusBadge { status: thought.status }
            }
            td { class: "px-4 py-3 text-sm text-gray-500", "{created}" }
            td { class: "px-4 py-3 text-right",
                Link {
                    to: Route::EditThought { id: thought.id },
                    class: "px-3 py-1.5 border border-gray-300 rounded-lg hover:bg-gray-50 transition mr-2",
                    "Edit"
                }
                button {
                    onclick: move |_| on_delete.call(target.clone()),
                    class: "px-3 py-1.5 border border-gray-300 text-red-600 rounded-lg hover:bg-red-50 transition",
                    "Delete"
                }
            }
        }
    }
}

#[component]
fn ThoughtsList() -> Element {
    let mut toaster = use_context::<Toaster>();
    let mut thoughts = use_signal(Vec::<Thought>::new);
    let mut loading = use_signal(|| true);
    let mut page = use_signal(|| 0u32);
    let mut pager = use_signal(|| Pager::new(PAGE_SIZE));
    let mut sort = use_signal(SortState::default);
    let mut delete_target = use_signal(|| None::<Thought>);

    // refetch whenever the page changes
    use_effect(move || {
        let current_page = page();
        spawn(async move {
            loading.set(true);
            match AdminApi::new(BASE_URL).list_thoughts(current_page, PAGE_SIZE).await {
                Ok(mut data) => {
                    pager.write().observe(current_page, data.len());
                    sort_thoughts(&mut data, *sort.peek());
                    thoughts.set(data);
                }
                Err(_) => toaster.error("Failed to load thoughts. Please try again."),
            }
            loading.set(false);
        });
    });

    let mut handle_sort = move |field: SortField| {
        sort.write().toggle(field);
        let current = *sort.peek();
        sort_thoughts(&mut thoughts.write(), current);
    };

    let on_delete_confirm = move |_| {
        let Some(target) = delete_target.peek().clone() else {
            return;
        };
        spawn(async move {
            match AdminApi::new(BASE_URL).delete_thought(target.id).await {
                Ok(()) => {
                    // remove locally only after the backend accepted the delete
                    thoughts.write().retain(|t| t.id != target.id);
                    toaster.success("Thought deleted successfully.");
                }
                Err(_) => toaster.error("Failed to delete thought. Please try again."),
            }
            delete_target.set(None);
        });
    };

    rsx! {
        div { class: "max-w-7xl mx-auto px-6 py-10",
            h1 { class: "text-3xl font-bold mb-6", "Thoughts Management" }

            if loading() {
                div { class: "rounded-md border p-8 text-center text-gray-500", "Loading thoughts..." }
            } else {
                div { class: "rounded-md border overflow-x-auto",
                    table { class: "w-full text-left",
                        thead {
                            tr { class: "bg-gray-50",
                                th { class: "px-4 py-3 w-[350px]", "Content" }
                                th { class: "px-4 py-3 w-[150px]", "Author" }
                                th {
                                    class: "px-4 py-3 cursor-pointer hover:bg-gray-100",
                                    onclick: move |_| handle_sort(SortField::ThumbsUp),
                                    "👍 Up"
                                }
                                th {
                                    class: "px-4 py-3 cursor-pointer hover:bg-gray-100",
                                    onclick: move |_| handle_sort(SortField::ThumbsDown),
                                    "👎 Down"
                                }
                                th { class: "px-4 py-3", "Rating" }
                                th { class: "px-4 py-3", "Status" }
                                th {
                                    class: "px-4 py-3 cursor-pointer hover:bg-gray-100",
                                    onclick: move |_| handle_sort(SortField::CreatedAt),
                                    "Created"
                                }
                                th { class: "px-4 py-3 text-right", "Actions" }
                            }
                        }
                        tbody {
                            if thoughts.read().is_empty() {
                                tr {
                                    td { colspan: "8", class: "text-center text-gray-500 py-8",
                                        "No thoughts found. Create your first thought to get started."
                                    }
                                }
                            } else {
                                for thought in thoughts() {
                                    ThoughtRow {
                                        key: "{thought.id}",
                                        thought,
                                        on_delete: move |t| delete_target.set(Some(t)),
                                    }
                                }
                            }
                        }
                    }
                }

                if !thoughts.read().is_empty() {
                    div { class: "flex items-center justify-between mt-4",
                        div { class: "text-sm text-gray-500", "{pager.read().label()}" }
                        div { class: "flex gap-2",
                            button {
                                class: "px-4 py-2 border rounded-lg disabled:opacity-50",
                                disabled: !pager.read().has_previous(),
                                onclick: move |_| {
                                    let previous = page().saturating_sub(1);
                                    page.set(previous);
                                },
                                "Previous"
                            }
                            button {
                                class: "px-4 py-2 border rounded-lg disabled:opacity-50",
                                disabled: !pager.read().has_next(),
                                onclick: move |_| page.set(page() + 1),
                                "Next"
                            }
                        }
                    }
                }
            }

            match delete_target() {
                Some(target) => rsx! {
                    div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50",
                        div { class: "w-full max-w-md bg-white rounded-2xl shadow-xl p-6",
                            h2 { class: "text-xl font-semibold mb-2", "Confirm Deletion" }
                            p { class: "text-gray-600",
                                "Are you sure you want to delete this thought? This action cannot be undone."
                            }
                            div { class: "mt-4 p-3 bg-gray-50 rounded text-sm text-gray-700",
                                "{truncate(&target.content, 150)}"
                            }
                            div { class: "mt-6 flex justify-end gap-3",
                                button {
                                    class: "px-4 py-2 border rounded-lg hover:bg-gray-50",
                                    onclick: move |_| delete_target.set(None),
                                    "Cancel"
                                }
                                button {
                                    class: "px-4 py-2 bg-red-600 text-white rounded-lg hover:bg-red-700",
                                    onclick: on_delete_confirm,
                                    "Delete"
                                }
                            }
                        }
                    }
                },
                None => rsx! {},
            }
        }
    }
}

#[component]
fn CreateThought() -> Element {
    let mut toaster = use_context::<Toaster>();
    let navigator = use_navigator();

    let mut content = use_signal(String::new);
    let mut author = use_signal(String::new);
    let mut author_bio = use_signal(String::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut submitting = use_signal(|| false);

    let on_submit = move |_| {
        let content_value = content.peek().clone();
        let author_value = author.peek().clone();
        let bio_value = author_bio.peek().clone();

        match validate_thought_fields(&content_value, &author_value, &bio_value) {
            Err(field_errors) => errors.set(field_errors),
            Ok(()) => {
                errors.set(FieldErrors::default());
                submitting.set(true);
                spawn(async move {
                    let request =
                        CreateThoughtRequest::new(&content_value, &author_value, &bio_value);
                    match AdminApi::new(BASE_URL).create_thought(&request).await {
                        Ok(_) => {
                            toaster.success("Thought created successfully.");
                            navigator.push(Route::ThoughtsList {});
                        }
                        Err(err) => toaster.error(err.message()),
                    }
                    submitting.set(false);
                });
            }
        }
    };

    let content_len = content.read().chars().count();
    let author_len = author.read().chars().count();
    let bio_len = author_bio.read().chars().count();
    let content_error = errors.read().content.clone();
    let author_error = errors.read().author.clone();
    let bio_error = errors.read().author_bio.clone();

    rsx! {
        div { class: "max-w-2xl mx-auto px-6 py-10",
            h1 { class: "text-3xl font-bold", "Create New Thought" }
            p { class: "text-gray-500 mt-2 mb-6",
                "Add a new positive thought to the collection. It will be set to IN_REVIEW status by default."
            }

            div { class: "space-y-6",
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Content" }
                    textarea {
                        placeholder: "Enter a positive thought...",
                        value: "{content}",
                        oninput: move |evt| content.set(evt.value()),
                        class: "w-full px-4 py-3 min-h-[150px] border border-gray-300 rounded-xl shadow-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                    }
                    p { class: "text-sm text-gray-500 mt-1",
                        "{content_len} / {CONTENT_MAX} characters (minimum {CONTENT_MIN} required)"
                    }
                    match content_error {
                        Some(message) => rsx! { p { class: "text-sm text-red-600 mt-1", "{message}" } },
                        None => rsx! {},
                    }
                }

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Author" }
                    input {
                        r#type: "text",
                        placeholder: "Enter author name (optional)",
                        value: "{author}",
                        oninput: move |evt| author.set(evt.value()),
                        class: "w-full px-4 py-3 border border-gray-300 rounded-xl shadow-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                    }
                    p { class: "text-sm text-gray-500 mt-1", "{author_len} / {AUTHOR_MAX} characters" }
                    match author_error {
                        Some(message) => rsx! { p { class: "text-sm text-red-600 mt-1", "{message}" } },
                        None => rsx! {},
                    }
                }

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Author Bio" }
                    textarea {
                        placeholder: "Enter author bio (optional)",
                        value: "{author_bio}",
                        oninput: move |evt| author_bio.set(evt.value()),
                        class: "w-full px-4 py-3 min-h-[80px] border border-gray-300 rounded-xl shadow-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                    }
                    p { class: "text-sm text-gray-500 mt-1", "{bio_len} / {AUTHOR_MAX} characters" }
                    match bio_error {
                        Some(message) => rsx! { p { class: "text-sm text-red-600 mt-1", "{message}" } },
                        None => rsx! {},
                    }
                }

                div { class: "flex gap-4 pt-2",
                    button {
                        onclick: on_submit,
                        disabled: submitting(),
                        class: "px-8 py-3 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 transition shadow-md disabled:opacity-50 disabled:cursor-not-allowed",
                        if submitting() { "Creating..." } else { "Create Thought" }
                    }
                    Link {
                        to: Route::ThoughtsList {},
                        class: "px-8 py-3 border border-gray-300 text-gray-700 rounded-xl hover:bg-gray-50 transition",
                        "Cancel"
                    }
                }
            }
        }
    }
}

#[component]
fn EditThought(id: Uuid) -> Element {
    let mut toaster = use_context::<Toaster>();
    let navigator = use_navigator();

    let mut content = use_signal(String::new);
    let mut author = use_signal(String::new);
    let mut author_bio = use_signal(String::new);
    let mut status = use_signal(ThoughtStatus::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut submitting = use_signal(|| false);
    let mut loaded = use_signal(|| false);

    use_future(move || async move {
        match AdminApi::new(BASE_URL).get_thought(id).await {
            Ok(thought) => {
                content.set(thought.content);
                author.set(thought.author);
                author_bio.set(thought.author_bio);
                status.set(thought.status);
                loaded.set(true);
            }
            Err(err) => {
                if err.is_not_found() {
                    toaster.error("Thought not found.");
                } else {
                    toaster.error("Failed to load thought. Please try again.");
                }
                navigator.push(Route::ThoughtsList {});
            }
        }
    });

    let on_submit = move |_| {
        let content_value = content.peek().clone();
        let author_value = author.peek().clone();
        let bio_value = author_bio.peek().clone();
        let status_value = *status.peek();

        match validate_thought_fields(&content_value, &author_value, &bio_value) {
            Err(field_errors) => errors.set(field_errors),
            Ok(()) => {
                errors.set(FieldErrors::default());
                submitting.set(true);
                spawn(async move {
                    let request = UpdateThoughtRequest::new(
                        &content_value,
                        &author_value,
                        &bio_value,
                        status_value,
                    );
                    match AdminApi::new(BASE_URL).update_thought(id, &request).await {
                        Ok(_) => {
                            toaster.success("Thought updated successfully.");
                            navigator.push(Route::ThoughtsList {});
                        }
                        Err(err) => {
                            if err.is_not_found() {
                                toaster.error("Thought not found.");
                            } else if err.is_validation() {
                                toaster.error(err.message());
                            } else {
                                toaster.error("Failed to update thought. Please try again.");
                            }
                        }
                    }
                    submitting.set(false);
                });
            }
        }
    };

    if !loaded() {
        return rsx! {
            div { class: "max-w-2xl mx-auto px-6 py-10 text-center text-gray-500", "Loading..." }
        };
    }

    let content_len = content.read().chars().count();
    let author_len = author.read().chars().count();
    let bio_len = author_bio.read().chars().count();
    let content_error = errors.read().content.clone();
    let author_error = errors.read().author.clone();
    let bio_error = errors.read().author_bio.clone();

    rsx! {
        div { class: "max-w-2xl mx-auto px-6 py-10",
            h1 { class: "text-3xl font-bold mb-6", "Edit Thought" }

            div { class: "space-y-6",
                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Content" }
                    textarea {
                        value: "{content}",
                        oninput: move |evt| content.set(evt.value()),
                        class: "w-full px-4 py-3 min-h-[150px] border border-gray-300 rounded-xl shadow-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                    }
                    p { class: "text-sm text-gray-500 mt-1",
                        "{content_len} / {CONTENT_MAX} characters (minimum {CONTENT_MIN} required)"
                    }
                    match content_error {
                        Some(message) => rsx! { p { class: "text-sm text-red-600 mt-1", "{message}" } },
                        None => rsx! {},
                    }
                }

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Author" }
                    input {
                        r#type: "text",
                        value: "{author}",
                        oninput: move |evt| author.set(evt.value()),
                        class: "w-full px-4 py-3 border border-gray-300 rounded-xl shadow-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                    }
                    p { class: "text-sm text-gray-500 mt-1", "{author_len} / {AUTHOR_MAX} characters" }
                    match author_error {
                        Some(message) => rsx! { p { class: "text-sm text-red-600 mt-1", "{message}" } },
                        None => rsx! {},
                    }
                }

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Author Bio" }
                    textarea {
                        value: "{author_bio}",
                        oninput: move |evt| author_bio.set(evt.value()),
                        class: "w-full px-4 py-3 min-h-[80px] border border-gray-300 rounded-xl shadow-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                    }
                    p { class: "text-sm text-gray-500 mt-1", "{bio_len} / {AUTHOR_MAX} characters" }
                    match bio_error {
                        Some(message) => rsx! { p { class: "text-sm text-red-600 mt-1", "{message}" } },
                        None => rsx! {},
                    }
                }

                div {
                    label { class: "block text-sm font-medium text-gray-700 mb-2", "Status" }
                    select {
                        value: "{status}",
                        onchange: move |evt| {
                            if let Ok(parsed) = evt.value().parse() {
                                status.set(parsed);
                            }
                        },
                        class: "w-full px-4 py-3 border border-gray-300 rounded-xl shadow-sm focus:outline-none focus:ring-2 focus:ring-indigo-500",
                        for option_status in ThoughtStatus::ALL {
                            option {
                                value: "{option_status}",
                                selected: *status.read() == option_status,
                                "{option_status}"
                            }
                        }
                    }
                }

                div { class: "flex gap-4 pt-2",
                    button {
                        onclick: on_submit,
                        disabled: submitting(),
                        class: "px-8 py-3 bg-indigo-600 text-white rounded-xl hover:bg-indigo-700 transition shadow-md disabled:opacity-50 disabled:cursor-not-allowed",
                        if submitting() { "Saving..." } else { "Save Changes" }
                    }
                    Link {
                        to: Route::ThoughtsList {},
                        class: "px-8 py-3 border border-gray-300 text-gray-700 rounded-xl hover:bg-gray-50 transition",
                        "Cancel"
                    }
                }
            }
        }
    }
}
