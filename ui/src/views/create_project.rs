use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::project::{DraftIssue, ProjectCategory, ProjectDraft};
use crate::t;

#[component]
pub fn CreateProject() -> Element {
    let mut draft = use_signal(ProjectDraft::default);
    let mut issues = use_signal(Vec::<DraftIssue>::new);
    let mut submitted = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let found = draft.read().validate();
        debug!("project draft validated with {} issue(s)", found.len());
        submitted.set(found.is_empty());
        issues.set(found);
    };

    let current = draft();

    rsx! {
        section { class: "page page-create",
            h1 { {t!("create-title")} }
            form { class: "create__form", onsubmit: on_submit,
                label { r#for: "create-title", {t!("create-field-title")} }
                input {
                    id: "create-title",
                    value: "{current.title}",
                    oninput: move |evt| draft.write().title = evt.value(),
                }

                label { r#for: "create-description", {t!("create-field-description")} }
                textarea {
                    id: "create-description",
                    value: "{current.description}",
                    oninput: move |evt| draft.write().description = evt.value(),
                }

                label { r#for: "create-category", {t!("create-field-category")} }
                select {
                    id: "create-category",
                    oninput: move |evt| draft.write().category = evt.value().parse().ok(),
                    option { value: "", {t!("create-choose-category")} }
                    for c in ProjectCategory::ALL {
                        option { key: "{c}", value: "{c}", "{c.label()}" }
                    }
                }

                label { r#for: "create-video", {t!("create-field-video")} }
                input {
                    id: "create-video",
                    r#type: "url",
                    value: current.video_url.clone().unwrap_or_default(),
                    oninput: move |evt| {
                        let value = evt.value();
                        draft.write().video_url = (!value.trim().is_empty()).then_some(value);
                    },
                }

                if !issues().is_empty() {
                    ul { class: "form__errors", role: "alert",
                        for issue in issues() {
                            li { "{issue.message()}" }
                        }
                    }
                }
                if submitted() {
                    p { class: "form__notice", {t!("create-ready")} }
                }

                button { class: "button button--primary", r#type: "submit", {t!("create-submit")} }
            }
        }
    }
}
