use chrono::Utc;
use dioxus::prelude::*;
use wishlist_shared::{format_relative_time, Comment};

use crate::components::avatar::{Avatar, AvatarSize};
use crate::session::AuthContext;

#[component]
pub fn CommentSection(
    product_id: String,
    comments: Vec<Comment>,
    on_comment: EventHandler<Comment>,
) -> Element {
    let auth = use_context::<AuthContext>();
    let mut expanded = use_signal(|| false);
    let mut content = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut is_posting = use_signal(|| false);
    let now = Utc::now();

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let text = content.read().trim().to_string();
        if text.is_empty() {
            return;
        }
        let product_id = product_id.clone();
        is_posting.set(true);
        spawn(async move {
            match auth.client().add_comment(&product_id, &text).await {
                Ok(comment) => {
                    content.set(String::new());
                    error.set(None);
                    on_comment.call(comment);
                }
                Err(err) => error.set(Some(err.user_message())),
            }
            is_posting.set(false);
        });
    };

    let label = match comments.len() {
        0 => "Comment".to_string(),
        1 => "1 comment".to_string(),
        n => format!("{n} comments"),
    };

    rsx! {
        div { class: "space-y-3",
            button {
                r#type: "button",
                class: "text-xs text-gray-400 hover:text-white transition-colors",
                onclick: move |_| {
                    let open = *expanded.read();
                    expanded.set(!open);
                },
                "💬 {label}"
            }
            if *expanded.read() {
                div { class: "space-y-3",
                    for comment in comments {
                        div { key: "{comment.id}", class: "flex gap-2",
                            Avatar { user: comment.user.clone(), size: AvatarSize::Small }
                            div { class: "min-w-0",
                                div { class: "flex items-baseline gap-2",
                                    span { class: "text-xs font-semibold text-white", "{comment.user.username}" }
                                    span { class: "text-[10px] text-gray-500",
                                        {format_relative_time(comment.created_at, now)}
                                    }
                                }
                                p { class: "text-sm text-gray-300 break-words", "{comment.content}" }
                            }
                        }
                    }
                    form { class: "flex gap-2", onsubmit: handle_submit,
                        input {
                            class: "flex-1 bg-[#1e1f22] border border-[#3f4147] rounded-lg px-3 py-1.5 text-sm text-white placeholder-[#6d6f78] focus:outline-none focus:border-pink-500",
                            placeholder: "Add a comment...",
                            value: "{content}",
                            oninput: move |e: FormEvent| content.set(e.value()),
                        }
                        button {
                            r#type: "submit",
                            class: "px-3 py-1.5 text-sm rounded-lg bg-pink-500 text-white hover:bg-pink-600 disabled:opacity-50",
                            disabled: *is_posting.read() || content.read().trim().is_empty(),
                            "Post"
                        }
                    }
                    if let Some(err) = error.read().as_ref() {
                        p { class: "text-xs text-red-400", "{err}" }
                    }
                }
            }
        }
    }
}
