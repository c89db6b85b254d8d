use dioxus::prelude::*;
use wishlist_shared::User;

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl AvatarSize {
    fn class(self) -> &'static str {
        match self {
            AvatarSize::Small => "w-6 h-6 text-[10px]",
            AvatarSize::Medium => "w-9 h-9 text-sm",
            AvatarSize::Large => "w-24 h-24 text-3xl",
        }
    }
}

/// User picture, or initials on a colored disc when none is set.
#[component]
pub fn Avatar(user: User, #[props(default)] size: AvatarSize) -> Element {
    let size_class = size.class();
    let initials = user.initials();
    match user.avatar.as_deref().filter(|a| !a.is_empty()) {
        Some(src) => rsx! {
            img {
                class: "{size_class} rounded-full object-cover flex-shrink-0",
                src: "{src}",
                alt: "{user.username}",
                title: "{user.username}",
            }
        },
        None => rsx! {
            div {
                class: "{size_class} rounded-full bg-gradient-to-br from-pink-500 to-orange-400 text-white font-semibold flex items-center justify-center flex-shrink-0",
                title: "{user.username}",
                "{initials}"
            }
        },
    }
}

/// Overlapping avatars of wishlist members.
#[component]
pub fn AvatarStack(users: Vec<User>, #[props(default = 5)] max: usize) -> Element {
    let hidden = users.len().saturating_sub(max);
    rsx! {
        div { class: "flex -space-x-2",
            for user in users.into_iter().take(max) {
                div { key: "{user.id}", class: "ring-2 ring-[#313338] rounded-full",
                    Avatar { user, size: AvatarSize::Small }
                }
            }
            if hidden > 0 {
                div { class: "w-6 h-6 rounded-full bg-[#4e5058] text-[10px] text-white flex items-center justify-center ring-2 ring-[#313338]",
                    "+{hidden}"
                }
            }
        }
    }
}
