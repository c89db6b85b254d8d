//! File picker that uploads an image and reports the hosted URL.

use dioxus::logger::tracing;
use dioxus::prelude::*;
use wishlist_shared::{ApiError, UploadResponse};

use crate::api::UploadFile;
use crate::session::AuthContext;

/// Which upload endpoint receives the file.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UploadTarget {
    Avatar,
    ProductImage,
    Image,
}

#[component]
pub fn ImageUpload(
    target: UploadTarget,
    on_uploaded: EventHandler<String>,
    #[props(default = "Upload image".to_string())] label: String,
    #[props(default)] disabled: bool,
) -> Element {
    let auth = use_context::<AuthContext>();
    let mut uploading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let handle_change = move |e: FormEvent| {
        let Some(file) = e.files().into_iter().next() else {
            return;
        };
        uploading.set(true);
        error.set(None);

        spawn(async move {
            let name = file.name();
            let result: Result<UploadResponse, ApiError> = match file.read_bytes().await {
                Ok(bytes) => {
                    let upload = UploadFile::new(name.clone(), bytes.to_vec());
                    let client = auth.client();
                    match target {
                        UploadTarget::Avatar => client.upload_avatar(upload).await,
                        UploadTarget::ProductImage => client.upload_product_image(upload).await,
                        UploadTarget::Image => client.upload_image(upload).await,
                    }
                }
                Err(_) => Err(ApiError::Network(format!("Could not read {name}"))),
            };

            match result {
                Ok(response) => {
                    tracing::info!("uploaded {name}");
                    on_uploaded.call(response.url);
                }
                Err(err) => {
                    tracing::warn!("upload of {name} failed: {err}");
                    error.set(Some(err.upload_message()));
                }
            }
            uploading.set(false);
        });
    };

    let busy = *uploading.read();

    rsx! {
        div { class: "space-y-2",
            label {
                class: format!(
                    "inline-flex items-center gap-2 rounded-lg px-4 py-2 text-sm font-semibold bg-[#4e5058] text-white transition-colors {}",
                    if busy || disabled { "opacity-50 pointer-events-none" } else { "hover:bg-[#6d6f78] cursor-pointer" },
                ),
                if busy {
                    span { class: "h-4 w-4 animate-spin rounded-full border-2 border-white/40 border-t-white" }
                    "Uploading..."
                } else {
                    "{label}"
                }
                input {
                    r#type: "file",
                    class: "hidden",
                    accept: "image/*",
                    disabled: busy || disabled,
                    onchange: handle_change,
                }
            }
            if let Some(err) = error.read().as_ref() {
                p { class: "text-xs text-red-400", "{err}" }
            }
        }
    }
}
