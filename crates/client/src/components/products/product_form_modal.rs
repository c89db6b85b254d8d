use dioxus::logger::tracing;
use dioxus::prelude::*;
use wishlist_shared::{Priority, Product, ProductStatus, SUPPORTED_CURRENCIES};

use crate::components::image_upload::{ImageUpload, UploadTarget};
use crate::components::ui::{
    Button, ButtonVariant, ErrorBanner, Modal, ModalFooter, SelectField, TextField,
};
use crate::forms::ProductDraft;
use crate::session::AuthContext;

/// Add a product, or edit `product` when given.
#[component]
pub fn ProductFormModal(
    wishlist_id: String,
    #[props(optional)] product: Option<Product>,
    on_close: EventHandler<()>,
    on_saved: EventHandler<Product>,
) -> Element {
    let auth = use_context::<AuthContext>();
    let editing_id = product.as_ref().map(|p| p.id.clone());
    let is_edit = editing_id.is_some();
    let mut draft = use_signal(|| {
        product
            .as_ref()
            .map(ProductDraft::from_product)
            .unwrap_or_default()
    });
    let mut error = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();
        let input = match draft.read().to_input() {
            Ok(input) => input,
            Err(err) => {
                error.set(Some(err.to_string()));
                return;
            }
        };
        let wishlist_id = wishlist_id.clone();
        let editing_id = editing_id.clone();

        is_saving.set(true);
        spawn(async move {
            let client = auth.client();
            let result = match &editing_id {
                Some(id) => client.update_product(id, &input).await,
                None => client.create_product(&wishlist_id, &input).await,
            };
            match result {
                Ok(saved) => {
                    tracing::info!("saved product {} in {wishlist_id}", saved.id);
                    on_saved.call(saved);
                }
                Err(err) => {
                    error.set(Some(err.user_message()));
                    is_saving.set(false);
                }
            }
        });
    };

    let currencies: Vec<(String, String)> = SUPPORTED_CURRENCIES
        .iter()
        .map(|c| (c.to_string(), c.to_string()))
        .collect();
    let priorities: Vec<(String, String)> = Priority::ALL
        .iter()
        .map(|p| (p.as_str().to_string(), p.label().to_string()))
        .collect();
    let statuses: Vec<(String, String)> = ProductStatus::ALL
        .iter()
        .map(|s| (s.as_str().to_string(), s.label().to_string()))
        .collect();
    let image_url = draft.read().image_url.clone();

    rsx! {
        Modal {
            title: if is_edit { "Edit Product".to_string() } else { "Add Product".to_string() },
            width: "max-w-2xl",
            on_close,
            form { onsubmit: handle_submit,
                div { class: "p-6 grid grid-cols-1 md:grid-cols-2 gap-4",
                    div { class: "md:col-span-2",
                        TextField {
                            label: "Name",
                            required: true,
                            autofocus: true,
                            placeholder: "Noise-cancelling headphones",
                            value: draft.read().name.clone(),
                            oninput: move |v| {
                                draft.write().name = v;
                                error.set(None);
                            },
                        }
                    }
                    TextField {
                        label: "Price",
                        input_type: "text",
                        placeholder: "0.00",
                        value: draft.read().price.clone(),
                        oninput: move |v| draft.write().price = v,
                    }
                    SelectField {
                        label: "Currency",
                        value: draft.read().currency.clone(),
                        options: currencies,
                        onchange: move |v| draft.write().currency = v,
                    }
                    div { class: "md:col-span-2",
                        TextField {
                            label: "Link",
                            placeholder: "store.com/item",
                            value: draft.read().url.clone(),
                            oninput: move |v| draft.write().url = v,
                        }
                    }
                    TextField {
                        label: "Brand",
                        value: draft.read().brand.clone(),
                        oninput: move |v| draft.write().brand = v,
                    }
                    TextField {
                        label: "Category",
                        value: draft.read().category.clone(),
                        oninput: move |v| draft.write().category = v,
                    }
                    SelectField {
                        label: "Priority",
                        value: draft.read().priority.as_str().to_string(),
                        options: priorities,
                        onchange: move |v: String| {
                            if let Some(priority) = Priority::parse(&v) {
                                draft.write().priority = priority;
                            }
                        },
                    }
                    SelectField {
                        label: "Status",
                        value: draft.read().status.as_str().to_string(),
                        options: statuses,
                        onchange: move |v: String| {
                            if let Some(status) = ProductStatus::parse(&v) {
                                draft.write().status = status;
                            }
                        },
                    }
                    div { class: "md:col-span-2",
                        TextField {
                            label: "Tags",
                            placeholder: "tech, music (comma separated)",
                            value: draft.read().tags.clone(),
                            oninput: move |v| draft.write().tags = v,
                        }
                    }
                    div { class: "md:col-span-2 space-y-2",
                        TextField {
                            label: "Image URL",
                            placeholder: "Paste a link or upload below",
                            value: image_url.clone(),
                            oninput: move |v| draft.write().image_url = v,
                        }
                        div { class: "flex items-center gap-3",
                            ImageUpload {
                                target: UploadTarget::ProductImage,
                                label: "Upload photo",
                                on_uploaded: move |url| draft.write().image_url = url,
                            }
                            if !image_url.trim().is_empty() {
                                img { class: "h-12 w-12 rounded object-cover", src: "{image_url}" }
                            }
                        }
                    }
                    if let Some(err) = error.read().as_ref() {
                        div { class: "md:col-span-2",
                            ErrorBanner { message: err.clone() }
                        }
                    }
                }
                ModalFooter {
                    Button { variant: ButtonVariant::Ghost, onclick: move |_| on_close.call(()), "Cancel" }
                    Button {
                        r#type: "submit",
                        disabled: !draft.read().is_submittable(),
                        loading: *is_saving.read(),
                        if is_edit { "Save Changes" } else { "Add Product" }
                    }
                }
            }
        }
    }
}
