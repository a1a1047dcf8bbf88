use crate::shared::toast::{ToastHost, ToastService};
use crate::shared::widget_init;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the toast service to the whole page via context.
    provide_context(ToastService::new());

    // Decorate tooltip/popover markers once the host markup is in the DOM.
    Effect::new(move || {
        widget_init::init_tooltips();
        widget_init::init_popovers();
    });

    view! {
        <ToastHost />
    }
}
