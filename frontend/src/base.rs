use web_sys::window;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct BaseProps {
    pub children: Html,
}

// The board is always shown on the dark theme.
fn apply_dark_theme() {
    let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        log::warn!("No document element to apply the theme to");
        return;
    };
    if let Err(e) = html.class_list().add_1("dark") {
        log::error!("Failed to apply dark theme: {:?}", e);
    }
}

#[function_component(Base)]
pub fn base(props: &BaseProps) -> Html {
    use_effect_with((), |_| {
        apply_dark_theme();
        || ()
    });

    html! {
        <div class={styles::CONTAINER}>
            <header class={styles::HEADER}>
                <span class={styles::TITLE}>{"Что? Где? Когда?"}</span>
                <span class={styles::SUBTITLE}>{"What? Where? When?"}</span>
            </header>
            <main class={styles::MAIN}>{props.children.clone()}</main>
        </div>
    }
}
