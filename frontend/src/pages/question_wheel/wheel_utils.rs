use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub can_spin: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={!props.can_spin}
            class={classes!(
                styles::BUTTON_GOLD_LARGE,
                (!props.can_spin).then_some(styles::BUTTON_DISABLED)
            )}
        >
            {"Spin!"}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusLineProps {
    pub text: String,
    pub answered: usize,
    pub total: usize,
}

#[function_component(StatusLine)]
pub fn status_line(props: &StatusLineProps) -> Html {
    html! {
        <div class="flex flex-col items-center">
            <p class={styles::STATUS_TEXT}>{&props.text}</p>
            <span class={styles::TEXT_SMALL}>
                {format!("{} of {} answered", props.answered, props.total)}
            </span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NewGameButtonProps {
    /// Drawn filled once every question has been answered.
    pub emphasized: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(NewGameButton)]
pub fn new_game_button(props: &NewGameButtonProps) -> Html {
    let class = if props.emphasized {
        styles::BUTTON_DANGER
    } else {
        styles::BUTTON_DANGER_OUTLINED
    };

    html! {
        <button onclick={props.onclick.clone()} {class}>
            {"New game"}
        </button>
    }
}
