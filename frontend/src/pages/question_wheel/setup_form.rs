use web_sys::HtmlInputElement;
use yew::prelude::*;
use wheel_shared::constants::{QUESTION_COUNT_HINT, QUESTION_COUNT_PROMPT};

use crate::hooks::validation::use_question_count_validation;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SetupFormProps {
    pub default_count: usize,
    pub on_start: Callback<usize>,
}

#[function_component(SetupForm)]
pub fn setup_form(props: &SetupFormProps) -> Html {
    let input = use_state(|| props.default_count.to_string());
    let (validation, validate) = use_question_count_validation(props.default_count.to_string());

    let oninput = {
        let input = input.clone();
        let validate = validate.clone();
        Callback::from(move |e: InputEvent| {
            let element: HtmlInputElement = e.target_unchecked_into();
            let value = element.value();
            validate.emit(value.clone());
            input.set(value);
        })
    };

    let onkeydown = {
        let validation = validation.clone();
        let on_start = props.on_start.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() != "Enter" {
                return;
            }
            if let Some(count) = validation.question_count() {
                on_start.emit(count);
            }
        })
    };

    let onclick = {
        let validation = validation.clone();
        let on_start = props.on_start.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(count) = validation.question_count() {
                on_start.emit(count);
            }
        })
    };

    let is_valid = validation.is_valid();

    html! {
        <div class={styles::SETUP}>
            <span class={styles::TEXT_BODY}>{QUESTION_COUNT_PROMPT}</span>
            <div class={styles::SETUP_ROW}>
                <div>
                    <input
                        id="questions-input"
                        type="text"
                        inputmode="numeric"
                        class={if is_valid { styles::INPUT } else { styles::INPUT_ERROR }}
                        value={(*input).clone()}
                        {oninput}
                        {onkeydown}
                    />
                    <p class={if is_valid { styles::TEXT_HINT } else { styles::TEXT_ERROR }}>
                        {QUESTION_COUNT_HINT}
                    </p>
                </div>
                <button
                    class={classes!(styles::BUTTON_GOLD, (!is_valid).then_some(styles::BUTTON_DISABLED))}
                    disabled={!is_valid}
                    {onclick}
                >
                    {"Start game"}
                </button>
            </div>
        </div>
    }
}
