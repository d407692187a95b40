pub mod base;
pub mod config;
pub mod hooks;
pub mod pages;
pub mod styles;

use yew::prelude::*;

use crate::base::Base;
use crate::pages::question_wheel::QuestionWheelPage;

#[function_component(App)]
pub fn app() -> Html {
    // Read once; the query string doesn't change without a reload.
    let config = use_state(config::load_wheel_config);

    html! {
        <Base>
            <QuestionWheelPage config={(*config).clone()} />
        </Base>
    }
}
