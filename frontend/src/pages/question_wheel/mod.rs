mod setup_form;
mod wheel_canvas;
mod wheel_utils;

use yew::prelude::*;
use wheel_shared::constants::WheelConfig;

use crate::hooks::use_question_wheel;
use crate::styles;

use setup_form::SetupForm;
use wheel_canvas::{WedgeView, WheelCanvas};
use wheel_utils::{NewGameButton, SpinButton, StatusLine};

#[derive(Properties, PartialEq)]
pub struct QuestionWheelPageProps {
    pub config: WheelConfig,
}

#[function_component(QuestionWheelPage)]
pub fn question_wheel_page(props: &QuestionWheelPageProps) -> Html {
    let wheel = use_question_wheel(props.config.clone());

    let Some(round) = wheel.snapshot.round() else {
        return html! {
            <div class={styles::CARD}>
                <SetupForm
                    default_count={wheel.snapshot.config().default_questions}
                    on_start={wheel.start.clone()}
                />
            </div>
        };
    };

    let wedges: Vec<WedgeView> = round
        .wedges_in_display_order()
        .map(|(_, question)| WedgeView {
            label: question.label.clone(),
            color: question.color.hex(),
        })
        .collect();

    let on_spin = {
        let spin = wheel.spin.clone();
        Callback::from(move |_: MouseEvent| spin.emit(()))
    };
    let on_new_game = {
        let reset = wheel.reset.clone();
        Callback::from(move |_: MouseEvent| reset.emit(()))
    };

    html! {
        <div class={classes!(styles::CARD, styles::GAME)}>
            <SpinButton can_spin={round.can_spin()} onclick={on_spin} />
            <StatusLine
                text={round.status_text().to_string()}
                answered={round.answered_count()}
                total={round.wedge_count()}
            />
            <div class={styles::WHEEL_CONTAINER}>
                <WheelCanvas wedges={wedges} is_spinning={round.is_spinning()} />
            </div>
            <NewGameButton emphasized={round.all_answered()} onclick={on_new_game} />
        </div>
    }
}
