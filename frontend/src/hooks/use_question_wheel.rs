use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use wheel_shared::constants::WheelConfig;
use wheel_shared::shared_wheel_game::{Landing, QuestionWheel, WheelEvent};
use yew::prelude::*;

#[derive(Clone)]
pub struct QuestionWheelHandle {
    /// Copy of the game as of this render.
    pub snapshot: QuestionWheel,
    pub start: Callback<usize>,
    pub spin: Callback<()>,
    pub reset: Callback<()>,
}

/// Runs one spin to completion, including any follow-up spins. Ends early
/// once the game it was started for has been reset.
async fn drive_spin(wheel: Rc<RefCell<QuestionWheel>>, update: UseForceUpdateHandle, generation: u64) {
    loop {
        let event = wheel.borrow_mut().tick(generation);
        update.force_update();

        match event {
            None => {
                log::debug!("Spin for game {} stopped", generation);
                return;
            }
            Some(WheelEvent::Advanced { next_delay_ms }) => {
                TimeoutFuture::new(next_delay_ms).await;
            }
            Some(WheelEvent::Landed(Landing::AlreadyAnswered { pause_ms, .. })) => {
                TimeoutFuture::new(pause_ms).await;
                if wheel.borrow_mut().resume(generation).is_none() {
                    log::debug!("Follow-up spin for game {} dropped", generation);
                    return;
                }
                update.force_update();
            }
            Some(WheelEvent::Landed(_)) => return,
        }
    }
}

#[hook]
pub fn use_question_wheel(config: WheelConfig) -> QuestionWheelHandle {
    let wheel = use_mut_ref(move || QuestionWheel::new(config));
    let update = use_force_update();

    let start = {
        let wheel = wheel.clone();
        let update = update.clone();
        Callback::from(move |count: usize| {
            if let Err(e) = wheel.borrow_mut().start_game(count) {
                log::warn!("Refusing to start a game: {:?}", e);
                return;
            }
            update.force_update();
        })
    };

    let spin = {
        let wheel = wheel.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            let generation = {
                let mut game = wheel.borrow_mut();
                let mut rng = rand::thread_rng();
                if game.spin(&mut rng).is_none() {
                    return;
                }
                game.generation()
            };
            update.force_update();
            spawn_local(drive_spin(wheel.clone(), update.clone(), generation));
        })
    };

    let reset = {
        let wheel = wheel.clone();
        let update = update.clone();
        Callback::from(move |_: ()| {
            wheel.borrow_mut().reset_game();
            update.force_update();
        })
    };

    let snapshot = wheel.borrow().clone();

    QuestionWheelHandle {
        snapshot,
        start,
        spin,
        reset,
    }
}
