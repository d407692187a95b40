use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;
use wheel_shared::constants::{POINTER_COLOR, WEDGE_BORDER_COLOR};

const CANVAS_SIZE: u32 = 420;
const INNER_RADIUS: f64 = 50.0;
const HUB_COLOR: &str = "#1f2937";

/// A wedge as drawn, in display order.
#[derive(Clone, PartialEq)]
pub struct WedgeView {
    pub label: String,
    pub color: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub wedges: Vec<WedgeView>,
    pub is_spinning: bool,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(context)) => context.dyn_into::<CanvasRenderingContext2d>().ok(),
        Ok(None) => None,
        Err(e) => {
            log::error!("Failed to get canvas context: {:?}", e);
            None
        }
    }
}

fn draw_wheel(context: &CanvasRenderingContext2d, wedges: &[WedgeView], is_spinning: bool) {
    let size = CANVAS_SIZE as f64;
    let center = size / 2.0;
    let radius = center - 20.0;

    context.clear_rect(0.0, 0.0, size, size);
    if wedges.is_empty() {
        return;
    }

    let sweep = 2.0 * PI / wedges.len() as f64;
    // Shift by half a wedge so the last wedge sits centred under the pointer.
    let start = -PI / 2.0 + sweep / 2.0;

    for (i, wedge) in wedges.iter().enumerate() {
        let from = start + sweep * i as f64;
        context.begin_path();
        context.move_to(center, center);
        let _ = context.arc(center, center, radius, from, from + sweep);
        context.close_path();
        context.set_fill_style_str(wedge.color);
        context.fill();
        context.set_stroke_style_str(WEDGE_BORDER_COLOR);
        context.set_line_width(1.5);
        context.stroke();
    }

    // Hub
    context.begin_path();
    let _ = context.arc(center, center, INNER_RADIUS, 0.0, 2.0 * PI);
    context.set_fill_style_str(HUB_COLOR);
    context.fill();
    context.set_stroke_style_str(WEDGE_BORDER_COLOR);
    context.set_line_width(if is_spinning { 3.0 } else { 1.5 });
    context.stroke();

    context.set_font("600 20px sans-serif");
    context.set_text_align("center");
    context.set_text_baseline("middle");
    let label_radius = (radius + INNER_RADIUS) / 2.0 + 20.0;
    for (i, wedge) in wedges.iter().enumerate() {
        let angle = start + sweep * (i as f64 + 0.5);
        let x = center + label_radius * angle.cos();
        let y = center + label_radius * angle.sin();
        context.set_stroke_style_str("white");
        context.set_line_width(1.0);
        let _ = context.stroke_text(&wedge.label, x, y);
        context.set_fill_style_str("red");
        let _ = context.fill_text(&wedge.label, x, y);
    }

    // Pointer, fixed at 12 o'clock.
    context.begin_path();
    context.move_to(center, 4.0);
    context.line_to(center, center - radius + 36.0);
    context.set_stroke_style_str(POINTER_COLOR);
    context.set_line_width(4.0);
    context.stroke();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.wedges.clone(), props.is_spinning),
            move |(wedges, is_spinning)| {
                match canvas_ref.cast::<HtmlCanvasElement>().as_ref().and_then(context_2d) {
                    Some(context) => draw_wheel(&context, wedges, *is_spinning),
                    None => log::warn!("Wheel canvas not ready, skipping frame"),
                }
                || ()
            },
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={CANVAS_SIZE.to_string()}
            height={CANVAS_SIZE.to_string()}
            class="w-full h-auto"
        />
    }
}
