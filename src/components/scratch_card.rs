use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use super::{confetti::Confetti, floating_emoji::FloatingEmoji};
use crate::model::ChallengeKind;
use crate::scratch::{PointerSample, ScratchConfig, ScratchSurface};
use crate::state::{to_local, TouchState};
use crate::util::{clog, format_percent};

#[derive(Properties, PartialEq, Clone)]
pub struct ScratchCardProps {
    pub content: AttrValue,
    pub kind: ChallengeKind,
    pub config: ScratchConfig,
    pub confetti_count: u32,
    pub emoji_threshold: f64,
    pub on_revealed: Callback<()>,
    pub on_close: Callback<()>,
}

fn context_2d(canvas_ref: &NodeRef) -> Option<CanvasRenderingContext2d> {
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

fn local_point(canvas_ref: &NodeRef, client_x: f64, client_y: f64, cfg: &ScratchConfig) -> Option<(f64, f64)> {
    let canvas = canvas_ref.cast::<HtmlCanvasElement>()?;
    let r = canvas.get_bounding_client_rect();
    Some(to_local(
        client_x,
        client_y,
        (r.left(), r.top(), r.width(), r.height()),
        cfg.width,
        cfg.height,
    ))
}

#[function_component(ScratchCard)]
pub fn scratch_card(props: &ScratchCardProps) -> Html {
    let canvas_ref = use_node_ref();
    let surface = use_mut_ref(|| ScratchSurface::new(props.config));
    let touch = use_mut_ref(TouchState::default);
    let coverage = use_state(|| 0.0_f64);
    let revealed = use_state(|| false);

    // Paint the cover once per mounted card.
    {
        let canvas_ref = canvas_ref.clone();
        let cfg = props.config;
        let color = props.kind.cover_color();
        use_effect_with((), move |_| {
            if let Some(ctx) = context_2d(&canvas_ref) {
                ctx.set_fill_style_str(color);
                ctx.fill_rect(0.0, 0.0, cfg.width, cfg.height);
            }
            || ()
        });
    }

    let config_error = surface.borrow().as_ref().err().map(|e| e.to_string());
    if let Some(msg) = config_error {
        clog(&format!("scratch card disabled: {}", msg));
        let close_cb = props.on_close.clone();
        let close_btn = Callback::from(move |_| close_cb.emit(()));
        return html! {
            <div style="padding:20px; text-align:center;">
                <p style="color:#b62324;">{ format!("Scratch card misconfigured: {}", msg) }</p>
                <button onclick={close_btn}>{"Close"}</button>
            </div>
        };
    }

    let apply: Rc<dyn Fn(PointerSample)> = {
        let surface = surface.clone();
        let canvas_ref = canvas_ref.clone();
        let coverage = coverage.clone();
        let revealed = revealed.clone();
        let on_revealed = props.on_revealed.clone();
        Rc::new(move |sample: PointerSample| {
            let (out, rect) = {
                let mut guard = surface.borrow_mut();
                let Ok(s) = guard.as_mut() else { return };
                let out = s.record_sample(sample);
                (out, out.newly_touched.map(|c| s.cell_rect(c)))
            };
            if let Some((x, y, w, h)) = rect {
                if let Some(ctx) = context_2d(&canvas_ref) {
                    ctx.clear_rect(x, y, w, h);
                }
                coverage.set(out.coverage);
            }
            if out.just_revealed {
                revealed.set(true);
                on_revealed.emit(());
            }
        })
    };

    let cfg = props.config;
    let onmousedown = {
        let (apply, touch, canvas_ref) = (apply.clone(), touch.clone(), canvas_ref.clone());
        Callback::from(move |e: MouseEvent| {
            if let Some((x, y)) = local_point(&canvas_ref, e.client_x() as f64, e.client_y() as f64, &cfg) {
                let sample = touch.borrow_mut().begin(x, y);
                apply(sample);
            }
        })
    };
    let onmousemove = {
        let (apply, touch, canvas_ref) = (apply.clone(), touch.clone(), canvas_ref.clone());
        Callback::from(move |e: MouseEvent| {
            if let Some((x, y)) = local_point(&canvas_ref, e.client_x() as f64, e.client_y() as f64, &cfg) {
                let sample = touch.borrow_mut().advance(x, y);
                if let Some(sample) = sample {
                    apply(sample);
                }
            }
        })
    };
    let ontouchstart = {
        let (apply, touch, canvas_ref) = (apply.clone(), touch.clone(), canvas_ref.clone());
        Callback::from(move |e: TouchEvent| {
            if let Some(t0) = e.touches().item(0) {
                if let Some((x, y)) = local_point(&canvas_ref, t0.client_x() as f64, t0.client_y() as f64, &cfg) {
                    let sample = touch.borrow_mut().begin(x, y);
                    apply(sample);
                }
            }
        })
    };
    let ontouchmove = {
        let (apply, touch, canvas_ref) = (apply.clone(), touch.clone(), canvas_ref.clone());
        Callback::from(move |e: TouchEvent| {
            if let Some(t0) = e.touches().item(0) {
                if let Some((x, y)) = local_point(&canvas_ref, t0.client_x() as f64, t0.client_y() as f64, &cfg) {
                    let sample = touch.borrow_mut().advance(x, y);
                    if let Some(sample) = sample {
                        apply(sample);
                    }
                }
            }
        })
    };
    let end_gesture = {
        let (apply, touch) = (apply.clone(), touch.clone());
        move || {
            let sample = touch.borrow_mut().finish();
            if let Some(sample) = sample {
                apply(sample);
            }
        }
    };
    let onmouseup = {
        let end = end_gesture.clone();
        Callback::from(move |_: MouseEvent| end())
    };
    let onmouseleave = {
        let end = end_gesture.clone();
        Callback::from(move |_: MouseEvent| end())
    };
    let ontouchend = {
        let end = end_gesture.clone();
        Callback::from(move |_: TouchEvent| end())
    };
    let ontouchcancel = Callback::from(move |_: TouchEvent| end_gesture());

    let close_btn = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    let is_revealed = *revealed;
    let cover_opacity = if is_revealed { 0.0 } else { 1.0 };
    let emoji_active = *coverage > props.emoji_threshold;

    html! {
        <div style="display:flex; flex-direction:column; align-items:center;">
            <div style={format!("position:relative; width:85vw; max-width:{}px; aspect-ratio:{} / {}; border-radius:20px; overflow:hidden; background:#fff; box-shadow:0 4px 10px rgba(0,0,0,0.25);", cfg.width, cfg.width, cfg.height)}>
                <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; padding:20px; white-space:pre-line; text-align:center; color:#9f1239; font-size:20px; font-weight:600; line-height:1.4;">
                    { props.content.clone() }
                </div>
                <canvas
                    ref={canvas_ref}
                    width={(cfg.width.ceil() as u32).to_string()}
                    height={(cfg.height.ceil() as u32).to_string()}
                    style={format!("position:absolute; inset:0; width:100%; height:100%; touch-action:none; opacity:{}; transition:opacity 600ms; pointer-events:{};", cover_opacity, if is_revealed { "none" } else { "auto" })}
                    {onmousedown} {onmousemove} {onmouseup} {onmouseleave}
                    {ontouchstart} {ontouchmove} {ontouchend} {ontouchcancel}
                />
                if !is_revealed {
                    <div style="position:absolute; inset:0; display:flex; flex-direction:column; align-items:center; justify-content:center; color:#fff; pointer-events:none;">
                        <span style="font-size:24px; font-weight:700; text-transform:uppercase; letter-spacing:1px; margin-bottom:8px;">{"Scratch Here!"}</span>
                        <span style="font-size:16px; opacity:0.9;">{ format!("to reveal your {}", props.kind.noun()) }</span>
                    </div>
                }
                <FloatingEmoji active={emoji_active} />
            </div>
            <Confetti active={is_revealed} count={props.confetti_count} />
            <p style="margin-top:20px; color:#d53f8c; font-size:16px; text-align:center;">
                { if is_revealed { "Your challenge has been revealed!".to_string() } else { format!("Scratch the card to reveal your challenge ({} scratched)", format_percent(*coverage)) } }
            </p>
            <button onclick={close_btn} style="margin-top:30px; padding:12px 24px; width:140px; border:none; border-radius:25px; background:#d53f8c; color:#fff; font-weight:700; text-transform:uppercase; letter-spacing:1px; cursor:pointer;">{"Close"}</button>
        </div>
    }
}
