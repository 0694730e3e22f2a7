use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::state::{spawn_particles, ConfettiShape, Particle};

/// Longest fall plus stagger; particles are dropped after this.
const SHOW_MS: u32 = 4_000;

const KEYFRAMES: &str = "@keyframes gq-confetti-fall { \
    0% { opacity: 0; transform: translate(0, 0) rotate(0deg) scale(0.6); } \
    10% { opacity: 1; } \
    80% { opacity: 1; } \
    100% { opacity: 0; transform: translate(var(--sway), 110vh) rotate(var(--rot)) scale(1); } }";

#[derive(Properties, PartialEq, Clone)]
pub struct ConfettiProps {
    pub active: bool,
    pub count: u32,
}

fn shape_style(p: &Particle) -> String {
    match p.shape {
        ConfettiShape::Square => format!("width:8px; height:8px; background:{};", p.color),
        ConfettiShape::Circle => format!("width:8px; height:8px; border-radius:50%; background:{};", p.color),
        ConfettiShape::Triangle => format!(
            "width:0; height:0; border-left:5px solid transparent; border-right:5px solid transparent; border-bottom:9px solid {};",
            p.color
        ),
        ConfettiShape::Heart => format!("font-size:12px; line-height:1; color:{};", p.color),
    }
}

#[function_component(Confetti)]
pub fn confetti(props: &ConfettiProps) -> Html {
    let particles = use_state(Vec::<Particle>::new);

    {
        let particles = particles.clone();
        let count = props.count;
        use_effect_with(props.active, move |active| {
            let mut timeout = None;
            if *active {
                let width = web_sys::window()
                    .and_then(|w| w.inner_width().ok())
                    .and_then(|v| v.as_f64())
                    .unwrap_or(390.0);
                particles.set(spawn_particles(count, width, js_sys::Math::random));
                let particles = particles.clone();
                timeout = Some(Timeout::new(SHOW_MS, move || particles.set(Vec::new())));
            }
            move || drop(timeout)
        });
    }

    if particles.is_empty() {
        return html! {};
    }
    html! {
        <div style="position:fixed; inset:0; pointer-events:none; overflow:hidden; z-index:70;">
            <style>{ KEYFRAMES }</style>
            { for particles.iter().map(|p| html! {
                <div style={format!(
                    "position:absolute; left:{:.1}px; top:{:.1}px; --sway:{:.1}px; --rot:{:.0}deg; animation:gq-confetti-fall {}ms ease-out {}ms forwards; opacity:0; {}",
                    p.start_x, p.start_y, p.sway, p.rotation_deg, p.duration_ms, p.delay_ms, shape_style(p)
                )}>
                    { if p.shape == ConfettiShape::Heart { "❤" } else { "" } }
                </div>
            }) }
        </div>
    }
}
