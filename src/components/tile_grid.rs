use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::model::{ChallengeKind, QuestTile};

/// Press feedback before the modal opens.
const PRESS_MS: u32 = 200;

#[derive(Properties, PartialEq, Clone)]
pub struct TileGridProps {
    pub tiles: Vec<QuestTile>,
    /// Kinds already revealed, per tile.
    pub revealed: Vec<Vec<ChallengeKind>>,
    pub on_open: Callback<usize>,
}

#[function_component(TileGrid)]
pub fn tile_grid(props: &TileGridProps) -> Html {
    let pressed = use_state(|| None::<usize>);

    let tiles = props.tiles.iter().enumerate().map(|(idx, tile)| {
        let onclick = {
            let pressed = pressed.clone();
            let on_open = props.on_open.clone();
            Callback::from(move |_| {
                if pressed.is_some() {
                    return;
                }
                pressed.set(Some(idx));
                let pressed = pressed.clone();
                let on_open = on_open.clone();
                Timeout::new(PRESS_MS, move || {
                    pressed.set(None);
                    on_open.emit(idx);
                })
                .forget();
            })
        };
        let scale = if *pressed == Some(idx) { 0.95 } else { 1.0 };
        let badges: Html = props
            .revealed
            .get(idx)
            .map(|kinds| kinds.iter().map(|k| html! { <span>{ k.emoji() }</span> }).collect())
            .unwrap_or_default();
        html! {
            <div key={idx} style="width:47%; margin-bottom:20px;">
                <div {onclick} style={format!("aspect-ratio:1; border-radius:20px; padding:15px; display:flex; flex-direction:column; align-items:center; justify-content:center; border:1px solid #fce7f3; box-shadow:0 4px 12px rgba(213,63,140,0.1); cursor:pointer; transform:scale({}); transition:transform 100ms;", scale)}>
                    <span style="color:#d53f8c; font-size:22px; font-weight:600;">{ tile.label.clone() }</span>
                    <span style="font-size:24px; margin-top:5px; color:#d53f8c;">{ if tile.featured { "❤️" } else { "?" } }</span>
                    <div style="display:flex; gap:4px; margin-top:4px; font-size:14px;">{ badges }</div>
                </div>
            </div>
        }
    });

    html! {
        <div style="display:flex; flex-wrap:wrap; justify-content:space-between; padding:0 20px;">
            { for tiles }
        </div>
    }
}
