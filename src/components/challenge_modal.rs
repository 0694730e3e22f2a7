use yew::prelude::*;

use super::scratch_card::ScratchCard;
use crate::model::{challenge_text, ChallengeKind, ModalState};
use crate::settings::Settings;

#[derive(Properties, PartialEq, Clone)]
pub struct ChallengeModalProps {
    pub modal: ModalState,
    pub tile_label: AttrValue,
    pub settings: Settings,
    pub on_choose: Callback<ChallengeKind>,
    pub on_back: Callback<()>,
    pub on_revealed: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(ChallengeModal)]
pub fn challenge_modal(props: &ChallengeModalProps) -> Html {
    let body = match props.modal {
        ModalState::Closed => return html! {},
        ModalState::Choosing { .. } => {
            let option = |kind: ChallengeKind, label: &'static str, secondary: bool| {
                let cb = props.on_choose.clone();
                let onclick = Callback::from(move |_| cb.emit(kind));
                let bg = if secondary { "#fce7f3" } else { "#fdf2f8" };
                let color = if secondary { "#9f1239" } else { "#d53f8c" };
                html! {
                    <button {onclick} style={format!("display:flex; align-items:center; gap:10px; width:100%; padding:14px 18px; margin-bottom:12px; border:none; border-radius:16px; background:{}; cursor:pointer;", bg)}>
                        <span style="font-size:24px;">{ kind.emoji() }</span>
                        <span style={format!("font-size:18px; font-weight:600; color:{};", color)}>{ label }</span>
                    </button>
                }
            };
            let back = {
                let cb = props.on_back.clone();
                Callback::from(move |_| cb.emit(()))
            };
            html! {
                <>
                    { option(ChallengeKind::Clue, "Get a Clue", false) }
                    { option(ChallengeKind::Dare, "Take a Dare", true) }
                    <button onclick={back} style="margin-top:8px; padding:8px 20px; border:none; background:none; color:#d53f8c; font-size:16px; cursor:pointer;">{"Back"}</button>
                </>
            }
        }
        ModalState::Scratching { tile, kind } => html! {
            <ScratchCard
                key={format!("{}-{:?}", tile, kind)}
                content={challenge_text(kind, tile)}
                kind={kind}
                config={props.settings.scratch}
                confetti_count={props.settings.confetti_count}
                emoji_threshold={props.settings.floating_emoji_threshold}
                on_revealed={props.on_revealed.clone()}
                on_close={props.on_close.clone()}
            />
        },
    };

    html! {
        <div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.7); z-index:50;">
            <div style="background:#fff; border-radius:24px; padding:24px; width:90%; max-width:440px; display:flex; flex-direction:column; align-items:center;">
                <h2 style="margin:0 0 18px 0; color:#9f1239; font-size:24px;">{ props.tile_label.clone() }</h2>
                { body }
            </div>
        </div>
    }
}
