use super::{
    challenge_modal::ChallengeModal, tile_grid::TileGrid, welcome_overlay::WelcomeOverlay,
};
use crate::model::{ChallengeKind, QuestAction, QuestState};
use crate::settings::{self, Settings};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let app_settings = use_memo((), |_| Settings::load());
    let quest = use_reducer(|| QuestState::new(!settings::welcome_seen()));

    let open_tile = {
        let quest = quest.clone();
        Callback::from(move |idx: usize| quest.dispatch(QuestAction::OpenTile(idx)))
    };
    let choose = {
        let quest = quest.clone();
        Callback::from(move |kind: ChallengeKind| quest.dispatch(QuestAction::Choose(kind)))
    };
    let back = {
        let quest = quest.clone();
        Callback::from(move |_| quest.dispatch(QuestAction::Back))
    };
    let close = {
        let quest = quest.clone();
        Callback::from(move |_| quest.dispatch(QuestAction::Close))
    };
    let revealed = {
        let quest = quest.clone();
        Callback::from(move |_| quest.dispatch(QuestAction::Revealed))
    };
    let dismiss_welcome = {
        let quest = quest.clone();
        Callback::from(move |_| {
            settings::mark_welcome_seen();
            quest.dispatch(QuestAction::DismissWelcome);
        })
    };

    let revealed_kinds: Vec<Vec<ChallengeKind>> =
        (0..quest.tiles.len()).map(|i| quest.revealed_kinds(i)).collect();
    let tile_label = quest
        .modal
        .tile()
        .and_then(|i| quest.tiles.get(i))
        .map(|t| t.label.clone())
        .unwrap_or_default();

    html! {
        <div style="position:relative; min-height:100vh; background:#fff; padding-top:50px; font-family:sans-serif;">
            <h1 style="margin:0 0 8px 0; font-size:36px; color:#9f1239; text-align:center; letter-spacing:1px;">{"MYSTERY QUEST"}</h1>
            <p style="margin:0 0 40px 0; font-size:18px; color:#d53f8c; text-align:center;">{"Unlock the Adventure"}</p>
            <TileGrid tiles={quest.tiles.clone()} revealed={revealed_kinds} on_open={open_tile} />
            <ChallengeModal
                modal={quest.modal}
                tile_label={tile_label}
                settings={(*app_settings).clone()}
                on_choose={choose}
                on_back={back}
                on_revealed={revealed}
                on_close={close}
            />
            <WelcomeOverlay show={quest.welcome_open} on_close={dismiss_welcome} />
        </div>
    }
}
