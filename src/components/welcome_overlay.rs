use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct WelcomeOverlayProps {
    pub show: bool,
    pub on_close: Callback<()>,
}

#[function_component(WelcomeOverlay)]
pub fn welcome_overlay(props: &WelcomeOverlayProps) -> Html {
    if !props.show {
        return html! {};
    }
    let close_btn = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {
        <div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.6); z-index:60;">
            <div style="background:linear-gradient(135deg, #ff6b6b, #ff8e8e, #ffa8a8); border-radius:24px; padding:28px 32px; max-width:420px; width:85%; text-align:center; color:#fff; box-shadow:0 10px 30px rgba(0,0,0,0.3);">
                <div style="font-size:56px;">{"💝"}</div>
                <h2 style="margin:8px 0 12px 0; font-size:26px;">{"Welcome, Darling! 💕"}</h2>
                <p style="margin:0 0 16px 0; font-size:16px; line-height:1.5;">
                    {"Welcome to our lovely app! We're so excited to have you here. Get ready for an amazing experience filled with joy and surprises! ✨"}
                </p>
                <div style="font-size:22px; letter-spacing:8px; margin-bottom:18px;">{"💖💗💖"}</div>
                <button onclick={close_btn} style="background:linear-gradient(135deg, #ff4757, #ff3742); color:#fff; border:none; border-radius:25px; padding:12px 28px; font-size:16px; font-weight:700; cursor:pointer;">{"Let's Begin! 💝"}</button>
            </div>
        </div>
    }
}
