use yew::prelude::*;

const TOYS: [(&str, f64, f64, u32); 5] = [
    ("🧸", 12.0, 70.0, 2400),
    ("🎁", 78.0, 62.0, 2000),
    ("🎈", 45.0, 80.0, 2800),
    ("✨", 25.0, 20.0, 1500),
    ("💖", 68.0, 15.0, 1800),
];

const KEYFRAMES: &str = "@keyframes gq-float { \
    0%, 100% { transform: translateY(0) rotate(-6deg); } \
    50% { transform: translateY(-14px) rotate(6deg); } }";

#[derive(Properties, PartialEq, Clone)]
pub struct FloatingEmojiProps {
    pub active: bool,
}

#[function_component(FloatingEmoji)]
pub fn floating_emoji(props: &FloatingEmojiProps) -> Html {
    if !props.active {
        return html! {};
    }
    html! {
        <div style="position:absolute; inset:0; pointer-events:none;">
            <style>{ KEYFRAMES }</style>
            { for TOYS.iter().map(|(emoji, left, top, period)| html! {
                <span style={format!("position:absolute; left:{}%; top:{}%; font-size:22px; animation:gq-float {}ms ease-in-out infinite;", left, top, period)}>
                    { *emoji }
                </span>
            }) }
        </div>
    }
}
