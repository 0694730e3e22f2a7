pub mod app;
pub mod challenge_modal;
pub mod confetti;
pub mod floating_emoji;
pub mod scratch_card;
pub mod tile_grid;
pub mod welcome_overlay;
