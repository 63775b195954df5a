//! Per-frame draw order: sky, ground, player, obstacles, overlay

use std::io;

use super::colors;
use super::sprites::Sprites;
use crate::platform::Renderer;
use crate::sim::{GameState, ObstaclePool, RunPhase};

/// Draw the current state and present it
pub fn render_frame<R, P>(
    renderer: &mut R,
    state: &GameState<P>,
    sprites: &Sprites<R::Texture>,
) -> io::Result<()>
where
    R: Renderer,
    P: ObstaclePool,
{
    renderer.clear(colors::SKY);
    renderer.fill_rect(state.ground, colors::GROUND);
    renderer.draw_textured_rect(&sprites.player, state.player.rect());

    for obstacle in state.pool.iter() {
        let dest = state.footprints.rect_of(&obstacle);
        renderer.draw_textured_rect(sprites.for_kind(obstacle.kind), dest);
    }

    if state.phase == RunPhase::Lost {
        let y = state.tuning.screen_size / 4;
        renderer.draw_label(state.tuning.screen_size / 4, y, "GAME OVER");
        renderer.draw_label(state.tuning.screen_size / 4, y + 32, "r: retry  q: quit");
    }

    renderer.present()
}
