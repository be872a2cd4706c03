use crate::{Config, Paddle, PaddleIntent};
use hecs::World;

/// Apply paddle movement based on intents, one fixed step per frame
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.line.translate_y(intent.dir as f32 * config.paddle_step);
        }

        // Clamp to arena bounds
        paddle.line.clamp_to_arena(
            config.arena_width,
            config.arena_height,
            config.paddle_length,
        );
    }
}
