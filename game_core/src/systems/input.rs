use hecs::World;

use crate::components::*;
use crate::resources::*;

/// Turn the sampled keyboard state into paddle intents
pub fn ingest_inputs(world: &mut World, input: &InputState) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = input.paddle(paddle.side).dir();
    }
}
