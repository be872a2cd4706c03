use crate::{Ball, Config, Events, Score, Side};

/// Award a point to `scorer` and serve from the center toward the player
/// who just conceded.
pub fn award_point(
    scorer: Side,
    ball: &mut Ball,
    score: &mut Score,
    events: &mut Events,
    config: &Config,
) {
    score.increment(scorer);
    match scorer {
        Side::Left => {
            events.p1_scored = true;
            ball.vel.x = -config.ball_velocity;
        }
        Side::Right => {
            events.p2_scored = true;
            ball.vel.x = config.ball_velocity;
        }
    }
    ball.recenter(config.arena_center());

    log::debug!(
        "player {} scored, score is {}-{}",
        scorer.player_number(),
        score.p1,
        score.p2
    );
}
