//! Running mission score, kept by the engine and reported in every snapshot.

use skirmish_core::enums::TargetKind;
use skirmish_core::state::ScoreView;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreState {
    pub asteroids_destroyed: u32,
    pub enemies_destroyed: u32,
    pub railgun_shots: u32,
    pub missiles_launched: u32,
}

impl ScoreState {
    pub fn record_kill(&mut self, kind: TargetKind) {
        match kind {
            TargetKind::Asteroid => self.asteroids_destroyed += 1,
            TargetKind::Enemy => self.enemies_destroyed += 1,
        }
    }

    pub fn view(&self, mission_time_secs: f64) -> ScoreView {
        ScoreView {
            asteroids_destroyed: self.asteroids_destroyed,
            enemies_destroyed: self.enemies_destroyed,
            railgun_shots: self.railgun_shots,
            missiles_launched: self.missiles_launched,
            mission_time_secs,
        }
    }
}
