//! The player's ship: hull, magazines, weapon cooldowns and the in-flight
//! ordnance it has fired.
//!
//! Ordnance lives in a small hecs world owned by the ship. Each projectile is
//! an entity with `Position`, `Velocity` and `Projectile` components.

use hecs::{Entity, World};

use skirmish_core::components::Projectile;
use skirmish_core::constants::*;
use skirmish_core::enums::{FireOutcome, Ordnance};
use skirmish_core::types::{forward_from_heading, Position, Velocity};

/// A projectile as seen by the combat sweep.
#[derive(Debug, Clone, Copy)]
pub struct InFlight {
    pub entity: Entity,
    pub projectile: Projectile,
    pub position: Position,
    pub velocity: Velocity,
}

/// Player combat state. Pose is written by the presentation layer each frame.
pub struct PlayerShip {
    pub position: Position,
    pub heading: f64,
    pub hull: f64,
    pub missiles: u32,
    pub pdc_rounds: u32,
    pub pdc_active: bool,
    /// Seconds until the railgun can fire again (0 = ready).
    pub railgun_cooldown: f64,
    pub missile_cooldown: f64,
    pub pdc_cooldown: f64,
    pub damage_flash_secs: f64,
    ordnance: World,
    next_serial: u64,
}

impl Default for PlayerShip {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerShip {
    pub fn new() -> Self {
        Self {
            position: Position::default(),
            heading: 0.0,
            hull: PLAYER_MAX_HULL,
            missiles: MISSILE_MAGAZINE,
            pdc_rounds: PDC_MAX_ROUNDS,
            pdc_active: true,
            railgun_cooldown: 0.0,
            missile_cooldown: 0.0,
            pdc_cooldown: 0.0,
            damage_flash_secs: 0.0,
            ordnance: World::new(),
            next_serial: 0,
        }
    }

    pub fn set_pose(&mut self, position: Position, heading: f64) {
        self.position = position;
        self.heading = heading;
    }

    pub fn is_alive(&self) -> bool {
        self.hull > 0.0
    }

    /// Count every weapon cooldown and the damage flash down toward zero.
    pub fn tick_cooldowns(&mut self, dt: f64) {
        self.railgun_cooldown = (self.railgun_cooldown - dt).max(0.0);
        self.missile_cooldown = (self.missile_cooldown - dt).max(0.0);
        self.pdc_cooldown = (self.pdc_cooldown - dt).max(0.0);
        self.damage_flash_secs = (self.damage_flash_secs - dt).max(0.0);
    }

    pub fn fire_railgun(&mut self) -> FireOutcome {
        if !self.is_alive() {
            return FireOutcome::Offline;
        }
        if self.railgun_cooldown > 0.0 {
            return FireOutcome::CoolingDown;
        }

        self.launch(Ordnance::Railgun, RAILGUN_MUZZLE_OFFSET, RAILGUN_SPEED, RAILGUN_LIFETIME_SECS);
        self.railgun_cooldown = RAILGUN_RELOAD_SECS;
        FireOutcome::Fired
    }

    pub fn fire_missile(&mut self) -> FireOutcome {
        if !self.is_alive() {
            return FireOutcome::Offline;
        }
        if self.missile_cooldown > 0.0 {
            return FireOutcome::CoolingDown;
        }
        if self.missiles == 0 {
            return FireOutcome::OutOfAmmo;
        }

        self.launch(Ordnance::Missile, MISSILE_MUZZLE_OFFSET, MISSILE_SPEED, MISSILE_LIFETIME_SECS);
        self.missiles -= 1;
        self.missile_cooldown = MISSILE_RELOAD_SECS;
        FireOutcome::Fired
    }

    /// Fire a point-defense burst at `target`. Offline unless the PDC is on
    /// and the target is within range.
    pub fn fire_pdc(&mut self, target: Option<Position>) -> FireOutcome {
        let in_range = target.is_some_and(|t| self.position.range_to(&t) <= PDC_RANGE);
        if !self.is_alive() || !self.pdc_active || !in_range {
            return FireOutcome::Offline;
        }
        if self.pdc_cooldown > 0.0 {
            return FireOutcome::CoolingDown;
        }
        if self.pdc_rounds == 0 {
            return FireOutcome::OutOfAmmo;
        }

        self.pdc_rounds -= self.pdc_rounds.min(PDC_BURST_ROUNDS);
        self.pdc_cooldown = PDC_FIRE_INTERVAL;
        FireOutcome::Fired
    }

    /// Returns the new PDC state.
    pub fn toggle_pdc(&mut self) -> bool {
        self.pdc_active = !self.pdc_active;
        self.pdc_active
    }

    /// Apply hostile damage. Returns the hull actually removed.
    pub fn take_damage(&mut self, amount: f64) -> f64 {
        if !self.is_alive() || amount <= 0.0 {
            return 0.0;
        }
        let before = self.hull;
        self.hull = (self.hull - amount).max(0.0);
        self.damage_flash_secs = PLAYER_DAMAGE_FLASH_SECS;
        before - self.hull
    }

    pub fn repair(&mut self, amount: f64) {
        self.hull = (self.hull + amount.max(0.0)).min(PLAYER_MAX_HULL);
    }

    pub fn reload_pdc(&mut self, rounds: u32) {
        self.pdc_rounds = self.pdc_rounds.saturating_add(rounds).min(PDC_MAX_ROUNDS);
    }

    /// Move every projectile and age it by `dt`. Expired projectiles are
    /// despawned and returned in spawn order.
    pub fn advance_ordnance(&mut self, dt: f64) -> Vec<InFlight> {
        let mut expired = Vec::new();
        for (entity, (position, velocity, projectile)) in
            self.ordnance
                .query_mut::<(&mut Position, &Velocity, &mut Projectile)>()
        {
            position.integrate(velocity, dt);
            projectile.lifetime_secs -= dt;
            if projectile.lifetime_secs <= 0.0 {
                expired.push(InFlight {
                    entity,
                    projectile: *projectile,
                    position: *position,
                    velocity: *velocity,
                });
            }
        }

        expired.sort_by_key(|p| p.projectile.serial);
        for p in &expired {
            let _ = self.ordnance.despawn(p.entity);
        }
        expired
    }

    /// Every live projectile in ascending spawn order.
    pub fn projectiles(&self) -> Vec<InFlight> {
        let mut in_flight: Vec<InFlight> = self
            .ordnance
            .query::<(&Position, &Velocity, &Projectile)>()
            .iter()
            .map(|(entity, (position, velocity, projectile))| InFlight {
                entity,
                projectile: *projectile,
                position: *position,
                velocity: *velocity,
            })
            .collect();
        in_flight.sort_by_key(|p| p.projectile.serial);
        in_flight
    }

    pub fn remove_projectile(&mut self, entity: Entity) {
        let _ = self.ordnance.despawn(entity);
    }

    pub fn projectile_count(&self) -> usize {
        self.ordnance.len() as usize
    }

    fn launch(&mut self, ordnance: Ordnance, muzzle_offset: f64, speed: f64, lifetime_secs: f64) -> Entity {
        let forward = forward_from_heading(self.heading);
        let muzzle = Position::from(self.position.as_dvec3() + forward * muzzle_offset);
        let projectile = Projectile {
            ordnance,
            lifetime_secs,
            serial: self.next_serial,
        };
        self.next_serial += 1;
        self.ordnance.spawn((muzzle, Velocity::from(forward * speed), projectile))
    }
}
