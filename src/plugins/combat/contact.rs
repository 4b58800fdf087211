//! Enemy ↔ player contact.
//!
//! An enemy that touches the player hurts it and is destroyed with `DestroyCause::Contact`.
//! The enemy goes away even when the player's invulnerability rejects the damage.

use avian2d::prelude::*;
use bevy::platform::collections::HashSet;
use bevy::prelude::*;

use super::{ActorKind, CombatEvents, DestroyCause, Health, Invulnerability};
use crate::common::config::CombatConfig;
use crate::plugins::enemies::Enemy;
use crate::plugins::player::Player;
use crate::plugins::projectiles::collision::targets;

pub fn process_contact_hits(
    mut started: MessageReader<CollisionStart>,
    config: Res<CombatConfig>,
    mut events: CombatEvents,
    mut q_player: Query<(&mut Health, Option<&mut Invulnerability>), (With<Player>, Without<Enemy>)>,
    mut q_enemies: Query<(&Enemy, &mut Health), Without<Player>>,
    mut seen: Local<HashSet<Entity>>,
) {
    seen.clear();

    for ev in started.read() {
        let (t1, t2) = targets(ev);
        let (a, b) = (t1.gameplay_owner(), t2.gameplay_owner());

        let (player, enemy) = if q_player.contains(a) && q_enemies.contains(b) {
            (a, b)
        } else if q_player.contains(b) && q_enemies.contains(a) {
            (b, a)
        } else {
            continue;
        };

        if !seen.insert(enemy) {
            continue;
        }

        let Ok((class, mut enemy_health)) = q_enemies.get_mut(enemy) else {
            continue;
        };
        let kind = ActorKind::Enemy(class.class);
        if !events.destroy(enemy, kind, &mut enemy_health, DestroyCause::Contact) {
            continue;
        }

        let Ok((mut health, shield)) = q_player.get_mut(player) else {
            continue;
        };
        events.apply_damage(
            player,
            ActorKind::Player,
            &mut health,
            shield.map(Mut::into_inner),
            config.contact_damage,
        );
    }
}
