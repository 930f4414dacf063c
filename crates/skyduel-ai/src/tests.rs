#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use skyduel_core::constants::*;
    use skyduel_core::enums::{AiIntensity, BehaviorKind};
    use skyduel_core::input::{Action, InputState};
    use skyduel_core::types::{Bounds, Vec3};

    use crate::fsm::{attitude, evaluate, AdversaryContext, AdversaryState};
    use crate::profiles::get_profile;
    use crate::targeting::{lead_intent, predict_target, predictive_shot};

    /// RNG whose `gen::<f64>()` is always 0.0, so every roll succeeds.
    fn always_fire() -> StepRng {
        StepRng::new(0, 0)
    }

    /// RNG whose `gen::<f64>()` is always just below 1.0, so no roll succeeds.
    fn never_fire() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    /// Dragon at the origin with the player `range` units ahead on +z.
    fn make_context(state: AdversaryState, range: f64) -> AdversaryContext {
        AdversaryContext {
            state,
            move_phase: 0.0,
            position: Vec3::ZERO,
            player_position: Vec3::new(0.0, 0.0, range),
            speed: DRAGON_SPEED,
            intensity: AiIntensity::Normal,
            bounds: Bounds::default(),
        }
    }

    // ---- Transitions ----

    #[test]
    fn test_patrol_stays_when_player_far() {
        let ctx = make_context(AdversaryState::Patrol { timer: 4 }, 90.0);
        let update = evaluate(&ctx, &mut never_fire());
        assert_eq!(update.new_state, AdversaryState::Patrol { timer: 5 });
        assert!(!update.state_changed);
        assert_abs_diff_eq!(update.move_phase, DRAGON_PHASE_STEP);
    }

    #[test]
    fn test_patrol_to_chase_resets_timer() {
        let ctx = make_context(AdversaryState::Patrol { timer: 40 }, 79.0);
        let update = evaluate(&ctx, &mut never_fire());
        assert_eq!(update.new_state, AdversaryState::Chase { timer: 0 });
        assert!(update.state_changed);
    }

    #[test]
    fn test_chase_to_attack_inside_range() {
        let ctx = make_context(AdversaryState::Chase { timer: 10 }, 49.0);
        let update = evaluate(&ctx, &mut never_fire());
        assert_eq!(update.new_state, AdversaryState::Attack { timer: 0 });
    }

    #[test]
    fn test_chase_times_out_to_patrol() {
        let ctx = make_context(AdversaryState::Chase { timer: CHASE_TIMEOUT_TICKS }, 60.0);
        let update = evaluate(&ctx, &mut never_fire());
        assert_eq!(update.new_state, AdversaryState::Patrol { timer: 0 });

        // One tick earlier the timer has not yet exceeded the limit.
        let ctx = make_context(
            AdversaryState::Chase {
                timer: CHASE_TIMEOUT_TICKS - 1,
            },
            60.0,
        );
        let update = evaluate(&ctx, &mut never_fire());
        assert_eq!(
            update.new_state,
            AdversaryState::Chase {
                timer: CHASE_TIMEOUT_TICKS
            }
        );
    }

    #[test]
    fn test_chase_attack_range_wins_over_timeout() {
        let ctx = make_context(AdversaryState::Chase { timer: 500 }, 30.0);
        let update = evaluate(&ctx, &mut never_fire());
        assert_eq!(update.new_state.kind(), BehaviorKind::Attack);
    }

    #[test]
    fn test_attack_to_retreat_after_charge() {
        let ctx = make_context(
            AdversaryState::Attack {
                timer: ATTACK_CHARGE_TICKS - 1,
            },
            40.0,
        );
        let update = evaluate(&ctx, &mut never_fire());
        assert_eq!(update.new_state, AdversaryState::Retreat { timer: 0 });
        assert_eq!(update.new_position, ctx.position);
    }

    #[test]
    fn test_retreat_to_patrol() {
        let ctx = make_context(AdversaryState::Retreat { timer: RETREAT_TICKS }, 40.0);
        let update = evaluate(&ctx, &mut never_fire());
        assert_eq!(update.new_state, AdversaryState::Patrol { timer: 0 });

        let ctx = make_context(AdversaryState::Retreat { timer: 10 }, 40.0);
        let update = evaluate(&ctx, &mut never_fire());
        assert_eq!(update.new_state, AdversaryState::Retreat { timer: 11 });
    }

    #[test]
    fn test_exhaustive_transitions() {
        // (state, range) -> expected kind after one tick
        let cases = [
            (AdversaryState::Patrol { timer: 0 }, 200.0, BehaviorKind::Patrol),
            (AdversaryState::Patrol { timer: 0 }, 10.0, BehaviorKind::Chase),
            (AdversaryState::Chase { timer: 0 }, 200.0, BehaviorKind::Chase),
            (AdversaryState::Chase { timer: 0 }, 10.0, BehaviorKind::Attack),
            (AdversaryState::Chase { timer: 301 }, 200.0, BehaviorKind::Patrol),
            (AdversaryState::Attack { timer: 0 }, 200.0, BehaviorKind::Attack),
            (AdversaryState::Attack { timer: 80 }, 10.0, BehaviorKind::Attack),
            (AdversaryState::Attack { timer: 200 }, 10.0, BehaviorKind::Retreat),
            (AdversaryState::Retreat { timer: 0 }, 10.0, BehaviorKind::Retreat),
            (AdversaryState::Retreat { timer: 95 }, 10.0, BehaviorKind::Patrol),
        ];
        for (state, range, expected) in cases {
            let update = evaluate(&make_context(state, range), &mut never_fire());
            assert_eq!(
                update.new_state.kind(),
                expected,
                "from {state:?} at range {range}"
            );
        }
    }

    // ---- Motion ----

    #[test]
    fn test_chase_moves_toward_player() {
        let ctx = make_context(AdversaryState::Chase { timer: 0 }, 70.0);
        let update = evaluate(&ctx, &mut never_fire());
        let expected = DRAGON_SPEED * CHASE_SPEED_FACTOR;
        assert_abs_diff_eq!(update.new_position.z, expected, epsilon = 1e-12);
        assert_abs_diff_eq!(update.new_position.x, 0.0);
    }

    #[test]
    fn test_chase_holds_inside_min_range() {
        let ctx = make_context(AdversaryState::Chase { timer: 0 }, 15.0);
        let update = evaluate(&ctx, &mut never_fire());
        assert_eq!(update.new_position, Vec3::ZERO);
    }

    #[test]
    fn test_chase_vertical_nudge() {
        let mut ctx = make_context(AdversaryState::Chase { timer: 0 }, 0.0);
        ctx.player_position = Vec3::new(0.0, 60.0, 80.0);
        let update = evaluate(&ctx, &mut never_fire());

        let chase_speed = DRAGON_SPEED * CHASE_SPEED_FACTOR;
        let direct = 60.0 / 100.0 * chase_speed;
        let nudge = chase_speed * CHASE_VERTICAL_FACTOR;
        assert_abs_diff_eq!(update.new_position.y, direct + nudge, epsilon = 1e-12);
    }

    #[rstest]
    #[case(AiIntensity::Weak)]
    #[case(AiIntensity::Normal)]
    #[case(AiIntensity::Strong)]
    fn test_attack_climb_scales_with_intensity(#[case] intensity: AiIntensity) {
        let mut ctx = make_context(AdversaryState::Attack { timer: 0 }, 40.0);
        ctx.intensity = intensity;
        let update = evaluate(&ctx, &mut never_fire());
        let m = intensity.multiplier();
        assert_abs_diff_eq!(update.new_position.y, ATTACK_CLIMB_RATE * m, epsilon = 1e-12);
        assert_abs_diff_eq!(
            update.new_position.z,
            -ATTACK_PULLBACK_RATE * m,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_attack_charge_speed() {
        let ctx = make_context(AdversaryState::Attack { timer: 70 }, 40.0);
        let update = evaluate(&ctx, &mut never_fire());
        assert_abs_diff_eq!(
            update.new_position.z,
            DRAGON_SPEED * ATTACK_CHARGE_FACTOR,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_attack_charge_degenerate_direction_skips_motion() {
        let ctx = make_context(AdversaryState::Attack { timer: 70 }, 0.0);
        let update = evaluate(&ctx, &mut never_fire());
        assert_eq!(update.new_position, Vec3::ZERO);
        assert!(update.new_position.is_finite());
    }

    #[test]
    fn test_patrol_displacement_first_tick() {
        let ctx = make_context(AdversaryState::Patrol { timer: 0 }, 150.0);
        let update = evaluate(&ctx, &mut never_fire());
        let p = DRAGON_PHASE_STEP;
        assert_abs_diff_eq!(update.new_position.x, p.sin() * 1.2, epsilon = 1e-12);
        assert_abs_diff_eq!(update.new_position.y, (p * 0.7).cos() * 0.8, epsilon = 1e-12);
        assert_abs_diff_eq!(update.new_position.z, (p * 0.5).sin() * 0.6, epsilon = 1e-12);
    }

    #[test]
    fn test_retreat_withdraws() {
        let ctx = make_context(AdversaryState::Retreat { timer: 0 }, 40.0);
        let update = evaluate(&ctx, &mut never_fire());
        assert_abs_diff_eq!(update.new_position.z, -RETREAT_WITHDRAW_RATE);
    }

    #[test]
    fn test_position_clamped_to_bounds() {
        let mut ctx = make_context(AdversaryState::Attack { timer: 0 }, 40.0);
        ctx.position = Vec3::new(WORLD_X_EXTENT, WORLD_Y_EXTENT, -WORLD_Z_EXTENT);
        ctx.player_position = Vec3::ZERO;
        let update = evaluate(&ctx, &mut never_fire());
        assert!(ctx.bounds.contains(update.new_position));
        assert_eq!(update.new_position.y, WORLD_Y_EXTENT);
        assert_eq!(update.new_position.z, -WORLD_Z_EXTENT);
    }

    #[test]
    fn test_long_run_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut ctx = make_context(AdversaryState::default(), 0.0);
        ctx.position = Vec3::new(30.0, 20.0, 50.0);
        ctx.player_position = Vec3::new(0.0, 0.0, -50.0);
        ctx.intensity = AiIntensity::Strong;
        for _ in 0..2_000 {
            let update = evaluate(&ctx, &mut rng);
            assert!(ctx.bounds.contains(update.new_position));
            ctx.state = update.new_state;
            ctx.move_phase = update.move_phase;
            ctx.position = update.new_position;
        }
    }

    // ---- Fire requests ----

    #[test]
    fn test_charge_and_opportunistic_requests() {
        let ctx = make_context(AdversaryState::Attack { timer: 70 }, 40.0);
        let update = evaluate(&ctx, &mut always_fire());
        assert_eq!(update.fire_requests, 2);

        let update = evaluate(&ctx, &mut never_fire());
        assert_eq!(update.fire_requests, 0);
    }

    #[test]
    fn test_opportunistic_fire_needs_range() {
        let near = make_context(AdversaryState::Patrol { timer: 0 }, 100.0);
        assert_eq!(evaluate(&near, &mut always_fire()).fire_requests, 1);

        let far = make_context(AdversaryState::Patrol { timer: 0 }, 130.0);
        assert_eq!(evaluate(&far, &mut always_fire()).fire_requests, 0);
    }

    #[test]
    fn test_climb_never_fires_from_charge_roll() {
        let ctx = make_context(AdversaryState::Attack { timer: 0 }, 200.0);
        assert_eq!(evaluate(&ctx, &mut always_fire()).fire_requests, 0);
    }

    #[test]
    fn test_determinism_same_seed() {
        let run = |seed: u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut ctx = make_context(AdversaryState::default(), 0.0);
            ctx.player_position = Vec3::new(10.0, 0.0, 30.0);
            let mut trace = Vec::new();
            for _ in 0..400 {
                let update = evaluate(&ctx, &mut rng);
                trace.push((update.new_state, update.fire_requests));
                ctx.state = update.new_state;
                ctx.move_phase = update.move_phase;
                ctx.position = update.new_position;
            }
            trace
        };
        assert_eq!(run(99), run(99));
    }

    // ---- Profiles ----

    #[test]
    fn test_profile_scaling() {
        let weak = get_profile(AiIntensity::Weak);
        let strong = get_profile(AiIntensity::Strong);
        assert_abs_diff_eq!(weak.attack_fire_chance, 0.07, epsilon = 1e-12);
        assert_abs_diff_eq!(strong.opportunistic_fire_chance, 0.007, epsilon = 1e-12);
        assert_abs_diff_eq!(strong.retreat_amplitude.z, 1.4, epsilon = 1e-12);
        assert!(weak.chase_speed_factor < strong.chase_speed_factor);
    }

    // ---- Attitude ----

    #[test]
    fn test_attitude_advances_yaw() {
        let rot = attitude(Vec3::new(0.0, 1.0, 0.0), 0.0);
        assert_abs_diff_eq!(rot.y, 1.0 + DRAGON_YAW_RATE);
        assert_abs_diff_eq!(rot.x, 0.0);
        assert_abs_diff_eq!(rot.z, 0.0);
    }

    // ---- Targeting ----

    #[test]
    fn test_lead_intent_precedence() {
        let input = InputState::default()
            .with(Action::Left)
            .with(Action::Right)
            .with(Action::Down)
            .with(Action::Backward);
        assert_eq!(
            lead_intent(&input),
            Vec3::new(LEAD_LATERAL_SPEED, -LEAD_VERTICAL_SPEED, -LEAD_LATERAL_SPEED)
        );
        assert_eq!(lead_intent(&InputState::default()), Vec3::ZERO);
    }

    #[test]
    fn test_predict_target_leads_by_distance() {
        let input = InputState::default().with(Action::Right);
        let target = predict_target(Vec3::new(0.0, 0.0, 30.0), Vec3::ZERO, &input);
        // lead time 30 / 3 = 10 ticks at 2 units per tick
        assert_abs_diff_eq!(target.x, 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(target.z, 0.0);
    }

    #[test]
    fn test_predictive_shot_speed() {
        let input = InputState::default().with(Action::Up).with(Action::Forward);
        let velocity =
            predictive_shot(Vec3::new(30.0, 20.0, 50.0), Vec3::new(0.0, 0.0, -50.0), &input)
                .unwrap();
        assert_abs_diff_eq!(velocity.length(), DRAGON_SHOT_SPEED, epsilon = 1e-9);
        assert!(velocity.z < 0.0);
    }

    #[test]
    fn test_predictive_shot_degenerate() {
        let p = Vec3::new(5.0, 5.0, 5.0);
        assert!(predictive_shot(p, p, &InputState::default()).is_none());
    }
}
