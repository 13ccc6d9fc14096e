use arcade_engine::core::clock::{Clock, DELTA_SCALE, FPS_SAMPLE_INTERVAL, MAX_DELTA};
use proptest::prelude::*;

// Monotonic timestamp sequences: a start time plus non-negative frame gaps
prop_compose! {
    fn arb_frames(max_frames: usize)(
        start in 0.0f64..1.0e6,
        gaps in prop::collection::vec(0.0f64..500.0, 1..max_frames)
    ) -> (f64, Vec<f64>) {
        let mut t = start;
        let stamps = gaps
            .into_iter()
            .map(|gap| {
                t += gap;
                t
            })
            .collect();
        (start, stamps)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn delta_is_scaled_and_clamped((start, stamps) in arb_frames(64)) {
        let mut clock = Clock::new();
        clock.start(start);
        let mut last = start;

        for t in stamps {
            clock.update(t);
            let unscaled = t - last;
            last = t;

            prop_assert_eq!(clock.unscaled_delta(), unscaled);
            prop_assert_eq!(clock.delta(), unscaled * DELTA_SCALE);
            prop_assert!(clock.clamped_delta() <= MAX_DELTA);
            prop_assert_eq!(clock.clamped_delta(), clock.delta().min(MAX_DELTA));
        }
    }

    #[test]
    fn frame_count_increments_once_per_update((start, stamps) in arb_frames(64)) {
        let mut clock = Clock::new();
        clock.start(start);

        for (i, t) in stamps.iter().enumerate() {
            let before = clock.frame_count();
            clock.update(*t);
            prop_assert_eq!(clock.frame_count(), before + 1);
            prop_assert_eq!(clock.frame_count(), i as u64 + 1);
        }
    }

    #[test]
    fn fps_changes_only_on_sample_frames((start, stamps) in arb_frames(128)) {
        let mut clock = Clock::new();
        clock.start(start);

        for t in stamps {
            let before = clock.fps();
            clock.update(t);
            if clock.frame_count() % FPS_SAMPLE_INTERVAL != 0 {
                prop_assert_eq!(clock.fps(), before);
            } else {
                prop_assert_eq!(clock.fps(), (clock.delta() * 60.0).floor() as u32);
            }
        }
    }

    #[test]
    fn restart_keeps_active_time((start, stamps) in arb_frames(32), resume in 1.0e7f64..2.0e7) {
        let mut clock = Clock::new();
        clock.start(start);
        for t in &stamps {
            clock.update(*t);
        }
        let active = clock.active_time();
        let frames = clock.frame_count();

        clock.start(resume);
        prop_assert_eq!(clock.active_time(), active);
        prop_assert_eq!(clock.frame_count(), frames);

        clock.update(resume);
        prop_assert_eq!(clock.unscaled_delta(), 0.0);
        prop_assert_eq!(clock.frame_count(), frames + 1);
    }
}
