// randomized checks of the conversion and arithmetic laws

use rand::Rng;
use timedelta::Duration;

const SAMPLES: usize = 10_000;

// keeps the sum and difference of two values away from the reserved range
const MILLIS_BOUND: i64 = i64::MAX / 1_000 / 2;

#[test]
fn round_trips() {
    let mut rng = rand::thread_rng();

    for _ in 0..SAMPLES {
        let v: i64 = rng.gen_range((i64::MIN + 1)..i64::MAX);
        assert_eq!(Duration::from_micros(v).as_micros(), v);
        assert_eq!(Duration::from_micros(v).as_millis(), v / 1_000);
        assert_eq!(Duration::from_micros(v).as_secs(), v / 1_000_000);

        let v: i64 = rng.gen_range(-MILLIS_BOUND..MILLIS_BOUND);
        assert_eq!(Duration::from_millis(v).as_millis(), v);
        assert_eq!(Duration::from_millis(v).as_micros(), v * 1_000);

        let v: i64 = rng.gen_range(-MILLIS_BOUND / 1_000..MILLIS_BOUND / 1_000);
        assert_eq!(Duration::from_secs(v).as_secs(), v);
    }
}

#[test]
fn ordering() {
    let mut rng = rand::thread_rng();

    for _ in 0..SAMPLES {
        let a: i64 = rng.gen_range(-MILLIS_BOUND..MILLIS_BOUND);
        let b: i64 = rng.gen_range(-MILLIS_BOUND..MILLIS_BOUND);

        assert_eq!(
            Duration::from_millis(a).cmp(&Duration::from_millis(b)),
            a.cmp(&b)
        );
        assert!(Duration::PLUS_INFINITY > Duration::from_millis(a));
        assert!(Duration::MINUS_INFINITY < Duration::from_millis(a));
    }
}

#[test]
fn arithmetic() {
    let mut rng = rand::thread_rng();

    for _ in 0..SAMPLES {
        let a: i64 = rng.gen_range(-MILLIS_BOUND..MILLIS_BOUND);
        let b: i64 = rng.gen_range(-MILLIS_BOUND..MILLIS_BOUND);
        let da = Duration::from_millis(a);
        let db = Duration::from_millis(b);

        assert_eq!((da + db).as_millis(), a + b);
        assert_eq!((da - db).as_millis(), a - b);
        assert_eq!((db / 10).as_millis(), b / 10);
        assert_eq!(-(-da), da);
        assert_eq!(da.abs().as_millis(), a.abs());

        let micros: i64 = rng.gen_range(-1_000_000_000..1_000_000_000);
        let scalar: i32 = rng.gen_range(-1_000_000..1_000_000);
        assert_eq!(
            (i64::from(scalar) * Duration::from_micros(micros)).as_micros(),
            micros * i64::from(scalar)
        );
        assert_eq!(
            (Duration::from_micros(micros) * i64::from(scalar)).as_micros(),
            micros * i64::from(scalar)
        );
        assert_eq!(
            (Duration::from_micros(micros) * f64::from(scalar)).as_micros(),
            micros * i64::from(scalar)
        );
    }
}

#[test]
fn infinities_absorb() {
    let mut rng = rand::thread_rng();

    for _ in 0..SAMPLES {
        let v = Duration::from_micros(rng.gen_range((i64::MIN + 1)..i64::MAX));

        assert!((Duration::PLUS_INFINITY + v).is_plus_infinity());
        assert!((v + Duration::MINUS_INFINITY).is_minus_infinity());
        assert!((v - Duration::PLUS_INFINITY).is_minus_infinity());
        assert!((Duration::MINUS_INFINITY - v).is_minus_infinity());
    }
}

#[test]
fn text_round_trip() {
    let mut rng = rand::thread_rng();

    for _ in 0..SAMPLES {
        let v = Duration::from_micros(rng.gen_range((i64::MIN + 1)..i64::MAX));
        assert_eq!(v.to_string().parse::<Duration>(), Ok(v));

        let v = Duration::from_millis(rng.gen_range(-MILLIS_BOUND..MILLIS_BOUND));
        assert_eq!(v.to_string().parse::<Duration>(), Ok(v));
    }

    for v in [
        Duration::ZERO,
        Duration::PLUS_INFINITY,
        Duration::MINUS_INFINITY,
    ] {
        assert_eq!(v.to_string().parse::<Duration>(), Ok(v));
    }
}

#[test]
fn core_duration_round_trip() {
    let mut rng = rand::thread_rng();

    for _ in 0..SAMPLES {
        let micros: i64 = rng.gen_range(0..i64::MAX);

        let core = core::time::Duration::try_from(Duration::from_micros(micros)).unwrap();
        assert_eq!(core.as_micros(), micros as u128);
        assert_eq!(Duration::from(core), Duration::from_micros(micros));

        let core = core::time::Duration::from_micros(micros as u64);
        assert_eq!(Duration::from(core).as_micros(), micros);
    }
}

#[cfg(feature = "serde-serialize")]
#[test]
fn serde_round_trip() {
    for v in [
        Duration::from_millis(267),
        Duration::ZERO,
        Duration::PLUS_INFINITY,
        Duration::MINUS_INFINITY,
    ] {
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, v.as_micros().to_string());
        assert_eq!(serde_json::from_str::<Duration>(&json).unwrap(), v);
    }
}
