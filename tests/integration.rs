use chrono::NaiveDate;
use gahshomar::{
    gregorian_to_hijri, hijri_to_gregorian, is_islamic_leap_year, is_jalaali_leap_year,
    jalaali_month_length, to_gregorian, to_jalaali, Calendar, Date, GregorianDate, Islamic,
    IslamicDate, Jalaali, JalaaliDate,
};

fn days(from: (i32, u32, u32), to: (i32, u32, u32)) -> impl Iterator<Item = NaiveDate> {
    let start = NaiveDate::from_ymd_opt(from.0, from.1, from.2).unwrap();
    let end = NaiveDate::from_ymd_opt(to.0, to.1, to.2).unwrap();
    start.iter_days().take_while(move |d| *d <= end)
}

/// `next` is the day after `prev` in calendar `C`.
fn is_successor<C: Calendar>(prev: Date<C>, next: Date<C>) -> bool {
    let (y, m, d) = prev.ymd();
    next.ymd() == (y, m, d + 1) || next.ymd() == (y, m + 1, 1) || next.ymd() == (y + 1, 1, 1)
}

#[test]
fn jalaali_roundtrip_is_exact_1700_2300() {
    for day in days((1700, 1, 1), (2300, 12, 31)) {
        let g = GregorianDate::from(day);
        let j = to_jalaali(g);
        assert!(j.is_valid(), "{g} -> {j}");
        assert_eq!(to_gregorian(j), g, "via {j}");
    }
}

#[test]
fn jalaali_reverse_roundtrip_is_exact() {
    for jy in 1078..=1680 {
        for jm in 1..=12 {
            let length = jalaali_month_length(jy, jm).unwrap();
            for jd in 1..=length {
                let j = JalaaliDate::new(jy, jm, jd);
                let g = to_gregorian(j);
                assert!(g.is_valid(), "{j} -> {g}");
                assert_eq!(to_jalaali(g), j, "via {g}");
            }
        }
    }
}

#[test]
fn islamic_roundtrip_within_one_day() {
    for day in days((1700, 1, 1), (2300, 12, 31)) {
        let h = gregorian_to_hijri(GregorianDate::from(day));
        assert!(h.is_valid(), "{day} -> {h}");
        let back = hijri_to_gregorian(h).to_naive_date().unwrap();
        assert!((back - day).num_days().abs() <= 1, "{day} -> {h} -> {back}");
    }
}

#[test]
fn reference_fixed_points() {
    assert_eq!(
        to_jalaali(GregorianDate::new(2025, 8, 28)),
        JalaaliDate::new(1404, 6, 6)
    );
    assert_eq!(
        to_gregorian(JalaaliDate::new(1404, 6, 6)),
        GregorianDate::new(2025, 8, 28)
    );
    assert_eq!(
        gregorian_to_hijri(GregorianDate::new(2025, 8, 28)),
        IslamicDate::new(1447, 3, 4)
    );
    assert_eq!(
        hijri_to_gregorian(IslamicDate::new(1447, 2, 3)),
        GregorianDate::new(2025, 7, 29)
    );
    assert_eq!(
        gregorian_to_hijri(GregorianDate::new(2024, 3, 11)),
        IslamicDate::new(1445, 9, 1)
    );
}

#[test]
fn conversions_preserve_ordering() {
    let mut prev_j: Option<JalaaliDate> = None;
    let mut prev_h: Option<IslamicDate> = None;
    for day in days((1900, 1, 1), (2100, 12, 31)) {
        let g = GregorianDate::from(day);
        let j = to_jalaali(g);
        let h = gregorian_to_hijri(g);
        if let Some(p) = prev_j {
            assert!(is_successor(p, j), "{p} then {j} at {g}");
        }
        if let Some(p) = prev_h {
            assert!(is_successor(p, h), "{p} then {h} at {g}");
        }
        prev_j = Some(j);
        prev_h = Some(h);
    }
}

#[test]
fn gregorian_leap_day_boundaries() {
    let cases = [
        ((2024, 2, 28), (1402, 12, 9)),
        ((2024, 2, 29), (1402, 12, 10)),
        ((2024, 3, 1), (1402, 12, 11)),
        ((2023, 2, 28), (1401, 12, 9)),
        ((2023, 3, 1), (1401, 12, 10)),
    ];
    for ((gy, gm, gd), (jy, jm, jd)) in cases {
        let g = GregorianDate::new(gy, gm, gd);
        let j = to_jalaali(g);
        assert_eq!(j, JalaaliDate::new(jy, jm, jd), "{g}");
        assert_eq!(to_gregorian(j), g);
    }
}

#[test]
fn era_boundary_around_1600_is_consistent() {
    let cases = [
        ((1599, 3, 20), (977, 12, 29)),
        ((1599, 3, 21), (978, 1, 1)),
        ((1600, 2, 29), (978, 12, 10)),
        ((1600, 3, 19), (978, 12, 29)),
        ((1600, 3, 20), (979, 1, 1)),
        ((1600, 12, 31), (979, 10, 11)),
        ((1601, 1, 1), (979, 10, 12)),
        ((1601, 3, 20), (979, 12, 30)),
        ((1601, 3, 21), (980, 1, 1)),
    ];
    for ((gy, gm, gd), (jy, jm, jd)) in cases {
        let g = GregorianDate::new(gy, gm, gd);
        assert_eq!(to_jalaali(g), JalaaliDate::new(jy, jm, jd), "{g}");
        assert_eq!(to_gregorian(JalaaliDate::new(jy, jm, jd)), g);
    }

    let mut prev: Option<JalaaliDate> = None;
    for day in days((1590, 1, 1), (1610, 12, 31)) {
        let g = GregorianDate::from(day);
        let j = to_jalaali(g);
        assert_eq!(to_gregorian(j), g, "via {j}");
        if let Some(p) = prev {
            assert!(is_successor(p, j), "{p} then {j} at {g}");
        }
        prev = Some(j);
    }
}

#[test]
fn jalaali_roundtrip_far_from_the_epoch() {
    for day in days((1, 1, 1), (3, 12, 31)).chain(days((3000, 1, 1), (3003, 12, 31))) {
        let g = GregorianDate::from(day);
        assert_eq!(to_gregorian(to_jalaali(g)), g);
    }
}

#[test]
fn jalaali_leap_rule_agrees_with_conversion() {
    for jy in 900..2000 {
        let esfand_30 = JalaaliDate::new(jy, 12, 30);
        let survives = to_jalaali(to_gregorian(esfand_30)) == esfand_30;
        assert_eq!(survives, is_jalaali_leap_year(jy), "year {jy}");
    }
}

#[test]
fn islamic_leap_rule_agrees_with_conversion() {
    for hy in 1..2000 {
        let last = IslamicDate::new(hy, 12, 30);
        let survives = gregorian_to_hijri(hijri_to_gregorian(last)) == last;
        assert_eq!(survives, is_islamic_leap_year(hy), "year {hy}");
    }
}

#[test]
fn generic_conversion_composes_free_functions() {
    let j = JalaaliDate::new(1404, 6, 6);
    assert_eq!(j.to::<Islamic>(), gregorian_to_hijri(to_gregorian(j)));

    let h = IslamicDate::new(1447, 3, 4);
    assert_eq!(h.to::<Jalaali>(), to_jalaali(hijri_to_gregorian(h)));
    assert_eq!(h.to::<Jalaali>(), j);
}

#[test]
fn conversions_are_total() {
    let extremes = [i32::MIN, i32::MIN + 1, -1, 0, 1, 12, 13, i32::MAX - 1, i32::MAX];
    for &y in &extremes {
        for &m in &extremes {
            for &d in &extremes {
                let j = to_jalaali(GregorianDate::new(y, m, d));
                assert!((1..=12).contains(&j.month()));
                let g = to_gregorian(JalaaliDate::new(y, m, d));
                assert!((1..=12).contains(&g.month()));
                let _ = gregorian_to_hijri(GregorianDate::new(y, m, d));
                let _ = hijri_to_gregorian(IslamicDate::new(y, m, d));
            }
        }
    }
}

#[test]
fn conversions_are_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let g = GregorianDate::new(2020 + i, 3, 21);
                to_gregorian(to_jalaali(g)) == g
            })
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

#[cfg(feature = "serde")]
#[test]
fn serde_dates_use_named_fields() {
    let h = IslamicDate::new(1447, 3, 4);
    let json = serde_json::to_string(&h).unwrap();
    assert_eq!(json, r#"{"year":1447,"month":3,"day":4}"#);
    let back: IslamicDate = serde_json::from_str(&json).unwrap();
    assert_eq!(back, h);

    let kind = serde_json::to_string(&gahshomar::CalendarKind::Jalaali).unwrap();
    assert_eq!(kind, r#""jalaali""#);
}
