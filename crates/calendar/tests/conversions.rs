use baktun_calendar::{GregorianDate, Jdn, days_in_month};

#[test]
fn roundtrip_every_day_over_wide_year_range() {
    for year in -1000..=2400 {
        if year == 0 {
            continue;
        }
        for month in 1..=12u8 {
            let max_day = days_in_month(year, month).unwrap();
            for day in 1..=max_day {
                let date = GregorianDate::new(year, month, day).unwrap();
                let back = GregorianDate::from_jdn(date.to_jdn());
                assert_eq!(back, date, "roundtrip failed for {year}-{month}-{day}");
            }
        }
    }
}

#[test]
fn jdn_roundtrip_is_bijective() {
    // Sparse sweep from deep BCE to the far future.
    let mut jdn: Jdn = -1_000_000;
    while jdn <= 4_000_000 {
        let date = GregorianDate::from_jdn(jdn);
        assert_eq!(date.to_jdn(), jdn, "from_jdn({jdn}) -> {date} did not map back");
        jdn += 997;
    }
}

#[test]
fn consecutive_jdns_give_consecutive_dates() {
    let spans: &[Jdn] = &[0, 584_283, 1_721_420, 2_460_311];
    for &start in spans {
        let mut prev = GregorianDate::from_jdn(start);
        for jdn in start + 1..start + 800 {
            let next = GregorianDate::from_jdn(jdn);
            assert!(prev < next, "dates not increasing at jdn {jdn}");
            prev = next;
        }
    }
}

#[test]
fn century_leap_boundaries() {
    // 1900-02-29 does not exist; 2000-02-29 does.
    assert!(GregorianDate::new(1900, 2, 29).is_err());
    let leap = GregorianDate::new(2000, 2, 29).unwrap();
    assert_eq!(GregorianDate::from_jdn(leap.to_jdn()), leap);
    // March 1 follows directly in a common century year.
    let feb28 = GregorianDate::new(1900, 2, 28).unwrap();
    let mar1 = GregorianDate::from_jdn(feb28.to_jdn() + 1);
    assert_eq!((mar1.month(), mar1.day()), (3, 1));
}

#[test]
fn bce_leap_day_roundtrips() {
    // 1 BCE (astronomical year 0) is a leap year.
    let date = GregorianDate::new(-1, 2, 29).unwrap();
    assert_eq!(GregorianDate::from_jdn(date.to_jdn()), date);
}
