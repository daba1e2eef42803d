use chrono::Utc;
use gahshomar::{GregorianDate, Islamic, IslamicDate, Jalaali, JalaaliDate};
use tracing_subscriber::EnvFilter;

fn main() {
    // RUST_LOG=gahshomar=debug shows rejected dates, =trace the Islamic month cap.
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gahshomar=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let today = GregorianDate::from(Utc::now().date_naive());
    println!("Gregorian: {today}");
    println!("Jalaali:   {}", today.to::<Jalaali>());
    println!("Islamic:   {} (±1 day)", today.to::<Islamic>());

    let nowruz = JalaaliDate::new(1404, 1, 1);
    println!("Nowruz {nowruz} = {}", nowruz.to::<gahshomar::Gregorian>());

    let ashura = IslamicDate::new(1447, 1, 10);
    println!("Ashura {ashura} ≈ {}", gahshomar::hijri_to_gregorian(ashura));

    for (y, m, d) in [(1404, 12, 30), (1403, 12, 30), (1404, 13, 1)] {
        match JalaaliDate::try_new(y, m, d) {
            Ok(date) => println!("{date} is valid"),
            Err(err) => println!("{err}"),
        }
    }
}
