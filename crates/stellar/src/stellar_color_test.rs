use crate::color::StellarColor;

#[test]
fn stellar_color_from_temperature() {
    let hot = StellarColor::from_temperature(30000.0);
    assert!(hot.b > hot.r, "Hot stars should have more blue than red");

    let solar = StellarColor::from_temperature(5800.0);
    assert!(solar.r > solar.b);
    assert!(solar.g > solar.b);

    let cool = StellarColor::from_temperature(3000.0);
    assert!(cool.r > cool.b);
    assert!(cool.r > cool.g);

    assert!(
        (hot.b as f64 / hot.r as f64) > (solar.b as f64 / solar.r as f64),
        "Blue/red ratio should increase with temperature"
    );
}

#[test]
fn stellar_color_temperature_clamping() {
    let very_cold = StellarColor::from_temperature(100.0);
    let very_hot = StellarColor::from_temperature(100000.0);

    assert!(very_cold.r > very_cold.b);
    assert!(very_hot.b >= very_hot.r);
}

#[test]
fn stellar_color_hex() {
    assert_eq!(StellarColor::new(255, 128, 64).to_hex(), "#FF8040");
    assert_eq!(StellarColor::new(0, 0, 0).to_hex(), "#000000");
}
